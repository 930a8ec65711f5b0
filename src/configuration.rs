use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::cli::Cli;

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub database: DatabaseSettings,
    pub application: ApplicationSettings
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings{
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub name: String
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings{
    pub log_level: String,
    pub log_file: Option<String>
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        Config::builder()
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.name", "cafe")?
            .set_default("application.log_level", "info")?
            .add_source(File::with_name("configuration/base.yaml").required(false))
            .add_source(
                Environment::with_prefix("CAFE")
                    .prefix_separator("_")
                    .separator("__")
            )
            .build()?
            .try_deserialize::<Settings>()
    }

    // Positional command line values win over file and environment
    pub fn with_cli(mut self, cli: &Cli) -> Self{
        if let Some(name) = &cli.dbname {
            self.database.name = name.clone();
        }
        if let Some(port) = cli.port {
            self.database.port = port;
        }
        if let Some(user) = &cli.user {
            self.database.username = user.clone();
        }
        self
    }
}

impl DatabaseSettings{
    // libpq key/value string for the server's maintenance database, used
    // to create and drop databases
    pub fn get_database_url(&self) -> String{
        self.connection_string("postgres")
    }

    pub fn get_database_table_url(&self) -> String{
        self.connection_string(&self.name)
    }

    fn connection_string(&self, dbname: &str) -> String{
        format!(
            "host={} port={} user={} password={} dbname={}",
            quote_conninfo(&self.host),
            self.port,
            quote_conninfo(&self.username),
            quote_conninfo(self.password.expose_secret()),
            quote_conninfo(dbname)
        )
    }
}

fn quote_conninfo(value: &str) -> String{
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}
