use clap::Parser;

// Command line of the terminal front-end. Positional values override the
// matching entries of the database configuration.
#[derive(Parser, Debug, Default)]
#[command(version, about = "Terminal front-end for the cafe ordering database")]
pub struct Cli {
    /// Name of the database to connect to
    pub dbname: Option<String>,

    /// Port the PostgreSQL server listens on
    pub port: Option<u16>,

    /// Database user
    pub user: Option<String>,

    /// Apply the bundled schema migrations before showing the menu
    #[arg(long)]
    pub migrate: bool,
}
