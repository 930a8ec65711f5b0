use std::io::{stdin, stdout, Write};

use cafe::{
    cli::Cli,
    configuration::Settings,
    console::Console,
    gateway::Gateway,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber, log_sink},
};
use clap::Parser;

fn main() -> anyhow::Result<()>{
    let cli = Cli::parse();
    let settings = Settings::get()?.with_cli(&cli);

    let subscriber = get_subscriber(
        "cafe".into(),
        settings.application.log_level.clone(),
        log_sink(&settings.application)?
    );
    init_subscriber(subscriber)?;

    print!("Connecting to database {} on port {}...", settings.database.name, settings.database.port);
    stdout().flush()?;

    let mut gateway = match Gateway::connect(&settings.database) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = ?e, "Failed to connect to database");
            println!();
            eprintln!("Error - Unable to Connect to Database: {:?}", e);
            eprintln!("Make sure you started postgres on this machine");
            std::process::exit(-1);
        }
    };
    println!("Done");

    if cli.migrate {
        let applied = gateway.run_migrations()?;
        println!("Applied {} migration(s)", applied);
    }

    let mut application = Application::new(gateway, Console::new(stdin().lock(), stdout()));
    application.run()?;
    Ok(())
}
