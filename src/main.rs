use clap::Parser;
use hospital_db::{
    config::Config,
    database::{bootstrap, Session},
    input::ConsoleInput,
    menu,
    protocol::Output,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // usage errors are printed, not reported through the exit code
            err.print()?;
            return Ok(());
        }
    };

    println!("Connecting to database...");
    println!("Connection URL: {}\n", config.display_url());
    let mut session = match Session::connect(&config.conn_info(), config.id_strategy) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("Error - Unable to Connect to Database: {:#}", err);
            eprintln!("Make sure you started postgres on this machine");
            std::process::exit(1);
        }
    };
    println!("Done");

    if config.init_schema {
        if let Err(err) = bootstrap::create_schema(&session) {
            session.close();
            return Err(err.context("Failed to create schema"));
        }
    } else {
        match bootstrap::missing_tables(&session) {
            Ok(missing) if !missing.is_empty() => eprintln!(
                "Missing tables: {}. Run with --init-schema to create them.",
                missing.join(", ")
            ),
            Ok(_) => {}
            Err(err) => tracing::warn!("schema check failed: {:#}", err),
        }
    }

    let output = Output::new(config.output);
    let mut input = ConsoleInput::stdio();
    let result = menu::run(&session, &mut input, &output);

    println!("Disconnecting from database...");
    session.close();
    println!("Done\n\nBye !");

    result
}
