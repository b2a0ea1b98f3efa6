mod config;
mod study;

use clap::Parser;
use services::{AppServices, Clock};

use config::{Cli, Command};

async fn open_services(cli: &Cli) -> Result<AppServices, Box<dyn std::error::Error>> {
    let clock = Clock::default_clock();
    if cli.in_memory {
        log::info!("using in-memory storage, progress will not be kept");
        return Ok(AppServices::in_memory(clock));
    }

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    let db_url = config::normalize_sqlite_url(&cli.db_url)?;
    config::prepare_sqlite_file(&db_url)?;
    log::debug!("opening {db_url}");
    Ok(AppServices::new_sqlite(&db_url, clock).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let services = open_services(&cli).await?;

    match cli.command() {
        Command::Study => {
            let mut session = services.controller();
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            study::run(&mut session, input, tokio::io::stdout()).await?;
        }
        Command::Stats { user, language } => {
            let report = services
                .report(&user, language)
                .await
                .ok_or_else(|| format!("no deck for {language}"))?;
            print!("{}", study::render_dashboard(&report));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
