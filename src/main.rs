use clap::Parser;
use forradskollen::notify::TracingNotifier;
use forradskollen::utils::{logger, validation::Validate};
use forradskollen::{CliArgs, Config, MarkerInterpreter, Watcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting forradskollen");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    args.apply(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let watcher = Watcher::new(&config, TracingNotifier, MarkerInterpreter::new());

    match watcher.run().await {
        Ok(report) => {
            if report.available {
                println!("Units appear to be available! Go check mina-sidor.");
            } else {
                println!("No units available right now.");
            }
        }
        Err(e) => {
            tracing::error!("Watch cycle failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
