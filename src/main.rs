use clap::Parser;
use codecount::args::Args;
use codecount::config::AppConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    codecount::logging::init(config.log_level);
    log::debug!("{config:?}");

    let stdout = std::io::stdout();
    match codecount::execute(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
