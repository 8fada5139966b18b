use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use pf_functions::cli::{run, Cli};
use std::error::Error;
use std::path::Path;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    if !verbose && Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    // stdout carries command output, so logs go to stderr.
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    if cli.no_color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    match run(&cli) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red());
            std::process::exit(1);
        }
    }
    Ok(())
}
