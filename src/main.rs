use std::error::Error;
use std::process;

use log::LevelFilter;
use schemagen::{write_schema, GenerationPlan};

fn run() -> Result<(), Box<dyn Error>> {
    let plan = match GenerationPlan::from_args(std::env::args()) {
        Ok(plan) => plan,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(clap_err) => clap_err.exit(),
            Err(err) => return Err(err),
        },
    };

    write_schema(&plan)?;
    Ok(())
}

fn main() {
    // configure logging
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
