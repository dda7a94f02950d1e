mod config;
mod logging;

use anyhow::Context;
use config::Config;

fn main() {
    let config = config::config();

    if let Err(e) = run(&config) {
        println!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    logging::init_logs(config.log_level).context("couldn't initialize logging")?;

    log::debug!("converting {} into {}", config.input.display(), config.output.display());
    ppk_convert::convert_file(&config.input, &config.output, &config.options)?;

    println!("Conversion completed successfully!");
    println!("Converted key saved as: {}", config.output.display());

    Ok(())
}
