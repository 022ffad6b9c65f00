use fill_secrets::{Config, Transcriber};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let transcriber = Transcriber::new(Config::default());
    info!("Reading secrets from {}", transcriber.config().input_path.display());

    let lines = transcriber.run()?;
    info!("Done, {lines} secrets written");

    Ok(())
}
