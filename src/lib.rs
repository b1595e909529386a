use std::time::Instant;

use cli::Cli;
use collect::{collect_images, ExtensionMatcher};
use config::Config;
use upload::{write_response, Uploader};

pub mod cli;
pub mod collect;
pub mod config;
pub mod data;
pub mod upload;

#[cfg(test)]
mod testing;

/// config -> collect -> post -> save. Any failure stops the run; nothing is
/// retried.
pub async fn run(args: Cli) -> eyre::Result<()> {
    let config = Config::load(&args.config)?;
    log::info!(
        "loaded {:?}: dir {:?}, extensions {:?}",
        args.config,
        config.file_dir,
        config.image_extensions
    );
    let matcher = ExtensionMatcher::new(&config.image_extensions)?;
    let uploader = Uploader::new()?;

    let start = Instant::now();
    let images = collect_images(&config.file_dir, &matcher)?;
    log::info!("collected {} images", images.len());

    let read_done = Instant::now();
    println!("Read time: {} seconds", (read_done - start).as_secs_f64());

    let response = uploader.post(&config.url, &images).await?;

    let server_done = Instant::now();
    println!("Server time: {} seconds", (server_done - read_done).as_secs_f64());
    println!("Execution time: {} seconds", (server_done - start).as_secs_f64());

    let value = response.json()?;
    write_response(&args.output, &value).await?;
    Ok(())
}
