use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "upload every matching image in a directory as one json payload")]
pub struct Cli {
    /// yaml file holding `file_dir`, `image_extensions` and `url`
    #[clap(short, long, default_value = "./config.yaml")]
    pub config: PathBuf,
    /// where the server's json response is written
    #[clap(short, long, default_value = "./data.json")]
    pub output: PathBuf,
}
