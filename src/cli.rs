use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Check clang-tidy fixes and throw an error if any are found.",
    long_about = None
)]
pub struct Cli {
    #[arg(help = "Path to fixes exported from clang-tidy.")]
    pub fixes_path: PathBuf,
}
