use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SCAN_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(
    name = "msds-scan",
    version,
    about = "Flag particularly hazardous substances in Safety Data Sheet PDFs"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        default_value = DEFAULT_SCAN_DIR,
        help = "Directory scanned (non-recursively) for .pdf files"
    )]
    pub dir: PathBuf,
}
