use clap::Parser;
use slam_annotations::{sequence, SequenceConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Create the `timestamp filename` listing for the images of a sequence folder
#[derive(Parser, Debug)]
#[command(name = "create_timestamps")]
struct Args {
    /// Folder holding the sequence images
    sequence_path: PathBuf,

    /// Output file, e.g. `rgb.txt`
    output: PathBuf,

    /// Frame index of the first image
    #[arg(long, default_value_t = 10)]
    offset: u32,

    #[arg(long, default_value_t = 10.0)]
    fps: f64,

    /// Directory prefix written in front of every file name
    #[arg(long, default_value = "images")]
    prefix: String,
}

impl Args {
    /// Splits into the sequence folder, the output file and the listing config
    fn into_parts(self) -> (PathBuf, PathBuf, SequenceConfig) {
        let config = SequenceConfig {
            offset: self.offset,
            fps: self.fps,
            prefix: self.prefix,
        };

        (self.sequence_path, self.output, config)
    }
}

fn main() -> Result<(), slam_annotations::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (dir, out, config) = Args::parse().into_parts();

    sequence::create_timestamps_file(dir, out, &config)?;

    Ok(())
}
