//! Timestamp listing for monocular image sequences.
//!
//! The SLAM runner reads a plain text file with one `timestamp filename`
//! pair per frame, preceded by three comment lines:
//!
//! ```text
//! # yaml:
//! # images:
//! # timestamp filename
//! 1.00 images/000001.jpg
//! 1.10 images/000002.jpg
//! ```
//!
//! The file name part of each path is what [`crate::BoundingBox::frame_label`] refers to.

use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Error;

const HEADER: [&str; 3] = ["# yaml:", "# images:", "# timestamp filename"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Frame index the first image gets, so the first timestamp is `offset / fps`
    pub offset: u32,
    pub fps: f64,
    /// Directory joined in front of every file name
    pub prefix: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            offset: 10,
            fps: 10.0,
            prefix: String::from("images"),
        }
    }
}

impl SequenceConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(Error::InvalidFps(self.fps));
        }

        Ok(())
    }

    fn join(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else if self.prefix.ends_with('/') {
            format!("{}{}", self.prefix, name)
        } else {
            format!("{}/{}", self.prefix, name)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimestampEntry {
    pub timestamp: f64, // in seconds
    pub path: String,
}

impl TimestampEntry {
    /// Last path component, e.g. `000001.jpg` for `images/000001.jpg`
    #[inline]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for TimestampEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.timestamp, self.path)
    }
}

/// Run of ASCII digits, ordered by numeric value
#[derive(Debug, Clone, Copy)]
struct Digits<'a>(&'a str);

impl Digits<'_> {
    #[inline]
    fn significant(&self) -> &str {
        self.0.trim_start_matches('0')
    }
}

impl PartialEq for Digits<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Digits<'_> {}

impl PartialOrd for Digits<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digits<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Chunk<'a> {
    Text(String),
    Number(Digits<'a>),
}

// Always starts and ends with a text chunk (possibly empty), so chunks at the
// same index of two keys are of the same kind.
fn chunks(name: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut rest = name;

    loop {
        let split = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        out.push(Chunk::Text(rest[..split].to_lowercase()));
        rest = &rest[split..];

        if rest.is_empty() {
            break;
        }

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        out.push(Chunk::Number(Digits(&rest[..end])));
        rest = &rest[end..];
    }

    out
}

/// Alphanumeric ("natural") ordering: `img2.jpg` sorts before `img10.jpg`,
/// letters compare case-insensitively.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunks(a).cmp(&chunks(b))
}

pub fn sort_alphanumeric(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}

#[inline]
pub fn is_image(name: &str) -> bool {
    name.ends_with("jpg") || name.ends_with(".png")
}

/// Sorts `names`, keeps the images and assigns `(offset + i) / fps` to the i-th one.
pub fn build_entries<I>(names: I, config: &SequenceConfig) -> Vec<TimestampEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut names: Vec<String> = names.into_iter().collect();
    sort_alphanumeric(&mut names);

    names
        .iter()
        .map(|name| config.join(name))
        .filter(|path| is_image(path))
        .enumerate()
        .map(|(i, path)| TimestampEntry {
            timestamp: (config.offset as f64 + i as f64) / config.fps,
            path,
        })
        .collect()
}

pub fn scan_dir<P: AsRef<Path>>(
    dir: P,
    config: &SequenceConfig,
) -> Result<Vec<TimestampEntry>, Error> {
    config.validate()?;

    let dir = dir.as_ref();
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(|err| Error::io(dir, err))? {
        let entry = entry.map_err(|err| Error::io(dir, err))?;

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!(?name, "skipping non UTF-8 file name"),
        }
    }

    debug!(dir = %dir.display(), count = names.len(), "listed sequence folder");

    Ok(build_entries(names, config))
}

pub fn write_timestamps<W: Write>(mut writer: W, entries: &[TimestampEntry]) -> Result<(), Error> {
    for line in HEADER {
        writeln!(writer, "{}", line)?;
    }

    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes the listing for the images in `dir` to `out`, returns the number of frames.
pub fn create_timestamps_file<P, Q>(dir: P, out: Q, config: &SequenceConfig) -> Result<usize, Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let entries = scan_dir(dir, config)?;
    info!(count = entries.len(), "number of images");

    let out = out.as_ref();
    let file = fs::File::create(out).map_err(|err| Error::io(out, err))?;
    write_timestamps(BufWriter::new(file), &entries).map_err(|err| match err {
        Error::Write(err) => Error::io(out, err),
        other => other,
    })?;

    info!(path = %out.display(), "created timestamps file");

    Ok(entries.len())
}
