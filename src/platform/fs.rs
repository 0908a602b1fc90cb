// logtally - platform/fs.rs
//
// Filesystem access for log loading.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Open a log file for buffered line reading.
///
/// The handle is owned by the returned reader and closed when it is dropped,
/// on success and on every error path alike.
pub fn open_log(path: &Path) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "Opened log file");
    Ok(BufReader::new(file))
}
