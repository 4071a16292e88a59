//! Whole-file loading under the configured root.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

/// Offset value the size probe cannot tell apart from an error.
const INVALID_SIZE: u64 = u64::MAX;

/// Loads `root + path` fully into memory.
///
/// The two strings are concatenated as-is: the root carries its trailing
/// separator from config normalization and the path is used exactly as the
/// client sent it. Size is probed by seeking to the end; a file reporting
/// the sentinel offset, or one too large to address, counts as missing.
///
/// This is a blocking call. While it runs, every other connection on the
/// event loop waits.
pub fn load(root: &str, path: &str) -> io::Result<Vec<u8>> {
    let full = format!("{root}{path}");
    let mut file = File::open(&full)?;

    let size = file.seek(SeekFrom::End(0))?;
    if size == INVALID_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "unrepresentable file size",
        ));
    }
    let len = usize::try_from(size).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidData, "file too large to load")
    })?;
    file.seek(SeekFrom::Start(0))?;

    let mut contents = Vec::with_capacity(len);
    file.read_to_end(&mut contents)?;

    Ok(contents)
}
