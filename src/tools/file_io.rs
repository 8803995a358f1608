//! Whole-file blocking read and write. Errors carry the offending path.
use std::{
    fs::{self, File},
    io::Write,
};

use crate::error::{CodecError, Result};

/// Reads the whole file into memory.
pub fn read_all(path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| CodecError::InputUnavailable {
        path: path.to_string(),
        source,
    })
}

/// Creates (or truncates) the file and writes all of the data to it.
pub fn write_all(path: &str, data: &[u8]) -> Result<()> {
    let wrap = |source| CodecError::OutputWriteFailed {
        path: path.to_string(),
        source,
    };
    let mut f_out = File::create(path).map_err(wrap)?;
    f_out.write_all(data).map_err(wrap)?;
    f_out.flush().map_err(wrap)
}
