use std::fs;

use log::{debug, info, warn};

use crate::error::Result;
use crate::tools::file_io::{read_all, write_all};
use crate::tools::permute::{indices_to_bytes, sort_indexed};
use crate::tools::rle::{rle_encode, runs};

pub const COMPRESSED_SUFFIX: &str = ".compressed";
pub const INDICES_SUFFIX: &str = ".indices";

/// What was produced for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Input file name as given
    pub input: String,
    /// Path of the run-length pairs
    pub compressed: String,
    /// Path of the serialized permutation
    pub indices: String,
    /// Number of bytes read from the input
    pub input_len: usize,
    /// Number of (symbol, count) pairs written
    pub runs: usize,
}

/// Sort the data and run-length encode it. Returns the encoded pairs and the permutation.
pub fn compress_data(data: &[u8]) -> (Vec<u8>, Vec<usize>) {
    let (sorted, indices) = sort_indexed(data);
    (rle_encode(&sorted), indices)
}

/// Compress one file, writing `<fname>.compressed` and `<fname>.indices` next to it.
/// Existing outputs are overwritten.
pub fn compress_file(fname: &str) -> Result<Artifact> {
    info!("Compressing {}", fname);
    let data = read_all(fname)?;

    let (encoded, indices) = compress_data(&data);
    let run_count = runs(&encoded).count();
    debug!(
        "{}: {} bytes in, {} runs, {} index entries",
        fname,
        data.len(),
        run_count,
        indices.len()
    );

    let mut compressed = fname.to_owned();
    compressed.push_str(COMPRESSED_SUFFIX);
    let mut indices_name = fname.to_owned();
    indices_name.push_str(INDICES_SUFFIX);

    // A failed write must not leave half of the pair behind.
    if let Err(e) = write_all(&compressed, &encoded)
        .and_then(|_| write_all(&indices_name, &indices_to_bytes(&indices)))
    {
        discard(&[compressed.as_str(), indices_name.as_str()]);
        return Err(e);
    }

    info!("Finished {}", fname);
    Ok(Artifact {
        input: fname.to_string(),
        compressed,
        indices: indices_name,
        input_len: data.len(),
        runs: run_count,
    })
}

/// Best effort removal of partly written outputs. Paths that are missing or not plain files are left alone.
fn discard(paths: &[&str]) {
    for path in paths {
        let is_file = fs::symlink_metadata(path)
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            if let Err(e) = fs::remove_file(path) {
                warn!("Could not remove partial output {}: {}", path, e);
            }
        }
    }
}
