//! Stable byte sort for the sort-then-RLE compressor.
//!
//! Sorting the bytes of a file by value puts every identical byte next to its twins, which is
//! what makes the following run-length-encoding stage worth doing. The sort also records where
//! each byte came from, so the original order can be restored from the sorted data.
//!
use log::debug;
use rayon::prelude::*;

const SORT_XPOINT: usize = 40000; //Approx point at which parallel work is faster than sequential for sorting

/// A byte paired with its zero-based position in the input.
/// Ordering compares the symbol first and the position second, so sorting a set of these
/// is the same as a stable sort of the symbols alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndexedByte {
    pub symbol: u8,
    pub index: usize,
}

impl IndexedByte {
    pub fn new(symbol: u8, index: usize) -> Self {
        Self { symbol, index }
    }
}

/// Stably sorts the data by byte value.
/// Returns the sorted bytes and, for each sorted position, the position that byte had in the input.
pub fn sort_indexed(data: &[u8]) -> (Vec<u8>, Vec<usize>) {
    let now = std::time::Instant::now();

    let mut indexed: Vec<IndexedByte> = data
        .iter()
        .enumerate()
        .map(|(index, &symbol)| IndexedByte::new(symbol, index))
        .collect();

    // Keys are unique (the index breaks every tie), so the parallel sort gives the same order.
    if indexed.len() > SORT_XPOINT {
        indexed.par_sort();
    } else {
        indexed.sort();
    }
    debug!("Sorted {} bytes in {:?}", indexed.len(), now.elapsed());

    indexed.into_iter().map(|el| (el.symbol, el.index)).unzip()
}

/// Serializes the permutation as native-width, native-endian unsigned integers.
pub fn indices_to_bytes(indices: &[usize]) -> Vec<u8> {
    let mut out = Vec::with_capacity(indices.len() * std::mem::size_of::<usize>());
    for idx in indices {
        out.extend_from_slice(&idx.to_ne_bytes());
    }
    out
}
