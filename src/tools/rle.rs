//! Run-Length-Encoding of sorted data.
//!
//! Every run of identical bytes becomes a two byte pair: the byte value followed by the run length.
//! The count is a single byte, so runs longer than 255 are written as several pairs.
//!
pub const MAX_RUN: usize = 255;

/// Encodes the (sorted) input as (symbol, count) pairs flattened into a byte vec.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let symbol = data[i];
        // Count up to MAX_RUN matching bytes. If position returns None, the run goes to the end
        // of the data (or the cap).
        let run = data
            .iter()
            .skip(i)
            .take(MAX_RUN)
            .position(|&x| x != symbol)
            .unwrap_or_else(|| (data.len() - i).min(MAX_RUN));
        out.push(symbol);
        out.push(run as u8);
        i += run;
    }
    out
}

/// Iterates an encoded stream as (symbol, count) pairs. A trailing odd byte is ignored.
pub fn runs(encoded: &[u8]) -> impl Iterator<Item = (u8, u8)> + '_ {
    encoded.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
