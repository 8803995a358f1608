//! The tools module provides the building blocks of the sort-then-RLE compressor.
//!
//! The tools are:
//! - cli: Command line interface and resolved options.
//! - file_io: Whole-file blocking read and write.
//! - permute: Stable byte sort that also returns the permutation used to undo it.
//! - rle: Run-Length-Encoding of sorted data into (byte, count) pairs.
//!
pub mod cli;
pub mod file_io;
pub mod permute;
pub mod rle;
