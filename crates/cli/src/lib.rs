//! Command-line front ends for profitbook.
//!
//! The binaries in `src/bin` only parse arguments, set up logging and
//! dispatch here; everything else is testable against in-memory I/O.

pub mod args;
pub mod editor;
pub mod gain;
pub mod logging;
