//! Pre-configured module specifications
//!
//! Common character module sizes. Most vendors ship each size with either ROM
//! mask; the presets use the variant found on the typical part.

pub mod standard;

pub use standard::*;
