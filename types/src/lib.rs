//! Fundamental types for the Cairn range processor.
//!
//! This crate defines the vocabulary shared across the workspace: block
//! tokens, heights and height ranges, and the processor parameters.

pub mod block;
pub mod height;
pub mod params;

pub use block::Block;
pub use height::{Height, HeightRange};
pub use params::ProcessorParams;
