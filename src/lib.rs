//! A layered key-value container.
//!
//! [`ChainMap`] presents an ordered stack of maps as a single logical
//! map: reads resolve against a distinguished override layer first and
//! then walk the stack layers in order, while writes only ever land in
//! the override layer, shadowing lower copies of the key instead of
//! mutating them. This is the usual shape of configuration overlays and
//! lexical scope chains.

pub mod chain;
pub mod error;

pub use chain::{ChainMap, Iter, Keys, Layer, Values};
pub use error::{ChainMapError, Result};
