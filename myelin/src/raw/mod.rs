//! The metadata image reader: a decoded, random-access view of a module file.
//! Everything here is byte-level; semantic resolution lives in [`crate::structured`].

pub mod pe;
pub mod image;
pub mod heaps;
pub mod indices;
pub mod body;

pub use crate::utilities::FromByteStream;
