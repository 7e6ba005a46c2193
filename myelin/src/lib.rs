//! An experimental CLI (ECMA-335) runtime: assembly loading, canonical
//! metadata resolution, IL lowering to a register-like instruction stream,
//! and a threaded interpreter over it.
//!
//! The crate is layered bottom-up:
//! - [`raw`] reads module files into an indexable, undecoded view;
//! - [`structured`] folds rows into interned runtime entities (classes,
//!   methods, fields, signatures, generic instantiations);
//! - [`interp`] lowers stack-based IL into a flat typed instruction stream
//!   and executes it;
//! - [`vm`] selects invokers per method, marshals public invocations and
//!   hosts the runtime façade.

pub mod raw;
pub mod structured;
pub mod interp;
pub mod vm;

pub mod error;
mod utilities;

pub use error::{VmError, VmResult};
pub use vm::runtime::{Runtime, RuntimeOptions};
