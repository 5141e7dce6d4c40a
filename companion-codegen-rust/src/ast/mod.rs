//! Rust AST builders for generating structs, impls, functions and module items.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod impls;
mod modules;
mod structs;

pub use fns::{Fn, Param, Receiver};
pub use impls::Impl;
pub use modules::{Mod, Use};
pub use structs::{Field, Struct};
