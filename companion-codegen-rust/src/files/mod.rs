//! Generated file definitions.

mod companion_rs;
mod mod_rs;

pub use companion_rs::CompanionRs;
pub use mod_rs::{ModRs, ModuleTree};
