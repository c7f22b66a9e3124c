//! blockfall (workspace facade crate).
//!
//! Re-exports the engine, input mapping, and terminal renderer crates under
//! `blockfall::{core, input, term, types}` and owns the runtime [`config`].

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
