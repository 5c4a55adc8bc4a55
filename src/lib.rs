//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_memory::{core,engine,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
