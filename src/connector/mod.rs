//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - Generation (Ollama HTTP adapter, scripted mock for tests)
//! - Host glue (command handler, plugin lifecycle, terminal host)

pub mod adapter;
pub mod host;

pub use adapter::*;
pub use host::*;
