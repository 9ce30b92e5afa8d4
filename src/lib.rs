//! vrchive - resource search over exported chat transcripts
//!
//! Modules:
//! - core: the `Service` trait
//! - kernel: extraction engine (ports + adapters), message bus, search state
//! - app: presentation loop consuming search results

pub mod app;
pub mod core;
pub mod kernel;
