//! Search kernel: the extraction engine, its services and the state the
//! presentation side keeps about a running search.

pub mod search;
pub mod services;

pub use search::{SearchState, SearchUpdate};
