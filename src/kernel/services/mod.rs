//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types shared with the presentation side.
//! - `adapters`: filesystem and runtime backed implementations.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{bus, BusMessage, BusReceiver, BusSender};
