//! Core abstractions shared by every service.

pub mod service;

pub use service::Service;
