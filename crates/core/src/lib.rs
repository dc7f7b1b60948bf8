//! Functional core of the staffcache service.
//!
//! Pure types, validation and the traits the service shell implements:
//! no I/O happens in this crate.

pub mod cache;
pub mod employee;
pub mod serde;
pub mod storage;
