//! Domain layer: catalog and session value types plus the ports the
//! conversation engine consumes.

pub mod catalog;
pub mod message;
pub mod ports;
pub mod session;
