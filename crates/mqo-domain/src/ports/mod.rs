//! Domain Ports
//!
//! Interfaces the domain depends on. Implementations live in `mqo-providers`.

/// External provider ports
pub mod providers;
