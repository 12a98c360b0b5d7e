//! Infrastructure - ports and the adapters behind them.

pub mod clock;
pub mod config;
pub mod memory;
pub mod ports;
pub mod registry_lock;
