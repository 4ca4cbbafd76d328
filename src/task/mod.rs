//! Task list management.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The reducer and its state in [`store`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Capture-and-report persistence in [`persistence`]
//! - The store controller in [`services`]
//! - Share text formatting in [`share`]

pub mod adapters;
pub mod domain;
pub mod persistence;
pub mod ports;
pub mod services;
pub mod share;
pub mod store;

#[cfg(test)]
mod tests;
