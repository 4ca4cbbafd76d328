//! Tasklane: a to-do list core.
//!
//! This crate holds the state model of a to-do list: task records, a pure
//! reducer over the list, persistence to a key-value string store that
//! contains its own failures, and a controller wiring the two together.
//! Rendering is left to the caller.
//!
//! # Architecture
//!
//! Tasklane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task rules with no infrastructure dependencies
//! - **Ports**: The key-value store trait persistence is written against
//! - **Adapters**: In-memory and directory-backed stores
//!
//! # Modules
//!
//! - [`task`]: Task records, reducer, persistence and store controller

pub mod task;
