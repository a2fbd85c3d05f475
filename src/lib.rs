//! Bucketlist - a terminal client for a user-scoped cloud object bucket
//!
//! This library provides the core functionality for the bucketlist client:
//! the object-store client layer, the list controller, and the management
//! interfaces.
//!
//! # Architecture
//! - `storage`: object-store backends behind the `ObjectStore` trait
//! - `controller`: list state and the load/create/delete operations
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `config`: configuration management
//! - `session`: the authenticated identity scoping store operations
//! - `system`: logging setup

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod interfaces;
pub mod session;
pub mod storage;
pub mod system;
