//! Infrastructure implementations.
//!
//! Contains port trait implementations for host collaborators, save-data
//! persistence, and configuration.

pub mod config;
pub mod console;
pub mod persistence;
pub mod ports;
