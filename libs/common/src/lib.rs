//! Common library for the Red Onion backend
//!
//! This crate provides the infrastructure shared by the Red Onion services:
//! MySQL connectivity with environment-driven configuration and the typed
//! database errors used by the repository layer.

pub mod database;
pub mod error;
