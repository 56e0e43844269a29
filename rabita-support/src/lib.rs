//! # Rabita Support
//!
//! Shared utilities for the Rabita DI framework.
//!
//! This crate provides:
//! - Text rendering for component names and construction chains
//! - Common utilities shared between rabita crates

pub mod rendering;
