//! Core types and configuration for fnship.
//!
//! This crate defines the `fnship.toml` schema ([`FnshipConfig`]), the
//! per-environment deployment target model ([`DeployTarget`]), environment
//! selection parsing ([`Selection`]), and shared error types.

pub mod config;
pub mod error;
pub mod target;

pub use config::{EnvConfig, FnshipConfig, ProjectConfig};
pub use error::{Error, Result};
pub use target::{DeployTarget, EnvName, Selection};
