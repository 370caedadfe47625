//! Application-level utilities for the Sidekick CLI.
//!
//! This module provides:
//! - Path resolution for the config file
//! - Lazily-loaded configuration
//! - Passphrase resolution (environment, then prompt)

mod context;
mod passphrase;

pub use context::AppContext;
pub use passphrase::resolve_passphrase;
