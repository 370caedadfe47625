//! Command handlers, one module per command group.

pub mod cipher;
pub mod config;
pub mod demo;
pub mod misc;
pub mod utility;

pub use cipher::{handle_decrypt, handle_encrypt};
pub use config::handle_config;
pub use demo::handle_demo;
pub use misc::handle_completions;
pub use utility::{handle_env, handle_now, handle_token};
