//! Application context for the Sidekick CLI.
//!
//! Bundles CLI flags with the injected environment and clock, and loads
//! the config file lazily so commands that never need it never read it.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use sidekick_core::{Clock, EnvSource};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config_or_default, SidekickConfig};

pub struct AppContext<'a> {
    cli: &'a Cli,
    env: &'a dyn EnvSource,
    clock: &'a dyn Clock,
    interactive: bool,
    config: OnceCell<SidekickConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli, env: &'a dyn EnvSource, clock: &'a dyn Clock) -> Self {
        Self {
            cli,
            env,
            clock,
            interactive: std::io::stdin().is_terminal(),
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether prompts may be shown (stdin is a terminal).
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn env(&self) -> &dyn EnvSource {
        self.env
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock
    }

    /// `--config` / `SIDEKICK_CONFIG`, else the XDG default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match self.cli.config.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => default_config_path(self.env),
        }
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&SidekickConfig> {
        self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            read_config_or_default(&path)
        })
    }
}
