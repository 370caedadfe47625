use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use sidekick_core::VERSION;

use crate::config::FormatSetting;

/// Sidekick - everyday utilities: timestamps, env lookup, tokens, text encryption
#[derive(Parser)]
#[command(name = "sidekick")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "SIDEKICK_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt (reads stdin when omitted)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<FormatSetting>,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Ciphertext to decrypt (reads stdin when omitted)
    ///
    /// Armored age input begins with dashes and is accepted as-is.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Input format
    #[arg(long, value_enum, default_value_t = DecryptFormat::Auto)]
    pub format: DecryptFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DecryptFormat {
    Auto,
    Envelope,
    Age,
}

/// Arguments for the `token` command
#[derive(Args)]
pub struct TokenArgs {
    /// Token length in characters (defaults to the configured length)
    #[arg(short, long)]
    pub length: Option<usize>,
}

/// Arguments for the `env` command
#[derive(Args)]
pub struct EnvArgs {
    /// Variable name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Value printed when the variable is unset or empty
    #[arg(long, default_value = "")]
    pub default: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved config path
    Path,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text with a passphrase
    Encrypt(EncryptArgs),

    /// Decrypt text produced by `encrypt`
    Decrypt(DecryptArgs),

    /// Print a random hex token
    Token(TokenArgs),

    /// Print the current time (ISO-8601, UTC)
    Now,

    /// Print an environment variable, or a default
    Env(EnvArgs),

    /// Run every utility once and print the results
    Demo,

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
