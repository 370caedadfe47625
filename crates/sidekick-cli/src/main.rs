//! Sidekick CLI - everyday utilities from the command line
//!
//! This is the command-line interface for Sidekick. It exposes each
//! utility in the core library as a subcommand.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;

use clap::Parser;
use sidekick_core::{ProcessEnv, SidekickError, SystemClock, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_completions, handle_config, handle_decrypt, handle_demo, handle_encrypt, handle_env,
    handle_now, handle_token,
};
use crate::errors::CliError;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let command = cli.command.take();

    let env = ProcessEnv;
    let clock = SystemClock;
    let ctx = AppContext::new(&cli, &env, &clock);

    run(&ctx, command).inspect_err(exit_on_typed_error)
}

fn run(ctx: &AppContext, command: Option<Commands>) -> anyhow::Result<()> {
    let Some(command) = command else {
        println!("Sidekick v{}", VERSION);
        println!("\nRun `sidekick --help` for usage information.");
        return Ok(());
    };

    match command {
        Commands::Encrypt(args) => handle_encrypt(ctx, args),
        Commands::Decrypt(args) => handle_decrypt(ctx, args),
        Commands::Token(args) => handle_token(ctx, args),
        Commands::Now => handle_now(ctx),
        Commands::Env(args) => handle_env(ctx, args),
        Commands::Demo => handle_demo(ctx),
        Commands::Config(command) => handle_config(ctx, command),
        Commands::Completions(args) => handle_completions(args.shell),
    }
}

/// Exit with a dedicated code for errors that have one; otherwise return
/// and let anyhow report it with exit code 1.
fn exit_on_typed_error(err: &anyhow::Error) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        cli_err.exit();
    }
    if let Some(mapped) = err
        .downcast_ref::<SidekickError>()
        .and_then(CliError::from_core)
    {
        mapped.exit();
    }
}
