//! `token`, `now`, and `env`.

use sidekick_core::{format_now, get_or, random_token};

use crate::app::AppContext;
use crate::cli::{EnvArgs, TokenArgs};

pub fn handle_token(ctx: &AppContext, args: TokenArgs) -> anyhow::Result<()> {
    let length = match args.length {
        Some(length) => length,
        None => ctx.config()?.token.length,
    };
    println!("{}", random_token(length)?);
    Ok(())
}

pub fn handle_now(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", format_now(ctx.clock()));
    Ok(())
}

pub fn handle_env(ctx: &AppContext, args: EnvArgs) -> anyhow::Result<()> {
    println!("{}", get_or(ctx.env(), &args.name, &args.default));
    Ok(())
}
