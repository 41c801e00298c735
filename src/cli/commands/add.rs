use crate::cli::commands::context::Context;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Intent;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Add a person to the active roster.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = &cli.command {
        let name = name.join(" ");

        let ctx = Context::open(cfg)?;
        let mut session = ctx.session(ctx.controller(cli)?)?;

        if !session.dispatch(Intent::Add(name.clone()))? {
            warning("Name is blank: nothing added.");
            return Ok(());
        }

        let key = session.key().to_string();
        let added = name.trim();
        success(format!("Added '{}' to {}.", added, key));
        ctx.audit("add", &key, &format!("Added '{}'", added));
        ctx.print(&session);
    }

    Ok(())
}
