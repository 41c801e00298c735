use crate::cli::commands::context::{Context, to_index};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Intent;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = &cli.command {
        let ctx = Context::open(cfg)?;
        let mut session = ctx.session(ctx.controller(cli)?)?;

        let i = to_index(*index, session.roster().len())?;
        let name = session
            .roster()
            .get(i)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let prompt = format!("Delete #{} '{}' from {}?", index, name, session.key());
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        session.dispatch(Intent::Delete(i))?;

        success(format!("'{}' has been deleted.", name));
        ctx.audit("del", session.key(), &format!("Deleted #{} '{}'", index, name));
        ctx.print(&session);
    }

    Ok(())
}
