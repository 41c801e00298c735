use crate::cli::commands::context::{Context, to_index};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Intent;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle `toggle`, `pay` and `unpay`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (position, operation) = match &cli.command {
        Commands::Toggle { index } => (*index, "toggle"),
        Commands::Pay { index } => (*index, "pay"),
        Commands::Unpay { index } => (*index, "unpay"),
        _ => return Ok(()),
    };

    let ctx = Context::open(cfg)?;
    let mut session = ctx.session(ctx.controller(cli)?)?;
    let i = to_index(position, session.roster().len())?;

    let intent = match operation {
        "pay" => Intent::SetPaid(i, true),
        "unpay" => Intent::SetPaid(i, false),
        _ => Intent::Toggle(i),
    };
    session.dispatch(intent)?;

    if let Some(p) = session.roster().get(i) {
        let msg = format!("{} is now {}", p.name, p.status_label().to_lowercase());
        success(format!("{}.", msg));
        ctx.audit(operation, session.key(), &msg);
    }
    ctx.print(&session);

    Ok(())
}
