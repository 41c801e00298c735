use crate::cli::commands::context::Context;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::roster_view::render_summary;

/// Handle `show` / `list` and `summary`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let session = ctx.session(ctx.controller(cli)?)?;

    match cli.command {
        Commands::Summary => {
            println!("{} [{}]", session.state().title(), session.key());
            println!("{}", render_summary(session.roster()));
        }
        _ => ctx.print(&session),
    }

    Ok(())
}
