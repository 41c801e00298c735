use crate::cli::commands::context::Context;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_month;

/// Handle `prev`, `next`, `goto` and `group`: move, remember the new
/// position and show the roster found there.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;

    // the new position is saved, so one-shot overrides must not leak into it
    if cli.month.is_some() || cli.group.is_some() {
        warning("--month/--group are ignored here: navigation starts from the saved position.");
    }
    let mut controller = ctx.saved_controller()?;

    match &cli.command {
        Commands::Prev => {
            controller.set_month(-1);
        }
        Commands::Next => {
            controller.set_month(1);
        }
        Commands::Goto { month } => controller.goto_month(parse_month(month)?),
        Commands::Group { name: None } => {
            let g = controller.switch_group()?;
            info(format!("Switched to group {}.", g));
        }
        Commands::Group { name: Some(name) } => {
            let g = controller.select_group(name)?;
            info(format!("Selected group {}.", g));
        }
        _ => return Ok(()),
    }

    let session = ctx.session(controller)?;
    ctx.save_navigation(&session)?;
    ctx.print(&session);

    Ok(())
}
