//! Shared plumbing for the roster commands: open the database, rebuild the
//! navigation state, resolve the active roster and audit what happened.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::period::{PeriodController, RosterOrigin};
use crate::core::session::RosterSession;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::state::{load_state, save_state};
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::{info, warning};
use crate::ui::roster_view::print_roster;
use crate::utils::date::parse_month;

pub struct Context<'c> {
    pub cfg: &'c Config,
    pub pool: DbPool,
}

impl<'c> Context<'c> {
    pub fn open(cfg: &'c Config) -> AppResult<Self> {
        let pool = DbPool::open(&cfg.database)?;
        Ok(Self { cfg, pool })
    }

    /// Controller on the saved state only.
    pub fn saved_controller(&self) -> AppResult<PeriodController> {
        let groups = self.cfg.group_pair()?;
        let state = load_state(&self.pool.conn, groups.as_ref())?;
        Ok(PeriodController::new(state, groups, self.cfg.rollover_policy()))
    }

    /// Controller on the saved state, with `--month` / `--group` applied.
    pub fn controller(&self, cli: &Cli) -> AppResult<PeriodController> {
        let mut controller = self.saved_controller()?;

        if let Some(m) = &cli.month {
            controller.goto_month(parse_month(m)?);
        }
        if let Some(g) = &cli.group {
            controller.select_group(g)?;
        }

        Ok(controller)
    }

    /// Resolve the roster for `controller` and report how it was obtained.
    pub fn session(&self, controller: PeriodController) -> AppResult<RosterSession<SqliteStore<'_>>> {
        let session = RosterSession::open(self.pool.store(), controller)?;
        self.report(&session);
        Ok(session)
    }

    pub fn report(&self, session: &RosterSession<SqliteStore<'_>>) {
        let conn = &self.pool.conn;

        for w in session.warnings() {
            warning(w);
            audit_quiet(conn, "load_failed", session.key(), w);
        }

        match session.origin() {
            RosterOrigin::RolledOver { from } => {
                let msg = format!(
                    "Carried {} name(s) over from {}, all marked pending",
                    session.roster().len(),
                    from
                );
                info(&msg);
                audit_quiet(conn, "rollover", session.key(), &msg);
            }
            RosterOrigin::Unreadable { .. } => {
                warning("Showing an empty roster; the next change will overwrite the stored data.");
            }
            RosterOrigin::Stored | RosterOrigin::Fresh { .. } => {}
        }
    }

    pub fn save_navigation(&self, session: &RosterSession<SqliteStore<'_>>) -> AppResult<()> {
        save_state(&self.pool.conn, session.state())
    }

    pub fn print(&self, session: &RosterSession<SqliteStore<'_>>) {
        print_roster(
            session.state(),
            session.key(),
            session.roster(),
            self.cfg.show_summary,
        );
    }

    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        audit_quiet(&self.pool.conn, operation, target, message);
    }
}

/// Convert a 1-based position typed by the user into a roster index.
pub fn to_index(position: usize, len: usize) -> AppResult<usize> {
    if position == 0 || position > len {
        return Err(AppError::InvalidIndex {
            index: position,
            len,
        });
    }
    Ok(position - 1)
}
