use crate::core::period::{ActiveRoster, PeriodController, RosterOrigin};
use crate::core::roster::{AddOutcome, RosterLogic};
use crate::errors::AppResult;
use crate::models::{AppState, Roster};
use crate::store::RosterStore;

/// User actions on the roster screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Toggle(usize),
    SetPaid(usize, bool),
    Delete(usize),
    PreviousMonth,
    NextMonth,
    SwitchGroup,
}

/// A controller bound to a store, holding the roster currently on screen.
///
/// The view only reads [`RosterSession::state`] and [`RosterSession::roster`]
/// and sends [`Intent`]s back.
pub struct RosterSession<S: RosterStore> {
    store: S,
    controller: PeriodController,
    active: ActiveRoster,
}

impl<S: RosterStore> RosterSession<S> {
    /// Resolve the roster for the controller's period right away.
    pub fn open(mut store: S, controller: PeriodController) -> AppResult<Self> {
        let active = controller.active_roster(&mut store)?;
        Ok(Self {
            store,
            controller,
            active,
        })
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn roster(&self) -> &Roster {
        &self.active.roster
    }

    pub fn key(&self) -> &str {
        &self.active.key
    }

    pub fn origin(&self) -> &RosterOrigin {
        &self.active.origin
    }

    pub fn warnings(&self) -> &[String] {
        &self.active.warnings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Re-resolve the roster after month or group changed.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.active = self.controller.active_roster(&mut self.store)?;
        Ok(())
    }

    /// Apply one intent. Returns `false` when it was a no-op (blank name).
    pub fn dispatch(&mut self, intent: Intent) -> AppResult<bool> {
        let key = self.active.key.clone();

        match intent {
            Intent::Add(name) => {
                match RosterLogic::add(&mut self.store, &key, &self.active.roster, &name)? {
                    AddOutcome::Added(r) => self.replace(r),
                    AddOutcome::Ignored => return Ok(false),
                }
            }
            Intent::Toggle(i) => {
                let r = RosterLogic::toggle(&mut self.store, &key, &self.active.roster, i)?;
                self.replace(r);
            }
            Intent::SetPaid(i, paid) => {
                let r = RosterLogic::set_paid(&mut self.store, &key, &self.active.roster, i, paid)?;
                self.replace(r);
            }
            Intent::Delete(i) => {
                let r = RosterLogic::delete(&mut self.store, &key, &self.active.roster, i)?;
                self.replace(r);
            }
            Intent::PreviousMonth => self.navigate(|c| {
                c.set_month(-1);
                Ok(())
            })?,
            Intent::NextMonth => self.navigate(|c| {
                c.set_month(1);
                Ok(())
            })?,
            Intent::SwitchGroup => self.navigate(|c| c.switch_group().map(|_| ()))?,
        }

        Ok(true)
    }

    /// Move a copy of the controller and keep it only once its roster resolved,
    /// so state and roster never point at different periods.
    fn navigate<F>(&mut self, step: F) -> AppResult<()>
    where
        F: FnOnce(&mut PeriodController) -> AppResult<()>,
    {
        let mut moved = self.controller.clone();
        step(&mut moved)?;
        let active = moved.active_roster(&mut self.store)?;
        self.controller = moved;
        self.active = active;
        Ok(())
    }

    fn replace(&mut self, roster: Roster) {
        self.active.roster = roster;
        self.active.origin = RosterOrigin::Stored;
        self.active.warnings.clear();
    }
}
