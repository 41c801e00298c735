use crate::errors::{AppError, AppResult};
use crate::models::{AppState, GroupPair, Roster, YearMonth};
use crate::store::RosterStore;

/// What to do when neither the current nor the previous period has people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RolloverPolicy {
    /// Write the empty roster, so the key never rolls over again.
    #[default]
    PersistEmpty,
    /// Leave the key unwritten until the first mutation.
    LeaveAbsent,
}

impl RolloverPolicy {
    pub fn from_flag(persist_empty: bool) -> Self {
        if persist_empty {
            Self::PersistEmpty
        } else {
            Self::LeaveAbsent
        }
    }
}

/// Where the roster returned by [`PeriodController::active_roster`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterOrigin {
    /// Already stored under the current key.
    Stored,
    /// Names carried over from `from`, payments reset and saved.
    RolledOver { from: String },
    /// Nothing to carry over. `persisted` tells whether `[]` was written.
    Fresh { persisted: bool },
    /// The stored value does not decode; nothing was written.
    Unreadable { reason: String },
}

#[derive(Debug, Clone)]
pub struct ActiveRoster {
    pub key: String,
    pub roster: Roster,
    pub origin: RosterOrigin,
    /// Non-fatal problems met while resolving the roster.
    pub warnings: Vec<String>,
}

/// Owns the navigation state and resolves the roster for it.
#[derive(Debug, Clone)]
pub struct PeriodController {
    state: AppState,
    groups: Option<GroupPair>,
    policy: RolloverPolicy,
}

impl PeriodController {
    /// `state.group` is normalized against `groups`: dropped in month-only
    /// mode, replaced by the first label when unknown.
    pub fn new(mut state: AppState, groups: Option<GroupPair>, policy: RolloverPolicy) -> Self {
        state.group = match &groups {
            Some(pair) => Some(
                state
                    .group
                    .as_deref()
                    .and_then(|g| pair.resolve(g).ok())
                    .unwrap_or_else(|| pair.first())
                    .to_string(),
            ),
            None => None,
        };
        Self {
            state,
            groups,
            policy,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn period_key(&self) -> String {
        self.state.key()
    }

    pub fn previous_period_key(&self) -> String {
        self.state.previous_key()
    }

    /// Move the current month by `delta` months (±1 for navigation).
    pub fn set_month(&mut self, delta: i32) -> YearMonth {
        self.state.month = self.state.month.shift(delta);
        self.state.month
    }

    pub fn goto_month(&mut self, month: YearMonth) {
        self.state.month = month;
    }

    /// Cycle to the other group label.
    pub fn switch_group(&mut self) -> AppResult<&str> {
        let pair = self.groups.as_ref().ok_or(AppError::GroupsDisabled)?;
        let next = pair.other(self.state.group.as_deref().unwrap_or_default());
        self.state.group = Some(next.to_string());
        Ok(next)
    }

    /// Select a group by label (case-insensitive).
    pub fn select_group(&mut self, label: &str) -> AppResult<&str> {
        let pair = self.groups.as_ref().ok_or(AppError::GroupsDisabled)?;
        let canonical = pair.resolve(label)?;
        self.state.group = Some(canonical.to_string());
        Ok(canonical)
    }

    /// Load the roster of the current period, rolling names over from the
    /// previous month of the same group when the current key has no value.
    ///
    /// Storage errors on the current key are returned; a corrupt current
    /// value yields an empty, unsaved roster; problems with the previous
    /// period are reported in `warnings` and treated as "no data".
    pub fn active_roster<S>(&self, store: &mut S) -> AppResult<ActiveRoster>
    where
        S: RosterStore + ?Sized,
    {
        let key = self.period_key();

        match store.load(&key) {
            Ok(Some(roster)) => Ok(ActiveRoster {
                key,
                roster,
                origin: RosterOrigin::Stored,
                warnings: Vec::new(),
            }),
            Ok(None) => self.roll_over(store, key),
            Err(AppError::CorruptRoster { reason, .. }) => Ok(ActiveRoster {
                warnings: vec![format!("stored roster for '{key}' is unreadable: {reason}")],
                key,
                roster: Roster::new(),
                origin: RosterOrigin::Unreadable { reason },
            }),
            Err(e) => Err(e),
        }
    }

    fn roll_over<S>(&self, store: &mut S, key: String) -> AppResult<ActiveRoster>
    where
        S: RosterStore + ?Sized,
    {
        let previous_key = self.previous_period_key();
        let mut warnings = Vec::new();

        let previous = match store.load(&previous_key) {
            Ok(p) => p,
            Err(e) => {
                warnings.push(format!(
                    "previous period '{previous_key}' could not be read: {e}"
                ));
                None
            }
        };

        if let Some(prev) = previous.filter(|r| !r.is_empty()) {
            let roster = prev.carried_over();
            store.save(&key, &roster)?;
            return Ok(ActiveRoster {
                key,
                roster,
                origin: RosterOrigin::RolledOver { from: previous_key },
                warnings,
            });
        }

        let roster = Roster::new();
        let persisted = match self.policy {
            RolloverPolicy::PersistEmpty => {
                store.save(&key, &roster)?;
                true
            }
            RolloverPolicy::LeaveAbsent => false,
        };

        Ok(ActiveRoster {
            key,
            roster,
            origin: RosterOrigin::Fresh { persisted },
            warnings,
        })
    }
}
