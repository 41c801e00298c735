use crate::errors::AppResult;
use crate::models::Roster;
use crate::store::RosterStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Roster),
    /// Blank input: nothing was stored.
    Ignored,
}

/// Roster mutations. Each one saves the full updated roster under `key`
/// and returns it only once the save succeeded, so the caller never shows
/// a state that is not on disk.
pub struct RosterLogic;

impl RosterLogic {
    pub fn add<S>(store: &mut S, key: &str, roster: &Roster, name: &str) -> AppResult<AddOutcome>
    where
        S: RosterStore + ?Sized,
    {
        let name = name.trim();
        if name.is_empty() {
            return Ok(AddOutcome::Ignored);
        }

        let updated = roster.with_person(name);
        store.save(key, &updated)?;
        Ok(AddOutcome::Added(updated))
    }

    pub fn toggle<S>(store: &mut S, key: &str, roster: &Roster, index: usize) -> AppResult<Roster>
    where
        S: RosterStore + ?Sized,
    {
        let updated = roster.with_toggled(index)?;
        store.save(key, &updated)?;
        Ok(updated)
    }

    pub fn set_paid<S>(
        store: &mut S,
        key: &str,
        roster: &Roster,
        index: usize,
        paid: bool,
    ) -> AppResult<Roster>
    where
        S: RosterStore + ?Sized,
    {
        let updated = roster.with_paid(index, paid)?;
        store.save(key, &updated)?;
        Ok(updated)
    }

    pub fn delete<S>(store: &mut S, key: &str, roster: &Roster, index: usize) -> AppResult<Roster>
    where
        S: RosterStore + ?Sized,
    {
        let updated = roster.without(index)?;
        store.save(key, &updated)?;
        Ok(updated)
    }
}
