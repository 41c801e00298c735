use super::person::Person;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ordered list of people for one period.
///
/// Order is insertion order and addressing is positional (0-based here,
/// 1-based on the command line). Two entries may share a name.
///
/// Every mutating helper returns a new roster instead of changing `self`,
/// so callers can persist the result before replacing what they display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    pub fn paid_count(&self) -> usize {
        self.people.iter().filter(|p| p.paid).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.paid_count()
    }

    /// Copy with `name` appended as pending.
    pub fn with_person(&self, name: &str) -> Self {
        let mut people = self.people.clone();
        people.push(Person::new(name));
        Self { people }
    }

    /// Copy with the entry at `index` set to `paid`.
    pub fn with_paid(&self, index: usize, paid: bool) -> AppResult<Self> {
        self.check_index(index)?;
        let mut people = self.people.clone();
        people[index].paid = paid;
        Ok(Self { people })
    }

    /// Copy with the `paid` flag of the entry at `index` flipped.
    pub fn with_toggled(&self, index: usize) -> AppResult<Self> {
        let current = self.check_index(index)?.paid;
        self.with_paid(index, !current)
    }

    /// Copy without the entry at `index`; later entries move up by one.
    pub fn without(&self, index: usize) -> AppResult<Self> {
        self.check_index(index)?;
        let people = self
            .people
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.clone())
            .collect();
        Ok(Self { people })
    }

    /// Fresh roster for the next period: same names, same order, nobody paid.
    pub fn carried_over(&self) -> Self {
        Self {
            people: self.people.iter().map(|p| Person::new(p.name.clone())).collect(),
        }
    }

    fn check_index(&self, index: usize) -> AppResult<&Person> {
        self.people.get(index).ok_or(AppError::InvalidIndex {
            index: index + 1,
            len: self.people.len(),
        })
    }
}
