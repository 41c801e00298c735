pub mod group;
pub mod period;
pub mod person;
pub mod roster;
pub mod year_month;

pub use group::GroupPair;
pub use period::{AppState, period_key};
pub use person::Person;
pub use roster::Roster;
pub use year_month::YearMonth;
