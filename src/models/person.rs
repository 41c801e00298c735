use serde::{Deserialize, Serialize};

/// A single entry of a monthly roster.
///
/// `name` is fixed at creation; only `paid` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub paid: bool,
}

impl Person {
    /// New person with a pending payment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paid: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.paid { "Paid" } else { "Pending" }
    }
}
