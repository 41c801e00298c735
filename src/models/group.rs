use crate::errors::{AppError, AppResult};

pub const DEFAULT_GROUPS: [&str; 2] = ["Unisosiesc", "Univille"];

/// The two fixed group labels of the group-aware mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPair {
    labels: [String; 2],
}

impl GroupPair {
    pub fn new(first: &str, second: &str) -> AppResult<Self> {
        let first = first.trim();
        let second = second.trim();

        if first.is_empty() || second.is_empty() {
            return Err(AppError::InvalidGroup("group labels cannot be blank".into()));
        }
        if first == second {
            return Err(AppError::InvalidGroup(format!(
                "group labels must differ (both are '{first}')"
            )));
        }
        // '_' separates month and group inside a period key
        if first.contains('_') || second.contains('_') {
            return Err(AppError::InvalidGroup(
                "group labels cannot contain '_'".into(),
            ));
        }

        Ok(Self {
            labels: [first.to_string(), second.to_string()],
        })
    }

    /// Build from the configured list: empty means month-only mode.
    pub fn from_config(groups: &[String]) -> AppResult<Option<Self>> {
        match groups {
            [] => Ok(None),
            [a, b] => Self::new(a, b).map(Some),
            other => Err(AppError::InvalidGroup(format!(
                "expected exactly two groups, found {}",
                other.len()
            ))),
        }
    }

    pub fn first(&self) -> &str {
        &self.labels[0]
    }

    /// Case-insensitive lookup returning the canonical label.
    pub fn resolve(&self, label: &str) -> AppResult<&str> {
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(label.trim()))
            .map(String::as_str)
            .ok_or_else(|| {
                AppError::InvalidGroup(format!(
                    "'{}' (available: {}, {})",
                    label, self.labels[0], self.labels[1]
                ))
            })
    }

    /// The other label. Unknown input falls back to the first label.
    pub fn other(&self, current: &str) -> &str {
        if current == self.labels[0] {
            &self.labels[1]
        } else {
            &self.labels[0]
        }
    }
}

impl Default for GroupPair {
    fn default() -> Self {
        Self {
            labels: DEFAULT_GROUPS.map(String::from),
        }
    }
}
