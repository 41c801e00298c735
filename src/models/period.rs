use super::year_month::YearMonth;

/// Storage key of one roster: `YYYY-MM` or `YYYY-MM_<Group>`.
pub fn period_key(month: YearMonth, group: Option<&str>) -> String {
    match group {
        Some(g) => format!("{month}_{g}"),
        None => month.to_string(),
    }
}

/// Navigation state: which month (and group) is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub month: YearMonth,
    pub group: Option<String>,
}

impl AppState {
    pub fn new(month: YearMonth, group: Option<String>) -> Self {
        Self { month, group }
    }

    pub fn key(&self) -> String {
        period_key(self.month, self.group.as_deref())
    }

    /// Key of the same group one month earlier.
    pub fn previous_key(&self) -> String {
        period_key(self.month.previous(), self.group.as_deref())
    }

    /// "May 2024" or "May 2024 · Univille".
    pub fn title(&self) -> String {
        match &self.group {
            Some(g) => format!("{} · {}", self.month.label(), g),
            None => self.month.label(),
        }
    }
}
