use crate::errors::AppResult;
use crate::models::YearMonth;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM` argument; `now` maps to the current month.
pub fn parse_month(s: &str) -> AppResult<YearMonth> {
    if s.trim().eq_ignore_ascii_case("now") {
        return Ok(YearMonth::current());
    }
    s.parse()
}
