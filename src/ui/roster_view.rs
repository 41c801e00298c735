use crate::models::{AppState, Roster};
use crate::utils::colors::{colorize_placeholder, colorize_status};
use crate::utils::table::{Column, Table};

/// Numbered table of the roster (1-based, as typed on the command line).
pub fn render_roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return format!("{}\n", colorize_placeholder("(no people for this period)"));
    }

    let mut table = Table::new(vec![Column::new("#"), Column::new("Name"), Column::new("Status")]);
    for (i, p) in roster.people().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            p.name.clone(),
            colorize_status(p.status_label(), p.paid),
        ]);
    }
    table.render()
}

pub fn render_summary(roster: &Roster) -> String {
    format!(
        "Paid: {} | Pending: {} | Total: {}",
        roster.paid_count(),
        roster.pending_count(),
        roster.len()
    )
}

pub fn print_roster(state: &AppState, key: &str, roster: &Roster, show_summary: bool) {
    crate::ui::messages::header(format!("{} [{}]", state.title(), key));
    print!("{}", render_roster(roster));
    if show_summary && !roster.is_empty() {
        println!("{}", render_summary(roster));
    }
}
