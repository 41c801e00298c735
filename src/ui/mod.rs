pub mod messages;
pub mod roster_view;
