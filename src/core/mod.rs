pub mod log;
pub mod period;
pub mod roster;
pub mod session;
