pub mod add;
pub mod config;
pub mod context;
pub mod db;
pub mod del;
pub mod init;
pub mod log;
pub mod nav;
pub mod pay;
pub mod show;
