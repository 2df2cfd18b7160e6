pub mod config;
pub mod history;
pub mod init;
pub mod send;
pub mod serve;
