pub mod init;
pub mod start;
