pub mod evaluate;
pub mod init;
