pub mod generate;
pub mod init;
pub mod stats;
pub mod validate;
