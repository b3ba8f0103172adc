//! CLI command modules

pub mod info;
pub mod init;
pub mod plugins;
pub mod sources;
pub mod validate;
