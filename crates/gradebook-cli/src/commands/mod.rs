pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod sort;
pub mod stats;
pub mod update;
