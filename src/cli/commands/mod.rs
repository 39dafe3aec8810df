mod init;
mod preprocess;
mod report;

pub use init::cmd_init;
pub use preprocess::cmd_preprocess;
pub use report::cmd_report;
