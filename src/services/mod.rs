pub mod preprocess;
pub use preprocess::{PreprocessPaths, PreprocessSummary};

pub mod report;
pub use report::{HtmlArtifacts, ReportMode, ReportRequest};
