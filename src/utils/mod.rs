pub mod constants;
pub mod dates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::partition_path;
pub use progress::ProgressReporter;
