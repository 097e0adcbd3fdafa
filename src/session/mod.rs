pub mod driver;
pub mod prism;

pub use driver::FormDriver;
pub use prism::{BulkOutcome, PrismSession};
