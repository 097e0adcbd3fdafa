pub mod coordinate;
pub mod period;
pub mod variables;

pub use coordinate::CoordinateRow;
pub use period::TimePeriod;
pub use variables::ClimateVariables;
