pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod session;
pub mod utils;

pub use error::{PrismError, Result};
