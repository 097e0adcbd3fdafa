use crate::error::Result;
use std::path::Path;

/// Browser-automation seam for the PRISM Explorer form.
///
/// The session drives the form entirely through element ids; implementations
/// own the page lifecycle, element lookup, and wait-with-timeout behavior.
/// Failures surface as [`PrismError::Driver`](crate::PrismError::Driver).
pub trait FormDriver {
    /// Navigate to `url` and wait for the page to be interactive.
    fn open(&mut self, url: &str) -> Result<()>;

    /// Click the element with the given id (buttons, radios, checkboxes).
    fn click(&mut self, element_id: &str) -> Result<()>;

    /// Clear a text field and type `value` into it.
    fn fill(&mut self, element_id: &str, value: &str) -> Result<()>;

    /// Select the option with the given value from a dropdown.
    fn select_value(&mut self, element_id: &str, value: &str) -> Result<()>;

    /// Attach a local file to a file-upload input.
    fn attach_file(&mut self, element_id: &str, path: &Path) -> Result<()>;
}
