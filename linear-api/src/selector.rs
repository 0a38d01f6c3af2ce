// ABOUTME: Interactive selection seam used when a name resolves to several candidates
// ABOUTME: Implemented by the terminal picker in the CLI and by scripted doubles in tests

use crate::Result;

/// Presents an ordered list of choices and blocks until the user picks one.
///
/// Implementations return the index into `items` together with the chosen
/// value, or [`LinearError::Cancelled`](crate::LinearError::Cancelled) when
/// the user aborts.
pub trait Selector {
    fn select(
        &self,
        label: &str,
        items: &[String],
        default_index: Option<usize>,
    ) -> Result<(usize, String)>;
}
