//! Calendar access.

/// Current date and local date formatting.
pub trait Clock {
    /// Four-digit year in the viewer's local time zone.
    fn current_year(&self) -> i32;

    /// Local calendar date for a Unix timestamp, in the viewer's conventions.
    fn local_date(&self, epoch_seconds: i64) -> String;
}
