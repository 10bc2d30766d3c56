//! Footer year stamp: written once at bind time, never recomputed.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Decimal text for the current local calendar year.
#[must_use]
pub fn year_text(year: u32) -> String {
    year.to_string()
}
