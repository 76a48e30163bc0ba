//! Column rendering of variant sets for debug diagnostics.
//!
//! One column per label character, one row per substitute index. Each
//! column is right-justified to its widest substitute; a column with fewer
//! substitutes than the row index renders blank. Every cell is followed by
//! a single space.
//!
//! ```text
//! 6  e
//! 9 ee
//!    3
//!   33
//! ```

use std::fmt::Write;

use lospell_kernel::spelling::variants::VariantSetV1;

/// Render `sets` as rows of right-justified columns.
#[must_use]
pub fn render_spelling_choices(sets: &[VariantSetV1]) -> Vec<String> {
    let rows = sets.iter().map(VariantSetV1::len).max().unwrap_or(0);
    let widths: Vec<usize> = sets.iter().map(VariantSetV1::width).collect();
    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for (set, &width) in sets.iter().zip(&widths) {
                let cell = set.variants.get(row).map_or("", String::as_str);
                let _ = write!(line, "{cell:>width$} ");
            }
            line
        })
        .collect()
}
