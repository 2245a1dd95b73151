//! Barcode normalization and validation.
//!
//! Barcodes are numeric product identifiers (EAN-8 through EAN-14/GTIN).
//! Validation happens entirely client-side, before any network call.

/// Minimum digit count for a valid barcode (EAN-8).
pub const MIN_BARCODE_DIGITS: usize = 8;
/// Maximum digit count for a valid barcode (GTIN-14).
pub const MAX_BARCODE_DIGITS: usize = 14;

/// Strips every non-digit character from `raw`.
///
/// Scanner input often carries whitespace or separator characters; only the
/// digits are meaningful.
#[must_use]
pub fn normalize_barcode(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` iff `raw`, after stripping non-digit characters, has a
/// digit count within [`MIN_BARCODE_DIGITS`]..=[`MAX_BARCODE_DIGITS`].
#[must_use]
pub fn validate_barcode(raw: &str) -> bool {
    let digits = normalize_barcode(raw);
    (MIN_BARCODE_DIGITS..=MAX_BARCODE_DIGITS).contains(&digits.len())
}
