/// Fold full-width ASCII (U+FF01..U+FF5E) and the ideographic space (U+3000)
/// to their half-width equivalents. Everything else passes through untouched.
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|ch| match ch as u32 {
            0xFF01..=0xFF5E => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
            0x3000 => ' ',
            _ => ch,
        })
        .collect()
}

/// Trim, fold to half-width, then trim again (a folded ideographic space can
/// leave fresh whitespace at either end).
pub fn clean_field(text: &str) -> String {
    to_half_width(text.trim()).trim().to_string()
}
