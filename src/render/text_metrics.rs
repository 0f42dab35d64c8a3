/// Deterministic, backend-independent label width estimate.
///
/// Real text metrics depend on the host's font stack; the legend only needs a
/// stable figure for hit regions and flow layout, so a per-character advance
/// table is used instead of querying a backend.
pub(crate) fn estimate_label_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            'i' | 'j' | 'l' | '.' | ',' | '\'' => 0.32,
            'm' | 'w' | 'M' | 'W' => 0.85,
            ' ' => 0.33,
            '-' | '+' | '%' => 0.42,
            _ if ch.is_uppercase() => 0.7,
            _ => 0.56,
        }
    });
    units * font_size_px
}
