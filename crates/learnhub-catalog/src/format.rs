//! Display helpers for counts and ratings.

/// Compact a count for display: `15.4K`, `1.2M`, `999`.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{}M", one_decimal(n as f64 / 1_000_000.0))
    } else if n >= 1_000 {
        format!("{}K", one_decimal(n as f64 / 1_000.0))
    } else {
        n.to_string()
    }
}

/// Rating with one decimal, e.g. `4.5`.
pub fn format_rating(rating: f64) -> String {
    one_decimal(rating)
}

/// One decimal place, exact halves rounded up (`4.25` is `4.3`).
///
/// `{:.1}` alone rounds halves to even.
fn one_decimal(x: f64) -> String {
    format!("{:.1}", (x * 10.0).round() / 10.0)
}

/// Header line describing how much of the catalog a query matched.
pub fn count_label(matched: usize, catalog_len: usize) -> String {
    if matched == catalog_len {
        format!("{} Tutorials Available", catalog_len)
    } else {
        format!("{} of {} Tutorials", matched, catalog_len)
    }
}
