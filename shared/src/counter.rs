//! Labels for the count-up animation on stats and download figures.

/// Label for `value` after `progress` (0.0 to 1.0) of the animation.
///
/// Values with a `K` (`2.5K+`) count up in whole thousands; everything else
/// counts with one decimal. Unparseable values count from and to zero.
pub fn format_counter(value: &str, suffix: &str, progress: f64) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let current = leading_number(value) * progress;
    if value.contains('K') {
        format!("{}K{suffix}", current.round())
    } else {
        format!("{}{suffix}", (current * 10.0).round() / 10.0)
    }
}

/// Parses the numeric prefix of `value`, like `2.5` in `2.5K+`.
fn leading_number(value: &str) -> f64 {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|(index, c)| !(c.is_ascii_digit() || *c == '.' || (*index == 0 && *c == '-')))
        .map_or(value.len(), |(index, _)| index);
    value[..end].parse().unwrap_or(0.0)
}
