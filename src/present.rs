//! Fortune message formatting.

use crate::catalog::FortuneEntry;

/// Format a drawn fortune for display. A `player_name` switches to the
/// third-person broadcast framing; otherwise the message speaks to the
/// player directly. An out-of-range `variant_index` is clamped to the last
/// variant rather than treated as an error.
pub fn format_fortune(
    entry: &FortuneEntry,
    variant_index: usize,
    player_name: Option<&str>,
) -> String {
    let clamped = variant_index.min(entry.content.len().saturating_sub(1));
    let text = entry.content.get(clamped).map(String::as_str).unwrap_or("");
    match player_name {
        Some(name) => format!(
            "§5Player §3{}§5's fortune for today: {}\n§7§o{}",
            name, entry.title, text
        ),
        None => format!(
            "§5Your fortune for today: {}\n§7§o{}",
            entry.title, text
        ),
    }
}
