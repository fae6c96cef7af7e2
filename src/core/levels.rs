use super::constants::{LEVEL_TABLE, TOP_LEVEL_XP_STEP};

/// A resolved position on the level table.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInfo {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// XP threshold the current level started at.
    pub current_threshold: u32,
    /// XP threshold of the next level (synthetic past the top tier).
    pub next_threshold: u32,
    /// Progress toward the next threshold, clamped to [0, 100].
    pub progress_percent: f64,
}

/// 1-based level for a running XP total: the highest table row whose
/// threshold the total has reached. Caps at the top row.
pub fn level_for_xp(xp: u32) -> u32 {
    let idx = LEVEL_TABLE
        .iter()
        .rposition(|(threshold, _, _, _)| xp >= *threshold)
        .unwrap_or(0);
    idx as u32 + 1
}

/// Level plus the progress-bar numbers the presentation layer renders.
pub fn level_info(xp: u32) -> LevelInfo {
    let idx = LEVEL_TABLE
        .iter()
        .rposition(|(threshold, _, _, _)| xp >= *threshold)
        .unwrap_or(0);
    let (current_threshold, title, icon, color) = LEVEL_TABLE[idx];
    let next_threshold = match LEVEL_TABLE.get(idx + 1) {
        Some((threshold, _, _, _)) => *threshold,
        None => current_threshold + TOP_LEVEL_XP_STEP,
    };
    let span = (next_threshold - current_threshold) as f64;
    let progress_percent = ((xp - current_threshold) as f64 / span * 100.0).clamp(0.0, 100.0);

    LevelInfo {
        level: idx as u32 + 1,
        title,
        icon,
        color,
        current_threshold,
        next_threshold,
        progress_percent,
    }
}
