//! The daily draw state machine.
//!
//! A player's state is evaluated fresh on every invocation; nothing persists
//! beyond the draw record itself. A record whose date matches "today" and
//! whose stored fortune still resolves is **fresh**: the stored result is
//! replayed with no reward and no record rewrite. Anything else (no record,
//! another day, or a record the catalog no longer explains) is **stale** and
//! triggers a new roll, an immediate record overwrite, and persistence.
//!
//! "Today" and the time zone are injected so the day-boundary logic stays
//! testable without touching the system clock.

use chrono::{DateTime, TimeZone, Utc};

use crate::config::{ConfigStore, LastFortune, PlayerDrawRecord};
use crate::errors::FortuneError;

/// True when both instants fall on the same calendar day rendered in `tz`.
/// Only year/month/day are compared; time of day is ignored.
pub fn same_calendar_day<Tz: TimeZone>(a: DateTime<Utc>, b: DateTime<Utc>, tz: &Tz) -> bool {
    a.with_timezone(tz).date_naive() == b.with_timezone(tz).date_naive()
}

/// Outcome of evaluating a player's draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawn {
    pub fortune_id: i64,
    pub variant_index: usize,
    /// False when today's stored draw was replayed. Rewards and the broadcast
    /// policy only apply to new rolls.
    pub newly_rolled: bool,
}

/// Evaluate the player's daily draw at `now`, rolling and persisting a new
/// record when the stored one is absent, stale, or corrupt.
pub fn evaluate<Tz: TimeZone>(
    store: &mut ConfigStore,
    player_id: &str,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<Drawn, FortuneError> {
    if store.catalog.is_empty() {
        return Err(FortuneError::EmptyCatalog);
    }

    if let Some(record) = store.players.get(player_id) {
        if same_calendar_day(record.last_date, now, tz) {
            let stored = &record.last_fortune;
            match store.catalog.find_by_id(stored.id) {
                Some(entry) if stored.content_index < entry.content.len() => {
                    return Ok(Drawn {
                        fortune_id: stored.id,
                        variant_index: stored.content_index,
                        newly_rolled: false,
                    });
                }
                _ => {
                    // Catalog edited between reloads; the record is corrupt.
                    log::error!(
                        "stored fortune {} (variant {}) for player {} no longer resolves, rerolling",
                        stored.id,
                        stored.content_index,
                        player_id
                    );
                }
            }
        }
    }

    let (fortune_id, variant_index) = {
        let (entry, variant) = store
            .catalog
            .draw_random()
            .ok_or(FortuneError::EmptyCatalog)?;
        (entry.id, variant)
    };
    store.players.insert(
        player_id.to_string(),
        PlayerDrawRecord {
            last_date: now,
            last_fortune: LastFortune {
                id: fortune_id,
                content_index: variant_index,
            },
        },
    );
    store.save_players();

    Ok(Drawn {
        fortune_id,
        variant_index,
        newly_rolled: true,
    })
}
