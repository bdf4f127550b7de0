//! The fortune catalog: an ordered, immutable collection of fortune entries
//! loaded from `fortune.json`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::reward::RewardDescriptor;

/// One catalog entry: a title, alternate fortune texts, and the rewards
/// granted when the entry is freshly rolled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneEntry {
    /// Unique, stable identifier referenced by player draw records.
    pub id: i64,
    pub title: String,
    /// Alternate texts; one is selected per draw. Never empty after load.
    pub content: Vec<String>,
    #[serde(default)]
    pub award: Vec<RewardDescriptor>,
}

/// Ordered collection of fortunes with id lookup and uniform random draws.
#[derive(Debug, Clone, Default)]
pub struct FortuneCatalog {
    entries: Vec<FortuneEntry>,
}

impl FortuneCatalog {
    /// Build a catalog, dropping entries that have no content variants so a
    /// drawn entry always has at least one text to show.
    pub fn new(entries: Vec<FortuneEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|entry| {
                if entry.content.is_empty() {
                    log::warn!(
                        "fortune {} ({:?}) has no content variants, dropping it",
                        entry.id,
                        entry.title
                    );
                    false
                } else {
                    true
                }
            })
            .collect();
        FortuneCatalog { entries }
    }

    pub fn find_by_id(&self, id: i64) -> Option<&FortuneEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Pick one entry uniformly at random (1/N per entry regardless of how
    /// many variants it has), then one of its variants uniformly at random.
    /// `None` on an empty catalog.
    pub fn draw_random(&self) -> Option<(&FortuneEntry, usize)> {
        if self.entries.is_empty() {
            return None;
        }
        let mut rng = rand::thread_rng();
        let entry = &self.entries[rng.gen_range(0..self.entries.len())];
        let variant = rng.gen_range(0..entry.content.len());
        Some((entry, variant))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FortuneEntry] {
        &self.entries
    }
}
