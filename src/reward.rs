//! Reward descriptors and the resolver that turns them into player effects.
//!
//! Each fortune entry carries a list of [`RewardDescriptor`]s, granted only on
//! a fresh roll. Some kinds act on the player directly (currency, scoreboard,
//! command); the item kinds produce an inventory item that is delivered after
//! all descriptors resolve. Missing required fields, unreadable dump files,
//! and malformed SNBT are configuration errors: logged, the descriptor is
//! skipped, and the rest of the list still resolves.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::host::{HostRuntime, PlayerInfo};
use crate::logutil::escape_log;

/// How many levels of `dumped` file indirection are followed. A descriptor
/// loaded from a dump file may not itself point at another dump file.
const MAX_FILE_DEPTH: u32 = 1;

/// A declarative, tagged reward from the fortune catalog.
///
/// Wire format tags on a `type` field: `money`, `score`, `command`, `dumped`,
/// `snbt`, `item`. Fields whose absence the resolver tolerates (and reports)
/// are optional here rather than failing the whole catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RewardDescriptor {
    /// Credit the player's currency balance.
    Money { amount: Option<i64> },
    /// Add to a scoreboard objective, creating the objective when absent.
    #[serde(rename_all = "camelCase")]
    Score {
        score_name: Option<String>,
        #[serde(default)]
        amount: i64,
    },
    /// Run a server command; `{realName}` expands to the player's display name.
    Command { command: Option<String> },
    /// Indirect through a previously dumped item descriptor file.
    Dumped { filename: Option<String> },
    /// An item parsed from a structured-tag (SNBT) string.
    #[serde(rename_all = "camelCase")]
    Snbt { s_nbt: Option<String> },
    /// An item stack built from a type id and count, with an optional aux
    /// (variant/damage) value applied after construction.
    #[serde(rename_all = "camelCase")]
    Item {
        item_type: Option<String>,
        amount: Option<u32>,
        aux: Option<i32>,
    },
}

/// Resolve every descriptor in `rewards` against `player`, then deliver the
/// produced items: into the inventory when there is room, dropped at the
/// player's position otherwise. The displayed inventory is refreshed once
/// after all deliveries.
pub fn give_rewards<H: HostRuntime>(
    host: &mut H,
    player: &PlayerInfo,
    rewards: &[RewardDescriptor],
    dumped_dir: &Path,
) {
    let mut items = Vec::new();
    for descriptor in rewards {
        if let Some(item) = resolve(host, player, descriptor, dumped_dir, 0) {
            items.push(item);
        }
    }
    if items.is_empty() {
        return;
    }
    for item in items {
        if host.has_room_for(player, &item) {
            host.add_to_inventory(player, item);
        } else {
            host.drop_at_player(player, item);
        }
    }
    host.refresh_inventory(player);
}

/// Resolve one descriptor. Direct-effect kinds return `None` after acting;
/// item kinds return the constructed item for the caller to deliver.
fn resolve<H: HostRuntime>(
    host: &mut H,
    player: &PlayerInfo,
    descriptor: &RewardDescriptor,
    dumped_dir: &Path,
    depth: u32,
) -> Option<H::Item> {
    match descriptor {
        RewardDescriptor::Money { amount } => {
            let Some(amount) = amount else {
                log::error!("money reward must specify amount");
                return None;
            };
            host.add_money(player, *amount);
            None
        }
        RewardDescriptor::Score { score_name, amount } => {
            let Some(name) = score_name else {
                log::error!("score reward must specify scoreName");
                return None;
            };
            if !host.objective_exists(name) {
                host.create_objective(name);
            }
            host.add_score(player, name, *amount);
            None
        }
        RewardDescriptor::Command { command } => {
            let Some(template) = command else {
                log::error!("command reward must specify command");
                return None;
            };
            let expanded = template.replace("{realName}", &player.name);
            host.run_command(&expanded);
            None
        }
        RewardDescriptor::Dumped { filename } => {
            if depth >= MAX_FILE_DEPTH {
                log::error!("dumped reward nested inside a dump file, refusing to recurse");
                return None;
            }
            let Some(filename) = filename else {
                log::error!("dumped reward must specify filename");
                return None;
            };
            let path = dumped_dir.join(filename);
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    log::error!("failed to read dumped item {}: {}", path.display(), e);
                    return None;
                }
            };
            let nested: RewardDescriptor = match serde_json::from_str(&raw) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    log::error!("dumped item {} is malformed: {}", path.display(), e);
                    return None;
                }
            };
            resolve(host, player, &nested, dumped_dir, depth + 1)
        }
        RewardDescriptor::Snbt { s_nbt } => {
            let Some(snbt) = s_nbt else {
                log::error!("snbt reward must specify sNbt");
                return None;
            };
            let item = host.item_from_snbt(snbt);
            if item.is_none() {
                log::error!("failed to parse SNBT: {}", escape_log(snbt));
            }
            item
        }
        RewardDescriptor::Item {
            item_type,
            amount,
            aux,
        } => {
            let (Some(item_type), Some(amount)) = (item_type, amount) else {
                log::error!("item reward must specify both itemType and amount");
                return None;
            };
            let Some(mut item) = host.new_item(item_type, *amount) else {
                log::error!("failed to create item {}x{}", item_type, amount);
                return None;
            };
            if let Some(aux) = aux {
                host.set_item_aux(&mut item, *aux);
            }
            Some(item)
        }
    }
}
