//! The `fortune` command surface.
//!
//! Three forms: no argument performs today's draw for the invoking player,
//! `dump` (operator only) captures the held item's SNBT into a timestamped
//! file under `dumped/` for authoring catalog entries, and `reload`
//! (operator only, console allowed) re-reads the three persisted datasets.
//! The host wires its command registry to [`dispatch`]; denial messages for
//! user errors are sent here so the wiring stays trivial.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::{self, ConfigStore};
use crate::draw;
use crate::errors::FortuneError;
use crate::host::{HostRuntime, PlayerInfo};
use crate::present::format_fortune;
use crate::reward::{self, RewardDescriptor};

/// The three forms of the `fortune` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FortuneCommand {
    Draw,
    Dump,
    Reload,
}

impl FortuneCommand {
    /// Map the optional subcommand token to a form. `None` input is the
    /// plain draw; an unknown token is no command at all.
    pub fn parse(arg: Option<&str>) -> Option<FortuneCommand> {
        match arg {
            None => Some(FortuneCommand::Draw),
            Some("dump") => Some(FortuneCommand::Dump),
            Some("reload") => Some(FortuneCommand::Reload),
            Some(_) => None,
        }
    }
}

/// Who invoked the command.
#[derive(Debug)]
pub enum Invoker<'a> {
    Player(&'a PlayerInfo),
    Console,
}

/// Run one command invocation. User errors are reported to the invoker (a
/// whispered denial for players, a log line for the console) and returned;
/// no state is mutated on a denied invocation.
pub fn dispatch<H: HostRuntime, Tz: TimeZone>(
    host: &mut H,
    store: &mut ConfigStore,
    command: FortuneCommand,
    invoker: &Invoker<'_>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<(), FortuneError> {
    let result = run(host, store, command, invoker, now, tz);
    if let Err(e) = &result {
        match invoker {
            Invoker::Player(player) => host.tell(player, &denial_text(e)),
            Invoker::Console => log::warn!("fortune command failed: {}", e),
        }
    }
    result
}

fn run<H: HostRuntime, Tz: TimeZone>(
    host: &mut H,
    store: &mut ConfigStore,
    command: FortuneCommand,
    invoker: &Invoker<'_>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<(), FortuneError> {
    match command {
        FortuneCommand::Reload => {
            if let Invoker::Player(player) = invoker {
                require_operator(player)?;
            }
            store.reload();
            match invoker {
                Invoker::Player(player) => host.tell(player, "§aConfiguration reloaded"),
                Invoker::Console => log::info!("fortune configuration reloaded"),
            }
            Ok(())
        }
        FortuneCommand::Dump => {
            let player = require_player(invoker)?;
            require_operator(player)?;
            let snbt = host
                .held_item_snbt(player)
                .ok_or(FortuneError::EmptyHand)?;
            let path = dump_item(store, &snbt, now)?;
            host.tell(
                player,
                &format!("§aHeld item's NBT exported to §6{}", path.display()),
            );
            Ok(())
        }
        FortuneCommand::Draw => {
            let player = require_player(invoker)?;
            todays_fortune(host, store, player, now, tz)
        }
    }
}

/// Perform (or replay) today's draw for `player`, applying the reward and
/// broadcast policies on a fresh roll.
fn todays_fortune<H: HostRuntime, Tz: TimeZone>(
    host: &mut H,
    store: &mut ConfigStore,
    player: &PlayerInfo,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<(), FortuneError> {
    let drawn = draw::evaluate(store, &player.id, now, tz)?;
    let entry = store
        .catalog
        .find_by_id(drawn.fortune_id)
        .ok_or(FortuneError::EmptyCatalog)?;

    if drawn.newly_rolled && store.settings.enable_award {
        reward::give_rewards(host, player, &entry.award, &store.dumped_dir());
    }

    if drawn.newly_rolled && store.settings.broadcast {
        host.broadcast(&format_fortune(entry, drawn.variant_index, Some(&player.name)));
    } else {
        host.tell(player, &format_fortune(entry, drawn.variant_index, None));
    }
    Ok(())
}

/// Write the held item's SNBT as a single reward descriptor file named by
/// capture time, ready to be referenced by a `dumped` reward.
fn dump_item(
    store: &ConfigStore,
    snbt: &str,
    now: DateTime<Utc>,
) -> Result<PathBuf, FortuneError> {
    let descriptor = RewardDescriptor::Snbt {
        s_nbt: Some(snbt.to_string()),
    };
    let path = store
        .dumped_dir()
        .join(format!("{}.json", now.timestamp_millis()));
    config::save_json(&path, &descriptor)?;
    Ok(path)
}

fn require_player<'a>(invoker: &'a Invoker<'_>) -> Result<&'a PlayerInfo, FortuneError> {
    match invoker {
        Invoker::Player(player) => Ok(player),
        Invoker::Console => Err(FortuneError::NotAPlayer),
    }
}

fn require_operator(player: &PlayerInfo) -> Result<(), FortuneError> {
    if player.is_operator {
        Ok(())
    } else {
        Err(FortuneError::NotOperator)
    }
}

/// User-facing denial/explanation text for a failed invocation.
fn denial_text(error: &FortuneError) -> String {
    match error {
        FortuneError::EmptyCatalog => "§cNo fortunes have been configured yet".to_string(),
        FortuneError::NotAPlayer => "§cOnly players can use this command form".to_string(),
        FortuneError::NotOperator => "§cOnly operators can use this command form".to_string(),
        FortuneError::EmptyHand => "§cHold the item whose NBT you want to export".to_string(),
        FortuneError::Persist(_) => "§cFailed to export the held item".to_string(),
    }
}
