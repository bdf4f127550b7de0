//! # Dailyfortune - daily fortune draws for a multiplayer game server
//!
//! Dailyfortune implements a per-player "daily fortune" feature: each player may
//! draw one randomized fortune message per calendar day, optionally receive the
//! rewards attached to it, and keep that draw until the next day.
//!
//! ## Features
//!
//! - **One draw per day**: a player's first draw of the day rolls a random
//!   fortune; repeat draws the same day replay the stored result.
//! - **Configurable rewards**: currency, scoreboard points, server commands,
//!   inline item stacks, SNBT-described items, and items loaded from dump files.
//! - **Self-healing persistence**: three pretty-printed JSON datasets (settings,
//!   per-player records, fortune catalog) that re-fill missing keys from
//!   defaults on every load.
//! - **Host-agnostic**: all game-server effects go through the [`host::HostRuntime`]
//!   capability trait; the crate never touches the game runtime directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::{Local, Utc};
//! use dailyfortune::commands::{dispatch, FortuneCommand, Invoker};
//! use dailyfortune::config::ConfigStore;
//! # use dailyfortune::host::{HostRuntime, PlayerInfo};
//! # fn wire<H: HostRuntime>(host: &mut H, player: &PlayerInfo) {
//! let mut store = ConfigStore::load("plugins/DailyFortune");
//! let _ = dispatch(
//!     host,
//!     &mut store,
//!     FortuneCommand::Draw,
//!     &Invoker::Player(player),
//!     Utc::now(),
//!     &Local,
//! );
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - the three persisted datasets and the data directory layout
//! - [`catalog`] - fortune entries, lookup, and uniform random selection
//! - [`draw`] - the fresh/stale daily draw state machine
//! - [`reward`] - reward descriptors and their resolution into player effects
//! - [`present`] - fortune message formatting
//! - [`commands`] - the `fortune` command surface and permission checks
//! - [`host`] - capability interfaces the host game runtime must provide
//!
//! The crate is synchronous and single-threaded by contract: every operation
//! takes `&mut ConfigStore` and runs to completion on the invoking thread. A
//! multi-threaded host must serialize access to the store itself.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod draw;
pub mod errors;
pub mod host;
pub mod logutil;
pub mod present;
pub mod reward;
