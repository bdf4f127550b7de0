//! Capability interfaces consumed from the host game runtime.
//!
//! The crate never talks to the game server directly: currency, scoreboards,
//! inventories, chat, and SNBT parsing all go through [`HostRuntime`]. The
//! host registers the `fortune` command however its runtime requires and
//! forwards invocations to [`crate::commands::dispatch`] with an
//! implementation of this trait.

/// Identity of the player a command acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Stable per-account identifier (xuid-like). Keys the draw record map;
    /// never a display name, which players can change.
    pub id: String,
    /// Display name, used in broadcasts and `{realName}` command expansion.
    pub name: String,
    /// Whether the player holds operator permission.
    pub is_operator: bool,
}

/// Game-server capabilities the fortune feature calls into.
///
/// `Item` is an opaque inventory item handle owned by the host; the reward
/// resolver only constructs, adjusts, and delivers it.
pub trait HostRuntime {
    type Item;

    /// Credit the player's currency balance.
    fn add_money(&mut self, player: &PlayerInfo, amount: i64);

    /// Whether a scoreboard objective with this name exists.
    fn objective_exists(&self, name: &str) -> bool;

    /// Create a scoreboard objective.
    fn create_objective(&mut self, name: &str);

    /// Add to the player's score on an existing objective.
    fn add_score(&mut self, player: &PlayerInfo, objective: &str, amount: i64);

    /// Execute an arbitrary server command.
    fn run_command(&mut self, command: &str);

    /// Construct a stack of `amount` items of `item_type`. `None` when the
    /// type id is unknown to the runtime.
    fn new_item(&mut self, item_type: &str, amount: u32) -> Option<Self::Item>;

    /// Apply an aux (variant/damage) value to a constructed item.
    fn set_item_aux(&mut self, item: &mut Self::Item, aux: i32);

    /// Parse a structured-tag (SNBT) string into an item. `None` on parse
    /// failure.
    fn item_from_snbt(&mut self, snbt: &str) -> Option<Self::Item>;

    /// Whether the player's inventory can accept the item.
    fn has_room_for(&self, player: &PlayerInfo, item: &Self::Item) -> bool;

    /// Insert the item into the player's inventory.
    fn add_to_inventory(&mut self, player: &PlayerInfo, item: Self::Item);

    /// Spawn the item in the world at the player's position.
    fn drop_at_player(&mut self, player: &PlayerInfo, item: Self::Item);

    /// Re-send the player's inventory to their client.
    fn refresh_inventory(&mut self, player: &PlayerInfo);

    /// SNBT of the item currently held by the player, `None` for an empty hand.
    fn held_item_snbt(&self, player: &PlayerInfo) -> Option<String>;

    /// Send a message to one player.
    fn tell(&mut self, player: &PlayerInfo, message: &str);

    /// Send a message to every player on the server.
    fn broadcast(&mut self, message: &str);
}
