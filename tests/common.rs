//! Shared test support: an in-memory host runtime that records every effect
//! the fortune feature applies.

use std::collections::{HashMap, HashSet};

use dailyfortune::host::{HostRuntime, PlayerInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockItem {
    pub item_type: String,
    pub amount: u32,
    pub aux: Option<i32>,
    pub snbt: Option<String>,
}

/// Recording fake of the game runtime. Item construction fails for type ids
/// listed in `unknown_items`; SNBT parsing fails for strings that do not
/// start with `{`.
#[derive(Default)]
pub struct MockHost {
    pub money: HashMap<String, i64>,
    pub objectives: HashSet<String>,
    pub scores: HashMap<(String, String), i64>,
    pub commands: Vec<String>,
    pub inventories: HashMap<String, Vec<MockItem>>,
    pub dropped: Vec<MockItem>,
    pub refreshes: u32,
    pub whispers: Vec<(String, String)>,
    pub broadcasts: Vec<String>,
    pub held: HashMap<String, String>,
    pub inventory_full: bool,
    pub unknown_items: HashSet<String>,
}

pub fn player(id: &str, name: &str, is_operator: bool) -> PlayerInfo {
    PlayerInfo {
        id: id.to_string(),
        name: name.to_string(),
        is_operator,
    }
}

impl HostRuntime for MockHost {
    type Item = MockItem;

    fn add_money(&mut self, player: &PlayerInfo, amount: i64) {
        *self.money.entry(player.id.clone()).or_default() += amount;
    }

    fn objective_exists(&self, name: &str) -> bool {
        self.objectives.contains(name)
    }

    fn create_objective(&mut self, name: &str) {
        self.objectives.insert(name.to_string());
    }

    fn add_score(&mut self, player: &PlayerInfo, objective: &str, amount: i64) {
        assert!(
            self.objectives.contains(objective),
            "score added to a missing objective"
        );
        *self
            .scores
            .entry((player.id.clone(), objective.to_string()))
            .or_default() += amount;
    }

    fn run_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    fn new_item(&mut self, item_type: &str, amount: u32) -> Option<MockItem> {
        if self.unknown_items.contains(item_type) {
            return None;
        }
        Some(MockItem {
            item_type: item_type.to_string(),
            amount,
            aux: None,
            snbt: None,
        })
    }

    fn set_item_aux(&mut self, item: &mut MockItem, aux: i32) {
        item.aux = Some(aux);
    }

    fn item_from_snbt(&mut self, snbt: &str) -> Option<MockItem> {
        if !snbt.trim_start().starts_with('{') {
            return None;
        }
        Some(MockItem {
            item_type: "snbt".to_string(),
            amount: 1,
            aux: None,
            snbt: Some(snbt.to_string()),
        })
    }

    fn has_room_for(&self, _player: &PlayerInfo, _item: &MockItem) -> bool {
        !self.inventory_full
    }

    fn add_to_inventory(&mut self, player: &PlayerInfo, item: MockItem) {
        self.inventories
            .entry(player.id.clone())
            .or_default()
            .push(item);
    }

    fn drop_at_player(&mut self, _player: &PlayerInfo, item: MockItem) {
        self.dropped.push(item);
    }

    fn refresh_inventory(&mut self, _player: &PlayerInfo) {
        self.refreshes += 1;
    }

    fn held_item_snbt(&self, player: &PlayerInfo) -> Option<String> {
        self.held.get(&player.id).cloned()
    }

    fn tell(&mut self, player: &PlayerInfo, message: &str) {
        self.whispers.push((player.id.clone(), message.to_string()));
    }

    fn broadcast(&mut self, message: &str) {
        self.broadcasts.push(message.to_string());
    }
}
