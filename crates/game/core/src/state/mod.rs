//! Canonical snapshot of the game state.
//!
//! [`GameState`] is the single root mutated by the reducer. Everything in it
//! is plain data: content tables are referenced by id and side effects are
//! symbolic, so the whole snapshot serializes and round-trips exactly.

pub mod log;
pub mod player;

pub use log::{LogCategory, LogMessage, MessageLog};
pub use player::{EquipSlot, InventoryEntry, PlayerState, Position, Skill};

use crate::config::GameConfig;

/// Which top-level screen the frontend should render.
///
/// The reducer accepts any view value unconditionally; transitions are
/// caller-driven. `GameOver` is terminal: no reducer action leaves it short
/// of a full `NewGame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameView {
    StartScreen,
    WorldMap,
    AreaMap,
    Inventory,
    Shop,
    GameOver,
}

/// An open shop conversation: who the player is trading with and what the
/// NPC sells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopSession {
    pub npc_id: String,
    pub inventory: Vec<String>,
}

/// Root game state, created once per session and mutated exclusively through
/// the reducer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Current top-level screen.
    pub view: GameView,
    /// The player character.
    pub player: PlayerState,
    /// Bounded message log shown to the player.
    pub message_log: MessageLog,
    /// Active shop session, if a shop view is open.
    pub active_shop: Option<ShopSession>,
    /// Last message id handed out. Never reused or reset mid-session.
    pub log_counter: u64,
}

impl GameState {
    /// State shown before a game has started: start screen, template player,
    /// empty log.
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            view: GameView::StartScreen,
            player: PlayerState::from_config("Hero", config),
            message_log: MessageLog::default(),
            active_shop: None,
            log_counter: 0,
        }
    }

    /// Fresh state for a newly named player: world map view and a seeded
    /// welcome message with id 1.
    pub fn new_game(name: &str, config: &GameConfig) -> Self {
        let mut state = Self {
            view: GameView::WorldMap,
            player: PlayerState::from_config(name, config),
            message_log: MessageLog::default(),
            active_shop: None,
            log_counter: 0,
        };
        state.push_log(
            format!("Welcome, {name}! Your adventure begins."),
            LogCategory::System,
            config.log_capacity,
        );
        state
    }

    /// Appends a log entry with a freshly incremented id, dropping the oldest
    /// entry once `capacity` is exceeded.
    pub fn push_log(&mut self, text: String, category: LogCategory, capacity: usize) {
        self.log_counter += 1;
        self.message_log
            .push(LogMessage::new(self.log_counter, text, category), capacity);
    }
}
