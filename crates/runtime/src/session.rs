//! The running game session.
//!
//! [`Session`] is the single writer over the live [`GameState`]: every
//! mutation, including the action batches produced by interaction effects,
//! goes through [`Session::dispatch`]. Frontends that run on multiple threads
//! must serialize their calls into this type; the reducer itself assumes one
//! action is fully applied before the next arrives.

use oakwood_content::{ContentTables, EffectRegistry};
use oakwood_core::{
    Action, GameConfig, GameEngine, GameState, LogCategory, Stage, current_stage, resolve_action,
    start,
};

use crate::repository::SaveRepository;

const DEFAULT_SLOT: &str = "savegame";

/// Pointer into the interaction tree currently on screen.
///
/// Lives here rather than in [`GameState`] so the persisted snapshot never
/// carries stage pointers; a loaded game starts with no interaction open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveInteraction {
    pub interaction_id: String,
    pub stage_id: String,
}

/// One running game: live state, static content, and the save slot.
pub struct Session {
    state: GameState,
    tables: ContentTables,
    config: GameConfig,
    effects: EffectRegistry,
    repository: Box<dyn SaveRepository>,
    save_slot: String,
    active_interaction: Option<ActiveInteraction>,
}

impl Session {
    pub fn new(
        tables: ContentTables,
        config: GameConfig,
        effects: EffectRegistry,
        repository: Box<dyn SaveRepository>,
    ) -> Self {
        Self {
            state: GameState::initial(&config),
            tables,
            config,
            effects,
            repository,
            save_slot: DEFAULT_SLOT.to_owned(),
            active_interaction: None,
        }
    }

    /// Redirects persistence to a different slot.
    pub fn with_save_slot(mut self, slot: impl Into<String>) -> Self {
        self.save_slot = slot.into();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active_interaction(&self) -> Option<&ActiveInteraction> {
        self.active_interaction.as_ref()
    }

    /// Applies one action. Persistence actions are handled here; everything
    /// else reduces through [`GameEngine`].
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SaveGame => self.save(),
            Action::LoadGame => self.load(),
            action => {
                if matches!(action, Action::NewGame { .. }) {
                    self.active_interaction = None;
                }
                GameEngine::new(&mut self.state, &self.config).apply(self.tables.env(), &action);
            }
        }
    }

    fn save(&mut self) {
        match self.repository.save(&self.save_slot, &self.state) {
            Ok(()) => self.log("Game saved successfully", LogCategory::System),
            Err(err) => {
                tracing::warn!(slot = self.save_slot.as_str(), %err, "save failed");
                self.log("Failed to save game", LogCategory::Error);
            }
        }
    }

    fn load(&mut self) {
        match self.repository.load(&self.save_slot) {
            Ok(Some(state)) => {
                self.state = state;
                self.active_interaction = None;
                self.log("Game loaded successfully", LogCategory::System);
            }
            Ok(None) => self.log("No saved game found", LogCategory::Error),
            Err(err) => {
                tracing::warn!(slot = self.save_slot.as_str(), %err, "load failed");
                self.log("Failed to load game", LogCategory::Error);
            }
        }
    }

    fn log(&mut self, text: &str, category: LogCategory) {
        self.dispatch(Action::AddLogMessage {
            text: text.to_owned(),
            category,
        });
    }

    /// Opens the interaction tree with the given id at its initial stage.
    ///
    /// Content bugs (unknown id, dangling initial stage) close quietly with a
    /// warning instead of propagating; the state is untouched either way.
    pub fn begin_interaction(&mut self, interaction_id: &str) {
        let Some(interaction) = self.tables.interactions.get(interaction_id) else {
            tracing::warn!(interaction_id, "unknown interaction");
            return;
        };
        match start(interaction) {
            Ok(stage_id) => {
                self.active_interaction = Some(ActiveInteraction {
                    interaction_id: interaction_id.to_owned(),
                    stage_id: stage_id.to_owned(),
                });
            }
            Err(err) => {
                tracing::warn!(interaction_id, %err, "interaction failed to start");
            }
        }
    }

    /// The stage the open interaction is showing, if any.
    pub fn current_stage(&self) -> Option<&Stage> {
        let active = self.active_interaction.as_ref()?;
        let interaction = self.tables.interactions.get(&active.interaction_id)?;
        current_stage(interaction, &active.stage_id).ok()
    }

    /// Resolves a chosen action in the open interaction: runs its effect
    /// exactly once, then advances the stage pointer or closes the
    /// interaction when the action has no next stage.
    pub fn choose(&mut self, action_id: &str) {
        let Some(active) = self.active_interaction.take() else {
            return;
        };
        let Some(interaction) = self.tables.interactions.get(&active.interaction_id) else {
            tracing::warn!(
                interaction_id = active.interaction_id.as_str(),
                "open interaction vanished from the tables"
            );
            return;
        };

        let outcome = match resolve_action(interaction, &active.stage_id, action_id) {
            Ok(outcome) => outcome,
            // Content bug: fail soft by closing the interaction.
            Err(err) => {
                tracing::warn!(
                    interaction_id = active.interaction_id.as_str(),
                    stage_id = active.stage_id.as_str(),
                    %err,
                    "closing interaction"
                );
                return;
            }
        };

        if let Some(next_stage) = &outcome.next_stage {
            self.active_interaction = Some(ActiveInteraction {
                interaction_id: active.interaction_id.clone(),
                stage_id: next_stage.clone(),
            });
        }

        if let Some(effect_id) = &outcome.effect {
            match self.effects.resolve(effect_id) {
                Some(handler) => {
                    for action in handler(&self.state, &self.tables) {
                        self.dispatch(action);
                    }
                }
                // Validation catches this at load time; an unregistered id
                // here means the tables were mutated after validation.
                None => tracing::warn!(effect_id = effect_id.as_str(), "unregistered effect"),
            }
        }
    }
}
