//! Branching dialogue and encounter trees.
//!
//! An [`Interaction`] is a finite directed graph of [`Stage`]s. Cycles are
//! permitted (for example "back to greeting" loops); the engine keeps no
//! visited set and allows unbounded revisits. An action without a
//! `next_stage` terminates the interaction.

mod engine;

pub use engine::{ActionOutcome, current_stage, resolve_action, start};

use std::collections::BTreeMap;

/// Whether a tree is attached to an NPC or an enemy encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionKind {
    Npc,
    Enemy,
}

/// A player-selectable choice within a stage.
///
/// `effect` is a symbolic id resolved through the content effect registry at
/// load time; no callable ever lives in this data, which keeps interaction
/// tables serializable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOption {
    pub id: String,
    pub label: String,
    /// Absent means the interaction closes when this action is chosen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_stage: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<String>,
}

/// One node in the tree: display text plus the choices it offers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stage {
    pub id: String,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    pub actions: Vec<ActionOption>,
}

impl Stage {
    /// Looks up an action by id within this stage.
    pub fn action(&self, action_id: &str) -> Option<&ActionOption> {
        self.actions.iter().find(|action| action.id == action_id)
    }
}

/// A named dialogue or combat tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub name: String,
    pub kind: InteractionKind,
    pub initial_stage: String,
    pub stages: BTreeMap<String, Stage>,
}

/// Errors raised while walking an interaction tree.
///
/// All three indicate content-table bugs rather than player mistakes; callers
/// must fail soft by closing the interaction instead of crashing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    #[error("initial stage '{0}' is not present in the stage map")]
    InvalidInteraction(String),

    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    #[error("unknown action '{action}' in stage '{stage}'")]
    UnknownAction { stage: String, action: String },
}
