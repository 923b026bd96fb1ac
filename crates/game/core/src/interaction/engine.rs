//! Stage-walking over interaction trees.
//!
//! The engine is stateless: it resolves stages and actions against the tree
//! and leaves the stage pointer to the caller. That keeps the functions pure
//! and trivially testable against raw content.

use crate::interaction::{Interaction, InteractionError, Stage};

/// Result of choosing an action: the new stage pointer, or termination when
/// `next_stage` is `None`, plus the symbolic side effect to run at most once
/// before control returns to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub next_stage: Option<String>,
    pub effect: Option<String>,
}

impl ActionOutcome {
    /// True when the chosen action closes the interaction.
    pub fn is_terminal(&self) -> bool {
        self.next_stage.is_none()
    }
}

/// Returns the designated initial stage id.
pub fn start(interaction: &Interaction) -> Result<&str, InteractionError> {
    if !interaction.stages.contains_key(&interaction.initial_stage) {
        return Err(InteractionError::InvalidInteraction(
            interaction.initial_stage.clone(),
        ));
    }
    Ok(&interaction.initial_stage)
}

/// Looks up the stage for the current pointer.
pub fn current_stage<'a>(
    interaction: &'a Interaction,
    stage_id: &str,
) -> Result<&'a Stage, InteractionError> {
    interaction
        .stages
        .get(stage_id)
        .ok_or_else(|| InteractionError::UnknownStage(stage_id.to_owned()))
}

/// Resolves a chosen action within the current stage.
///
/// A `Some` next stage keeps the interaction open; the pointer may validly
/// return to a previously visited stage. A `None` next stage signals
/// termination and the caller must close the interaction.
pub fn resolve_action(
    interaction: &Interaction,
    stage_id: &str,
    action_id: &str,
) -> Result<ActionOutcome, InteractionError> {
    let stage = current_stage(interaction, stage_id)?;
    let action = stage
        .action(action_id)
        .ok_or_else(|| InteractionError::UnknownAction {
            stage: stage_id.to_owned(),
            action: action_id.to_owned(),
        })?;
    Ok(ActionOutcome {
        next_stage: action.next_stage.clone(),
        effect: action.effect.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ActionOption, InteractionKind};
    use std::collections::BTreeMap;

    fn stage(id: &str, actions: Vec<ActionOption>) -> Stage {
        Stage {
            id: id.to_owned(),
            text: format!("stage {id}"),
            image: None,
            actions,
        }
    }

    fn option(id: &str, next: Option<&str>) -> ActionOption {
        ActionOption {
            id: id.to_owned(),
            label: id.to_owned(),
            next_stage: next.map(str::to_owned),
            effect: None,
        }
    }

    fn tree() -> Interaction {
        let mut stages = BTreeMap::new();
        stages.insert(
            "greeting".to_owned(),
            stage(
                "greeting",
                vec![
                    option("ask-about-town", Some("about-town")),
                    option("farewell", None),
                ],
            ),
        );
        stages.insert(
            "about-town".to_owned(),
            stage("about-town", vec![option("back-to-greeting", Some("greeting"))]),
        );
        Interaction {
            name: "Elder Thomas".to_owned(),
            kind: InteractionKind::Npc,
            initial_stage: "greeting".to_owned(),
            stages,
        }
    }

    #[test]
    fn start_yields_initial_stage() {
        assert_eq!(start(&tree()).unwrap(), "greeting");
    }

    #[test]
    fn start_rejects_dangling_initial_stage() {
        let mut tree = tree();
        tree.initial_stage = "missing".to_owned();
        assert_eq!(
            start(&tree),
            Err(InteractionError::InvalidInteraction("missing".to_owned()))
        );
    }

    #[test]
    fn resolve_action_advances_the_pointer() {
        let tree = tree();
        let outcome = resolve_action(&tree, "greeting", "ask-about-town").unwrap();
        assert_eq!(outcome.next_stage.as_deref(), Some("about-town"));
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn resolve_action_signals_termination_without_next_stage() {
        let tree = tree();
        let outcome = resolve_action(&tree, "greeting", "farewell").unwrap();
        assert!(outcome.is_terminal());
    }

    #[test]
    fn cycles_are_allowed() {
        let tree = tree();
        let mut pointer = start(&tree).unwrap().to_owned();
        for _ in 0..4 {
            pointer = resolve_action(&tree, &pointer, "ask-about-town")
                .unwrap()
                .next_stage
                .unwrap();
            pointer = resolve_action(&tree, &pointer, "back-to-greeting")
                .unwrap()
                .next_stage
                .unwrap();
        }
        assert_eq!(pointer, "greeting");
    }

    #[test]
    fn unknown_stage_and_action_are_errors() {
        let tree = tree();
        assert_eq!(
            current_stage(&tree, "nowhere").unwrap_err(),
            InteractionError::UnknownStage("nowhere".to_owned())
        );
        assert_eq!(
            resolve_action(&tree, "greeting", "shout").unwrap_err(),
            InteractionError::UnknownAction {
                stage: "greeting".to_owned(),
                action: "shout".to_owned(),
            }
        );
    }
}
