//! Narrative scene runner.
//!
//! Story stations walk the player through scenes: narrative lines, a
//! reflection prompt, the explanation, and a review pause before the next
//! scene. They award no points.

use crate::engine::normalize_input;
use crate::model::Scene;
use crate::results::{AbortReason, StationResult};
use crate::traits::Console;

/// How a single scene ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneOutcome {
    /// The explanation was revealed.
    pub completed: bool,
    /// The station should stop after this scene.
    pub aborted: Option<AbortReason>,
}

/// Run every scene in order. In `test_mode` no input is read.
pub fn run_story(
    console: &mut dyn Console,
    station_id: u8,
    scenes: &[Scene],
    test_mode: bool,
) -> StationResult {
    let mut result = StationResult::new(station_id);

    if scenes.is_empty() {
        console.say("No scenes configured for this station yet.");
        return result;
    }

    tracing::debug!(station_id, scenes = scenes.len(), test_mode, "story started");

    let mut completed_scenes = 0u32;
    let mut completed_prompts = 0u32;

    for (i, scene) in scenes.iter().enumerate() {
        let has_more = i + 1 < scenes.len();
        let outcome = run_scene(console, scene, test_mode, has_more);
        if outcome.completed {
            completed_scenes += 1;
            completed_prompts += 1;
        }
        if let Some(reason) = outcome.aborted {
            result.aborted = Some(reason);
            break;
        }
    }

    result.total_tasks = completed_scenes;
    console.say(&format!(
        "[SUMMARY] scenes={completed_scenes} prompts={completed_prompts}"
    ));
    result
}

/// Show one scene and wait for the player's reflection and review.
pub fn run_scene(
    console: &mut dyn Console,
    scene: &Scene,
    test_mode: bool,
    has_more: bool,
) -> SceneOutcome {
    let mut outcome = SceneOutcome::default();

    console.say(&format!("[SCENE] {}", scene.title));
    for line in &scene.narrative {
        console.say(&format!("[NARRATIVE] {line}"));
    }
    console.say(&format!("[PROMPT] {}", scene.prompt));

    if !test_mode {
        loop {
            console.prompt("> ");
            let Some(raw) = console.read_line() else {
                outcome.aborted = Some(AbortReason::InputClosed);
                return outcome;
            };
            match normalize_input(&raw).as_str() {
                "exit" => {
                    outcome.aborted = Some(AbortReason::Exit);
                    return outcome;
                }
                "why" => {
                    console.say("Give it a shot first, or type 'skip' to reveal the answer.");
                }
                // "skip" and any reflection both reveal the explanation
                _ => break,
            }
        }
    }

    console.say(&format!("[EXPLAIN] {}", scene.explain));
    outcome.completed = true;

    if test_mode {
        return outcome;
    }

    if has_more {
        console.say("--- Press ENTER to continue ---");
    } else {
        console.say("Press ENTER to wrap up, or type 'why' to revisit the explanation.");
    }

    loop {
        console.prompt("> ");
        let Some(raw) = console.read_line() else {
            outcome.aborted = Some(AbortReason::InputClosed);
            return outcome;
        };
        match normalize_input(&raw).as_str() {
            "" | "next" => return outcome,
            "why" => console.say(&format!("[EXPLAIN] {}", scene.explain)),
            "exit" => {
                outcome.aborted = Some(AbortReason::Exit);
                return outcome;
            }
            _ if has_more => console
                .say("Type 'why' to review, 'next' or ENTER to continue, or 'exit' to bail."),
            _ => console.say("Type 'why' to review, 'next'/ENTER to finish, or 'exit' to bail."),
        }
    }
}
