//! The `score` command.

use crate::shell::Shell;

pub fn execute(shell: &mut Shell<'_>) {
    let total = shell.state.recompute_total();
    let ids: Vec<String> = shell
        .state
        .attempted_slots()
        .filter_map(|slot| shell.registry.entries().get(slot))
        .map(|entry| format!("{:02}", entry.id))
        .collect();
    let attempted = if ids.is_empty() {
        "none".to_string()
    } else {
        ids.join(",")
    };
    shell
        .console
        .say(&format!("Score: {total} pts  | stations attempted: {attempted}"));
}
