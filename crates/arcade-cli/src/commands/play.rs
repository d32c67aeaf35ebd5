//! The `play` command.

use arcade_core::traits::LaunchOptions;
use arcade_stations::launcher::has_test_flag;

use crate::shell::Shell;

const USAGE: &str = "usage: play <02..15|keyword>";
const INVALID: &str = "invalid station. try: play 02  or  play pointers";

/// Resolve the argument, run the station, and fold its result into the
/// session. Tokens after the station are launcher flags such as `--test`.
pub fn execute(shell: &mut Shell<'_>, arg: Option<&str>) {
    let Some(arg) = arg else {
        shell.console.say(USAGE);
        return;
    };

    let arg = arg.to_lowercase();
    let mut tokens = arg.splitn(2, char::is_whitespace);
    let target = tokens.next().unwrap_or_default();
    let flags = tokens.next().unwrap_or_default();

    let Some(id) = shell.registry.resolve(target) else {
        tracing::debug!(target, "play target did not resolve");
        shell.console.say(INVALID);
        return;
    };
    let Some(slot) = shell.registry.slot(id) else {
        shell.console.say(INVALID);
        return;
    };

    let options = LaunchOptions {
        test_mode: shell.config.test_mode || has_test_flag(flags),
    };

    let entry = &shell.registry.entries()[slot];
    shell.console.say(&format!(
        "[{:02}] {} — {}",
        entry.id, entry.keyword, entry.title
    ));

    shell.state.record_attempt(slot);
    tracing::info!(station = id, test_mode = options.test_mode, "launching station");
    let result = entry
        .launcher()
        .launch(id, &mut *shell.console, &options);
    shell.state.apply_result(slot, &result);

    tracing::info!(station = id, points = result.total_points, "station finished");

    if let Some(reason) = result.aborted {
        tracing::info!(station = id, %reason, "station stopped early");
    }
    if result.input_closed() {
        shell.request_quit();
    }
}
