//! The `map` command.

use comfy_table::{Cell, Table};

use arcade_stations::STATION_COUNT;

use crate::shell::Shell;

pub fn execute(shell: &mut Shell<'_>) {
    let (done, pending) = shell.config.marks();

    let mut table = Table::new();
    table.set_header(vec!["Id", "Keyword", "Done", "Score", "Attempts", "Title"]);

    for (slot, entry) in shell.registry.entries().iter().enumerate() {
        let mark = if shell.state.completed(slot) { done } else { pending };
        table.add_row(vec![
            Cell::new(format!("{:02}", entry.id)),
            Cell::new(&entry.keyword),
            Cell::new(mark),
            Cell::new(shell.state.score(slot)),
            Cell::new(shell.state.attempts(slot)),
            Cell::new(&entry.title),
        ]);
    }

    let total = shell.state.recompute_total();
    let answered = shell.state.stations_attempted();
    shell.console.say(&table.to_string());
    shell.console.say(&format!(
        "Totals: score={total}  answered={answered}/{STATION_COUNT}"
    ));
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::session;

    #[test]
    fn fresh_map_lists_all_stations() {
        let (_, _, output) = session("map\n");
        for id in 2..=15u8 {
            assert!(output.contains(&format!("{id:02}")));
        }
        assert!(output.contains("Pointer Maze"));
        assert!(output.contains("Totals: score=0  answered=0/14"));
        assert!(!output.contains("✓"));
    }

    #[test]
    fn map_reflects_a_played_station() {
        let (_, _, output) = session("play pointers\n2\n&\nmap\n");
        assert!(output.contains("✓"));
        assert!(output.contains("Totals: score=4  answered=1/14"));
    }
}
