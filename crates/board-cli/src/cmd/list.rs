use super::Selection;
use crate::output::{print_json, print_table};
use board_core::chart::bar;
use board_core::dataset::roster;
use board_core::labels::Text;
use board_core::stats::{self, SortKey};
use board_core::types::Stage;

const PROGRESS_BAR: usize = 8;

pub fn run(selection: &Selection, sort: SortKey, reverse: bool, json: bool) -> anyhow::Result<()> {
    let rows = stats::rows(roster(), selection.filter, sort, reverse);

    if json {
        return print_json(&serde_json::json!({
            "filter": selection.filter,
            "sort": sort,
            "reverse": reverse,
            "characters": rows,
        }));
    }

    let text = Text::for_locale(selection.locale);
    selection.print_header();
    println!();

    if rows.is_empty() {
        println!("{}", text.no_characters);
        return Ok(());
    }

    let mut headers = vec![
        "ID",
        text.col_character,
        text.col_priority,
        text.col_role,
        text.col_progress,
    ];
    headers.extend(Stage::all().iter().map(|s| s.label(selection.locale)));

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let c = row.character;
            let mut cells = vec![
                c.id.clone(),
                c.name.clone(),
                c.priority.badge().to_string(),
                c.role.clone(),
                format!("{} {:>3}%", bar(PROGRESS_BAR, row.progress), row.progress),
            ];
            cells.extend(
                c.statuses()
                    .iter()
                    .map(|s| s.label(selection.locale).to_string()),
            );
            cells
        })
        .collect();

    print_table(&headers, table);
    Ok(())
}
