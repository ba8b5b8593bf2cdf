use super::Selection;
use crate::output::{pad, print_json};
use board_core::chart::bar;
use board_core::dataset;
use board_core::labels::Text;
use board_core::stats::CharacterRow;
use board_core::types::Stage;
use board_core::BoardError;

pub fn run(selection: &Selection, id: &str, json: bool) -> anyhow::Result<()> {
    let character = dataset::find(id).ok_or_else(|| BoardError::CharacterNotFound(id.to_string()))?;
    let row = CharacterRow::from(character);

    if json {
        return print_json(&row);
    }

    let text = Text::for_locale(selection.locale);
    println!(
        "{} ({})  {}",
        character.name,
        character.id,
        character.priority.label(selection.locale)
    );
    println!("{}: {}", text.col_role, character.role);
    println!(
        "{}: {} {}% ({}/{})",
        text.col_progress,
        bar(12, row.progress),
        row.progress,
        row.done_stages,
        Stage::all().len()
    );
    println!();

    let width = Stage::all()
        .iter()
        .map(|s| crate::output::display_width(s.label(selection.locale)))
        .max()
        .unwrap_or(0);
    for &stage in Stage::all() {
        println!(
            "  {}  {}",
            pad(stage.label(selection.locale), width),
            character.status(stage).label(selection.locale)
        );
    }
    Ok(())
}
