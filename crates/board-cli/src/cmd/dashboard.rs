use super::Selection;
use crate::output::{pad, print_json};
use board_core::chart::{bar, stacked_bar};
use board_core::dataset::roster;
use board_core::labels::Text;
use board_core::stats::Breakdown;

const CARD_BAR: usize = 24;
const STAGE_BAR: usize = 28;

pub fn run(selection: &Selection, json: bool) -> anyhow::Result<()> {
    let breakdown = Breakdown::compute(roster(), selection.filter);

    if json {
        #[derive(serde::Serialize)]
        struct DashboardOutput<'a> {
            project: &'a str,
            updated: &'a str,
            stats: &'a board_core::stats::Stats,
            shares: &'a [board_core::stats::StatusShare],
            stages: &'a [board_core::stats::StageStats],
        }

        return print_json(&DashboardOutput {
            project: &selection.config.project.name,
            updated: &selection.config.project.updated,
            stats: &breakdown.stats,
            shares: &breakdown.shares,
            stages: &breakdown.stages,
        });
    }

    let text = Text::for_locale(selection.locale);
    let stats = &breakdown.stats;
    selection.print_header();

    // -- Summary cards --------------------------------------------------------

    let completion = text.completion_title(selection.filter);
    let card_width = [
        completion.as_str(),
        text.needs_attention,
        text.in_production,
        text.delivered,
    ]
    .iter()
    .map(|s| crate::output::display_width(s))
    .max()
    .unwrap_or(0);

    println!();
    println!(
        "{}  {:>3}%  {}  ({})",
        pad(&completion, card_width),
        stats.progress,
        bar(CARD_BAR, stats.progress),
        text.based_on_filter
    );
    println!(
        "{}  {:>3} {}  ({})",
        pad(text.needs_attention, card_width),
        stats.counts.revision,
        text.stages_unit,
        text.blocking
    );
    println!(
        "{}  {:>3} {}  ({})",
        pad(text.in_production, card_width),
        stats.counts.doing,
        text.stages_unit,
        text.flowing
    );
    println!(
        "{}  {:>3} {}  ({})",
        pad(text.delivered, card_width),
        stats.counts.done,
        text.stages_unit,
        text.awaiting
    );

    // -- Status distribution --------------------------------------------------

    println!("\n{}", text.distribution);
    if stats.total_items == 0 {
        println!("  ({})", text.no_data);
    } else {
        let label_width = breakdown
            .shares
            .iter()
            .map(|s| crate::output::display_width(s.status.label(selection.locale)))
            .max()
            .unwrap_or(0);
        for share in &breakdown.shares {
            println!(
                "  {}  {:>3}  {:>3}%  {}",
                pad(share.status.label(selection.locale), label_width),
                share.count,
                share.percent,
                bar(CARD_BAR, share.percent)
            );
        }
    }

    // -- Stage backlog --------------------------------------------------------

    println!("\n{}", text.backlog);
    let stage_width = breakdown
        .stages
        .iter()
        .map(|s| crate::output::display_width(s.stage.label(selection.locale)))
        .max()
        .unwrap_or(0);
    for stage in &breakdown.stages {
        println!(
            "  {}  {}  {:>2} {}  {:>2} {}",
            pad(stage.stage.label(selection.locale), stage_width),
            stacked_bar(STAGE_BAR, stage.revision_pct, stage.doing_pct),
            stage.revision,
            text.revision_short,
            stage.doing,
            text.doing_short
        );
    }
    println!("  * {}", text.backlog_note);

    Ok(())
}
