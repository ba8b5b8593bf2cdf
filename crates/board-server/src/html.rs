//! Server-side rendering of the dashboard and list views.

use board_core::chart::pie_slices;
use board_core::config::Config;
use board_core::labels::Text;
use board_core::stats::{Breakdown, CharacterRow, PriorityFilter, SortKey};
use board_core::types::{Locale, Stage, Status, ViewMode};
use std::fmt::Write as _;

/// Everything a page render depends on besides the data itself.
pub struct PageContext<'a> {
    pub config: &'a Config,
    pub view: ViewMode,
    pub filter: PriorityFilter,
    pub sort: SortKey,
    pub reverse: bool,
    pub locale: Locale,
}

impl PageContext<'_> {
    fn href(&self, view: ViewMode, filter: PriorityFilter) -> String {
        let mut url = format!("/?view={view}&priority={filter}");
        if view == ViewMode::List && self.sort != SortKey::Roster {
            let _ = write!(url, "&sort={}", self.sort);
        }
        if view == ViewMode::List && self.reverse {
            url.push_str("&reverse=true");
        }
        if self.locale != self.config.display.locale {
            let _ = write!(url, "&locale={}", self.locale);
        }
        url
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#F9FAFB;color:#1E293B;margin:0;padding:2rem}\
header{display:flex;justify-content:space-between;align-items:center;margin-bottom:2rem}\
h1{font-size:1.5rem;margin:0}.sub{color:#64748B;font-size:.875rem}\
a.btn{padding:.4rem .9rem;border-radius:9999px;border:1px solid #E5E7EB;text-decoration:none;color:#334155;font-size:.75rem;margin-right:.4rem;background:#fff}\
a.btn.on{background:#4F46E5;color:#fff;border-color:#4F46E5}\
.filters{margin-bottom:1.5rem}.cards{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem;margin-bottom:1.5rem}\
.card{background:#fff;border:1px solid #E5E7EB;border-radius:.75rem;padding:1.25rem}\
.big{font-size:1.9rem;font-weight:700}.note{font-size:.75rem;color:#94A3B8}\
.track{background:#F3F4F6;border-radius:9999px;height:.4rem;margin-top:.75rem}.fill{background:#4F46E5;height:100%;border-radius:9999px}\
.row{display:flex;align-items:center;gap:1rem;margin:.6rem 0}.stage{width:7rem;font-size:.875rem}\
.lane{flex:1;height:2rem;background:#F9FAFB;display:flex;border-radius:.375rem;overflow:hidden}\
.seg{color:#fff;font-size:.75rem;font-weight:700;display:flex;align-items:center;justify-content:center}\
table{width:100%;border-collapse:collapse;background:#fff;font-size:.875rem}th,td{padding:.9rem 1.2rem;text-align:left;border-bottom:1px solid #F1F5F9}\
.badge{display:inline-block;padding:.15rem .6rem;border-radius:9999px;font-size:.75rem;border:1px solid}\
.pri{display:inline-block;padding:0 .4rem;border-radius:.25rem;font-size:.65rem;font-weight:700;color:#fff;margin-left:.4rem}\
.s-todo{background:#F3F4F6;color:#9CA3AF}.s-doing{background:#EFF6FF;color:#2563EB}\
.s-revision{background:#FEF2F2;color:#DC2626}.s-done{background:#F0FDF4;color:#16A34A}\
.p-p0{background:#E11D48}.p-p1{background:#F59E0B}.p-p2{background:#64748B}";

/// Render the full page for the selected view.
pub fn render_page(ctx: &PageContext<'_>, breakdown: &Breakdown, rows: &[CharacterRow<'_>]) -> String {
    let text = Text::for_locale(ctx.locale);
    let mut html = String::with_capacity(16 * 1024);
    let lang = match ctx.locale {
        Locale::En => "en",
        Locale::Zh => "zh-CN",
    };
    let _ = write!(
        html,
        "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head><body>",
        title = escape(text.title),
    );

    // -- Header and view toggle ----------------------------------------------
    let _ = write!(
        html,
        "<header><div><h1>{}</h1><div class=\"sub\">{}: {} | {}: {}</div></div><nav>",
        escape(text.title),
        escape(text.project),
        escape(&ctx.config.project.name),
        escape(text.updated),
        escape(&ctx.config.project.updated),
    );
    for (view, label) in [
        (ViewMode::Dashboard, text.view_dashboard),
        (ViewMode::List, text.view_list),
    ] {
        push_link(&mut html, &ctx.href(view, ctx.filter), label, view == ctx.view);
    }
    html.push_str("</nav></header>");

    // -- Priority filter ------------------------------------------------------
    let _ = write!(html, "<div class=\"filters\"><span class=\"sub\">{}:</span> ", escape(text.filter));
    for filter in PriorityFilter::choices() {
        push_link(
            &mut html,
            &ctx.href(ctx.view, filter),
            text.filter_label(filter),
            filter == ctx.filter,
        );
    }
    html.push_str("</div>");

    match ctx.view {
        ViewMode::Dashboard => render_dashboard(&mut html, ctx, breakdown),
        ViewMode::List => render_list(&mut html, ctx, rows),
    }

    html.push_str("</body></html>");
    html
}

fn push_link(html: &mut String, href: &str, label: &str, active: bool) {
    let class = if active { "btn on" } else { "btn" };
    let _ = write!(
        html,
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        escape(href),
        escape(label)
    );
}

fn render_dashboard(html: &mut String, ctx: &PageContext<'_>, breakdown: &Breakdown) {
    let text = Text::for_locale(ctx.locale);
    let stats = &breakdown.stats;

    // -- Summary cards --------------------------------------------------------
    html.push_str("<section class=\"cards\">");
    let _ = write!(
        html,
        "<div class=\"card\" id=\"completion\"><div class=\"sub\">{}</div>\
         <div class=\"big\">{}%</div><div class=\"note\">{}</div>\
         <div class=\"track\"><div class=\"fill\" style=\"width:{}%\"></div></div></div>",
        escape(&text.completion_title(ctx.filter)),
        stats.progress,
        escape(text.based_on_filter),
        stats.progress,
    );
    for (id, title, count, note) in [
        ("revision", text.needs_attention, stats.counts.revision, text.blocking),
        ("doing", text.in_production, stats.counts.doing, text.flowing),
        ("done", text.delivered, stats.counts.done, text.awaiting),
    ] {
        let _ = write!(
            html,
            "<div class=\"card\" id=\"{id}\"><div class=\"sub\">{}</div>\
             <div class=\"big\">{count} <span class=\"note\">{}</span></div>\
             <div class=\"note\">{}</div></div>",
            escape(title),
            escape(text.stages_unit),
            escape(note),
        );
    }
    html.push_str("</section>");

    // -- Status distribution --------------------------------------------------
    let _ = write!(
        html,
        "<section class=\"card\" id=\"distribution\"><h3>{}</h3>",
        escape(text.distribution)
    );
    let slices = pie_slices(&breakdown.shares);
    if slices.is_empty() {
        let _ = write!(html, "<div class=\"note\">{}</div>", escape(text.no_data));
    } else {
        html.push_str(
            "<svg width=\"160\" height=\"160\" viewBox=\"-1 -1 2 2\" style=\"transform:rotate(-90deg)\">",
        );
        for slice in &slices {
            let _ = write!(
                html,
                "<path d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"0.05\"/>",
                slice.path, slice.color
            );
        }
        html.push_str("</svg>");
    }
    html.push_str("<ul>");
    for share in &breakdown.shares {
        let _ = write!(
            html,
            "<li><span class=\"badge s-{}\">{}</span> {} ({}%)</li>",
            share.status,
            escape(share.status.label(ctx.locale)),
            share.count,
            share.percent
        );
    }
    html.push_str("</ul></section>");

    // -- Stage backlog --------------------------------------------------------
    let _ = write!(
        html,
        "<section class=\"card\" id=\"stages\"><h3>{}</h3>",
        escape(text.backlog)
    );
    for stage in &breakdown.stages {
        let _ = write!(
            html,
            "<div class=\"row\"><div class=\"stage\">{}</div><div class=\"lane\">",
            escape(stage.stage.label(ctx.locale))
        );
        if stage.revision > 0 {
            let _ = write!(
                html,
                "<div class=\"seg\" style=\"width:{}%;background:#F87171\">{} {}</div>",
                stage.revision_pct,
                stage.revision,
                escape(text.revision_short)
            );
        }
        if stage.doing > 0 {
            let _ = write!(
                html,
                "<div class=\"seg\" style=\"width:{}%;background:#60A5FA\">{} {}</div>",
                stage.doing_pct,
                stage.doing,
                escape(text.doing_short)
            );
        }
        html.push_str("</div></div>");
    }
    let _ = write!(html, "<p class=\"note\">* {}</p></section>", escape(text.backlog_note));
}

fn render_list(html: &mut String, ctx: &PageContext<'_>, rows: &[CharacterRow<'_>]) {
    let text = Text::for_locale(ctx.locale);
    if rows.is_empty() {
        let _ = write!(html, "<p class=\"note\">{}</p>", escape(text.no_characters));
        return;
    }

    let _ = write!(
        html,
        "<table id=\"characters\"><thead><tr><th>{}</th><th>{}</th>",
        escape(text.col_character),
        escape(text.col_progress)
    );
    for stage in Stage::all() {
        let _ = write!(html, "<th>{}</th>", escape(stage.label(ctx.locale)));
    }
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        let c = row.character;
        let _ = write!(
            html,
            "<tr data-id=\"{}\"><td><div>{}<span class=\"pri p-{}\">{}</span></div>\
             <div class=\"note\">{}</div></td>\
             <td><div class=\"track\"><div class=\"fill\" style=\"width:{}%;background:#22C55E\"></div></div></td>",
            escape(&c.id),
            escape(&c.name),
            c.priority,
            c.priority.badge(),
            escape(&c.role),
            row.progress,
        );
        for status in c.statuses() {
            push_status(html, status, ctx.locale);
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

fn push_status(html: &mut String, status: Status, locale: Locale) {
    let _ = write!(
        html,
        "<td><span class=\"badge s-{status}\">{}</span></td>",
        escape(status.label(locale))
    );
}
