//! Chart geometry shared by the terminal and HTML views.

use crate::stats::StatusShare;
use crate::types::Status;
use serde::Serialize;
use std::f64::consts::PI;

/// One wedge of the status pie, as an SVG path in a unit circle centred on
/// the origin (`viewBox="-1 -1 2 2"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub status: Status,
    pub color: &'static str,
    pub path: String,
}

/// A whole disc as two half arcs. A single arc whose endpoints coincide is
/// not drawn by SVG renderers.
pub const FULL_DISC: &str = "M 1 0 A 1 1 0 1 1 -1 0 A 1 1 0 1 1 1 0 Z";

/// Wedges for every non-empty share. Returns nothing when all shares are
/// empty so callers can show a placeholder instead.
pub fn pie_slices(shares: &[StatusShare]) -> Vec<PieSlice> {
    let total: usize = shares.iter().map(|s| s.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = 0.0_f64;
    let mut slices = Vec::with_capacity(shares.len());
    for share in shares {
        if share.count == 0 {
            continue;
        }
        if share.count == total {
            slices.push(PieSlice {
                status: share.status,
                color: share.status.color(),
                path: FULL_DISC.to_string(),
            });
            break;
        }
        let sweep = share.count as f64 / total as f64 * 2.0 * PI;
        let (x1, y1) = (angle.cos(), angle.sin());
        let (x2, y2) = ((angle + sweep).cos(), (angle + sweep).sin());
        let large_arc = u8::from(sweep > PI);
        slices.push(PieSlice {
            status: share.status,
            color: share.status.color(),
            path: format!(
                "M 0 0 L {} {} A 1 1 0 {large_arc} 1 {} {} Z",
                coord(x1),
                coord(y1),
                coord(x2),
                coord(y2)
            ),
        });
        angle += sweep;
    }
    slices
}

fn coord(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    // Avoid printing "-0".
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// A fixed-width text bar, `filled` cells of `█` then `░`.
pub fn bar(width: usize, percent: u32) -> String {
    let pct = percent.min(100) as usize;
    let filled = (width * pct + 50) / 100;
    let mut out = String::with_capacity(width * 3);
    for i in 0..width {
        out.push(if i < filled { '█' } else { '░' });
    }
    out
}

/// Two stacked segments, `first` as `▓` then `second` as `█`, padded with
/// `░`. The combined fill never exceeds `width`.
pub fn stacked_bar(width: usize, first_pct: u32, second_pct: u32) -> String {
    let cells = |pct: u32| (width * pct.min(100) as usize + 50) / 100;
    let first = cells(first_pct);
    let second = cells(second_pct).min(width - first);
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat('▓').take(first));
    out.extend(std::iter::repeat('█').take(second));
    out.extend(std::iter::repeat('░').take(width - first - second));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{status_shares, StatusCounts};

    #[test]
    fn empty_pie_has_no_slices() {
        let shares = status_shares(&StatusCounts::default());
        assert!(pie_slices(&shares).is_empty());
    }

    #[test]
    fn single_status_fills_the_disc() {
        let counts = StatusCounts {
            todo: 3,
            ..Default::default()
        };
        let slices = pie_slices(&status_shares(&counts));
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].status, Status::Todo);
        assert_eq!(slices[0].path, FULL_DISC);
        // Both half arcs end on distinct points.
        assert!(slices[0].path.contains("A 1 1 0 1 1 -1 0"));
        assert!(slices[0].path.contains("A 1 1 0 1 1 1 0 Z"));
    }

    #[test]
    fn majority_share_uses_large_arc() {
        let counts = StatusCounts {
            done: 3,
            todo: 1,
            ..Default::default()
        };
        let slices = pie_slices(&status_shares(&counts));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].status, Status::Done);
        assert_eq!(slices[0].path, "M 0 0 L 1 0 A 1 1 0 1 1 0 -1 Z");
        assert!(slices[1].path.contains("A 1 1 0 0 1"));
    }

    #[test]
    fn halves_meet_at_the_far_side() {
        let counts = StatusCounts {
            done: 1,
            revision: 1,
            ..Default::default()
        };
        let slices = pie_slices(&status_shares(&counts));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].path, "M 0 0 L 1 0 A 1 1 0 0 1 -1 0 Z");
        assert_eq!(slices[1].status, Status::Revision);
        assert!(slices[1].path.starts_with("M 0 0 L -1 0"));
    }

    #[test]
    fn bar_clamps_and_rounds() {
        assert_eq!(bar(4, 0), "░░░░");
        assert_eq!(bar(4, 50), "██░░");
        assert_eq!(bar(4, 250), "████");
        assert_eq!(bar(10, 27).chars().filter(|&c| c == '█').count(), 3);
    }

    #[test]
    fn stacked_bar_never_overflows() {
        assert_eq!(stacked_bar(10, 20, 30), "▓▓███░░░░░");
        assert_eq!(stacked_bar(4, 100, 100), "▓▓▓▓");
        assert_eq!(stacked_bar(3, 0, 0).chars().count(), 3);
    }
}
