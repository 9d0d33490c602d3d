//! Plain-text chart.
//!
//! One character per cell, with row and column indices around the grid and
//! the item labels listed underneath.

use std::fmt::Write;

use seating_geometry::RingVariant;

use crate::plan::{CellView, RenderPlan};

fn glyph(view: &CellView) -> char {
    match view.fill.as_deref() {
        Some("player-3x3") => 'P',
        Some(fill) if fill.starts_with("player-") => 'p',
        Some(fill) if fill.starts_with("alliance-city-") => 'A',
        Some("rss-tile") => 'R',
        Some("warehouse") => 'W',
        Some("dead-spot") => 'X',
        Some(_) => '?',
        None => match view.ring {
            Some(RingVariant::Standard) => '+',
            Some(RingVariant::Wide) => '#',
            None => '.',
        },
    }
}

/// Renders `plan` as text.
#[must_use]
pub fn render_ascii(plan: &RenderPlan) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..plan.side {
        out.push(char::from_digit(col % 10, 10).unwrap_or(' '));
    }
    out.push('\n');

    for (row, cells) in plan.rows().enumerate() {
        let _ = write!(out, "{row:>2} ");
        out.extend(cells.iter().map(glyph));
        out.push('\n');
    }

    if !plan.labels.is_empty() {
        out.push('\n');
        for label in &plan.labels {
            let _ = write!(
                out,
                "{:<16} {:<9} {}",
                label.name,
                label.size_class.trim_start_matches("size-"),
                label.cell
            );
            if let Some(coords) = &label.coordinates {
                let _ = write!(out, "  {coords}");
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use seating_core::{AllianceCityLevel, Blueprint, BuildingKind, Cell, PlayerSize};
    use seating_engine::Layout;

    use super::*;
    use crate::plan::RenderOptions;

    #[test]
    fn test_empty_grid() {
        let text = render_ascii(&RenderPlan::build(&Layout::default(), RenderOptions::default()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], "   012345678901234567890123456789");
        assert_eq!(lines[1], format!(" 0 {}", ".".repeat(30)));
    }

    #[test]
    fn test_glyphs_and_labels() {
        let mut layout = Layout::default();
        layout
            .configure_alliance_city(Some(AllianceCityLevel::Lv4))
            .unwrap();
        layout
            .try_place(Blueprint::player("Aria", PlayerSize::Large), Cell::new(0, 0))
            .unwrap();
        layout
            .try_place(Blueprint::building(BuildingKind::DeadSpot), Cell::new(0, 29))
            .unwrap();
        let plan = RenderPlan::build(
            &layout,
            RenderOptions {
                show_coordinates: true,
            },
        );
        let text = render_ascii(&plan);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[1].starts_with(" 0 PPP."));
        assert!(lines[1].ends_with('X'));
        assert_eq!(&lines[6][3..33], format!("{}{}{}", ".".repeat(5), "#".repeat(20), ".".repeat(5)));
        assert_eq!(lines[14].chars().nth(3 + 13), Some('A'));
        assert!(text.contains("Aria"));
        assert!(text.contains("x:545 y:651"));
    }
}
