//! Text and SVG renderers for a finished layout.

use std::fmt::Write;
use u_placement_core::Rect;
use u_placement_search::{Constraints, Layout, SearchFailure, Stage, ValidationReport};

/// Pixels per board unit in SVG output.
const SVG_SCALE: f64 = 10.0;

/// Formats the validation summary.
pub fn summary(report: &ValidationReport) -> String {
    let status = |ok: bool| if ok { "PASSED" } else { "FAILED" };
    let mut out = String::new();
    let _ = writeln!(out, "--- FINAL PLACEMENT VALIDATION ---");
    let _ = writeln!(
        out,
        "Proximity Constraint  : {} Distance: {:.2}",
        status(report.proximity_ok),
        report.anchor_distance
    );
    let _ = writeln!(
        out,
        "Center of Mass        : {} Distance from center: {:.2}",
        status(report.center_of_mass_ok),
        report.center_of_mass_deviation
    );
    let _ = writeln!(out, "Keep-Out Zone         : {}", status(report.keepout_ok));
    let _ = writeln!(out, "No Overlap            : {}", status(report.overlap_ok));
    out
}

/// Formats the message shown when the search runs out of attempts.
///
/// Names the stage the last attempt died at; the center-of-mass tolerance is
/// mentioned only when the last attempt reached validation.
pub fn failure(failure: &SearchFailure, com_tolerance: f64) -> String {
    match failure.last_stage() {
        Some(Stage::Validation) => format!(
            "Failed to find a valid placement with center of mass <= {} after {} attempts: {}",
            com_tolerance, failure.attempts, failure
        ),
        Some(stage) => format!(
            "Failed to find a valid placement after {} attempts: last attempt failed at {}",
            failure.attempts, stage
        ),
        None => format!(
            "Failed to find a valid placement after {} attempts",
            failure.attempts
        ),
    }
}

/// Draws the layout as a character grid, one cell per board unit.
///
/// Components are drawn with the digit of their position in the layout
/// (`1` for the first), keep-out cells with `~` and free cells with `.`.
/// A legend follows the grid.
pub fn ascii(layout: &Layout, report: &ValidationReport) -> String {
    let board = layout.board();
    let mut out = String::new();

    for row in 0..board.height() {
        for col in 0..board.width() {
            let (cx, cy) = (col as f64 + 0.5, row as f64 + 0.5);
            let owner = layout
                .components()
                .iter()
                .position(|c| c.bounds().is_some_and(|b| cell_in(&b, cx, cy)));
            let ch = match owner {
                Some(i) => cell_label(i),
                None if cell_in(&report.keepout_zone, cx, cy) => '~',
                None => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out.push('\n');
    for (i, c) in layout.components().iter().enumerate() {
        let pos = c
            .position()
            .map_or_else(|| "unplaced".to_string(), |(x, y)| format!("({}, {})", x, y));
        let _ = writeln!(
            out,
            "{} {:<5} {:>9} {}x{}",
            cell_label(i),
            c.name(),
            pos,
            c.width(),
            c.height()
        );
    }
    out
}

/// Renders the layout as a standalone SVG document.
///
/// Draws the board, every component with its name, the proximity circle
/// around the anchor and the keep-out zone.
pub fn svg(layout: &Layout, report: &ValidationReport, constraints: &Constraints) -> String {
    let board = layout.board();
    let width = board.width() as f64 * SVG_SCALE;
    let height = board.height() as f64 * SVG_SCALE;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white" stroke="black"/>"#,
        width, height
    );

    let zone = scaled(&report.keepout_zone);
    let _ = writeln!(
        out,
        r#"  <rect class="keepout" x="{}" y="{}" width="{}" height="{}" fill="red" fill-opacity="0.3"/>"#,
        zone.x, zone.y, zone.width, zone.height
    );

    for component in layout.components() {
        let Some(bounds) = component.bounds() else {
            continue;
        };
        let r = scaled(&bounds);
        let center = r.center();
        let _ = writeln!(
            out,
            r#"  <rect class="component" x="{}" y="{}" width="{}" height="{}" fill="lightblue" stroke="black"/>"#,
            r.x, r.y, r.width, r.height
        );
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="8" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            center.x,
            center.y,
            escape(component.name())
        );
    }

    if let Some(center) = layout.get(&constraints.anchor).and_then(|c| c.center()) {
        let _ = writeln!(
            out,
            r#"  <circle class="proximity" cx="{}" cy="{}" r="{}" fill="none" stroke="orange" stroke-dasharray="6 4"/>"#,
            center.x * SVG_SCALE,
            center.y * SVG_SCALE,
            constraints.proximity_cap * SVG_SCALE
        );
    }

    out.push_str("</svg>\n");
    out
}

fn cell_in(rect: &Rect, x: f64, y: f64) -> bool {
    x >= rect.x && x < rect.max_x() && y >= rect.y && y < rect.max_y()
}

fn cell_label(index: usize) -> char {
    char::from_digit((index as u32 + 1) % 36, 36).unwrap_or('#')
}

fn scaled(rect: &Rect) -> Rect {
    Rect::new(
        rect.x * SVG_SCALE,
        rect.y * SVG_SCALE,
        rect.width * SVG_SCALE,
        rect.height * SVG_SCALE,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_placement_search::{search_layout, Error, LayoutSearch, SearchConfig};

    #[test]
    fn test_summary_all_passed() {
        let (_, report) = search_layout(50, 50, 500).unwrap();
        let text = summary(&report);
        assert!(text.starts_with("--- FINAL PLACEMENT VALIDATION ---"));
        assert_eq!(text.matches("PASSED").count(), 4);
        assert!(text.contains("Distance from center: 0.32"));
    }

    #[test]
    fn test_ascii_grid_shape() {
        let (layout, report) = search_layout(50, 50, 500).unwrap();
        let text = ascii(&layout, &report);
        let grid: Vec<&str> = text.lines().take(50).collect();
        assert_eq!(grid.len(), 50);
        assert!(grid.iter().all(|row| row.chars().count() == 50));

        // MB1 occupies rows 10..25 of the first five columns.
        assert!(grid[10].starts_with("11111"));
        assert!(grid[9].starts_with("....."));
        // Keep-out band sits directly above USB.
        assert!(grid[44].contains('~'));
        assert!(text.contains("XTAL"));
    }

    #[test]
    fn test_svg_elements() {
        let (layout, report) = search_layout(50, 50, 500).unwrap();
        let doc = svg(&layout, &report, &Constraints::default());
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert_eq!(doc.matches(r#"class="component""#).count(), 5);
        assert_eq!(doc.matches(r#"class="keepout""#).count(), 1);
        assert_eq!(doc.matches(r#"class="proximity""#).count(), 1);
        assert!(doc.contains(r#"r="100""#));
    }

    #[test]
    fn test_failure_names_edge_stage() {
        let Err(Error::SearchExhausted(f)) = search_layout(10, 10, 25) else {
            panic!("expected exhaustion");
        };
        let text = failure(&f, 2.0);
        assert!(text.contains("after 25 attempts"));
        assert!(text.contains("edge A placement"));
        assert!(!text.contains("center of mass"));
    }

    #[test]
    fn test_failure_mentions_tolerance_at_validation() {
        let search = LayoutSearch::new(
            SearchConfig::new()
                .with_center_of_mass_tolerance(0.1)
                .with_max_attempts(10),
        );
        let Err(Error::SearchExhausted(f)) = search.run() else {
            panic!("expected exhaustion");
        };
        let text = failure(&f, 0.1);
        assert!(text.contains("center of mass <= 0.1"));
        assert!(text.contains("validation"));
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(cell_label(0), '1');
        assert_eq!(cell_label(4), '5');
        assert_eq!(cell_label(9), 'a');
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R<1>&"), "R&lt;1&gt;&amp;");
    }
}
