#![allow(dead_code)]

use firetrap::EnclosureDetector;
use std::collections::HashSet;

pub const CELL: f32 = 32.0;

/// Parse an ASCII scenario into a detector, brick positions, and the
/// expected enclosed cells.
///
/// Glyphs:
/// - ■: brick (placed at the cell center)
/// - x: free cell expected to be enclosed
/// - □ or space: free cell expected to stay reachable
///
/// The field exactly covers the drawn grid, one glyph per 32-unit cell.
/// Bricks are emitted in row-major reading order.
pub fn parse_scenario(text: &str) -> (EnclosureDetector, Vec<(f32, f32)>, HashSet<(i32, i32)>) {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.trim().is_empty())
        .collect();
    assert!(!lines.is_empty(), "scenario has no grid lines");

    let cols = lines[0].chars().count();
    let rows = lines.len();

    let detector =
        EnclosureDetector::with_cell_size(cols as f32 * CELL, rows as f32 * CELL, CELL);

    let mut bricks = Vec::new();
    let mut expected_enclosed = HashSet::new();

    for (y, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            cols,
            "ragged scenario line {}: {:?}",
            y,
            line
        );
        for (x, ch) in line.chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            match ch {
                '■' => bricks.push(detector.grid().cell_center(x, y)),
                'x' => {
                    expected_enclosed.insert((x, y));
                }
                '□' | ' ' => {}
                other => panic!("unknown scenario glyph {:?} at ({}, {})", other, x, y),
            }
        }
    }

    (detector, bricks, expected_enclosed)
}

/// Map enclosed-cell world centers back onto grid coordinates
pub fn enclosed_cell_coords(
    detector: &EnclosureDetector,
    enclosed_cells: &[(f32, f32)],
) -> HashSet<(i32, i32)> {
    enclosed_cells
        .iter()
        .map(|&(wx, wy)| detector.grid().world_to_cell(wx, wy))
        .collect()
}

/// Run a scenario and assert the enclosed set matches the drawing exactly
pub fn check_scenario(name: &str, text: &str) {
    let (detector, bricks, expected) = parse_scenario(text);
    let result = detector.detect(&bricks);
    let actual = enclosed_cell_coords(&detector, &result.enclosed_cells);

    let missing: Vec<_> = expected.difference(&actual).copied().collect();
    let extra: Vec<_> = actual.difference(&expected).copied().collect();
    if !missing.is_empty() || !extra.is_empty() {
        panic!(
            "Scenario '{}' failed (missing: {:?}, extra: {:?})",
            name, missing, extra
        );
    }
    assert_eq!(
        result.has_enclosure,
        !expected.is_empty(),
        "Scenario '{}': has_enclosure mismatch",
        name
    );
}
