//! Plain-text renderings of puzzle boards and block towers.
//!
//! Pure string builders; nothing here writes to a terminal.

use waypoint_kernel::carrier::atom::TABLE;
use waypoint_kernel::carrier::atom_state::AtomState;
use waypoint_kernel::carrier::grid::{GridState, BLANK};

/// Board as right-aligned 3-wide cells, blank shown as spaces, followed by a
/// dashed rule as wide as the board.
#[must_use]
pub fn render_grid(state: &GridState) -> String {
    let mut out = String::new();
    for row in state.to_rows() {
        for cell in row {
            if cell == BLANK {
                out.push_str("   ");
            } else {
                out.push_str(&format!("{cell:>3}"));
            }
        }
        out.push('\n');
    }
    out.push_str(&"-".repeat(state.cols() * 3));
    out.push('\n');
    out
}

/// Towers bottom-up, one per block resting on the table, in atom order.
#[must_use]
pub fn towers(state: &AtomState) -> Vec<Vec<&str>> {
    state
        .blocks_on(TABLE)
        .into_iter()
        .map(|base| {
            let mut tower = vec![base];
            let mut top = base;
            while let Some(&above) = state.blocks_on(top).first() {
                if tower.contains(&above) {
                    break;
                }
                tower.push(above);
                top = above;
            }
            tower
        })
        .collect()
}

/// Side-by-side picture of the towers (5-wide columns, top level first),
/// a dashed rule, then one `Tower base -> ... -> top` line per tower and the
/// list of clear blocks.
#[must_use]
pub fn render_blocks(state: &AtomState) -> String {
    let towers = towers(state);
    let height = towers.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for level in (0..height).rev() {
        let line: String = towers
            .iter()
            .map(|tower| tower.get(level).map_or_else(|| "     ".to_string(), |b| format!("  {b}  ")))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&"-".repeat(towers.len() * 5));
    out.push('\n');

    for tower in &towers {
        out.push_str("Tower ");
        out.push_str(&tower.join(" -> "));
        out.push('\n');
    }
    let clear: Vec<&str> = towers
        .iter()
        .flatten()
        .copied()
        .filter(|block| state.is_clear(block))
        .collect();
    out.push_str("Clear: ");
    out.push_str(&clear.join(", "));
    out.push('\n');
    out
}
