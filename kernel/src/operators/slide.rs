//! Sliding-puzzle moves: the blank cell travels one step in a [`Direction`].

use crate::carrier::grid::GridState;
use crate::error::KernelError;

/// Direction the blank cell moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by successor generation.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(row, col)` offset of one step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A puzzle action: move the blank one cell in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slide {
    pub direction: Direction,
}

impl Slide {
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move blank {}", self.direction)
    }
}

/// Row-major index the blank would move into, or `None` off the board.
#[must_use]
pub fn target_cell(state: &GridState, direction: Direction) -> Option<usize> {
    let (row, col) = state.blank_position();
    let (dr, dc) = direction.offset();
    let row = row.checked_add_signed(dr).filter(|&r| r < state.rows())?;
    let col = col.checked_add_signed(dc).filter(|&c| c < state.cols())?;
    Some(row * state.cols() + col)
}

/// Apply `action` to `state`, returning a new board. `state` is untouched.
///
/// # Errors
///
/// Returns [`KernelError::IllegalMove`] if the blank would leave the board.
pub fn apply(state: &GridState, action: Slide) -> Result<GridState, KernelError> {
    let target = target_cell(state, action.direction).ok_or_else(|| {
        let (row, col) = state.blank_position();
        KernelError::illegal_move(format!(
            "blank at ({row}, {col}) cannot move {} on a {}x{} board",
            action.direction,
            state.rows(),
            state.cols()
        ))
    })?;
    Ok(state.with_blank_at(target))
}
