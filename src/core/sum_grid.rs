//! Sum grid - mark cells and attribute them to numeric targets.
//!
//! 16 grid numbers (1-9) and 4 targets (13-19). Marked cells borrow a color
//! from a shared 4-color palette; completing a target locks the marked cells
//! under that color and records a reversible objective. Target generation is
//! sum-constrained: a running-remainder bound keeps the target total within
//! the grid total.
//!
//! Player-action rejections are reported as [`Rejection`] values; callers
//! decide whether to log them.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{
    MarkColor, GRID_NUMBER_MAX, GRID_NUMBER_MIN, GRID_SIZE, MARK_PALETTE, TARGET_COUNT,
    TARGET_NUMBER_MAX, TARGET_NUMBER_MIN,
};

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Idle,
    /// Part of the active selection
    Marked,
    /// Consumed by a completed objective of the given color
    Locked(MarkColor),
}

/// A completed objective: target index plus the cells attributed to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub color: MarkColor,
    pub cells: ArrayVec<usize, GRID_SIZE>,
}

/// Why a player action was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    /// The cell belongs to a completed objective
    CellLocked,
    /// All palette colors are held by completed objectives
    NoColorAvailable,
    /// Completing a target with an empty selection
    NoMarkedCells,
}

/// Result of a successful target click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Marked cells were consumed into a new objective
    Completed { color: MarkColor, cells: usize },
    /// A previous objective was undone and its cells restored
    Reversed { color: MarkColor, cells: usize },
}

/// The sum grid game state
#[derive(Debug, Clone)]
pub struct SumGrid {
    numbers: [u8; GRID_SIZE],
    targets: [u8; TARGET_COUNT],
    cells: [CellState; GRID_SIZE],
    /// Color borrowed by the active selection, if any cells are marked
    selection_color: Option<MarkColor>,
    objectives: [Option<Objective>; TARGET_COUNT],
}

impl SumGrid {
    /// Build a game from provided and/or random numbers.
    ///
    /// A random grid is redrawn until it can support four minimum targets.
    /// A provided grid below that bound is accepted as-is (the running
    /// bound then clamps targets to `TARGET_NUMBER_MIN`, logged once).
    pub fn new(
        rng: &mut SimpleRng,
        provided_grid: Option<[u8; GRID_SIZE]>,
        provided_targets: Option<[u8; TARGET_COUNT]>,
    ) -> Self {
        let min_supportable = TARGET_COUNT as u32 * TARGET_NUMBER_MIN as u32;

        let numbers = match provided_grid {
            Some(numbers) => {
                if grid_sum(&numbers) < min_supportable && provided_targets.is_none() {
                    log::warn!(
                        "provided grid sum {} cannot support {} targets of at least {}; \
                         targets will clamp to the minimum",
                        grid_sum(&numbers),
                        TARGET_COUNT,
                        TARGET_NUMBER_MIN
                    );
                }
                numbers
            }
            None => loop {
                let mut numbers = [0u8; GRID_SIZE];
                for n in numbers.iter_mut() {
                    *n = rng.next_in(GRID_NUMBER_MIN as u32, GRID_NUMBER_MAX as u32) as u8;
                }
                if grid_sum(&numbers) >= min_supportable {
                    break numbers;
                }
            },
        };

        let targets = provided_targets.unwrap_or_else(|| generate_targets(rng, &numbers));

        Self {
            numbers,
            targets,
            cells: [CellState::Idle; GRID_SIZE],
            selection_color: None,
            objectives: std::array::from_fn(|_| None),
        }
    }

    /// Build a fully random game
    pub fn generate(rng: &mut SimpleRng) -> Self {
        Self::new(rng, None, None)
    }

    pub fn numbers(&self) -> &[u8; GRID_SIZE] {
        &self.numbers
    }

    pub fn targets(&self) -> &[u8; TARGET_COUNT] {
        &self.targets
    }

    pub fn cell(&self, idx: usize) -> Option<CellState> {
        self.cells.get(idx).copied()
    }

    /// Color borrowed by the active selection
    pub fn selection_color(&self) -> Option<MarkColor> {
        self.selection_color
    }

    pub fn objective(&self, target: usize) -> Option<&Objective> {
        self.objectives.get(target).and_then(|o| o.as_ref())
    }

    pub fn is_achieved(&self, target: usize) -> bool {
        self.objective(target).is_some()
    }

    /// Sum of the currently marked cells' numbers
    pub fn marked_sum(&self) -> u32 {
        self.cells
            .iter()
            .zip(self.numbers.iter())
            .filter(|(state, _)| matches!(state, CellState::Marked))
            .map(|(_, &n)| n as u32)
            .sum()
    }

    /// Palette colors not held by the selection or a completed objective
    pub fn free_colors(&self) -> ArrayVec<MarkColor, TARGET_COUNT> {
        MARK_PALETTE
            .iter()
            .copied()
            .filter(|&c| {
                Some(c) != self.selection_color
                    && !self
                        .objectives
                        .iter()
                        .flatten()
                        .any(|obj| obj.color == c)
            })
            .collect()
    }

    /// Toggle the marked state of a cell.
    ///
    /// Marking the first cell of a selection borrows the lowest free
    /// palette color; unmarking the last returns it. Returns `Ok(true)`
    /// when the cell ends up marked, `Ok(false)` when unmarked.
    pub fn toggle_cell(&mut self, idx: usize) -> Result<bool, Rejection> {
        match self.cells.get(idx).copied() {
            None => Err(Rejection::OutOfBounds),
            Some(CellState::Locked(_)) => Err(Rejection::CellLocked),
            Some(CellState::Marked) => {
                self.cells[idx] = CellState::Idle;
                if !self.cells.iter().any(|c| matches!(c, CellState::Marked)) {
                    self.selection_color = None;
                }
                Ok(false)
            }
            Some(CellState::Idle) => {
                if self.selection_color.is_none() {
                    let Some(color) = self.free_colors().first().copied() else {
                        return Err(Rejection::NoColorAvailable);
                    };
                    self.selection_color = Some(color);
                }
                self.cells[idx] = CellState::Marked;
                Ok(true)
            }
        }
    }

    /// Complete a target from the active selection, or reverse it.
    ///
    /// An unachieved target consumes every marked cell into a new locked
    /// objective under the selection color. An achieved target restores its
    /// cells to idle and returns its color to the pool.
    pub fn click_target(&mut self, target: usize) -> Result<TargetOutcome, Rejection> {
        if target >= TARGET_COUNT {
            return Err(Rejection::OutOfBounds);
        }

        if let Some(objective) = self.objectives[target].take() {
            for &idx in &objective.cells {
                self.cells[idx] = CellState::Idle;
            }
            return Ok(TargetOutcome::Reversed {
                color: objective.color,
                cells: objective.cells.len(),
            });
        }

        let marked: ArrayVec<usize, GRID_SIZE> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, state)| matches!(state, CellState::Marked))
            .map(|(idx, _)| idx)
            .collect();

        if marked.is_empty() {
            return Err(Rejection::NoMarkedCells);
        }

        // A non-empty selection always holds a color.
        let Some(color) = self.selection_color.take() else {
            return Err(Rejection::NoColorAvailable);
        };

        for &idx in &marked {
            self.cells[idx] = CellState::Locked(color);
        }
        let cells = marked.len();
        self.objectives[target] = Some(Objective {
            color,
            cells: marked,
        });

        Ok(TargetOutcome::Completed { color, cells })
    }
}

fn grid_sum(numbers: &[u8; GRID_SIZE]) -> u32 {
    numbers.iter().map(|&n| n as u32).sum()
}

/// Generate targets under the running-remainder bound.
///
/// For target i the draw is capped at
/// `grid_sum - targets_so_far - remaining_after * TARGET_NUMBER_MIN`,
/// so the final target sum never exceeds the grid sum.
fn generate_targets(rng: &mut SimpleRng, numbers: &[u8; GRID_SIZE]) -> [u8; TARGET_COUNT] {
    let grid_sum = grid_sum(numbers);
    let mut targets = [0u8; TARGET_COUNT];
    let mut target_sum: u32 = 0;

    for i in 0..TARGET_COUNT {
        let remaining_after = (TARGET_COUNT - i - 1) as u32;
        let max_allowed = grid_sum
            .saturating_sub(target_sum)
            .saturating_sub(remaining_after * TARGET_NUMBER_MIN as u32);
        let max = (TARGET_NUMBER_MAX as u32).min(max_allowed);
        let num = rng.next_in(TARGET_NUMBER_MIN as u32, max);
        targets[i] = num as u8;
        target_sum += num;
    }

    targets
}

/// Parse a comma-separated list of exactly `expected` numbers.
///
/// Any non-numeric entry or a wrong count rejects the whole list; callers
/// fall back to random generation with a warning.
pub fn parse_number_list(input: &str, expected: usize) -> Option<Vec<u8>> {
    let values: Vec<u8> = input
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;

    if values.len() != expected {
        return None;
    }
    Some(values)
}

/// Parse the `grid` parameter (16 numbers)
pub fn parse_grid_param(input: &str) -> Option<[u8; GRID_SIZE]> {
    let values = parse_number_list(input, GRID_SIZE)?;
    let mut out = [0u8; GRID_SIZE];
    out.copy_from_slice(&values);
    Some(out)
}

/// Parse the `target` parameter (4 numbers)
pub fn parse_target_param(input: &str) -> Option<[u8; TARGET_COUNT]> {
    let values = parse_number_list(input, TARGET_COUNT)?;
    let mut out = [0u8; TARGET_COUNT];
    out.copy_from_slice(&values);
    Some(out)
}
