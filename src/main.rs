//! Rotation board runner (default binary).
//!
//! Fixed-timestep event loop: poll input until the next tick, apply
//! actions, then advance timers. A begun transform stays
//! pending for `MOVE_ANIMATION_MS` and commits when its countdown runs
//! out; input arriving in between is rejected by the board's busy flags.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_puzzles::core::{Board, GoalFigure, MovePlan, RotationPlan, SimpleRng};
use tui_puzzles::input::{board_action, should_quit};
use tui_puzzles::term::{BoardView, TerminalRenderer, Viewport};
use tui_puzzles::types::{BoardAction, BOARD_COLS, COLUMN_HEIGHT, MOVE_ANIMATION_MS, TICK_MS};

/// A transform waiting out its animation window before committing.
enum Pending {
    Rotation { plan: RotationPlan, remaining_ms: i32 },
    Move { plan: MovePlan, remaining_ms: i32 },
}

struct App {
    board: Board,
    figure: GoalFigure,
    cursor: (usize, usize),
    pending: Option<Pending>,
    rng: SimpleRng,
}

impl App {
    fn new(mut rng: SimpleRng) -> Self {
        let board = Board::generate(&mut rng);
        let figure = GoalFigure::generate(&mut rng);
        Self {
            board,
            figure,
            cursor: (0, 1),
            pending: None,
            rng,
        }
    }

    fn apply(&mut self, action: BoardAction) {
        let (col, row) = self.cursor;
        match action {
            BoardAction::CursorLeft => self.cursor.0 = col.saturating_sub(1),
            BoardAction::CursorRight => self.cursor.0 = (col + 1).min(BOARD_COLS - 1),
            BoardAction::CursorUp => self.cursor.1 = row.saturating_sub(1).max(1),
            BoardAction::CursorDown => self.cursor.1 = (row + 1).min(COLUMN_HEIGHT - 1),
            BoardAction::Select => match self.board.begin_move(col, row) {
                Some(plan) => {
                    self.pending = Some(Pending::Move {
                        plan,
                        remaining_ms: MOVE_ANIMATION_MS as i32,
                    });
                }
                None => log::warn!("move rejected at ({}, {})", col, row),
            },
            BoardAction::Rotate => match self.board.begin_rotation() {
                Some(plan) => {
                    self.pending = Some(Pending::Rotation {
                        plan,
                        remaining_ms: MOVE_ANIMATION_MS as i32,
                    });
                }
                None => log::warn!("rotation rejected: transform in flight"),
            },
            BoardAction::NewGame => {
                if self.pending.is_none() {
                    self.board = Board::generate(&mut self.rng);
                    self.figure = GoalFigure::generate(&mut self.rng);
                }
            }
        }
    }

    /// Advance the pending transform; commit once its window has elapsed.
    fn tick(&mut self, elapsed_ms: u32) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.pending = match pending {
            Pending::Rotation { plan, remaining_ms } => {
                let remaining_ms = remaining_ms - elapsed_ms as i32;
                if remaining_ms <= 0 {
                    self.board.commit_rotation(plan);
                    None
                } else {
                    Some(Pending::Rotation { plan, remaining_ms })
                }
            }
            Pending::Move { plan, remaining_ms } => {
                let remaining_ms = remaining_ms - elapsed_ms as i32;
                if remaining_ms <= 0 {
                    self.board.commit_move(plan);
                    None
                } else {
                    Some(Pending::Move { plan, remaining_ms })
                }
            }
        };
    }

    fn status(&self) -> &'static str {
        match self.pending {
            Some(Pending::Rotation { .. }) => "rotating...",
            Some(Pending::Move { .. }) => "moving...",
            None => "ready",
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut app = App::new(SimpleRng::from_entropy());
    let view = BoardView;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(
            &app.board,
            &app.figure,
            app.cursor,
            app.status(),
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = board_action(key) {
                        app.apply(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
