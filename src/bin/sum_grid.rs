//! Sum grid runner.
//!
//! `--grid` and `--target` take comma-separated number lists; malformed
//! or wrong-length lists fall back to random generation with a warning.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_puzzles::core::sum_grid::{self, Rejection, TargetOutcome};
use tui_puzzles::core::{SimpleRng, SumGrid};
use tui_puzzles::input::{should_quit, sum_grid_action};
use tui_puzzles::term::{SumGridView, TerminalRenderer, Viewport};
use tui_puzzles::types::{SumGridAction, GRID_COLUMNS, GRID_SIZE};

#[derive(Parser)]
#[command(name = "sum-grid")]
#[command(about = "Mark grid numbers and attribute them to targets", long_about = None)]
struct Cli {
    /// Comma-separated list of exactly 16 grid numbers
    #[arg(long)]
    grid: Option<String>,

    /// Comma-separated list of exactly 4 target numbers
    #[arg(long)]
    target: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let provided_grid = cli.grid.as_deref().and_then(|raw| {
        let parsed = sum_grid::parse_grid_param(raw);
        if parsed.is_none() {
            log::warn!(
                "--grid must be exactly {} comma-separated numbers; using random values",
                GRID_SIZE
            );
        }
        parsed
    });
    let provided_targets = cli.target.as_deref().and_then(|raw| {
        let parsed = sum_grid::parse_target_param(raw);
        if parsed.is_none() {
            log::warn!(
                "--target must be exactly 4 comma-separated numbers; using random values"
            );
        }
        parsed
    });

    let mut rng = SimpleRng::from_entropy();
    let game = SumGrid::new(&mut rng, provided_grid, provided_targets);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, rng);

    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: SumGrid, mut rng: SimpleRng) -> Result<()> {
    let view = SumGridView;
    let mut cursor: usize = 0;
    let mut status = String::from("ready");

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, cursor, &status, Viewport::new(w, h));
        term.draw(&fb)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        let Some(action) = sum_grid_action(key) else {
            continue;
        };

        match action {
            SumGridAction::CursorLeft => cursor = cursor.saturating_sub(1),
            SumGridAction::CursorRight => cursor = (cursor + 1).min(GRID_SIZE - 1),
            SumGridAction::CursorUp => cursor = cursor.saturating_sub(GRID_COLUMNS),
            SumGridAction::CursorDown => cursor = (cursor + GRID_COLUMNS).min(GRID_SIZE - 1),
            SumGridAction::ToggleCell => match game.toggle_cell(cursor) {
                Ok(_) => status = format!("marked sum: {}", game.marked_sum()),
                Err(rejection) => {
                    status = reject_text(rejection).to_string();
                    log::warn!("toggle rejected: {:?}", rejection);
                }
            },
            SumGridAction::CompleteTarget(target) => match game.click_target(target) {
                Ok(TargetOutcome::Completed { cells, .. }) => {
                    status = format!("target {} completed with {} cells", target + 1, cells);
                }
                Ok(TargetOutcome::Reversed { cells, .. }) => {
                    status = format!("target {} reversed, {} cells restored", target + 1, cells);
                }
                Err(rejection) => {
                    status = reject_text(rejection).to_string();
                    log::warn!("target {} rejected: {:?}", target + 1, rejection);
                }
            },
            SumGridAction::NewGame => {
                game = SumGrid::generate(&mut rng);
                cursor = 0;
                status = String::from("new game");
            }
        }
    }
}

fn reject_text(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::OutOfBounds => "out of bounds",
        Rejection::CellLocked => "cell already completed",
        Rejection::NoColorAvailable => "no color available",
        Rejection::NoMarkedCells => "nothing marked",
    }
}
