//! Color grid runner.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_puzzles::core::color_grid::Rejection;
use tui_puzzles::core::{ColorGrid, SimpleRng};
use tui_puzzles::input::{color_grid_action, should_quit};
use tui_puzzles::term::{ColorGridView, TerminalRenderer, Viewport};
use tui_puzzles::types::{ColorGridAction, GRID_COLUMNS, GRID_SIZE};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut rng = SimpleRng::from_entropy();
    let mut grid = ColorGrid::generate(&mut rng);
    let view = ColorGridView;

    let mut cursor: usize = 0;
    let mut status = String::from("ready");
    let mut celebrating = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&grid, cursor, &status, celebrating, Viewport::new(w, h));
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
        let Some(action) = color_grid_action(key) else {
            continue;
        };

        match action {
            ColorGridAction::CursorLeft => cursor = cursor.saturating_sub(1),
            ColorGridAction::CursorRight => cursor = (cursor + 1).min(GRID_SIZE - 1),
            ColorGridAction::CursorUp => cursor = cursor.saturating_sub(GRID_COLUMNS),
            ColorGridAction::CursorDown => cursor = (cursor + GRID_COLUMNS).min(GRID_SIZE - 1),
            ColorGridAction::CycleCell => match grid.cycle(cursor) {
                Ok(outcome) => {
                    celebrating = outcome.celebration;
                    status = match outcome.highlight {
                        Some(color) => format!("highlight: {}", color.as_str()),
                        None => String::from("highlight cleared"),
                    };
                }
                Err(rejection) => {
                    status = match rejection {
                        Rejection::EmptyCell => String::from("cell is empty"),
                        Rejection::OutOfBounds => String::from("out of bounds"),
                    };
                    log::warn!("cycle rejected: {:?}", rejection);
                }
            },
            ColorGridAction::Complete => {
                celebrating = false;
                let removed = grid.complete();
                status = if removed > 0 {
                    format!("removed {} cells, {} left", removed, grid.remaining())
                } else {
                    log::warn!("complete with no highlighted cells");
                    String::from("nothing highlighted")
                };
            }
            ColorGridAction::NewGame => {
                grid = ColorGrid::generate(&mut rng);
                cursor = 0;
                celebrating = false;
                status = String::from("new game");
            }
        }
    }
}
