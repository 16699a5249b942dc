mod app;
mod color;
mod event;
mod people;
mod terminal;
mod text;

use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};

use app::{App, Control};
use event::Action;
use terminal::Terminal;

/// Redraw interval while rows are animating.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("fadelist-demo.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let mut term = Terminal::new()?;
    let mut app = App::with_default_transition();

    loop {
        let now = Instant::now();
        app.tick(now);
        term.draw(&app.lines(now))?;

        // Block while idle, keep drawing while something moves.
        let timeout = app.is_animating().then_some(FRAME);
        for raw in term.poll(timeout)? {
            let Some(action) = Action::from_crossterm(&raw) else {
                continue;
            };
            if app.handle(action, Instant::now()) == Control::Quit {
                return Ok(());
            }
        }
    }
}
