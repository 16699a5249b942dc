use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::color::Rgb;
use crate::text::{clip_to_width, pad_to_width};

/// One styled line of output.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub fg: Rgb,
    pub bold: bool,
}

impl Line {
    pub fn new(text: impl Into<String>, fg: Rgb) -> Self {
        Self {
            text: text.into(),
            fg,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw `lines` from the top of the screen, blanking everything below.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        for y in 0..height {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            match lines.get(y as usize) {
                Some(line) => {
                    let attribute = if line.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(
                        self.stdout,
                        SetAttribute(attribute),
                        SetForegroundColor(CtColor::Rgb {
                            r: line.fg.r,
                            g: line.fg.g,
                            b: line.fg.b,
                        }),
                        Print(pad_to_width(
                            &clip_to_width(&line.text, width as usize),
                            width as usize
                        ))
                    )?;
                }
                None => {
                    queue!(self.stdout, terminal::Clear(terminal::ClearType::CurrentLine))?;
                }
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
