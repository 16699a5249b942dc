use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use fadelist::{
    Easing, Equivalence, ListAnimator, RenderedItem, SelectableList, Tap, TransitionConfig,
    ValueSelector,
};

use crate::color::{Rgb, lerp};
use crate::event::Action;
use crate::people::{Person, Row, roster, row_renderer};
use crate::terminal::Line;
use crate::text::{clip_to_width, display_width};

/// Screen row of the first list item.
pub const LIST_TOP: u16 = 3;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const TITLE: Rgb = Rgb::new(200, 210, 255);
const HINT: Rgb = Rgb::new(130, 130, 150);
const ITEM: Rgb = Rgb::new(220, 220, 220);
const SELECTED: Rgb = Rgb::new(120, 220, 140);
const STATUS_ERROR: Rgb = Rgb::new(240, 110, 100);

type PeopleList = SelectableList<Person, String, Row, ListAnimator<Row>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    list: PeopleList,
    /// Position among the tappable rows.
    cursor: usize,
    status: Rc<RefCell<String>>,
    error: bool,
}

impl App {
    pub fn new(transition: TransitionConfig) -> Self {
        let status = Rc::new(RefCell::new(String::from("Nobody selected")));
        let on_selected = Rc::clone(&status);
        let on_deselected = Rc::clone(&status);

        let list = SelectableList::builder(roster(), Equivalence::by_eq(), row_renderer())
            .value_selector(ValueSelector::custom(|p: &Person| p.name.clone()))
            .transition(transition)
            .on_selected(move |p| {
                log::info!("selected {}", p.name);
                *on_selected.borrow_mut() = format!("Selected {}", p.name);
            })
            .on_deselected(move |p| {
                log::info!("deselected {}", p.name);
                *on_deselected.borrow_mut() = format!("Deselected {}", p.name);
            })
            .build(ListAnimator::new());

        Self {
            list,
            cursor: 0,
            status,
            error: false,
        }
    }

    pub fn with_default_transition() -> Self {
        Self::new(TransitionConfig::new(
            Duration::from_millis(200),
            Easing::EaseInOut,
        ))
    }

    pub fn is_animating(&self) -> bool {
        self.list.has_active_transitions()
    }

    pub fn tick(&mut self, now: Instant) {
        self.list.advance(now);
    }

    pub fn displayed(&self) -> Vec<&str> {
        self.list.displayed().iter().map(|p| p.name.as_str()).collect()
    }

    /// Visible rows at `now` (fully faded ones dropped).
    fn rows(&self, now: Instant) -> Vec<RenderedItem<Row>> {
        self.list
            .render(now)
            .into_iter()
            .filter(|item| item.visibility > 0.0)
            .collect()
    }

    fn taps(&self, now: Instant) -> Vec<Tap> {
        self.rows(now).iter().filter_map(|item| item.tap).collect()
    }

    pub fn handle(&mut self, action: Action, now: Instant) -> Control {
        match action {
            Action::Quit => return Control::Quit,
            Action::Up => self.cursor = self.cursor.saturating_sub(1),
            Action::Down => {
                let count = self.taps(now).len();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            Action::Activate => {
                if let Some(tap) = self.taps(now).get(self.cursor).copied() {
                    self.tap(tap);
                }
            }
            Action::Click { y } => {
                let row = y.checked_sub(LIST_TOP).map(usize::from);
                let tap = row.and_then(|row| self.rows(now).get(row).and_then(|item| item.tap));
                if let Some(tap) = tap {
                    self.tap(tap);
                }
            }
            Action::ToggleReducedMotion => {
                let enabled = !self.list.view().reduced_motion();
                self.list.set_reduced_motion(enabled);
                log::debug!("reduced motion {}", enabled);
            }
        }
        Control::Continue
    }

    fn tap(&mut self, tap: Tap) {
        match self.list.handle_tap(tap) {
            Ok(outcome) => {
                log::debug!("tap {:?}: {:?}, showing {:?}", tap, outcome, self.displayed());
                self.error = false;
            }
            Err(err) => {
                log::error!("{}", err);
                *self.status.borrow_mut() = err.to_string();
                self.error = true;
            }
        }
        self.cursor = 0;
    }

    pub fn lines(&self, now: Instant) -> Vec<Line> {
        let mut lines = vec![
            Line::new("People", TITLE).bold(),
            Line::new(
                "Up/Down move, Enter or click toggles, r reduced motion, q quits",
                HINT,
            ),
            Line::new("", HINT),
        ];

        let mut tappable = 0;
        for item in self.rows(now) {
            let row = &item.visual;
            let focused = item.tap.is_some() && tappable == self.cursor;
            if item.tap.is_some() {
                tappable += 1;
            }

            let prefix = if focused { "> " } else { "  " };
            let full = format!("{}{}", prefix, row.label);
            let width = (display_width(&full) as f32 * item.visibility).ceil() as usize;
            let target = if row.selected { SELECTED } else { ITEM };
            let mut line = Line::new(
                clip_to_width(&full, width),
                lerp(BACKGROUND, target, item.visibility),
            );
            if row.selected {
                line = line.bold();
            }
            lines.push(line);
        }

        lines.push(Line::new("", HINT));
        let status_color = if self.error { STATUS_ERROR } else { HINT };
        lines.push(Line::new(self.status.borrow().clone(), status_color));
        lines
    }
}
