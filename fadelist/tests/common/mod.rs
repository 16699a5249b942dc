#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fadelist::{renderer, AnimatedView, ItemRenderer, RemovedItemBuilder, Tap, TransitionConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Ella", 3),
        Person::new("James", 25),
        Person::new("Gertrude", 99),
    ]
}

pub fn names(items: &[Person]) -> Vec<&str> {
    items.iter().map(|p| p.name.as_str()).collect()
}

/// Renders "Name", "Name*" when selected, "Name (inert)" without a tap handle.
pub fn person_renderer() -> ItemRenderer<Person, String> {
    renderer(|person: &Person, selected: bool, tap: Option<Tap>| {
        let mut out = person.name.clone();
        if selected {
            out.push('*');
        }
        if tap.is_none() {
            out.push_str(" (inert)");
        }
        out
    })
}

/// One call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    Initial(usize),
    Insert {
        index: usize,
        duration: Duration,
    },
    Remove {
        index: usize,
        duration: Duration,
        visual: String,
    },
}

/// View handle that records every call, shared so tests can read it after
/// handing the view to a list.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub ops: Rc<RefCell<Vec<ViewOp>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<ViewOp> {
        self.ops.borrow().clone()
    }
}

impl AnimatedView<String> for RecordingView {
    fn initial_item_count(&mut self, count: usize) {
        self.ops.borrow_mut().push(ViewOp::Initial(count));
    }

    fn insert_item(&mut self, index: usize, transition: TransitionConfig) {
        self.ops.borrow_mut().push(ViewOp::Insert {
            index,
            duration: transition.duration,
        });
    }

    fn remove_item(
        &mut self,
        index: usize,
        transition: TransitionConfig,
        removed: RemovedItemBuilder<String>,
    ) {
        self.ops.borrow_mut().push(ViewOp::Remove {
            index,
            duration: transition.duration,
            visual: removed(),
        });
    }
}
