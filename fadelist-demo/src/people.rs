use fadelist::{ItemRenderer, Tap, renderer};

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

pub fn roster() -> Vec<Person> {
    vec![
        Person::new("Ella", 3),
        Person::new("James", 25),
        Person::new("Gertrude", 99),
    ]
}

/// What one person looks like before animation and cursor styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub selected: bool,
    pub tap: Option<Tap>,
}

pub fn row_renderer() -> ItemRenderer<Person, Row> {
    renderer(|person: &Person, selected: bool, tap: Option<Tap>| {
        let mark = if selected { "[x]" } else { "[ ]" };
        Row {
            label: format!("{} {} ({})", mark, person.name, person.age),
            selected,
            tap,
        }
    })
}
