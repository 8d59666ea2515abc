use std::fmt::Display;

/// In-memory representation of one student record.
///
/// Nothing here validates; callers check input with the [validation](super::validation)
/// functions first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    roll: i64,
}

impl Student {
    pub fn new(name: impl Into<String>, roll: i64) -> Self {
        Self {
            name: name.into(),
            roll,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll(&self) -> i64 {
        self.roll
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_roll(&mut self, roll: i64) {
        self.roll = roll;
    }
}

/// External representation of a record: `<name> <roll>`
impl Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.roll)
    }
}

/// A store line split into its `<first> <last> <roll>` fields.
///
/// Fields are whitespace separated and never escaped, so a name of three or more words shifts
/// the roll out of place; such a line simply has no roll and never matches a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub roll: Option<i64>,
}

impl<'a> RecordLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (first, last, roll) = match tokens.as_slice() {
            [] => ("", "", None),
            [first] => (*first, "", None),
            // one-word names carry the roll in the second position
            [first, roll] => (*first, "", Some(*roll)),
            [first, last, roll, ..] => (*first, *last, Some(*roll)),
        };

        Self {
            first,
            last,
            roll: roll.and_then(|r| r.parse().ok()),
        }
    }

    /// `<first> <last>`, without a trailing space for one-word names
    pub fn full_name(&self) -> String {
        if self.last.is_empty() {
            self.first.to_string()
        } else {
            format!("{} {}", self.first, self.last)
        }
    }

    pub fn to_student(&self) -> Option<Student> {
        self.roll.map(|roll| Student::new(self.full_name(), roll))
    }
}
