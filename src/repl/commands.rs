use std::{
    error::Error,
    io::{BufRead, Write},
};

use crate::storage::{
    validation::{parse_roll, validate_name, validate_roll},
    RecordStore, Student,
};

use super::Session;

type CommandResult = Result<Outcome, Box<dyn Error>>;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Append a new student record
    Add,
    /// Print every stored record
    View,
    /// Look up a student by roll number
    Search,
    /// Rename the student(s) with a given roll number
    UpdateName,
    /// Remove every record containing a given name
    Remove,
    /// Close the current session
    Exit,
}

/// What the session should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::View),
            "3" => Ok(Self::Search),
            "4" => Ok(Self::UpdateName),
            "5" => Ok(Self::Remove),
            "6" => Ok(Self::Exit),
            _ => Err("Invalid choice".to_string()),
        }
    }
}

impl MenuChoice {
    pub fn execute<S, R, W>(&self, session: &mut Session<S, R, W>) -> CommandResult
    where
        S: RecordStore,
        R: BufRead,
        W: Write,
    {
        match self {
            Self::Add => session.add_student(),
            Self::View => session.view_records(),
            Self::Search => session.search(),
            Self::UpdateName => session.update_name(),
            Self::Remove => session.remove_student(),
            Self::Exit => Ok(Outcome::Exit),
        }
    }
}

/// First whitespace separated word of an answer, or `""` when there is none
fn first_word(answer: &str) -> &str {
    answer.split_whitespace().next().unwrap_or_default()
}

impl<S, R, W> Session<S, R, W>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    fn add_student(&mut self) -> CommandResult {
        let Some(name) = self.ask("Enter your full name: ")? else {
            return Ok(Outcome::Exit);
        };
        let Some(roll) = self.ask("Enter your roll number: ")? else {
            return Ok(Outcome::Exit);
        };

        let name = validate_name(&name)?;
        let roll = validate_roll(parse_roll(&roll)?)?;
        self.store.append(&Student::new(name, roll))?;

        writeln!(self.output, "Successfully written")?;
        Ok(Outcome::Continue)
    }

    fn view_records(&mut self) -> CommandResult {
        writeln!(self.output, "Student Name: {:>22}", "Roll number: ")?;
        for line in self.store.read_all()? {
            writeln!(self.output, "{}", line?)?;
        }

        Ok(Outcome::Continue)
    }

    fn search(&mut self) -> CommandResult {
        let Some(roll) = self.ask("Enter the roll number to search: ")? else {
            return Ok(Outcome::Exit);
        };
        let roll = parse_roll(&roll)?;

        match self.store.find_by_roll(roll)? {
            Some(student) => writeln!(self.output, "{}", student.name())?,
            None => writeln!(self.output, "Student with roll number {roll} not found.")?,
        }

        Ok(Outcome::Continue)
    }

    fn update_name(&mut self) -> CommandResult {
        let Some(roll) = self.ask("Enter the roll number to update the name: ")? else {
            return Ok(Outcome::Exit);
        };
        let roll = parse_roll(&roll)?;

        let Some(first) = self.ask("Enter new first name: ")? else {
            return Ok(Outcome::Exit);
        };
        let Some(last) = self.ask("Enter new last name: ")? else {
            return Ok(Outcome::Exit);
        };

        let first = validate_name(first_word(&first))?;
        let last = validate_name(first_word(&last))?;
        self.store.update_name(roll, first, last)?;

        writeln!(self.output, "Successfully updated")?;
        Ok(Outcome::Continue)
    }

    fn remove_student(&mut self) -> CommandResult {
        let Some(name) = self.ask("Enter the name of the student to remove: ")? else {
            return Ok(Outcome::Exit);
        };

        // an empty pattern would match every line
        let name = validate_name(first_word(&name))?;
        self.store.remove_by_name(name)?;

        writeln!(self.output, "Student removed")?;
        Ok(Outcome::Continue)
    }
}
