pub mod commands;

pub use commands::{MenuChoice, Outcome};
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use log::debug;

use crate::storage::{FileStore, RecordStore};

/// File used when no `--file` is given
pub const DEFAULT_STORE_FILE: &str = "studentRec.txt";

/// One interactive session over a record store
pub struct Session<S, R, W> {
    store: S,
    input: R,
    output: W,
}

impl<S, R, W> Session<S, R, W>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output)?;
        writeln!(self.output, "Menu")?;
        writeln!(self.output, "1. Add student")?;
        writeln!(self.output, "2. View Record")?;
        writeln!(self.output, "3. Search by Roll")?;
        writeln!(self.output, "4. Update Name")?;
        writeln!(self.output, "5. Remove student")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output)?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    /// Reads one line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Prints `message` on its own line and reads the answer
    fn ask(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Shows the menu and dispatches choices until exit or end of input.
    ///
    /// Validation and store failures are reported and the loop carries on; only console I/O
    /// failures end the session with an error.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            self.display_menu()?;

            let Some(input) = self.read_line()? else {
                debug!("input closed, ending session");
                return Ok(());
            };

            let result: Result<MenuChoice, _> = input.trim().try_into();
            let choice = match result {
                Ok(choice) => choice,
                Err(msg) => {
                    writeln!(self.output, "{msg}")?;
                    continue;
                }
            };

            debug!("dispatching {choice:?}");
            match choice.execute(self) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit) => return Ok(()),
                Err(e) if e.is::<io::Error>() => return Err(e),
                Err(e) => writeln!(self.output, "error: {e}")?,
            }
        }
    }
}

/// Starts a record manager session on stdin/stdout
pub fn start_repl(path: PathBuf) -> Result<(), Box<dyn Error>> {
    debug!("using record file {}", path.display());

    let stdin = io::stdin();
    let mut session = Session::new(FileStore::new(path), stdin.lock(), io::stdout());
    session.run()
}
