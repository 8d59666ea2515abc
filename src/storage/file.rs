use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use super::{
    error::StoreError,
    record::{RecordLine, Student},
    RecordStore, Result,
};

fn open_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads one raw line, terminator included; `None` at end of file.
///
/// Store files carry no declared encoding, so lines are kept as bytes.
fn read_raw_line(reader: &mut impl BufRead) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    Ok(Some(buf))
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Text of a raw line without its terminator; invalid UTF-8 is replaced, not rejected
fn line_text(raw: &[u8]) -> String {
    String::from_utf8_lossy(strip_terminator(raw)).into_owned()
}

/// Lazy iterator over the lines of a store file.
///
/// Lines are decoded lossily. A read error is yielded once and ends the sequence.
pub struct RecordLines {
    reader: BufReader<File>,
    done: bool,
}

impl Iterator for RecordLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match read_raw_line(&mut self.reader) {
            Ok(Some(raw)) => Some(Ok(line_text(&raw))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}

/// What a rewrite does with one line
enum Rewrite {
    /// Copy the original bytes through
    Keep,
    /// Write this text in place of the line
    Replace(String),
    Drop,
}

/// Record store backed by a plain text file, one `<name> <roll>` record per line.
///
/// The file is created on first append. Updates and removals rewrite the whole file into
/// `<path>.tmp` and rename it over the original.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".tmp");
        path.into()
    }

    fn open_reader(&self) -> Result<BufReader<File>> {
        let file = File::open(&self.path).map_err(open_error(&self.path))?;
        Ok(BufReader::new(file))
    }

    /// Streams every line through `transform` into the temporary file, then swaps it in.
    ///
    /// `transform` sees the decoded text of each line. The original file is left untouched
    /// unless every line was written.
    fn rewrite<F>(&self, transform: F) -> Result<()>
    where
        F: FnMut(&str) -> Rewrite,
    {
        let reader = self.open_reader()?;
        let temp_path = self.temp_path();
        let temp = File::create(&temp_path).map_err(open_error(&temp_path))?;

        let result = write_lines(reader, BufWriter::new(temp), transform)
            .and_then(|_| fs::rename(&temp_path, &self.path).map_err(StoreError::from));

        if result.is_err() {
            if let Err(e) = fs::remove_file(&temp_path) {
                warn!("failed to clean up {}; {e}", temp_path.display());
            }
        }

        result
    }
}

fn write_lines<F>(
    mut reader: BufReader<File>,
    mut out: BufWriter<File>,
    mut transform: F,
) -> Result<()>
where
    F: FnMut(&str) -> Rewrite,
{
    while let Some(raw) = read_raw_line(&mut reader)? {
        match transform(&line_text(&raw)) {
            Rewrite::Keep => {
                out.write_all(&raw)?;
                // the last line may lack a terminator
                if !raw.ends_with(b"\n") {
                    out.write_all(b"\n")?;
                }
            }
            Rewrite::Replace(line) => writeln!(out, "{line}")?,
            Rewrite::Drop => {}
        }
    }

    out.flush()?;
    out.get_ref().sync_all()?;
    Ok(())
}

impl RecordStore for FileStore {
    type Lines = RecordLines;

    fn append(&mut self, student: &Student) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(open_error(&self.path))?;

        debug!("appending `{student}` to {}", self.path.display());
        writeln!(file, "{student}")?;
        Ok(())
    }

    fn read_all(&self) -> Result<RecordLines> {
        Ok(RecordLines {
            reader: self.open_reader()?,
            done: false,
        })
    }

    fn find_by_roll(&self, roll: i64) -> Result<Option<Student>> {
        for line in self.read_all()? {
            let line = line?;
            let record = RecordLine::parse(&line);
            if record.roll == Some(roll) {
                return Ok(record.to_student());
            }
        }

        debug!("no record with roll {roll} in {}", self.path.display());
        Ok(None)
    }

    fn update_name(&mut self, roll: i64, first: &str, last: &str) -> Result<usize> {
        let mut updated = 0;
        self.rewrite(|line| {
            if RecordLine::parse(line).roll == Some(roll) {
                updated += 1;
                Rewrite::Replace(format!("{first} {last} {roll}"))
            } else {
                Rewrite::Keep
            }
        })?;

        debug!("renamed {updated} record(s) with roll {roll}");
        Ok(updated)
    }

    fn remove_by_name(&mut self, name: &str) -> Result<usize> {
        let mut removed = 0;
        self.rewrite(|line| {
            if line.contains(name) {
                removed += 1;
                Rewrite::Drop
            } else {
                Rewrite::Keep
            }
        })?;

        debug!("removed {removed} record(s) matching `{name}`");
        Ok(removed)
    }
}
