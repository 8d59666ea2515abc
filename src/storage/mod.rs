pub mod error;
pub mod file;
pub mod record;
pub mod validation;

pub use error::{StoreError, ValidationError};
pub use file::{FileStore, RecordLines};
pub use record::{RecordLine, Student};

type Result<T> = std::result::Result<T, StoreError>;

/// Durable, ordered collection of student records.
///
/// Records are not roll-unique; lookups and updates work by file order.
pub trait RecordStore {
    /// Lazy sequence of record lines; a read error is yielded, never skipped
    type Lines: Iterator<Item = Result<String>>;

    /// Appends a new record
    ///
    /// # Params
    ///
    /// - `student`: Record to persist as `<name> <roll>`.
    fn append(&mut self, student: &Student) -> Result<()>;

    /// Reads every stored line in order
    fn read_all(&self) -> Result<Self::Lines>;

    /// Retrieves the first record with a matching roll number
    ///
    /// # Params
    ///
    /// - `roll`: Roll number to look up.
    fn find_by_roll(&self, roll: i64) -> Result<Option<Student>>;

    /// Replaces the name of every record with a matching roll number.
    ///
    /// Returns the number of records changed; zero is not an error.
    ///
    /// # Params
    ///
    /// - `roll`: Roll number of the records to rename.
    /// - `first`: New first name.
    /// - `last`: New last name.
    fn update_name(&mut self, roll: i64, first: &str, last: &str) -> Result<usize>;

    /// Removes every record whose line contains `name`.
    ///
    /// Returns the number of records removed.
    ///
    /// # Params
    ///
    /// - `name`: Substring matched against the raw line, roll number included.
    fn remove_by_name(&mut self, name: &str) -> Result<usize>;
}
