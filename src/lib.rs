mod repl;
mod storage;

pub use repl::*;
pub use storage::{
    validation, FileStore, RecordLine, RecordLines, RecordStore, StoreError, Student,
    ValidationError,
};
