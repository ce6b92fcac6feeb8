// Input loading: the categories table and the keyword co-occurrence records.
//
// Both inputs are read once before the pipeline runs. Anything that doesn't
// have the expected shape is rejected here with a LoadError, so layout and
// pairing only ever see validated records.

pub mod categories;
pub mod error;
pub mod records;

pub use categories::{load_categories, read_categories, CategoryRecord};
pub use error::LoadError;
pub use records::{load_records, read_records, CoOccurrenceRecord};
