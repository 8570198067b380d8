//! # marina-storage: Flat-file persistence for the marina boat registry
//!
//! Boats are stored one per line in a comma-delimited text file:
//!
//! ```text
//! name,length,kind,payload,amount_owed
//! Alice,40,slip,12,0.00
//! Bob,20,land,C,125.50
//! ```
//!
//! - [`codec`] turns a single line into a [`Boat`](marina_types::Boat) and back.
//! - [`file`] reads and writes whole files, reporting lines it had to skip.
//!
//! The format has no header and no escaping. A name containing a comma
//! cannot be stored.

pub mod codec;
mod error;
pub mod file;

pub use codec::{
    DELIMITER, DecodeError, Field, decode_line, encode_line, parse_lenient_f64, parse_lenient_i32,
};
pub use error::StorageError;
pub use file::{ReadOutcome, SkippedLine, load_file, read_records, save_file, write_records};
