//! Filesystem collaborators
//!
//! Source discovery, encoding preserving file I/O, and backup handling.
//! Everything here is synchronous; files are touched one at a time in the
//! order discovery produced them.

pub mod backup;
pub mod discovery;
pub mod file_text;

pub use backup::{clean_backups, create_backup};
pub use discovery::enumerate_cs_files;
pub use file_text::{FileEncoding, FileText, read_text, write_text};
