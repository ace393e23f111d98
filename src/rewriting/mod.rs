//! Doc comment rewriting
//!
//! Rewrites are expressed as byte-span edits over the original text and
//! spliced back to front, so every byte outside an edited span survives
//! verbatim. Running the rewriter on its own output produces no further
//! edits.

pub mod literal_refactorer;

pub use literal_refactorer::{Edit, apply_edits, normalize_edits, rewrite};
