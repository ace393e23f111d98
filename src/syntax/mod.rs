//! C# syntax layer
//!
//! Parses C# sources with tree-sitter and lifts the parts the checks care
//! about into plain data: declarations, their parameter lists, and the XML
//! doc comment blocks with exact byte spans.

pub mod declaration;
pub mod doc_comment;
pub mod parser;
pub mod position;

pub use declaration::{
    Declaration, DeclarationKind, Param, SourceFileModel, extract_file_model,
};
pub use doc_comment::{DocComment, DocDefect, DocStyle, DocTag};
pub use parser::CsParser;
