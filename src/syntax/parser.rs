//! C# parser wrapper around tree-sitter-c-sharp

use tree_sitter::{Parser, Tree};

use crate::error::{NormalizerError, NormalizerResult};

/// C# parser wrapper owning the tree-sitter parser state.
pub struct CsParser {
    parser: Parser,
}

impl CsParser {
    /// Create a new C# parser.
    pub fn new() -> NormalizerResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|e| NormalizerError::TreeSitterLanguage {
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse C# content and return the syntax tree.
    pub fn parse(&mut self, content: &str) -> Option<Tree> {
        self.parser.parse(content, None)
    }
}
