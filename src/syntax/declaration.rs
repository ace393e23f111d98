//! Declaration extraction from parsed C# trees
//!
//! Walks the tree-sitter tree and lifts every declaration the checks care
//! about into plain data: kind, name, parameter and type parameter lists,
//! and the attached doc comment block.

use std::fmt;
use std::ops::Range;

use tree_sitter::{Node, Tree};

use crate::syntax::doc_comment::{DocComment, collect_doc_blocks, doc_block_for_node};
use crate::syntax::position::byte_to_line_col;

/// Kinds of C# declaration the checks know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Struct,
    Interface,
    Record,
    Enum,
    EnumMember,
    Method,
    Constructor,
    Property,
    Indexer,
    Field,
    Event,
    Delegate,
    Operator,
    ConversionOperator,
}

impl DeclarationKind {
    /// Display name used in finding messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Record => "record",
            DeclarationKind::Enum => "enum",
            DeclarationKind::EnumMember => "enum member",
            DeclarationKind::Method => "method",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::Property => "property",
            DeclarationKind::Indexer => "indexer",
            DeclarationKind::Field => "field",
            DeclarationKind::Event => "event",
            DeclarationKind::Delegate => "delegate",
            DeclarationKind::Operator => "operator",
            DeclarationKind::ConversionOperator => "conversion operator",
        }
    }

    /// True for kinds whose bodies nest further declarations.
    fn is_type(&self) -> bool {
        matches!(
            self,
            DeclarationKind::Class
                | DeclarationKind::Struct
                | DeclarationKind::Interface
                | DeclarationKind::Record
                | DeclarationKind::Enum
        )
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A named parameter or type parameter on a declaration.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    /// 1-based position of the parameter name, used to anchor findings.
    pub line: u32,
    pub column: u32,
    /// Byte span of the parameter syntax, used for finding snippets.
    pub span: Range<usize>,
}

/// One C# declaration with its attached doc comment.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    /// True for declarations at namespace or file level.
    pub is_top_level: bool,
    pub parameters: Vec<Param>,
    pub type_parameters: Vec<Param>,
    pub doc: Option<DocComment>,
    /// 1-based position of the declaration start.
    pub line: u32,
    pub column: u32,
}

/// Everything the checks and the rewriter need from one parsed file.
#[derive(Debug, Clone)]
pub struct SourceFileModel {
    /// Declarations in document order.
    pub declarations: Vec<Declaration>,
    /// Every doc comment block in the file, attached to a declaration
    /// or not.
    pub doc_blocks: Vec<DocComment>,
}

impl SourceFileModel {
    /// True when any doc comment block in the file failed to scan cleanly.
    pub fn has_malformed_docs(&self) -> bool {
        self.doc_blocks.iter().any(|block| !block.defects.is_empty())
    }
}

/// Extracts the declaration and doc comment model from a parsed file.
pub fn extract_file_model(tree: &Tree, source: &str) -> SourceFileModel {
    let mut declarations = Vec::new();
    collect_declarations(tree.root_node(), source, 0, &mut declarations);
    let doc_blocks = collect_doc_blocks(tree.root_node(), source);

    SourceFileModel {
        declarations,
        doc_blocks,
    }
}

fn declaration_kind(node: &Node) -> Option<DeclarationKind> {
    match node.kind() {
        "class_declaration" => Some(DeclarationKind::Class),
        "struct_declaration" => Some(DeclarationKind::Struct),
        "interface_declaration" => Some(DeclarationKind::Interface),
        "record_declaration" | "record_struct_declaration" => Some(DeclarationKind::Record),
        "enum_declaration" => Some(DeclarationKind::Enum),
        "enum_member_declaration" => Some(DeclarationKind::EnumMember),
        "method_declaration" => Some(DeclarationKind::Method),
        "constructor_declaration" => Some(DeclarationKind::Constructor),
        "property_declaration" => Some(DeclarationKind::Property),
        "indexer_declaration" => Some(DeclarationKind::Indexer),
        "field_declaration" => Some(DeclarationKind::Field),
        "event_declaration" | "event_field_declaration" => Some(DeclarationKind::Event),
        "delegate_declaration" => Some(DeclarationKind::Delegate),
        "operator_declaration" => Some(DeclarationKind::Operator),
        "conversion_operator_declaration" => Some(DeclarationKind::ConversionOperator),
        _ => None,
    }
}

fn collect_declarations(node: Node, source: &str, type_depth: usize, out: &mut Vec<Declaration>) {
    let kind = declaration_kind(&node);

    if let Some(kind) = kind {
        out.push(build_declaration(node, source, kind, type_depth));
    }

    let child_depth = match kind {
        Some(kind) if kind.is_type() => type_depth + 1,
        _ => type_depth,
    };
    for child in node.children(&mut node.walk()) {
        collect_declarations(child, source, child_depth, out);
    }
}

fn build_declaration(
    node: Node,
    source: &str,
    kind: DeclarationKind,
    type_depth: usize,
) -> Declaration {
    let (line, column) = byte_to_line_col(node.start_byte(), source);

    let parameters = match kind {
        DeclarationKind::Method
        | DeclarationKind::Constructor
        | DeclarationKind::Delegate
        | DeclarationKind::Operator => explicit_parameters(node, source),
        // documented through the conventional names rather than the
        // signature identifiers
        DeclarationKind::Indexer => implicit_parameter(node, source, "index"),
        DeclarationKind::ConversionOperator => implicit_parameter(node, source, "value"),
        _ => Vec::new(),
    };

    Declaration {
        kind,
        name: declaration_name(node, source, kind),
        is_top_level: type_depth == 0,
        parameters,
        type_parameters: type_parameters(node, source),
        doc: doc_block_for_node(node, source),
        line,
        column,
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

fn declaration_name(node: Node, source: &str, kind: DeclarationKind) -> String {
    match kind {
        DeclarationKind::Indexer => "this[]".to_string(),
        DeclarationKind::Operator => operator_name(node, source),
        DeclarationKind::ConversionOperator => conversion_operator_name(node, source),
        DeclarationKind::Field => {
            field_name(node, source).unwrap_or_else(|| named_or_identifier(node, source))
        }
        DeclarationKind::Event if node.kind() == "event_field_declaration" => {
            field_name(node, source).unwrap_or_else(|| named_or_identifier(node, source))
        }
        _ => named_or_identifier(node, source),
    }
}

fn named_or_identifier(node: Node, source: &str) -> String {
    if let Some(name_node) = node.child_by_field_name("name") {
        return node_text(name_node, source).to_string();
    }

    // Fallback: first identifier child
    for child in node.children(&mut node.walk()) {
        if child.kind() == "identifier" {
            return node_text(child, source).to_string();
        }
    }

    format!("<{}_at_{}>", node.kind(), node.start_position().row)
}

/// For field declarations the name lives on the variable declarator:
/// variable_declaration -> variable_declarator -> identifier.
fn field_name(node: Node, source: &str) -> Option<String> {
    for child in node.children(&mut node.walk()) {
        if child.kind() == "variable_declaration" {
            for var_child in child.children(&mut child.walk()) {
                if var_child.kind() == "variable_declarator" {
                    for declarator_child in var_child.children(&mut var_child.walk()) {
                        if declarator_child.kind() == "identifier" {
                            return Some(node_text(declarator_child, source).to_string());
                        }
                    }
                }
            }
        }
    }
    None
}

/// Name for `operator` declarations: the token(s) between the `operator`
/// keyword and the parameter list, e.g. "operator +".
fn operator_name(node: Node, source: &str) -> String {
    let keyword_end = node
        .children(&mut node.walk())
        .find(|child| child.kind() == "operator")
        .map(|child| child.end_byte());
    let params_start = node
        .child_by_field_name("parameters")
        .map(|params| params.start_byte());

    match (keyword_end, params_start) {
        (Some(end), Some(start)) if end <= start => {
            format!("operator {}", source[end..start].trim())
        }
        _ => "operator".to_string(),
    }
}

/// Name for conversion operators, e.g. "implicit operator int".
fn conversion_operator_name(node: Node, source: &str) -> String {
    let direction = node
        .children(&mut node.walk())
        .find(|child| matches!(child.kind(), "implicit" | "explicit"))
        .map(|child| node_text(child, source).to_string());
    let target = node
        .child_by_field_name("type")
        .map(|type_node| node_text(type_node, source).to_string());

    match (direction, target) {
        (Some(direction), Some(target)) => format!("{direction} operator {target}"),
        (None, Some(target)) => format!("operator {target}"),
        _ => "conversion operator".to_string(),
    }
}

fn explicit_parameters(node: Node, source: &str) -> Vec<Param> {
    let mut parameters = Vec::new();
    let Some(params_node) = node.child_by_field_name("parameters") else {
        return parameters;
    };

    for child in params_node.children(&mut params_node.walk()) {
        if child.kind() != "parameter" {
            continue;
        }
        let name_node = child.child_by_field_name("name").or_else(|| {
            child
                .children(&mut child.walk())
                .find(|c| c.kind() == "identifier")
        });
        let Some(name_node) = name_node else {
            continue;
        };
        let (line, column) = byte_to_line_col(name_node.start_byte(), source);
        parameters.push(Param {
            name: node_text(name_node, source).to_string(),
            line,
            column,
            span: child.start_byte()..child.end_byte(),
        });
    }

    parameters
}

/// Indexers and conversion operators carry one conventional parameter
/// name; the finding anchors at the parameter list.
fn implicit_parameter(node: Node, source: &str, name: &str) -> Vec<Param> {
    let anchor = node.child_by_field_name("parameters").unwrap_or(node);
    let (line, column) = byte_to_line_col(anchor.start_byte(), source);
    vec![Param {
        name: name.to_string(),
        line,
        column,
        span: anchor.start_byte()..anchor.end_byte(),
    }]
}

fn type_parameters(node: Node, source: &str) -> Vec<Param> {
    let mut type_parameters = Vec::new();
    let Some(list) = node.child_by_field_name("type_parameters") else {
        return type_parameters;
    };

    for child in list.children(&mut list.walk()) {
        if child.kind() != "type_parameter" {
            continue;
        }
        let name_node = child.child_by_field_name("name").or_else(|| {
            child
                .children(&mut child.walk())
                .find(|c| c.kind() == "identifier")
        });
        let Some(name_node) = name_node else {
            continue;
        };
        let (line, column) = byte_to_line_col(name_node.start_byte(), source);
        type_parameters.push(Param {
            name: node_text(name_node, source).to_string(),
            line,
            column,
            span: child.start_byte()..child.end_byte(),
        });
    }

    type_parameters
}

#[cfg(test)]
#[path = "declaration_tests.rs"]
mod tests;
