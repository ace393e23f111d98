use crate::syntax::doc_comment::{
    DocComment, DocStyle, collect_doc_blocks, doc_block_for_node, normalize_whitespace,
    strip_doc_exterior,
};
use crate::syntax::parser::CsParser;
use tree_sitter::Node;

fn blocks_for(source: &str) -> Vec<DocComment> {
    let mut parser = CsParser::new().unwrap();
    let tree = parser.parse(source).unwrap();
    collect_doc_blocks(tree.root_node(), source)
}

fn find_node_by_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    if node.kind() == kind {
        return Some(node);
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if let Some(found) = find_node_by_kind(child, kind) {
                return Some(found);
            }
        }
    }
    None
}

fn attached_doc(source: &str, declaration_kind: &str) -> Option<DocComment> {
    let mut parser = CsParser::new().unwrap();
    let tree = parser.parse(source).unwrap();
    let node = find_node_by_kind(tree.root_node(), declaration_kind)
        .expect("declaration node should exist");
    doc_block_for_node(node, source)
}

#[test]
fn test_scans_simple_summary_element() {
    let source = "/// <summary>Does things.</summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    assert_eq!(blocks.len(), 1);

    let block = &blocks[0];
    assert_eq!(block.style, DocStyle::TripleSlash);
    assert!(block.defects.is_empty());
    assert_eq!(block.tags.len(), 1);

    let summary = &block.tags[0];
    assert_eq!(summary.name, "summary");
    assert!(!summary.self_closing);
    assert_eq!(summary.inner_text(source), Some("Does things."));
    assert_eq!(&source[summary.span.clone()], "<summary>Does things.</summary>");
    assert_eq!((summary.line, summary.column), (1, 5));
}

#[test]
fn test_scans_attributes() {
    let source = "/// <param name=\"count\">How many.</param>\nclass C {}\n";
    let blocks = blocks_for(source);
    let param = &blocks[0].tags[0];
    assert_eq!(param.name, "param");
    assert_eq!(param.attribute("name"), Some("count"));
    assert_eq!(param.attribute("missing"), None);
}

#[test]
fn test_single_quoted_attribute_values() {
    let source = "/// <param name='count'>How many.</param>\nclass C {}\n";
    let blocks = blocks_for(source);
    assert!(blocks[0].defects.is_empty());
    assert_eq!(blocks[0].tags[0].attribute("name"), Some("count"));
}

#[test]
fn test_self_closing_tag_and_nesting() {
    let source = "/// <summary>See <see cref=\"T:Foo\"/> for details.</summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(block.defects.is_empty());
    assert_eq!(block.tags.len(), 2);

    let summary = &block.tags[0];
    let see = &block.tags[1];
    assert_eq!(see.name, "see");
    assert!(see.self_closing);
    assert!(see.inner.is_none());
    assert_eq!(see.attribute("cref"), Some("T:Foo"));
    assert!(block.has_nested_tags(summary));
    assert!(!block.has_nested_tags(see));

    assert_eq!(block.top_level_tags(), vec![0]);
    assert_eq!(block.child_tags(0), vec![1]);
}

#[test]
fn test_element_spanning_multiple_comment_lines() {
    let source = "/// <summary>\n/// Text here.\n/// </summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(block.defects.is_empty());
    assert_eq!(block.tags.len(), 1);

    let summary = &block.tags[0];
    let inner = summary.inner_text(source).unwrap();
    assert!(inner.contains("Text here."));
    assert!(inner.contains("///"));
    assert_eq!(strip_doc_exterior(inner).trim(), "Text here.");
    assert!(block.has_meaningful_content(summary, source));
}

#[test]
fn test_empty_element_has_no_meaningful_content() {
    let source = "/// <summary></summary>\n/// <remarks>   </remarks>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert_eq!(block.tags.len(), 2);
    assert!(!block.has_meaningful_content(&block.tags[0], source));
    assert!(!block.has_meaningful_content(&block.tags[1], source));
}

#[test]
fn test_nested_tag_counts_as_meaningful_content() {
    let source = "/// <summary><see langword=\"null\"/></summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(block.has_meaningful_content(&block.tags[0], source));
}

#[test]
fn test_unclosed_tag_is_a_defect() {
    let source = "/// <summary>Oops\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert_eq!(block.defects.len(), 1);
    assert_eq!(block.defects[0].message, "unclosed tag <summary>");
    assert_eq!(block.tags.len(), 1);
    assert!(block.tags[0].inner.is_none());
}

#[test]
fn test_stray_closing_tag_is_a_defect() {
    let source = "/// Oops</summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert_eq!(block.defects.len(), 1);
    assert!(
        block.defects[0]
            .message
            .contains("without matching opening tag")
    );
}

#[test]
fn test_mismatched_close_recovers_and_reports_inner_tag() {
    // <code> never closes; </summary> still matches its opening tag
    let source = "/// <summary>x <code>y</summary>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert_eq!(block.defects.len(), 1);
    assert_eq!(block.defects[0].message, "unclosed tag <code>");

    let summary = &block.tags[0];
    assert_eq!(summary.name, "summary");
    assert!(summary.inner.is_some());
}

#[test]
fn test_bare_angle_bracket_is_plain_text() {
    let source = "/// Compares a < b and 1<2 here.\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(block.tags.is_empty());
    assert!(block.defects.is_empty());
}

#[test]
fn test_unquoted_attribute_value_is_a_defect() {
    let source = "/// <param name=count>x</param>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(
        block
            .defects
            .iter()
            .any(|d| d.message.contains("unquoted value"))
    );
}

#[test]
fn test_param_without_name_attribute_is_a_defect() {
    let source = "/// <param>No name.</param>\nclass C { void M(int a) {} }\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert_eq!(block.defects.len(), 1);
    assert_eq!(block.defects[0].message, "tag <param> has no name attribute");
}

#[test]
fn test_typeparam_with_blank_name_is_a_defect() {
    let source = "/// <typeparam name=\"  \">x</typeparam>\nclass C {}\n";
    let blocks = blocks_for(source);
    assert_eq!(blocks[0].defects.len(), 1);
    assert_eq!(
        blocks[0].defects[0].message,
        "tag <typeparam> has no name attribute"
    );
}

#[test]
fn test_tag_with_attribute_split_across_lines() {
    let source = "/// <param\n///     name=\"count\">x</param>\nclass C {}\n";
    let blocks = blocks_for(source);
    let block = &blocks[0];
    assert!(block.defects.is_empty());
    assert_eq!(block.tags[0].attribute("name"), Some("count"));
}

#[test]
fn test_multi_line_doc_comment_block() {
    let source = "/** <summary>Hi</summary> */\nclass C {}\n";
    let doc = attached_doc(source, "class_declaration").unwrap();
    assert_eq!(doc.style, DocStyle::MultiLine);
    assert_eq!(doc.tags.len(), 1);
    assert_eq!(doc.tags[0].name, "summary");
}

#[test]
fn test_attached_block_is_closest_run() {
    let source = "/// <summary>First.</summary>\n\n/// <summary>Second.</summary>\nclass C {}\n";
    let doc = attached_doc(source, "class_declaration").unwrap();
    assert_eq!(doc.tags.len(), 1);
    assert_eq!(doc.tags[0].inner_text(source), Some("Second."));

    // both runs are still visible to the rewriter
    assert_eq!(blocks_for(source).len(), 2);
}

#[test]
fn test_regular_comment_stops_attachment() {
    let source = "/// <summary>Doc.</summary>\n// not a doc comment\nclass C {}\n";
    let doc = attached_doc(source, "class_declaration");
    assert!(doc.is_none());
}

#[test]
fn test_no_comment_means_no_doc() {
    let source = "class C {}\n";
    let doc = attached_doc(source, "class_declaration");
    assert!(doc.is_none());
}

#[test]
fn test_tags_are_in_document_order() {
    let source =
        "/// <summary>S</summary>\n/// <param name=\"a\">A</param>\n/// <returns>R</returns>\nclass C { void M(int a) {} }\n";
    let blocks = blocks_for(source);
    let names: Vec<&str> = blocks[0].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["summary", "param", "returns"]);
}

#[test]
fn test_strip_doc_exterior_keeps_unmarked_lines() {
    let stripped = strip_doc_exterior("first\n///   second\n/// third");
    assert_eq!(stripped, "first\n  second\nthird");
}

#[test]
fn test_strip_doc_exterior_handles_block_comment_stars() {
    let stripped = strip_doc_exterior(" * first\n * second");
    assert_eq!(stripped, "first\nsecond");
}

#[test]
fn test_normalize_whitespace_collapses_runs() {
    assert_eq!(normalize_whitespace("  a \t b\n c  "), "a b c");
    assert_eq!(normalize_whitespace("single"), "single");
    assert_eq!(normalize_whitespace("   "), "");
}
