use crate::rewriting::literal_refactorer::{Edit, apply_edits, rewrite};
use crate::syntax::CsParser;
use crate::syntax::doc_comment::{DocComment, collect_doc_blocks};

fn blocks_for(source: &str) -> Vec<DocComment> {
    let mut parser = CsParser::new().unwrap();
    let tree = parser.parse(source).unwrap();
    collect_doc_blocks(tree.root_node(), source)
}

fn rewritten(source: &str) -> Option<String> {
    rewrite(source, &blocks_for(source))
}

#[test]
fn test_single_token_code_block_is_unwrapped() {
    let source = "/// <summary>\n/// Returns <code>\n/// true\n/// </code> when enabled.\n/// </summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>\n/// Returns true when enabled.\n/// </summary>\nclass C {}\n"
    );
}

#[test]
fn test_multi_token_code_block_is_untouched() {
    let source = "/// <summary>Usage:</summary>\n/// <code>\n/// var x = new Foo();\n/// x.Run();\n/// </code>\nclass C {}\n";
    assert!(rewritten(source).is_none());
}

#[test]
fn test_code_elements_rewrite_independently() {
    let source = "/// <summary>A <code>GameObject</code> handle.</summary>\n/// <remarks>Init with <code>int x = 0;</code></remarks>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>A GameObject handle.</summary>\n/// <remarks>Init with <code>int x = 0;</code></remarks>\nclass C {}\n"
    );
}

#[test]
fn test_single_token_c_element_is_unwrapped() {
    let source = "/// <summary>Finds a <c>GameObject</c> by name.</summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>Finds a GameObject by name.</summary>\nclass C {}\n"
    );
}

#[test]
fn test_multi_token_c_element_loses_only_the_wrapper() {
    let source = "/// <summary>Call <c>Foo.Bar(1, 2)</c> first.</summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>Call Foo.Bar(1, 2) first.</summary>\nclass C {}\n"
    );
}

#[test]
fn test_see_langword_becomes_the_keyword() {
    let source = "/// <summary>Returns <see langword=\"null\"/> on failure.</summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>Returns null on failure.</summary>\nclass C {}\n"
    );
}

#[test]
fn test_empty_literal_elements_are_deleted() {
    // span deletion only; surrounding whitespace is not collapsed
    let source = "/// <summary>Before <code></code> after.</summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>Before  after.</summary>\nclass C {}\n"
    );

    let source = "/// <summary>Before <c>   </c> after.</summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>Before  after.</summary>\nclass C {}\n"
    );
}

#[test]
fn test_see_cref_is_untouched() {
    let source = "/// <summary>See <see cref=\"T:Foo\"/> for details.</summary>\nclass C {}\n";
    assert!(rewritten(source).is_none());
}

#[test]
fn test_plain_docs_are_untouched() {
    let source = "/// <summary>Plain text only.</summary>\nclass C {}\n";
    assert!(rewritten(source).is_none());
}

#[test]
fn test_rewrite_is_idempotent() {
    let source = "/// <summary>\n/// Returns <code>\n/// true\n/// </code> when <see langword=\"false\"/>.\n/// </summary>\nclass C {}\n";
    let first = rewritten(source).unwrap();
    assert!(rewritten(&first).is_none());
}

#[test]
fn test_blocks_with_defects_are_not_rewritten() {
    // the unclosed <summary> poisons the whole block, including the
    // otherwise rewritable <c> element
    let source = "/// <summary>Finds a <c>GameObject</c> by name.\nclass C {}\n";
    assert!(rewritten(source).is_none());
}

#[test]
fn test_multi_line_comment_blocks_are_not_rewritten() {
    let source = "/** <summary>Finds a <c>GameObject</c> by name.</summary> */\nclass C {}\n";
    assert!(rewritten(source).is_none());
}

#[test]
fn test_edits_across_blocks_leave_other_bytes_alone() {
    let source = "/// <summary>A <c>Foo</c>.</summary>\nclass A {}\n\n/// <summary>Not <see langword=\"null\"/>.</summary>\nclass B {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary>A Foo.</summary>\nclass A {}\n\n/// <summary>Not null.</summary>\nclass B {}\n"
    );
}

#[test]
fn test_nested_literals_are_flattened() {
    let source = "/// <summary><code>call <c>Foo</c> now</code></summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(result, "/// <summary>call Foo now</summary>\nclass C {}\n");
}

#[test]
fn test_literals_inside_other_markup_are_reached() {
    let source = "/// <summary><para>Use <c>Foo</c>.</para></summary>\nclass C {}\n";
    let result = rewritten(source).unwrap();
    assert_eq!(
        result,
        "/// <summary><para>Use Foo.</para></summary>\nclass C {}\n"
    );
}

#[test]
fn test_apply_edits_splices_back_to_front() {
    let edits = vec![
        Edit {
            span: 0..3,
            replacement: "X".to_string(),
        },
        Edit {
            span: 8..11,
            replacement: "Y".to_string(),
        },
    ];
    assert_eq!(apply_edits("abc def ghi", edits), "X def Y");
}
