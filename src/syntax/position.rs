/// Convert a byte offset into a 1-based (line, column) pair.
///
/// Columns count characters, not bytes, so positions stay meaningful for
/// sources with non-ASCII documentation text.
pub fn byte_to_line_col(byte_offset: usize, content: &str) -> (u32, u32) {
    let mut line = 1u32;
    let mut column = 1u32;

    for (i, ch) in content.char_indices() {
        if i >= byte_offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}
