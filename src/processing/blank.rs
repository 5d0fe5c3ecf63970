use crate::constants::SPACE_POOL_LEN;
use once_cell::sync::Lazy;

static SPACE_POOL: Lazy<String> = Lazy::new(|| " ".repeat(SPACE_POOL_LEN));

/// Replaces every character of `block` with spaces, except line breaks.
///
/// Each character becomes one space, so the result has as many characters as
/// the input and its `\n` and `\r` sit at the same character positions. Code
/// that followed the block on its line keeps its column.
///
/// # Examples
/// ```
/// use jscleanup::processing::blank_block;
///
/// assert_eq!(blank_block("/* a\r\n b */"), "    \r\n     ");
/// ```
pub fn blank_block(block: &str) -> String {
    let mut out = String::with_capacity(block.len());
    let mut pending = 0;
    for c in block.chars() {
        if c == '\n' || c == '\r' {
            push_spaces(&mut out, pending);
            pending = 0;
            out.push(c);
        } else {
            pending += 1;
        }
    }
    push_spaces(&mut out, pending);
    out
}

fn push_spaces(out: &mut String, mut count: usize) {
    while count > 0 {
        let take = count.min(SPACE_POOL.len());
        out.push_str(&SPACE_POOL[..take]);
        count -= take;
    }
}
