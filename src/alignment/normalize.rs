/// Collapses every maximal whitespace run into a single ASCII space.
///
/// Leading and trailing runs are collapsed too, not stripped, so a reference
/// file ending in a newline yields a trailing space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
            continue;
        }
        in_run = false;
        out.push(c);
    }
    out
}
