/// Strip surrounding whitespace and any enclosing parenthesis pairs from a band name.
///
/// `"(Metallica)"` becomes `"Metallica"`. Unbalanced (`"(Metallica"`) or
/// non-enclosing (`"(A) and (B)"`) parentheses are kept. Applying the function
/// twice yields the same result as applying it once.
pub fn strip_band_name(raw: &str) -> &str {
    let mut name = raw.trim();
    while is_enclosed(name) {
        name = name[1..name.len() - 1].trim();
    }
    name
}

/// True when the first `(` is closed by the final `)`
fn is_enclosed(s: &str) -> bool {
    if s.len() < 2 || !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }

    let mut depth = 0usize;
    let last = s.len() - 1;
    for (idx, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = match depth.checked_sub(1) {
                    Some(d) => d,
                    None => return false,
                };
                if depth == 0 && idx != last {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}
