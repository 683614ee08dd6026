// src/core/html.rs
// Case-insensitive index scanning over raw tag soup. The signup pages are
// small, table-heavy and hand-written; byte offsets into the original
// string keep slicing cheap and the markup untouched.

/// ASCII-only lowercase. Non-ASCII passes through unchanged, so byte
/// offsets into the result are valid offsets into the original string.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Case-insensitive find starting at `from`. Returns a byte offset into `s`.
pub fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = to_lower(s.get(from..)?);
    hay.find(&to_lower(needle)).map(|i| from + i)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Next occurrence of an opening tag pattern like `"<th"`, at or after
/// `from`. The pattern must end at a tag-name boundary: `<th` must not
/// match `<thead`.
fn next_open_ci(s: &str, open_pat: &str, from: usize) -> Option<usize> {
    let mut search = from;
    loop {
        let at = find_ci(s, open_pat, search)?;
        let after = s.as_bytes().get(at + open_pat.len()).copied();
        match after {
            Some(b) if is_name_byte(b) => search = at + open_pat.len(),
            _ => return Some(at),
        }
    }
}

/// Next `<tag …>…</tag>` block at or after `from`, as a byte range over
/// `s` (start of the opener through end of the closer). Not nesting-aware.
pub fn next_tag_block_ci(s: &str, open_pat: &str, close_pat: &str, from: usize) -> Option<(usize, usize)> {
    let start = next_open_ci(s, open_pat, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close = find_ci(s, close_pat, open_end)?;
    Some((start, close + close_pat.len()))
}

/// Opener span of a void or standalone tag (`<img …>`), at or after `from`.
pub fn next_tag_open_ci(s: &str, open_pat: &str, from: usize) -> Option<(usize, usize)> {
    let start = next_open_ci(s, open_pat, from)?;
    let gt = s[start..].find('>')? + start + 1;
    Some((start, gt))
}

/// Innermost `<tag …>…</tag>` block containing `pos`, nesting-aware.
/// Closers pair with the most recent unmatched opener, so the first popped
/// block that spans `pos` is the innermost enclosing one.
pub fn enclosing_block_ci(s: &str, pos: usize, open_pat: &str, close_pat: &str) -> Option<(usize, usize)> {
    let mut opens: Vec<usize> = Vec::new();
    let mut cursor = 0usize;

    loop {
        let next_open = next_open_ci(s, open_pat, cursor);
        let next_close = find_ci(s, close_pat, cursor);

        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                opens.push(o);
                cursor = o + open_pat.len();
            }
            (_, Some(c)) => {
                let end = c + close_pat.len();
                if let Some(o) = opens.pop() {
                    if o <= pos && pos < end {
                        return Some((o, end));
                    }
                }
                cursor = end;
            }
            // No closer left anywhere; no enclosing block can complete.
            (_, None) => return None,
        }
    }
}

/// Opener slice of a block: `<td class="x">` for `<td class="x">text</td>`.
pub fn tag_opener(block: &str) -> &str {
    match block.find('>') {
        Some(gt) => &block[..=gt],
        None => block,
    }
}

/// Inner content of a block: between the opener's `>` and the closer's `<`.
pub fn inner_after_open_tag(block: &str) -> &str {
    if let (Some(gt), Some(lt)) = (block.find('>'), block.rfind('<')) {
        if lt > gt {
            return &block[gt + 1..lt];
        }
    }
    ""
}

/// Attribute value from a tag opener. Tolerates double-quoted,
/// single-quoted and bare values; `src=` must not match `data-src=`.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));

    let mut from = 0usize;
    let at = loop {
        let i = lc[from..].find(&pat)? + from;
        let boundary = i == 0 || {
            let b = lc.as_bytes()[i - 1];
            !(b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        };
        if boundary {
            break i;
        }
        from = i + pat.len();
    };

    let val = &opener[at + pat.len()..];
    match val.as_bytes().first()? {
        b'"' => val[1..].find('"').map(|e| &val[1..1 + e]),
        b'\'' => val[1..].find('\'').map(|e| &val[1..1 + e]),
        _ => {
            let end = val
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(val.len());
            Some(&val[..end])
        }
    }
}

/// Drop `<…>` runs, keep the text between them.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
