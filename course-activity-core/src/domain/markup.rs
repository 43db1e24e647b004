/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Why a markup fragment is not self-contained
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("</{tag}> at byte {offset} closes nothing")]
    UnexpectedClose { tag: String, offset: usize },

    #[error("expected </{expected}> but found </{found}> at byte {offset}")]
    Mismatched {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("<{tag}> is never closed")]
    Unclosed { tag: String },

    #[error("tag starting at byte {offset} is not terminated")]
    UnterminatedTag { offset: usize },

    #[error("comment starting at byte {offset} is not terminated")]
    UnterminatedComment { offset: usize },
}

/// Check that every element opened in `html` is also closed in it.
///
/// Void elements (`<br>`, `<img>`, ...) and tags written as `<tag/>` need no
/// closing tag. Comments and declarations are skipped. A `<` that does not
/// start a tag is treated as text.
pub fn check_balanced(html: &str) -> Result<(), MarkupError> {
    let bytes = html.as_bytes();
    let mut open: Vec<String> = Vec::new();
    let mut pos = 0;

    while let Some(rel) = html[pos..].find('<') {
        let start = pos + rel;
        let rest = &html[start..];

        if let Some(body) = rest.strip_prefix("<!--") {
            let end = body
                .find("-->")
                .ok_or(MarkupError::UnterminatedComment { offset: start })?;
            pos = start + 4 + end + 3;
            continue;
        }

        match bytes.get(start + 1).copied() {
            Some(b'/') => {
                let end = tag_end(html, start)
                    .ok_or(MarkupError::UnterminatedTag { offset: start })?;
                let name = tag_name(&html[start + 2..end]);
                pos = end + 1;

                if is_void(&name) {
                    continue;
                }
                match open.pop() {
                    None => return Err(MarkupError::UnexpectedClose { tag: name, offset: start }),
                    Some(expected) if expected != name => {
                        return Err(MarkupError::Mismatched {
                            expected,
                            found: name,
                            offset: start,
                        })
                    }
                    Some(_) => {}
                }
            }
            Some(b'!') | Some(b'?') => {
                let end = tag_end(html, start)
                    .ok_or(MarkupError::UnterminatedTag { offset: start })?;
                pos = end + 1;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let end = tag_end(html, start)
                    .ok_or(MarkupError::UnterminatedTag { offset: start })?;
                let inner = &html[start + 1..end];
                let name = tag_name(inner);
                let self_closing = inner.trim_end().ends_with('/');
                pos = end + 1;

                if !self_closing && !is_void(&name) {
                    open.push(name);
                }
            }
            _ => pos = start + 1,
        }
    }

    match open.pop() {
        Some(tag) => Err(MarkupError::Unclosed { tag }),
        None => Ok(()),
    }
}

/// Byte index of the `>` ending the tag that starts at `start`, skipping quoted attribute values
fn tag_end(html: &str, start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in html.as_bytes()[start + 1..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(start + 1 + i),
            None => {}
        }
    }
    None
}

fn tag_name(inner: &str) -> String {
    inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}
