//! HTML escaping for untrusted text fields.

use std::fmt;

/// HTML-escaped, ASCII-only text.
///
/// Values can only be produced by [`sanitize`], so anything typed
/// `Escaped` is safe to embed in markup or attribute values as-is. The
/// renderer never escapes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped(String);

impl Escaped {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for embedding in HTML.
///
/// The reserved characters `& " ' > <` become named entities first, then
/// every remaining code point above 127 becomes a numeric character
/// reference, so the output is pure ASCII. The entity pass runs before the
/// numeric pass; since entity replacements are themselves ASCII, a single
/// walk over the input produces the same bytes.
pub fn sanitize(text: &str) -> Escaped {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            c if (c as u32) > 127 => out.push_str(&format!("&#x{:x};", c as u32)),
            c => out.push(c),
        }
    }
    Escaped(out)
}
