use std::borrow::Cow;

fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escapes text for HTML content or a quoted attribute value.
///
/// Borrows the input when nothing needs escaping, which is the common case
/// for titles and footers.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    let Some(first) = value.bytes().position(|b| entity(b).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 16);
    escaped.push_str(&value[..first]);
    let mut copied = first;
    for (index, byte) in value.bytes().enumerate().skip(first) {
        if let Some(entity) = entity(byte) {
            escaped.push_str(&value[copied..index]);
            escaped.push_str(entity);
            copied = index + 1;
        }
    }
    escaped.push_str(&value[copied..]);
    Cow::Owned(escaped)
}
