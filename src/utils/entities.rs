use std::borrow::Cow;

/// Decode HTML character references in generated labels.
///
/// Handles the named references documentation generators emit
/// (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`) and numeric
/// references (`&#39;`, `&#x27;`). Anything else is left untouched.
pub fn decode_html(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'&', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = memchr::memchr(b'&', rest.as_bytes()) {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        match decode_reference(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode one reference at the start of `text` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_reference(text: &str) -> Option<(char, usize)> {
    // Longest reference we handle is `&#x10FFFF;`
    let end = memchr::memchr(b';', &text.as_bytes()[..text.len().min(10)])?;
    let name = &text[1..end];

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };

    Some((ch, end + 1))
}
