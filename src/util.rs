//! Text decoding helpers for project files.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<?xml encoding="..."?>`)
/// 3. Falls back to Windows-1252 (yWriter 5/6 era files)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Encoding named in the XML declaration, if any.
///
/// The declaration must open the document (after an optional UTF-8 BOM).
/// Only the declaration itself is inspected, so this is safe to call on
/// bytes of unknown encoding.
pub fn xml_declared_encoding(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let bytes = bytes.strip_prefix(b"<?xml")?;
    let decl_end = memchr::memmem::find(bytes, b"?>")?;
    let decl = &bytes[..decl_end];
    let start = memchr::memmem::find(decl, b"encoding=")? + b"encoding=".len();
    let quote = *decl.get(start)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value = &decl[start + 1..];
    let end = memchr::memchr(quote, value)?;
    std::str::from_utf8(&value[..end]).ok()
}

/// Normalize `\r\n` and lone `\r` line breaks to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
