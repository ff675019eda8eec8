use mime::Mime;

const DEFAULT_CHARSET: &str = "utf-8";

/// Default charset for a MIME type: utf-8 for `text/*`, `application/json`
/// and `application/javascript`, none otherwise.
pub fn charset_for(mime_type: &Mime) -> Option<&'static str> {
    if mime_type.type_() == mime::TEXT {
        return Some(DEFAULT_CHARSET);
    }
    if mime_type.type_() == mime::APPLICATION
        && (mime_type.subtype() == mime::JSON || mime_type.subtype() == mime::JAVASCRIPT)
    {
        return Some(DEFAULT_CHARSET);
    }
    None
}

/// Appends `; charset=<charset>` to a Content-Type value that names a
/// textual type without one. Values that already carry a charset parameter,
/// or that do not parse as a MIME type, pass through unmodified.
pub fn with_default_charset(value: &str) -> String {
    match value.parse::<Mime>() {
        Ok(parsed) if parsed.get_param(mime::CHARSET).is_none() => match charset_for(&parsed) {
            Some(charset) => format!("{}; charset={}", value, charset),
            None => value.to_owned(),
        },
        _ => value.to_owned(),
    }
}
