/// Replace control characters with their `escape_default` rendering so
/// attribute values embedding e.g. a bell or escape sequence cannot corrupt
/// terminal output. Non-control characters, including any UTF-8 text, pass
/// through unchanged.
pub fn escape_nonprint(s: &str) -> String {
    if !s.chars().any(char::is_control) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
