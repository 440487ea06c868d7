// Field-name humanizing: "terminalIdCode" -> "Terminal Id Code"

/// Turn a camel-case field name into a display label.
///
/// A space is inserted before each uppercase letter that is neither the
/// first character nor already preceded by a space, the result is
/// trimmed, and its first character is uppercased. Only case
/// transitions split words; digit-letter boundaries do not
/// ("f2PortStatus" -> "F2 Port Status"). Total: every input maps to
/// exactly one output, and already-humanized labels pass through
/// unchanged.
pub fn humanize_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        out.push(ch);
    }

    let trimmed = out.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut label: String = first.to_uppercase().collect();
            label.push_str(chars.as_str());
            label
        }
    }
}
