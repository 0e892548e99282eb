//! Shared helpers for building embeddable HTML fragments.

/// Drop every control character (C0, DEL and C1, including CR, LF and TAB).
///
/// Fragments are injected into host pages by script, so they must not carry
/// raw line breaks.
pub fn remove_control_characters(markup: &str) -> String {
    markup.chars().filter(|c| !c.is_control()).collect()
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Upper-case the first letter of every word (`affiliate` → `Affiliate`).
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// One collapsible section of an accordion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionEntry {
    pub header: String,
    pub content: String,
}

/// Build accordion markup that the host page's script turns into a widget.
pub fn accordion(entries: &[AccordionEntry]) -> String {
    let mut markup = String::from("<div class='jewel-accordion'>");
    for entry in entries {
        markup.push_str(&format!(
            "<h4>{}</h4><div>{}</div>",
            entry.header, entry.content
        ));
    }
    markup.push_str("</div>");
    markup
}
