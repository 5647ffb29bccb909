// giftfields/src/markup.rs

//! HTML escaping and the small widget vocabulary shared by the admin field
//! editor and the storefront renderer. Widgets write straight into a caller
//! buffer; the caller owns page structure.

use std::fmt::Write;

/// Escapes a value for interpolation into HTML text or attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A labeled single-line text input.
pub fn text_input(
    out: &mut String,
    id: &str,
    label: &str,
    value: &str,
    placeholder: &str,
) -> std::fmt::Result {
    write!(
        out,
        "<p class=\"form-field {id}_field\">\
         <label for=\"{id}\">{label}</label>\
         <input type=\"text\" id=\"{id}\" name=\"{id}\" value=\"{value}\" placeholder=\"{placeholder}\">\
         </p>",
        id = escape_html(id),
        label = escape_html(label),
        value = escape_html(value),
        placeholder = escape_html(placeholder),
    )
}

/// A labeled checkbox. Submitted with the fixed value `"yes"` when checked;
/// the surrounding form omits the field entirely when unchecked.
pub fn checkbox(out: &mut String, id: &str, label: &str, checked: bool) -> std::fmt::Result {
    write!(
        out,
        "<p class=\"form-field {id}_field\">\
         <label for=\"{id}\">\
         <input type=\"checkbox\" id=\"{id}\" name=\"{id}\" value=\"yes\"{checked}> {label}\
         </label>\
         </p>",
        id = escape_html(id),
        label = escape_html(label),
        checked = if checked { " checked" } else { "" },
    )
}

/// A labeled multi-line textarea.
pub fn textarea(
    out: &mut String,
    id: &str,
    label: &str,
    value: &str,
    placeholder: &str,
) -> std::fmt::Result {
    write!(
        out,
        "<p class=\"form-field {id}_field\">\
         <label for=\"{id}\">{label}</label>\
         <textarea id=\"{id}\" name=\"{id}\" placeholder=\"{placeholder}\">{value}</textarea>\
         </p>",
        id = escape_html(id),
        label = escape_html(label),
        value = escape_html(value),
        placeholder = escape_html(placeholder),
    )
}

/// A read-only labeled block, used for the storefront info display.
pub fn info_block(out: &mut String, class: &str, label: &str, value: &str) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"{class}\"><strong>{label}:</strong> {value}</div>",
        class = escape_html(class),
        label = escape_html(label),
        value = escape_html(value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn text_input_escapes_value() {
        let mut out = String::new();
        text_input(&mut out, "f", "Label", "\"><script>", "").unwrap();
        assert!(!out.contains("\"><script>"));
        assert!(out.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn checkbox_reflects_checked_state() {
        let mut checked = String::new();
        checkbox(&mut checked, "g", "Gift", true).unwrap();
        assert!(checked.contains(" checked"));

        let mut unchecked = String::new();
        checkbox(&mut unchecked, "g", "Gift", false).unwrap();
        assert!(!unchecked.contains(" checked"));
    }

    #[test]
    fn info_block_escapes_value() {
        let mut out = String::new();
        info_block(&mut out, "c", "Info", "a < b").unwrap();
        assert!(out.contains("a &lt; b"));
    }
}
