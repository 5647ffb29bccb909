// giftfields/src/sanitize.rs

//! Total sanitization for submitted field values.
//!
//! These functions never reject: malformed input is coerced into a safe
//! string. Both are idempotent, so values already stored can be passed
//! through again without drift.

/// Sanitizes a single-line text field: markup is stripped, control
/// characters are dropped, whitespace runs collapse to one space, and the
/// result is trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    let cleaned = drop_controls(&strip_markup(input), false);
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitizes a multi-line text field: markup is stripped and control
/// characters are dropped, but newlines survive so the message keeps its
/// shape. Leading/trailing whitespace is trimmed.
pub fn sanitize_textarea_field(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    drop_controls(&strip_markup(&normalized), true)
        .trim()
        .to_string()
}

/// Removes tag spans: a `<` swallows everything up to and including the next
/// `>`; an unterminated `<` swallows the rest of the string. The output
/// never contains `<`, so no markup can survive a second pass.
fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '<' {
            for t in chars.by_ref() {
                if t == '>' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Drops control characters. Whitespace controls (tab, carriage return, and
/// newline unless `keep_newlines`) degrade to a plain space instead of
/// silently joining adjacent words.
fn drop_controls(input: &str, keep_newlines: bool) -> String {
    input
        .chars()
        .filter_map(|c| {
            if c == '\n' && keep_newlines {
                Some('\n')
            } else if c.is_control() {
                if c.is_whitespace() {
                    Some(' ')
                } else {
                    None
                }
            } else {
                Some(c)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_closed_tags() {
        assert_eq!(
            sanitize_text_field("hello <script>alert(1)</script> world"),
            "hello alert(1) world"
        );
        assert_eq!(sanitize_text_field("<b>bold</b>"), "bold");
    }

    #[test]
    fn unterminated_tag_is_dropped_to_end() {
        assert_eq!(sanitize_text_field("5 < 6"), "5");
        assert_eq!(sanitize_text_field("ok <img src="), "ok");
    }

    #[test]
    fn control_characters_are_removed() {
        assert_eq!(sanitize_text_field("a\x07b"), "ab");
        assert_eq!(sanitize_text_field("a\tb\nc"), "a b c");
    }

    #[test]
    fn text_field_collapses_whitespace() {
        assert_eq!(sanitize_text_field("  spaced   out  "), "spaced out");
    }

    #[test]
    fn textarea_preserves_newlines() {
        assert_eq!(
            sanitize_textarea_field("line one\r\nline two\n\nline four"),
            "line one\nline two\n\nline four"
        );
    }

    #[test]
    fn textarea_strips_markup_but_keeps_shape() {
        assert_eq!(
            sanitize_textarea_field("dear you,\n<i>with love</i>\nme"),
            "dear you,\nwith love\nme"
        );
    }

    #[test]
    fn empty_and_whitespace_only_inputs_default_to_empty() {
        assert_eq!(sanitize_text_field(""), "");
        assert_eq!(sanitize_text_field("   \t  "), "");
        assert_eq!(sanitize_textarea_field("\n\n"), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let nasty = [
            "hello <script>alert(1)</script> world",
            "5 < 6 and 7 > 2",
            "a\x07b\tc\r\nd",
            "  spaced   out  ",
            "<unclosed attack",
            "plain text",
            "multi\nline\nwith <b>tags</b>",
        ];
        for input in nasty {
            let once = sanitize_text_field(input);
            assert_eq!(sanitize_text_field(&once), once, "text: {input:?}");
            let once = sanitize_textarea_field(input);
            assert_eq!(sanitize_textarea_field(&once), once, "textarea: {input:?}");
        }
    }

    #[test]
    fn sanitized_output_carries_no_markup() {
        for input in ["<script>x</script>", "a<b", "<<nested>>", "on<on<on>"] {
            assert!(!sanitize_text_field(input).contains('<'));
            assert!(!sanitize_textarea_field(input).contains('<'));
        }
    }
}
