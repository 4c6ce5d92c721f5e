//! Deterministic, stateless string transforms consumed by template renderers.
//!
//! Accessor-name derivation, fixed-width padding and case transforms live
//! here so that every rendered artifact spells names the same way.

use crate::error::{ResolveError, Result};

/// Derive the accessor name for an attribute.
///
/// Returns `isFoo` for `foo` when the resolved type is a primitive boolean
/// and idiomatic accessor naming is requested, `getFoo` otherwise.
pub fn build_getter(attribute_name: &str, boolean_primitive: bool) -> String {
    if boolean_primitive {
        format!("is{}", capitalize(attribute_name))
    } else {
        format!("get{}", capitalize(attribute_name))
    }
}

/// Derive the accessor name with a `get` prefix, even for booleans.
pub fn build_getter_plain(attribute_name: &str) -> String {
    format!("get{}", capitalize(attribute_name))
}

/// Derive the mutator name for an attribute: `setFoo` for `foo`.
pub fn build_setter(attribute_name: &str) -> String {
    format!("set{}", capitalize(attribute_name))
}

/// Pad a string with trailing spaces up to the requested width.
///
/// A string already at or beyond the width is returned unchanged.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        let mut out = String::with_capacity(width);
        out.push_str(s);
        for _ in len..width {
            out.push(' ');
        }
        out
    }
}

/// Change the first letter to upper case, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Change the first letter to lower case, leaving the rest untouched.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert a free-form label to an UPPER_SNAKE_CASE identifier.
///
/// Whitespace and underscore runs become a single `_`, a lower-to-upper
/// case boundary inserts one, and letters are uppercased. Applying the
/// transform to its own output is a no-op.
pub fn to_upper_snake(s: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Upper,
        Other,
        Separator,
        Start,
    }

    let mut state = State::Start;
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() || c == '_' {
            // separator runs collapse to a single underscore
            if state != State::Separator && state != State::Start {
                out.push('_');
            }
            state = State::Separator;
        } else if c.is_uppercase() {
            if state == State::Other {
                out.push('_');
            }
            out.push(c);
            state = State::Upper;
        } else {
            out.extend(c.to_uppercase());
            state = State::Other;
        }
    }
    out
}

/// True if the string is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True if the string contains any non-whitespace character.
pub fn is_not_blank(s: &str) -> bool {
    !is_blank(s)
}

/// Wrap a string in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Strip one pair of surrounding double quotes, if present on both ends.
///
/// A string quoted on only one end is returned as is.
pub fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

/// Protect each occurrence of `separator` with a backslash.
///
/// # Errors
///
/// Returns `ResolveError::Usage` when `separator` is not exactly one character.
pub fn backslash(s: &str, separator: &str) -> Result<String> {
    let mut chars = separator.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(ResolveError::Usage(format!(
                "Single character expected (separator='{}')",
                separator
            )))
        }
    };

    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == c {
            out.push('\\');
        }
        out.push(ch);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_getter() {
        assert_eq!(build_getter("age", false), "getAge");
        assert_eq!(build_getter("active", true), "isActive");
        assert_eq!(build_getter_plain("active"), "getActive");
        assert_eq!(build_getter("firstName", false), "getFirstName");
    }

    #[test]
    fn test_build_setter() {
        assert_eq!(build_setter("age"), "setAge");
        assert_eq!(build_setter("firstName"), "setFirstName");
    }

    #[test]
    fn test_pad_adds_trailing_spaces() {
        assert_eq!(pad("id", 6), "id    ");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn test_pad_noop_at_or_beyond_width() {
        assert_eq!(pad("identifier", 6), "identifier");
        assert_eq!(pad("abcdef", 6), "abcdef");
        assert_eq!(pad("x", 0), "x");
    }

    #[test]
    fn test_capitalize_and_uncapitalize() {
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("Foo"), "Foo");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("f"), "F");
        assert_eq!(uncapitalize("Foo"), "foo");
        assert_eq!(uncapitalize("foo"), "foo");
        assert_eq!(uncapitalize(""), "");
    }

    #[test]
    fn test_to_upper_snake() {
        assert_eq!(to_upper_snake("first name"), "FIRST_NAME");
        assert_eq!(to_upper_snake("firstName"), "FIRST_NAME");
        assert_eq!(to_upper_snake("first_name"), "FIRST_NAME");
        assert_eq!(to_upper_snake("First  Name"), "FIRST_NAME");
        assert_eq!(to_upper_snake("isbn"), "ISBN");
    }

    #[test]
    fn test_to_upper_snake_idempotent() {
        for input in ["first name", "orderLine", "BOOK_ORDER", "a b_c"] {
            let once = to_upper_snake(input);
            assert_eq!(to_upper_snake(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_blank_checks() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" x "));
        assert!(is_not_blank("x"));
    }

    #[test]
    fn test_quote_unquote() {
        assert_eq!(quote("name"), "\"name\"");
        assert_eq!(unquote("\"name\""), "name");
        assert_eq!(unquote("name"), "name");
        assert_eq!(unquote("\"half"), "\"half");
        assert_eq!(unquote("half\""), "half\"");
    }

    #[test]
    fn test_backslash_protects_separator() {
        assert_eq!(backslash("a.b.c", ".").unwrap(), "a\\.b\\.c");
        assert_eq!(backslash("no match", ".").unwrap(), "no match");
    }

    #[test]
    fn test_backslash_rejects_multi_char_separator() {
        let err = backslash("a.b", "..").unwrap_err();
        assert!(matches!(err, ResolveError::Usage(_)));
        let err = backslash("a.b", "").unwrap_err();
        assert!(matches!(err, ResolveError::Usage(_)));
    }
}
