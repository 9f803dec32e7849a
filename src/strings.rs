//! String validation, parsing, and joining helpers.
//!
//! Validation predicates go through the precompiled matchers in
//! [`crate::patterns`]. Parse helpers collapse every failure into the
//! supplied default; callers cannot distinguish malformed from absent input
//! through these APIs.

use crate::enums::EnumMeta;
use crate::patterns;
use serde::de::DeserializeOwned;

/// Validation and parsing helpers for string slices.
pub trait StringExt {
    /// True iff the string contains at least one lowercase letter.
    fn has_lower_char(&self) -> bool;

    /// True iff the string contains at least one uppercase letter.
    fn has_upper_char(&self) -> bool;

    /// True iff the string contains at least one decimal digit.
    fn has_number(&self) -> bool;

    /// True iff the string is shaped like `local@domain.tld`. A shape
    /// check, not full RFC validation.
    fn is_valid_email(&self) -> bool;

    /// True iff the string is at most `max_length` characters long.
    fn has_max_length(&self, max_length: usize) -> bool;

    /// True iff the string is at least `min_length` characters long.
    fn has_min_length(&self, min_length: usize) -> bool;

    /// Trim surrounding whitespace, then trim `char_to_trim` from both
    /// ends. An empty string is returned unchanged.
    fn trim_char(&self, char_to_trim: char) -> &str;

    /// Strictly parse to a boolean, or return `default` on failure.
    fn parse_to_bool_or_default(&self, default: Option<bool>) -> Option<bool>;

    /// Strictly parse to an integer, or return `default` on failure.
    fn parse_to_int_or_default(&self, default: Option<i32>) -> Option<i32>;

    /// Decode the string as JSON into `T`. Empty input and every decoding
    /// failure (malformed syntax, shape mismatch) yield `None`, never an
    /// error.
    fn parse_to_object_or_default<T: DeserializeOwned>(&self) -> Option<T>;

    /// True iff the string names a variant of `E`, compared
    /// case-insensitively.
    fn is_valid_enum_value<E: EnumMeta>(&self) -> bool {
        self.is_valid_enum_value_with::<E>(true)
    }

    /// True iff the string names a variant of `E`, with an explicit case
    /// sensitivity toggle.
    fn is_valid_enum_value_with<E: EnumMeta>(&self, ignore_case: bool) -> bool;

    /// The string itself unless it is empty, in which case `default`.
    fn value_or_default<'a>(&'a self, default: &'a str) -> &'a str;
}

impl StringExt for str {
    fn has_lower_char(&self) -> bool {
        patterns::HAS_LOWER_CHAR.is_match(self)
    }

    fn has_upper_char(&self) -> bool {
        patterns::HAS_UPPER_CHAR.is_match(self)
    }

    fn has_number(&self) -> bool {
        patterns::HAS_NUMBER.is_match(self)
    }

    fn is_valid_email(&self) -> bool {
        patterns::EMAIL.is_match(self)
    }

    fn has_max_length(&self, max_length: usize) -> bool {
        self.chars().count() <= max_length
    }

    fn has_min_length(&self, min_length: usize) -> bool {
        self.chars().count() >= min_length
    }

    fn trim_char(&self, char_to_trim: char) -> &str {
        if self.is_empty() {
            self
        } else {
            self.trim().trim_matches(char_to_trim)
        }
    }

    fn parse_to_bool_or_default(&self, default: Option<bool>) -> Option<bool> {
        self.parse::<bool>().map_or(default, Some)
    }

    fn parse_to_int_or_default(&self, default: Option<i32>) -> Option<i32> {
        self.parse::<i32>().map_or(default, Some)
    }

    fn parse_to_object_or_default<T: DeserializeOwned>(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        serde_json::from_str(self).ok()
    }

    fn is_valid_enum_value_with<E: EnumMeta>(&self, ignore_case: bool) -> bool {
        E::from_name(self, ignore_case).is_some()
    }

    fn value_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        if self.is_empty() {
            default
        } else {
            self
        }
    }
}

/// Nullable form of [`StringExt::value_or_default`]: the input unless it is
/// absent or empty, in which case the (possibly absent) fallback.
#[must_use]
pub fn value_or_default<'a>(
    value: Option<&'a str>,
    default: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        _ => default,
    }
}

/// A sequence element the join helpers know how to render.
///
/// Absent elements (`None`, JSON `null`) render as empty text, never as a
/// literal "null" token; JSON strings render unquoted.
pub trait JoinPiece {
    /// The textual form this element contributes to the joined result.
    fn piece(&self) -> String;
}

macro_rules! display_piece {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl JoinPiece for $ty {
                fn piece(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_piece!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl JoinPiece for str {
    fn piece(&self) -> String {
        self.to_string()
    }
}

impl JoinPiece for serde_json::Value {
    fn piece(&self) -> String {
        match self {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: JoinPiece> JoinPiece for Option<T> {
    fn piece(&self) -> String {
        self.as_ref().map(JoinPiece::piece).unwrap_or_default()
    }
}

impl<T: JoinPiece + ?Sized> JoinPiece for &T {
    fn piece(&self) -> String {
        (**self).piece()
    }
}

/// Join a sequence's elements' textual forms with a separator.
pub trait JoinWith: Sized {
    /// Join with the default `", "` separator.
    fn join_with(self) -> String {
        self.join_with_sep(", ")
    }

    /// Join with the given separator.
    fn join_with_sep(self, separator: &str) -> String;
}

impl<I> JoinWith for I
where
    I: IntoIterator,
    I::Item: JoinPiece,
{
    fn join_with_sep(self, separator: &str) -> String {
        self.into_iter()
            .map(|item| item.piece())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_meta;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_char_class_checks() {
        assert!("AbC".has_lower_char());
        assert!("AbC".has_upper_char());
        assert!(!"ABC".has_lower_char());
        assert!(!"abc".has_upper_char());
        assert!("p4ss".has_number());
        assert!(!"pass".has_number());
    }

    #[test]
    fn test_empty_input_fails_all_presence_checks() {
        assert!(!"".has_lower_char());
        assert!(!"".has_upper_char());
        assert!(!"".has_number());
        assert!(!"".is_valid_email());
    }

    #[test]
    fn test_email_shape() {
        assert!("user@example.com".is_valid_email());
        assert!(!"userexample.com".is_valid_email());
        assert!(!"user@example".is_valid_email());
    }

    #[test]
    fn test_length_checks() {
        assert!("abc".has_max_length(3));
        assert!(!"abcd".has_max_length(3));
        assert!("abc".has_min_length(3));
        assert!(!"ab".has_min_length(3));
        // Counted in characters, not bytes.
        assert!("héllo".has_max_length(5));
    }

    #[test]
    fn test_trim_char_trims_whitespace_first() {
        assert_eq!("  xxvaluexx  ".trim_char('x'), "value");
        assert_eq!("".trim_char('x'), "");
        assert_eq!("value".trim_char('x'), "value");
    }

    #[test]
    fn test_parse_to_int_or_default() {
        assert_eq!("notanint".parse_to_int_or_default(Some(99)), Some(99));
        assert_eq!("42".parse_to_int_or_default(Some(0)), Some(42));
        assert_eq!("notanint".parse_to_int_or_default(None), None);
    }

    #[test]
    fn test_parse_to_bool_or_default() {
        assert_eq!("true".parse_to_bool_or_default(None), Some(true));
        assert_eq!("false".parse_to_bool_or_default(Some(true)), Some(false));
        assert_eq!("maybe".parse_to_bool_or_default(Some(true)), Some(true));
        assert_eq!("maybe".parse_to_bool_or_default(None), None);
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        id: u32,
        name: String,
    }

    #[test]
    fn test_parse_to_object_or_default() {
        let parsed: Option<Payload> = r#"{"id":1,"name":"a"}"#.parse_to_object_or_default();
        assert_eq!(
            parsed,
            Some(Payload {
                id: 1,
                name: "a".to_string()
            })
        );

        let malformed: Option<Payload> = "{not json".parse_to_object_or_default();
        assert_eq!(malformed, None);

        let wrong_shape: Option<Payload> = r#"{"id":"x"}"#.parse_to_object_or_default();
        assert_eq!(wrong_shape, None);

        let empty: Option<Payload> = "".parse_to_object_or_default();
        assert_eq!(empty, None);
    }

    #[derive(Debug, PartialEq)]
    enum Color {
        Red,
        Green,
    }

    enum_meta!(Color { Red, Green });

    #[test]
    fn test_is_valid_enum_value() {
        assert!("red".is_valid_enum_value::<Color>());
        assert!("Green".is_valid_enum_value::<Color>());
        assert!(!"blue".is_valid_enum_value::<Color>());
        assert!(!"red".is_valid_enum_value_with::<Color>(false));
        assert!("Red".is_valid_enum_value_with::<Color>(false));
    }

    #[test]
    fn test_value_or_default() {
        assert_eq!("text".value_or_default("fallback"), "text");
        assert_eq!("".value_or_default("fallback"), "fallback");

        assert_eq!(value_or_default(Some("text"), Some("d")), Some("text"));
        assert_eq!(value_or_default(Some(""), Some("d")), Some("d"));
        assert_eq!(value_or_default(None, Some("d")), Some("d"));
        assert_eq!(value_or_default(None, None), None);
    }

    #[test]
    fn test_join_with() {
        assert_eq!(vec!["a", "b", "c"].join_with(), "a, b, c");
        assert_eq!(vec![1, 2, 3].join_with_sep(" | "), "1 | 2 | 3");
        assert_eq!(Vec::<i32>::new().join_with(), "");
    }

    #[test]
    fn test_join_with_absent_elements_render_empty() {
        let mixed = vec![json!(1), json!(null), json!("x")];
        assert_eq!(mixed.join_with(), "1, , x");

        let options = vec![Some(1), None, Some(3)];
        assert_eq!(options.join_with(), "1, , 3");
    }
}
