//! Query-string encoding.
//!
//! Values are rendered with [`ToQueryValue`] and percent-encoded by
//! [`QueryBuilder`]. Rendering rules:
//!
//! - `bool` → `true` / `false` (always lowercase)
//! - enums with a wire name (e.g. [`Provider`](crate::api::Provider)) → the wire name
//! - [`Base64Bytes`] → standard base64
//! - slices and `Vec`s → elements rendered one by one, joined with `,`
//! - `Option::None` → empty string

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Conversion of a value to its query-string form (before percent-encoding).
pub trait ToQueryValue {
    fn to_query_value(&self) -> String;
}

impl ToQueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl ToQueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl ToQueryValue for bool {
    fn to_query_value(&self) -> String {
        let flag = if *self { "true" } else { "false" };
        flag.to_string()
    }
}

macro_rules! impl_query_value_for_int {
    ($($t:ty),*) => {
        $(
            impl ToQueryValue for $t {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_query_value_for_int!(i16, i32, i64, u16, u32, u64, usize);

impl<T: ToQueryValue + ?Sized> ToQueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

impl<T: ToQueryValue> ToQueryValue for [T] {
    fn to_query_value(&self) -> String {
        self.iter()
            .map(ToQueryValue::to_query_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: ToQueryValue> ToQueryValue for Vec<T> {
    fn to_query_value(&self) -> String {
        self.as_slice().to_query_value()
    }
}

impl<T: ToQueryValue> ToQueryValue for Option<T> {
    fn to_query_value(&self) -> String {
        self.as_ref()
            .map(ToQueryValue::to_query_value)
            .unwrap_or_default()
    }
}

/// Raw bytes rendered as standard base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64Bytes<'a>(pub &'a [u8]);

impl ToQueryValue for Base64Bytes<'_> {
    fn to_query_value(&self) -> String {
        STANDARD.encode(self.0)
    }
}

/// Parse a textual boolean flag case-insensitively (`"TRUE"`, `"False"`, ...).
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Builds `{base}{path}?k=v&k=v` with every key and value percent-encoded.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    url: String,
    has_query: bool,
}

impl QueryBuilder {
    pub fn new(base_url: &str, path: &str) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            has_query: false,
        }
    }

    /// Append `key=value`.
    pub fn param<V: ToQueryValue + ?Sized>(mut self, key: &str, value: &V) -> Self {
        self.url.push(if self.has_query { '&' } else { '?' });
        self.url.push_str(&urlencoding::encode(key));
        self.url.push('=');
        self.url.push_str(&urlencoding::encode(&value.to_query_value()));
        self.has_query = true;
        self
    }

    /// Append `key=value` only when the value is present and non-empty.
    pub fn param_if_present(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.param(key, v),
            _ => self,
        }
    }

    pub fn build(self) -> String {
        self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_no_question_mark() {
        let url = QueryBuilder::new("https://service.oreid.io/", "/api/app-token").build();
        assert_eq!(url, "https://service.oreid.io/api/app-token");
    }

    #[test]
    fn test_params_joined_without_trailing_separator() {
        let url = QueryBuilder::new("https://h", "/p")
            .param("a", "1")
            .param("b", "2")
            .build();
        assert_eq!(url, "https://h/p?a=1&b=2");
        assert!(!url.ends_with('&'));
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let url = QueryBuilder::new("https://h", "/p")
            .param("callback_url", "https://app.example/cb?x=1&y=a b")
            .param("email", "someone+tag@example.com")
            .build();
        assert_eq!(
            url,
            "https://h/p?callback_url=https%3A%2F%2Fapp.example%2Fcb%3Fx%3D1%26y%3Da%20b\
             &email=someone%2Btag%40example.com"
        );
    }

    #[test]
    fn test_unreserved_characters_kept() {
        let url = QueryBuilder::new("https://h", "/p")
            .param("parent-permission", "a-b_c.d~e")
            .build();
        assert_eq!(url, "https://h/p?parent-permission=a-b_c.d~e");
    }

    #[test]
    fn test_bool_is_lowercase() {
        assert_eq!(true.to_query_value(), "true");
        assert_eq!(false.to_query_value(), "false");
        assert_eq!(parse_bool_flag("TRUE").unwrap().to_query_value(), "true");
        assert_eq!(parse_bool_flag(" False ").unwrap().to_query_value(), "false");
        assert_eq!(parse_bool_flag("yes"), None);
    }

    #[test]
    fn test_arrays_comma_joined() {
        let values = vec!["google", "facebook"];
        assert_eq!(values.to_query_value(), "google,facebook");
        assert_eq!([true, false].to_query_value(), "true,false");
        assert_eq!(Vec::<u32>::new().to_query_value(), "");

        let url = QueryBuilder::new("https://h", "/logout")
            .param("providers", &values)
            .build();
        assert_eq!(url, "https://h/logout?providers=google%2Cfacebook");
    }

    #[test]
    fn test_bytes_base64() {
        assert_eq!(Base64Bytes(b"hello").to_query_value(), "aGVsbG8=");
        assert_eq!(Base64Bytes(&[]).to_query_value(), "");
    }

    #[test]
    fn test_option_and_ints() {
        assert_eq!(None::<String>.to_query_value(), "");
        assert_eq!(Some(42u32).to_query_value(), "42");
        assert_eq!((-7i64).to_query_value(), "-7");
    }

    #[test]
    fn test_param_if_present() {
        let url = QueryBuilder::new("https://h", "/auth")
            .param("a", "1")
            .param_if_present("state", None)
            .param_if_present("state", Some(""))
            .build();
        assert_eq!(url, "https://h/auth?a=1");

        let url = QueryBuilder::new("https://h", "/auth")
            .param("a", "1")
            .param_if_present("state", Some("s1"))
            .build();
        assert_eq!(url, "https://h/auth?a=1&state=s1");
    }
}
