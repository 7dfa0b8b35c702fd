//! Query string access for the current location

use std::borrow::Cow;

/// Query parameter carrying the transaction identifier
pub const TRANSACTION_ID_PARAM: &str = "transactionId";

/// The current page location, reduced to its raw query string
///
/// The query is untrusted input: it may be absent, malformed, or repeat keys.
/// Lookups never fail; they return the first matching value or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    query: Option<String>,
}

impl Location {
    /// Build a location from a raw query string (without the leading `?`)
    pub fn parse(raw_query: Option<&str>) -> Self {
        Self {
            query: raw_query.map(|q| q.trim_start_matches('?').to_string()),
        }
    }

    /// Raw query string, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// First value for `key`, percent-decoded
    ///
    /// A key with no `=` yields an empty value. Later duplicates are ignored.
    pub fn first(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .find_map(|pair| {
                let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
                if decode_component(raw_key) == key {
                    Some(decode_component(raw_value).into_owned())
                } else {
                    None
                }
            })
    }

    /// First `transactionId` value
    pub fn transaction_id(&self) -> Option<String> {
        self.first(TRANSACTION_ID_PARAM)
    }
}

/// Decode one form-encoded component
///
/// `+` means space. Escapes that don't decode to UTF-8 leave the text as-is.
fn decode_component(raw: &str) -> Cow<'_, str> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    match decoded {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query() {
        let location = Location::parse(None);
        assert_eq!(location.transaction_id(), None);
    }

    #[test]
    fn test_missing_key() {
        let location = Location::parse(Some("foo=bar&baz=1"));
        assert_eq!(location.transaction_id(), None);
    }

    #[test]
    fn test_present_key() {
        let location = Location::parse(Some("transactionId=TXN12345"));
        assert_eq!(location.transaction_id().as_deref(), Some("TXN12345"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(
            Location::parse(Some("transactionId=")).transaction_id().as_deref(),
            Some("")
        );
        assert_eq!(
            Location::parse(Some("transactionId")).transaction_id().as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_first_duplicate_wins() {
        let location = Location::parse(Some("transactionId=first&transactionId=second"));
        assert_eq!(location.transaction_id().as_deref(), Some("first"));

        // An empty first value still wins over a later non-empty one
        let location = Location::parse(Some("transactionId=&transactionId=second"));
        assert_eq!(location.transaction_id().as_deref(), Some(""));
    }

    #[test]
    fn test_percent_decoding() {
        let location = Location::parse(Some("transactionId=abc%2D999+x%26y"));
        assert_eq!(location.transaction_id().as_deref(), Some("abc-999 x&y"));

        let location = Location::parse(Some("transaction%49d=encoded-key"));
        assert_eq!(location.transaction_id().as_deref(), Some("encoded-key"));
    }

    #[test]
    fn test_malformed_escape_is_kept() {
        let location = Location::parse(Some("transactionId=%FF%FE"));
        assert_eq!(location.transaction_id().as_deref(), Some("%FF%FE"));
    }

    #[test]
    fn test_leading_question_mark_and_stray_ampersands() {
        let location = Location::parse(Some("?&&transactionId=0&"));
        assert_eq!(location.transaction_id().as_deref(), Some("0"));
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let location = Location::parse(Some("transactionid=lower"));
        assert_eq!(location.transaction_id(), None);
    }
}
