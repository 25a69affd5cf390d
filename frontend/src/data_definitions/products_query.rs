//! Query-string state of the products page.
//!
//! Contract: `category=<id>`, `filters=<varId>[<optId>%<optId>...]~...`
//! omitted when no filter is active, `page=<1-based>` omitted on the
//! first page. Parsing is best-effort in the same spirit as the filter
//! codec: unknown keys and malformed values fall back to defaults.

use std::fmt::Display;

use common::facet_selection::FacetSelection;
use common::filter_codec;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductsQuery {
    pub category: u64,
    pub selection: FacetSelection,
    /// Zero-based, displayed 1-based.
    pub page_number: u64,
}

// Display writes the canonical query string the route serializes to.
impl Display for ProductsQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category={}", self.category)?;
        if let Some(encoded) = filter_codec::encode(&self.selection) {
            write!(f, "&filters={encoded}")?;
        }
        if self.page_number > 0 {
            write!(f, "&page={}", self.page_number + 1)?;
        }
        Ok(())
    }
}

// Parse the query string handed over by the router on every navigation,
// including browser back/forward.
impl From<&str> for ProductsQuery {
    fn from(query: &str) -> Self {
        let mut result = Self::default();
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "category" => result.category = value.parse().unwrap_or(0),
                "filters" => {
                    // a raw encoding always contains '['; its absence
                    // means the value came back percent-escaped, where
                    // the option separator itself is written as %25
                    let raw = if value.contains('[') {
                        value.to_string()
                    } else {
                        percent_decode(value)
                    };
                    result.selection = filter_codec::decode(&raw);
                }
                "page" => {
                    // stored zero-based, written one-based
                    let page: u64 = value.parse().unwrap_or(1);
                    result.page_number = page.saturating_sub(1);
                }
                _ => {}
            }
        }
        result
    }
}

/// Undo `%XX` escapes, leaving invalid sequences untouched.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(hex) = value.get(i + 1..i + 3) {
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    out.push(byte);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_serializes_to_category_only() {
        let q = ProductsQuery { category: 3, ..Default::default() };
        assert_eq!(q.to_string(), "category=3");
    }

    #[test]
    fn filters_and_page_append_when_active() {
        let mut q = ProductsQuery { category: 3, ..Default::default() };
        q.selection.toggle(3, 7, "red");
        q.page_number = 2;
        assert_eq!(q.to_string(), "category=3&filters=3[7]&page=3");
    }

    #[test]
    fn parse_inverts_display() {
        let mut q = ProductsQuery { category: 5, ..Default::default() };
        q.selection.toggle(3, 7, "");
        q.selection.toggle(3, 9, "");
        q.selection.toggle(6, 2, "");
        q.page_number = 4;

        let parsed = ProductsQuery::from(q.to_string().as_str());
        assert_eq!(parsed, q);
    }

    #[test]
    fn missing_params_decode_to_defaults() {
        let parsed = ProductsQuery::from("category=9");
        assert_eq!(parsed.category, 9);
        assert!(parsed.selection.is_empty());
        assert_eq!(parsed.page_number, 0);
    }

    #[test]
    fn page_one_is_page_zero() {
        assert_eq!(ProductsQuery::from("category=1&page=1").page_number, 0);
        // page=0 is out of contract but must not underflow
        assert_eq!(ProductsQuery::from("category=1&page=0").page_number, 0);
    }

    #[test]
    fn escaped_filter_values_parse_too() {
        let parsed = ProductsQuery::from("category=1&filters=3%5B7%259%5D");
        assert_eq!(parsed.selection.0[&3].option_ids, vec![7, 9]);
    }

    #[test]
    fn raw_filter_values_are_never_unescaped() {
        // "%25" here is option ids 7 and 25, not an escaped '%'
        let parsed = ProductsQuery::from("category=1&filters=3[7%25]");
        assert_eq!(parsed.selection.0[&3].option_ids, vec![7, 25]);
    }

    #[test]
    fn garbage_filters_decode_to_empty_selection() {
        let parsed = ProductsQuery::from("category=1&filters=not-a-filter");
        assert!(parsed.selection.is_empty());
    }
}
