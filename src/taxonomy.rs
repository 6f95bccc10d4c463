//! Conversion between URL path segments and store filter values.
//!
//! Path segments are lower-case and hyphen-separated; store values are
//! title-case and space-separated. Values with irregular capitalization
//! ("IPA"-style abbreviations) do not survive the round trip; that loss
//! is accepted rather than papered over with heuristics.

/// `"single-malt"` -> `"Single Malt"`.
///
/// Replaces each hyphen with a space, then upper-cases the first letter
/// of every space-delimited word. The result is used verbatim as the
/// exact-match filter value.
pub fn to_filter_value(segment: &str) -> String {
    segment
        .replace('-', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"Single Malt"` -> `"single-malt"`. Used only when building outbound
/// links from a store value.
pub fn to_path_segment(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
