//! Syntactic cleanup shared by every prompt builder.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_MULTI_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static RE_MULTI_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",{2,}").expect("valid regex"));
static RE_MULTI_PIPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|{2,}").expect("valid regex"));

/// Clean up prompt text.
///
/// Steps, in order: underscores become spaces, whitespace runs collapse to a
/// single space, spaces before commas are dropped, comma runs and `||` runs
/// collapse, and the result is trimmed. Applying it twice gives the same
/// result as applying it once.
pub fn normalize(text: &str) -> String {
    let text = text.replace('_', " ");
    let text = RE_MULTI_WHITESPACE.replace_all(&text, " ");
    let text = text.replace(" ,", ",");
    let text = RE_MULTI_COMMA.replace_all(&text, ",");
    let text = RE_MULTI_PIPE.replace_all(&text, "|");
    text.trim().to_string()
}
