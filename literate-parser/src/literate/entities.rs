//! Named entity decoding
//!
//! Comments taken from markup arrive escaped. Only `&apos;`, `&amp;`, `&lt;` and `&gt;` are
//! decoded, case-sensitively, in a single left-to-right scan, so `&amp;lt;` decodes to `&lt;`
//! and not to `<`. Anything else is left as written.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&(apos|amp|lt|gt);").unwrap());

fn decode_entity(name: &str) -> &'static str {
    match name {
        "apos" => "'",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        _ => unreachable!("entity pattern only matches known names"),
    }
}

/// Replaces the supported named entities with the characters they stand for.
pub fn html_decode(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| decode_entity(&caps[1]))
        .into_owned()
}
