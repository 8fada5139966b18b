//! Tag and label sanitization.
//!
//! Every character outside the dialect's allowed set becomes `.`. The
//! Kubernetes dialect then strips non-alphanumeric characters from both ends.
//! All functions here are total: any input, including `""`, has an output.

use crate::models::Dialect;
use std::collections::BTreeMap;

const REPLACEMENT: char = '.';

fn sanitize_with(input: &str, allowed: impl Fn(char) -> bool, trim: bool) -> String {
    let replaced: String = input
        .chars()
        .map(|c| if allowed(c) { c } else { REPLACEMENT })
        .collect();
    if trim {
        replaced
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_string()
    } else {
        replaced
    }
}

/// Sanitize a tag or label value.
pub fn sanitize_value(input: &str, dialect: Dialect) -> String {
    sanitize_with(
        input,
        |c| dialect.allows_in_value(c),
        dialect.trims_boundaries(),
    )
}

/// Sanitize a tag or label key.
///
/// For Kubernetes this also keeps `/`, so prefixes like `example.com/role`
/// survive.
pub fn sanitize_key(input: &str, dialect: Dialect) -> String {
    sanitize_with(
        input,
        |c| dialect.allows_in_key(c),
        dialect.trims_boundaries(),
    )
}

/// Sanitize every key and value of a map.
///
/// If two keys sanitize to the same output, the one iterated last wins.
/// Callers must not rely on which.
pub fn sanitize_map<I, K, V>(map: I, dialect: Dialect) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut sanitized = BTreeMap::new();
    for (k, v) in map {
        let key = sanitize_key(k.as_ref(), dialect);
        let value = sanitize_value(v.as_ref(), dialect);
        if let Some(previous) = sanitized.insert(key.clone(), value) {
            log::warn!(
                "Sanitized key '{key}' (from '{}') collides with an earlier key, dropping '{previous}'",
                k.as_ref()
            );
        }
    }
    sanitized
}
