//! Turns a raw filename into a canonical token sequence.

/// Strip the extension, lowercase, and split on runs of non-alphanumeric
/// characters. Numeric tokens are kept: they often encode chapter or set
/// numbers that the scorer needs for pairing. Never fails; an empty or
/// punctuation-only name yields an empty token list.
pub fn normalize(raw_name: &str) -> (String, Vec<String>) {
    let stem = strip_extension(raw_name);
    let tokens = stem
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    (stem.to_string(), tokens)
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        // A leading dot is a hidden-file prefix, not an extension.
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
