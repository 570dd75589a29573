/// URL-safe slug derivation
///
/// A slug is derived from a username exactly once, at user creation time,
/// and is never recomputed on update. The normalization is pure: lowercase
/// ASCII alphanumerics are kept, every other run of characters collapses to
/// a single hyphen, and leading/trailing hyphens are trimmed.
///
/// # Example
///
/// ```
/// use taskboard_shared::slug::slugify;
///
/// assert_eq!(slugify("Jane Doe"), "jane-doe");
/// assert_eq!(slugify("  mr__smith  "), "mr-smith");
/// ```

const MAX_SLUG_LEN: usize = 80;

/// Normalizes a username into a URL-safe slug
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}
