//! Pure string transforms for derived identifiers.

/// Convert a hyphenated slug to a symbol name (e.g., "user-profile" -> "UserProfile").
///
/// Each hyphen-separated word has its first character capitalized; the rest
/// of the word is left unchanged. An empty slug yields an empty symbol name.
pub fn to_symbol_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a hyphenated slug to a resource-safe name (e.g., "user-profile" -> "user_profile").
pub fn to_resource_name(slug: &str) -> String {
    slug.replace('-', "_")
}
