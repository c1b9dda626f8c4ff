/// Derive a URL slug from a post title.
///
/// Lower-cases the title, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and drops hyphens at either end.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::generate_slug;

    fn is_well_formed(slug: &str) -> bool {
        !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn trims_and_collapses_punctuation() {
        assert_eq!(generate_slug("  My Trip! 2024  "), "my-trip-2024");
        assert_eq!(generate_slug("Hello, World"), "hello-world");
        assert_eq!(generate_slug("a---b___c"), "a-b-c");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(generate_slug("Café Ubud"), "caf-ubud");
        assert_eq!(generate_slug("Ñandú"), "and");
    }

    #[test]
    fn nothing_usable_gives_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!! ???"), "");
    }

    #[test]
    fn output_shape_holds_for_awkward_titles() {
        for title in [
            "-leading",
            "trailing-",
            "  spaced   out  ",
            "MiXeD CaSe 123",
            "tabs\tand\nnewlines",
            "emoji 🌴 villa",
            "100% Bali",
        ] {
            let slug = generate_slug(title);
            assert!(is_well_formed(&slug), "{title:?} -> {slug:?}");
        }
    }
}
