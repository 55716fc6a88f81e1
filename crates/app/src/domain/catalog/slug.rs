//! Slug generation.

use rand::Rng;

/// Build a URL slug from a title: lowercased alphanumeric runs joined by
/// `-`, suffixed with a random number so same-titled rows stay unique.
pub(crate) fn create_slug(title: &str) -> String {
    let base = slugify(title);
    let suffix: u32 = rand::thread_rng().gen_range(0..100_000);

    if base.is_empty() {
        suffix.to_string()
    } else {
        format!("{base}-{suffix}")
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Crime and Punishment"), "crime-and-punishment");
        assert_eq!(slugify("  The  Idiot "), "the-idiot");
        assert_eq!(slugify("1984"), "1984");
    }

    #[test]
    fn slugify_drops_non_alphanumerics() {
        assert_eq!(slugify("war & peace!"), "war-peace");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn create_slug_appends_numeric_suffix() {
        let slug = create_slug("Dead Souls");

        let (base, suffix) = slug.rsplit_once('-').expect("slug should have a suffix");

        assert_eq!(base, "dead-souls");
        assert!(
            suffix.parse::<u32>().expect("suffix should be numeric") < 100_000,
            "suffix out of range: {suffix}"
        );
    }

    #[test]
    fn create_slug_of_symbols_is_suffix_only() {
        let slug = create_slug("???");

        assert!(
            slug.parse::<u32>().is_ok(),
            "expected bare numeric slug, got {slug}"
        );
    }
}
