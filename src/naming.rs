//! Filename conventions for imported images.
//!
//! Source files arrive with whatever name the camera or screenshot tool gave
//! them. Before they land under the public images root they are slugified:
//!
//! - `My Photo_01` → `my-photo-01` (output file stem)
//! - `my-photo-01` → `my photo 01` (default alt text)

/// Slugify a filename stem: trimmed, lowercase, spaces and underscores → hyphens.
///
/// No other characters are touched; accented letters are lowercased but kept.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

/// Whether `stem` names a file in the current directory only.
///
/// Rejects path separators of either platform and `..` anywhere.
pub fn is_plain_stem(stem: &str) -> bool {
    !stem.is_empty() && !stem.contains(['/', '\\']) && !stem.contains("..")
}

/// Display text for a slug: dashes become spaces.
pub fn alt_from_slug(slug: &str) -> String {
    slug.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases() {
        assert_eq!(slugify("Screenshot"), "screenshot");
    }

    #[test]
    fn slugify_spaces_and_underscores_become_dashes() {
        assert_eq!(slugify("My Photo_01"), "my-photo-01");
    }

    #[test]
    fn slugify_keeps_existing_dashes() {
        assert_eq!(slugify("grafana-dashboard"), "grafana-dashboard");
    }

    #[test]
    fn slugify_trims_surrounding_whitespace() {
        assert_eq!(slugify("  Nuevo Nombre "), "nuevo-nombre");
    }

    #[test]
    fn slugify_keeps_accents() {
        assert_eq!(slugify("Configuración SSH"), "configuración-ssh");
    }

    #[test]
    fn plain_stem_accepts_slugs() {
        assert!(is_plain_stem("my-photo-01"));
        assert!(is_plain_stem("kernel-6.8"));
    }

    #[test]
    fn plain_stem_rejects_directories() {
        assert!(!is_plain_stem("shots/new"));
        assert!(!is_plain_stem("shots\\new"));
        assert!(!is_plain_stem(".."));
        assert!(!is_plain_stem("..-up"));
        assert!(!is_plain_stem(""));
    }

    #[test]
    fn alt_from_slug_dashes_become_spaces() {
        assert_eq!(alt_from_slug("my-photo-01"), "my photo 01");
    }

    #[test]
    fn alt_from_slug_without_dashes_unchanged() {
        assert_eq!(alt_from_slug("screenshot"), "screenshot");
    }
}
