//! Embed snippets for imported images.
//!
//! Two shapes are supported:
//!
//! ```text
//! simple  ![Grafana dashboard](/images/blog/monitoring/grafana.webp)
//! figure  <Figure src="/images/blog/monitoring/grafana.webp" alt="Grafana dashboard" caption="Node exporter panel" />
//! ```
//!
//! The figure form is an MDX component, so it only works in `.mdx` posts.
//! Values are inserted verbatim.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnippetError {
    #[error("unknown snippet kind {0:?}; use \"simple\" or \"figure\"")]
    InvalidKind(String),
}

/// Which embed shape to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    /// Plain Markdown image: `![alt](path)`.
    Simple,
    /// MDX `<Figure>` component with optional caption.
    Figure,
}

impl SnippetKind {
    pub const ALL: [SnippetKind; 2] = [SnippetKind::Simple, SnippetKind::Figure];

    pub fn as_str(self) -> &'static str {
        match self {
            SnippetKind::Simple => "simple",
            SnippetKind::Figure => "figure",
        }
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a kind by name (`simple`, `figure`).
///
/// Entry point for library callers that take the kind as text; the
/// interactive importer picks it from a numbered menu instead.
impl FromStr for SnippetKind {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(SnippetKind::Simple),
            "figure" => Ok(SnippetKind::Figure),
            other => Err(SnippetError::InvalidKind(other.to_string())),
        }
    }
}

/// Build the snippet to paste into a post.
///
/// `caption` is only used by [`SnippetKind::Figure`]; `None` or an empty
/// string omits the attribute entirely.
pub fn build_snippet(
    public_path: &str,
    alt: &str,
    kind: SnippetKind,
    caption: Option<&str>,
) -> String {
    match kind {
        SnippetKind::Simple => format!("![{alt}]({public_path})"),
        SnippetKind::Figure => match caption.filter(|c| !c.is_empty()) {
            Some(caption) => {
                format!(r#"<Figure src="{public_path}" alt="{alt}" caption="{caption}" />"#)
            }
            None => format!(r#"<Figure src="{public_path}" alt="{alt}" />"#),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/images/blog/mi-post/foto.webp";

    #[test]
    fn simple_is_markdown_image() {
        assert_eq!(
            build_snippet(PATH, "Mi foto", SnippetKind::Simple, None),
            "![Mi foto](/images/blog/mi-post/foto.webp)"
        );
    }

    #[test]
    fn simple_ignores_caption() {
        assert_eq!(
            build_snippet(PATH, "Mi foto", SnippetKind::Simple, Some("ignored")),
            "![Mi foto](/images/blog/mi-post/foto.webp)"
        );
    }

    #[test]
    fn figure_with_caption() {
        assert_eq!(
            build_snippet(
                PATH,
                "Mi foto",
                SnippetKind::Figure,
                Some("Descripción de la imagen")
            ),
            r#"<Figure src="/images/blog/mi-post/foto.webp" alt="Mi foto" caption="Descripción de la imagen" />"#
        );
    }

    #[test]
    fn figure_attribute_order_is_src_alt_caption() {
        let s = build_snippet(PATH, "a", SnippetKind::Figure, Some("c"));
        let src = s.find("src=").unwrap();
        let alt = s.find("alt=").unwrap();
        let caption = s.find("caption=").unwrap();
        assert!(src < alt && alt < caption);
    }

    #[test]
    fn figure_without_caption_omits_attribute() {
        let s = build_snippet(PATH, "Mi foto", SnippetKind::Figure, None);
        assert_eq!(s, r#"<Figure src="/images/blog/mi-post/foto.webp" alt="Mi foto" />"#);
        assert!(!s.contains("caption"));
    }

    #[test]
    fn figure_with_empty_caption_omits_attribute() {
        let s = build_snippet(PATH, "Mi foto", SnippetKind::Figure, Some(""));
        assert!(!s.contains("caption"));
    }

    #[test]
    fn parse_known_kinds() {
        assert_eq!("simple".parse::<SnippetKind>(), Ok(SnippetKind::Simple));
        assert_eq!("figure".parse::<SnippetKind>(), Ok(SnippetKind::Figure));
    }

    #[test]
    fn parse_unknown_kind_names_value_and_choices() {
        let err = "video".parse::<SnippetKind>().unwrap_err();
        assert_eq!(err, SnippetError::InvalidKind("video".into()));
        let msg = err.to_string();
        assert!(msg.contains("video"));
        assert!(msg.contains("simple"));
        assert!(msg.contains("figure"));
    }

    #[test]
    fn kind_display_round_trips_through_parse() {
        for kind in SnippetKind::ALL {
            assert_eq!(kind.to_string().parse::<SnippetKind>(), Ok(kind));
        }
    }
}
