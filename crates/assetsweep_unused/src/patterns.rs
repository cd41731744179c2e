use log::debug;
use regex::Regex;

/// The syntactic shapes an asset reference can take.
///
/// All three are compiled into one alternation; when a match could be read
/// more than one way, the kinds are consulted in [`PatternKind::PRECEDENCE`]
/// order and the first non-empty capture wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// `src="…"`, `url="…"`, `:src="…"`, `v-bind:src="…"`
    Attribute,
    /// `require('…')`, `import('…')`
    ImportCall,
    /// `url(…)` with or without quotes
    StylesheetUrl,
}

impl PatternKind {
    pub const PRECEDENCE: [PatternKind; 3] =
        [PatternKind::Attribute, PatternKind::ImportCall, PatternKind::StylesheetUrl];

    fn group(self) -> &'static str {
        match self {
            PatternKind::Attribute => "attribute",
            PatternKind::ImportCall => "import",
            PatternKind::StylesheetUrl => "url",
        }
    }

    /// Regex source for this kind. `ext` is an alternation of escaped extensions.
    fn source(self, ext: &str) -> String {
        // An optional ?query or #fragment may follow the extension
        let path = format!(r#"[^"']+?\.(?:{ext})(?:[?#][^"']*)?"#);
        match self {
            PatternKind::Attribute => {
                format!(r#"(?:(?:v-bind)?:)?\b(?:src|url)\s*=\s*["'](?P<attribute>{path})["']"#)
            }
            PatternKind::ImportCall => {
                format!(r#"\b(?:require|import)\s*\(\s*["'](?P<import>{path})["']\s*\)"#)
            }
            PatternKind::StylesheetUrl => r#"\burl\(\s*["']?(?P<url>[^"')\s]+)["']?\s*\)"#.into(),
        }
    }
}

/// The compiled pattern table for one set of asset extensions
#[derive(Debug, Clone)]
pub struct ReferencePatterns {
    regex: Regex,
}

impl ReferencePatterns {
    pub fn new<S: AsRef<str>>(asset_extensions: &[S]) -> Result<Self, regex::Error> {
        let ext = asset_extensions
            .iter()
            .map(|e| regex::escape(e.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let source = PatternKind::PRECEDENCE
            .iter()
            .map(|kind| kind.source(&ext))
            .collect::<Vec<_>>()
            .join("|");
        debug!("Compiled reference pattern for extensions: {}", ext);
        Ok(Self { regex: Regex::new(&source)? })
    }

    /// Every raw reference in `region`, in order of appearance
    pub fn find_references<'a>(&self, region: &'a str) -> Vec<(PatternKind, &'a str)> {
        self.regex
            .captures_iter(region)
            .filter_map(|caps| {
                PatternKind::PRECEDENCE.iter().find_map(|kind| {
                    caps.name(kind.group())
                        .filter(|m| !m.as_str().is_empty())
                        .map(|m| (*kind, m.as_str()))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> ReferencePatterns {
        ReferencePatterns::new(&["jpg", "png", "svg"]).unwrap()
    }

    fn refs(region: &str) -> Vec<(PatternKind, &str)> {
        patterns().find_references(region)
    }

    #[test]
    fn test_src_attribute() {
        assert_eq!(refs(r#"<img src="a.png">"#), vec![(PatternKind::Attribute, "a.png")]);
        assert_eq!(refs(r#"<img src = 'img/b.jpg' />"#), vec![(PatternKind::Attribute, "img/b.jpg")]);
    }

    #[test]
    fn test_binding_prefixed_src() {
        assert_eq!(refs(r#"<img :src="'./a.svg'">"#), vec![]);
        assert_eq!(refs(r#"<img :src="./a.svg">"#), vec![(PatternKind::Attribute, "./a.svg")]);
        assert_eq!(
            refs(r#"<img v-bind:src="./a.svg">"#),
            vec![(PatternKind::Attribute, "./a.svg")]
        );
    }

    #[test]
    fn test_url_attribute() {
        assert_eq!(refs(r#"<x-hero url="bg.jpg">"#), vec![(PatternKind::Attribute, "bg.jpg")]);
    }

    #[test]
    fn test_attribute_requires_asset_extension() {
        assert!(refs(r#"<script src="main.js"></script>"#).is_empty());
        assert!(refs(r#"<img src="a.png.bak">"#).is_empty());
    }

    #[test]
    fn test_attribute_keeps_query_for_later_stripping() {
        assert_eq!(
            refs(r#"<img src="img/logo.png?v=2">"#),
            vec![(PatternKind::Attribute, "img/logo.png?v=2")]
        );
        assert_eq!(
            refs(r#"<use href="x" src="icons.svg#home">"#),
            vec![(PatternKind::Attribute, "icons.svg#home")]
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(refs(r#"<img SRC="a.png">"#).is_empty());
        assert!(refs(r#"<img src="a.PNG">"#).is_empty());
    }

    #[test]
    fn test_import_calls() {
        assert_eq!(
            refs(r#"<img :src="require('./assets/a.png')">"#),
            vec![(PatternKind::ImportCall, "./assets/a.png")]
        );
        assert_eq!(
            refs(r#"const icon = import("../icons/b.svg")"#),
            vec![(PatternKind::ImportCall, "../icons/b.svg")]
        );
        assert!(refs(r#"require('./data.json')"#).is_empty());
    }

    #[test]
    fn test_stylesheet_url() {
        assert_eq!(
            refs(".a { background: url(img/a.png); }"),
            vec![(PatternKind::StylesheetUrl, "img/a.png")]
        );
        assert_eq!(
            refs(r#".b { background: url( "img/b.jpg" ); }"#),
            vec![(PatternKind::StylesheetUrl, "img/b.jpg")]
        );
        assert_eq!(
            refs(r#"@font-face { src: url('fonts/x.woff2'); }"#),
            vec![(PatternKind::StylesheetUrl, "fonts/x.woff2")]
        );
    }

    #[test]
    fn test_inline_style_url() {
        assert_eq!(
            refs(r#"<div style="background-image: url('hero.jpg')"></div>"#),
            vec![(PatternKind::StylesheetUrl, "hero.jpg")]
        );
    }

    #[test]
    fn test_multiple_references_in_order() {
        let region = r#"<img src="a.png"><img src="b.svg"><i style="background:url(c.jpg)"></i>"#;
        let found: Vec<&str> = refs(region).into_iter().map(|(_, r)| r).collect();
        assert_eq!(found, vec!["a.png", "b.svg", "c.jpg"]);
    }

    #[test]
    fn test_custom_extensions_are_escaped() {
        let patterns = ReferencePatterns::new(&["webp", "c++"]).unwrap();
        assert_eq!(
            patterns.find_references(r#"<img src="a.webp">"#),
            vec![(PatternKind::Attribute, "a.webp")]
        );
        assert!(patterns.find_references(r#"<img src="a.png">"#).is_empty());
    }

    #[test]
    fn test_no_references() {
        assert!(refs("<p>No images here</p>").is_empty());
    }
}
