//! Isolating the part of a source file that is scanned for references.
//!
//! Markup and stylesheets are scanned whole. Single-file components mix
//! markup, logic and style under separate top-level tags; only the markup
//! inside the top-level `<template>` block is scanned.

use assetsweep_core::SourceKind;
use log::trace;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unterminated <{tag}> opening tag at byte {offset}")]
    UnterminatedTag { tag: String, offset: usize },

    #[error("unclosed <{tag}> block opened at byte {offset}")]
    UnclosedBlock { tag: String, offset: usize },

    #[error("unclosed comment at byte {offset}")]
    UnclosedComment { offset: usize },
}

pub trait TemplateExtractor: Send + Sync {
    /// The region of `content` to scan, or `None` when there is nothing to scan
    fn scan_region<'a>(&self, content: &'a str) -> Result<Option<&'a str>, TemplateError>;
}

/// Scans the entire file
pub struct WholeFile;

impl TemplateExtractor for WholeFile {
    fn scan_region<'a>(&self, content: &'a str) -> Result<Option<&'a str>, TemplateError> {
        Ok(Some(content))
    }
}

/// Scans the top-level `<template>` block of a single-file component
pub struct ComponentTemplate;

impl TemplateExtractor for ComponentTemplate {
    fn scan_region<'a>(&self, content: &'a str) -> Result<Option<&'a str>, TemplateError> {
        find_template_block(content)
    }
}

pub fn extractor_for(kind: SourceKind) -> &'static dyn TemplateExtractor {
    match kind {
        SourceKind::Component => &ComponentTemplate,
        SourceKind::Markup | SourceKind::Stylesheet => &WholeFile,
    }
}

fn find_template_block(content: &str) -> Result<Option<&str>, TemplateError> {
    let mut pos = 0;

    while let Some(rel) = content[pos..].find('<') {
        let start = pos + rel;
        let rest = &content[start..];

        if rest.starts_with("<!--") {
            pos = skip_comment(content, start)?;
            continue;
        }

        // Closing tags and stray `<` at the top level carry no block
        let Some(tag) = tag_name(&rest[1..]) else {
            pos = start + 1;
            continue;
        };

        let open_end = opening_tag_end(content, start)
            .ok_or_else(|| TemplateError::UnterminatedTag { tag: tag.to_string(), offset: start })?;
        if content[..open_end].ends_with("/>") {
            pos = open_end;
            continue;
        }

        if tag == "template" {
            let close = matching_template_close(content, open_end)?.ok_or_else(|| {
                TemplateError::UnclosedBlock { tag: tag.to_string(), offset: start }
            })?;
            trace!("Found <template> block at bytes {}..{}", open_end, close);
            return Ok(Some(&content[open_end..close]));
        }

        // Other blocks (script, style, custom) are raw text up to their closing tag
        let closing = format!("</{}", tag);
        let close = content[open_end..]
            .find(&closing)
            .ok_or_else(|| TemplateError::UnclosedBlock { tag: tag.to_string(), offset: start })?;
        trace!("Skipping top-level <{}> block", tag);
        pos = open_end + close + closing.len();
    }

    Ok(None)
}

/// Element name at the start of `s` (just after the `<`)
fn tag_name(s: &str) -> Option<&str> {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-')).unwrap_or(s.len());
    Some(&s[..end])
}

/// Byte index just past the `>` closing the tag opened at `start`.
/// A `>` inside a quoted attribute value does not count.
fn opening_tag_end(content: &str, start: usize) -> Option<usize> {
    let mut quote = None;
    for (i, c) in content[start..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(start + i + 1),
            (None, _) => {}
        }
    }
    None
}

fn skip_comment(content: &str, start: usize) -> Result<usize, TemplateError> {
    content[start..]
        .find("-->")
        .map(|end| start + end + 3)
        .ok_or(TemplateError::UnclosedComment { offset: start })
}

/// Start of the `</template>` balancing the block whose body begins at `from`.
/// Nested `<template>` elements (slots, conditionals) are counted.
fn matching_template_close(content: &str, from: usize) -> Result<Option<usize>, TemplateError> {
    let mut depth = 1usize;
    let mut pos = from;

    while let Some(rel) = content[pos..].find('<') {
        let start = pos + rel;
        let rest = &content[start..];

        if rest.starts_with("<!--") {
            pos = skip_comment(content, start)?;
            continue;
        }

        if let Some(after) = rest.strip_prefix("</template")
            && ends_name(after)
        {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(start));
            }
            pos = start + "</template".len();
            continue;
        }

        if let Some(after) = rest.strip_prefix("<template")
            && ends_name(after)
        {
            let open_end = opening_tag_end(content, start).ok_or_else(|| {
                TemplateError::UnterminatedTag { tag: "template".to_string(), offset: start }
            })?;
            if !content[..open_end].ends_with("/>") {
                depth += 1;
            }
            pos = open_end;
            continue;
        }

        pos = start + 1;
    }

    Ok(None)
}

fn ends_name(after: &str) -> bool {
    after.is_empty() || after.starts_with(|c: char| c == '>' || c == '/' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(content: &str) -> Option<&str> {
        ComponentTemplate.scan_region(content).unwrap()
    }

    #[test]
    fn test_whole_file() {
        let css = ".hero { background: url(img/hero.jpg); }";
        assert_eq!(WholeFile.scan_region(css).unwrap(), Some(css));
    }

    #[test]
    fn test_template_block() {
        let sfc = r#"<template>
  <img src="./a.png">
</template>

<script>
export default { data: () => ({ logo: 'b.png' }) }
</script>

<style>
.x { background: url(c.png); }
</style>
"#;
        let body = region(sfc).unwrap();
        assert!(body.contains("a.png"));
        assert!(!body.contains("b.png"));
        assert!(!body.contains("c.png"));
    }

    #[test]
    fn test_template_after_script() {
        let sfc = "<script setup>\nconst t = '<template>x</template>'\n</script>\n<template lang=\"html\"><img src=\"a.png\"></template>";
        assert_eq!(region(sfc), Some("<img src=\"a.png\">"));
    }

    #[test]
    fn test_nested_templates() {
        let sfc = r#"<template>
  <list>
    <template #item="{ x }"><img src="x.png"></template>
    <template v-if="ok"/>
  </list>
  <img src="after.png">
</template>
<style>.y{}</style>"#;
        let body = region(sfc).unwrap();
        assert!(body.contains("x.png"));
        assert!(body.contains("after.png"));
        assert!(!body.contains(".y{}"));
    }

    #[test]
    fn test_gt_inside_attribute_value() {
        let sfc = r#"<template data-x="a > b"><img src="a.png"></template>"#;
        assert_eq!(region(sfc), Some(r#"<img src="a.png">"#));
    }

    #[test]
    fn test_comments_are_skipped() {
        let sfc = "<!-- <template>old</template> -->\n<template><img src=\"new.png\"></template>";
        assert_eq!(region(sfc), Some("<img src=\"new.png\">"));
    }

    #[test]
    fn test_no_template_block() {
        let sfc = "<script>export default {}</script>\n<style>.a{}</style>";
        assert_eq!(region(sfc), None);
        assert_eq!(region(""), None);
    }

    #[test]
    fn test_similar_tag_names_are_not_templates() {
        let sfc = "<templates>nope</templates>";
        assert_eq!(region(sfc), None);
    }

    #[test]
    fn test_unclosed_template_is_error() {
        let err = ComponentTemplate.scan_region("<template><img src=\"a.png\">").unwrap_err();
        assert_eq!(err, TemplateError::UnclosedBlock { tag: "template".to_string(), offset: 0 });
    }

    #[test]
    fn test_unterminated_opening_tag_is_error() {
        let err = ComponentTemplate.scan_region("<template lang=\"html\"").unwrap_err();
        assert!(matches!(err, TemplateError::UnterminatedTag { .. }));
    }

    #[test]
    fn test_unclosed_script_is_error() {
        let err = ComponentTemplate.scan_region("<script>let a = 1").unwrap_err();
        assert_eq!(err, TemplateError::UnclosedBlock { tag: "script".to_string(), offset: 0 });
    }

    #[test]
    fn test_extractor_for_kind() {
        let sfc = "<script></script>";
        assert_eq!(extractor_for(SourceKind::Component).scan_region(sfc).unwrap(), None);
        assert_eq!(extractor_for(SourceKind::Markup).scan_region(sfc).unwrap(), Some(sfc));
        assert_eq!(extractor_for(SourceKind::Stylesheet).scan_region(sfc).unwrap(), Some(sfc));
    }
}
