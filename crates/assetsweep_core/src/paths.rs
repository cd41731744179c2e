use log::trace;
use path_clean::clean;
use std::path::{Component, Path};

/// Drop everything from the first `?` or `#` on
pub fn strip_query_and_fragment(reference: &str) -> &str {
    match reference.find(['?', '#']) {
        Some(idx) => &reference[..idx],
        None => reference,
    }
}

/// Whether a reference points somewhere other than the local tree
/// (`https://…`, `data:…`, `//cdn…`).
pub fn is_external(reference: &str) -> bool {
    if reference.starts_with("//") {
        return true;
    }
    match reference.find(':') {
        // A single letter before the colon is a drive, not a scheme
        Some(idx) if idx > 1 => {
            let scheme = &reference[..idx];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Last `/`-separated segment of a root-relative key
pub fn basename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Express `path` relative to `root` as a `/`-joined key.
///
/// Returns `None` when the path is not under the root.
pub fn root_key(root: &Path, path: &Path) -> Option<String> {
    let root = clean(root);
    let path = clean(path);

    let rel = if root == Path::new(".") && path.is_relative() {
        path.as_path()
    } else {
        path.strip_prefix(&root).ok()?
    };

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(p) => parts.push(p.to_string_lossy()),
            _ => return None,
        }
    }

    if parts.is_empty() { None } else { Some(parts.join("/")) }
}

/// Resolve a reference found in `source` to a root-relative key.
///
/// The query and fragment are stripped first. Relative references resolve
/// against the directory of `source`; a leading `/` means the scan root.
/// External URLs and references that land outside the root resolve to `None`.
pub fn resolve_reference(root: &Path, source: &Path, reference: &str) -> Option<String> {
    let stripped = strip_query_and_fragment(reference).trim();
    if stripped.is_empty() || is_external(stripped) {
        trace!("Ignoring non-local reference '{}' in {}", reference, source.display());
        return None;
    }

    let joined = if let Some(from_root) = stripped.strip_prefix('/') {
        root.join(from_root)
    } else {
        source.parent().unwrap_or(root).join(stripped)
    };

    let key = root_key(root, &joined);
    if key.is_none() {
        trace!("Reference '{}' in {} resolves outside root", reference, source.display());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query_and_fragment("img/logo.png?v=2"), "img/logo.png");
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_query_and_fragment("icons.svg#home"), "icons.svg");
    }

    #[test]
    fn test_strip_uses_first_marker() {
        assert_eq!(strip_query_and_fragment("a.svg#x?y"), "a.svg");
        assert_eq!(strip_query_and_fragment("a.svg?y#x"), "a.svg");
        assert_eq!(strip_query_and_fragment("plain.png"), "plain.png");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://cdn.example.com/a.png"));
        assert!(is_external("data:image/png;base64,AAAA"));
        assert!(is_external("//cdn.example.com/a.png"));
        assert!(!is_external("img/a.png"));
        assert!(!is_external("../a.png"));
        assert!(!is_external("C:/a.png"));
        assert!(!is_external("img/a:b.png"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("src/assets/logo.png"), "logo.png");
        assert_eq!(basename("logo.png"), "logo.png");
    }

    #[test]
    fn test_root_key_nested() {
        let key = root_key(Path::new("/project"), Path::new("/project/src/assets/a.png"));
        assert_eq!(key.as_deref(), Some("src/assets/a.png"));
    }

    #[test]
    fn test_root_key_outside_root() {
        assert_eq!(root_key(Path::new("/project"), Path::new("/elsewhere/a.png")), None);
        assert_eq!(root_key(Path::new("/project"), Path::new("/project")), None);
    }

    #[test]
    fn test_root_key_with_dot_root() {
        assert_eq!(root_key(Path::new("."), Path::new("./img/a.png")).as_deref(), Some("img/a.png"));
        assert_eq!(root_key(Path::new("."), Path::new("img/a.png")).as_deref(), Some("img/a.png"));
        assert_eq!(root_key(Path::new("."), Path::new("../a.png")), None);
    }

    #[test]
    fn test_resolve_relative_to_source_dir() {
        let root = Path::new("/project");
        let source = Path::new("/project/src/components/Foo.vue");
        assert_eq!(
            resolve_reference(root, source, "./assets/a.png").as_deref(),
            Some("src/components/assets/a.png")
        );
        assert_eq!(
            resolve_reference(root, source, "assets/a.png").as_deref(),
            Some("src/components/assets/a.png")
        );
    }

    #[test]
    fn test_resolve_parent_dir() {
        let root = Path::new("/project");
        let source = Path::new("/project/src/components/Foo.vue");
        assert_eq!(
            resolve_reference(root, source, "../../img/bg.jpg").as_deref(),
            Some("img/bg.jpg")
        );
    }

    #[test]
    fn test_resolve_query_matches_plain() {
        let root = Path::new("/project");
        let source = Path::new("/project/index.html");
        assert_eq!(
            resolve_reference(root, source, "img/logo.png?v=2"),
            resolve_reference(root, source, "img/logo.png")
        );
    }

    #[test]
    fn test_resolve_root_absolute() {
        let root = Path::new("/project");
        let source = Path::new("/project/src/pages/Home.vue");
        assert_eq!(resolve_reference(root, source, "/img/a.png").as_deref(), Some("img/a.png"));
    }

    #[test]
    fn test_resolve_rejects_outside_and_external() {
        let root = Path::new("/project");
        let source = Path::new("/project/index.html");
        assert_eq!(resolve_reference(root, source, "../outside.png"), None);
        assert_eq!(resolve_reference(root, source, "https://x.test/a.png"), None);
        assert_eq!(resolve_reference(root, source, "?v=1"), None);
        assert_eq!(resolve_reference(root, source, "#anchor"), None);
    }
}
