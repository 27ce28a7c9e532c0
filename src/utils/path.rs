use std::path::{Component, Path, PathBuf};

use crate::utils::error::{SiteError, SiteResult};

/// Resolve a front-matter or config url to a file path under `root`.
///
/// The url is treated as relative to `root` even when it starts with `/`.
/// `.` segments are dropped and `..` segments pop a previous segment; a `..`
/// that would climb above `root` is an error, as is a url that names no file.
pub fn resolve_output_path<P: AsRef<Path>>(root: P, url: &str) -> SiteResult<PathBuf> {
    let trimmed = url.trim_start_matches(['/', '\\']);
    let mut segments: Vec<&std::ffi::OsStr> = Vec::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.pop().is_none() {
                    return Err(SiteError::UnsafeOutputPath(url.to_string()));
                }
            }
            // Windows drive prefixes and stray roots
            Component::Prefix(_) | Component::RootDir => {
                return Err(SiteError::UnsafeOutputPath(url.to_string()));
            }
        }
    }

    if segments.is_empty() {
        return Err(SiteError::UnsafeOutputPath(url.to_string()));
    }

    let mut path = root.as_ref().to_path_buf();
    path.extend(segments);
    Ok(path)
}

/// Check if a path has a markdown extension, ignoring case
pub fn is_markdown<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_url() {
        let path = resolve_output_path("/site/public", "hello.html").unwrap();
        assert_eq!(path, PathBuf::from("/site/public/hello.html"));
    }

    #[test]
    fn test_resolve_strips_leading_slash_and_dots() {
        let path = resolve_output_path("/site/public", "/posts/./a/../hello.html").unwrap();
        assert_eq!(path, PathBuf::from("/site/public/posts/hello.html"));
    }

    #[test]
    fn test_resolve_rejects_escape() {
        assert!(matches!(
            resolve_output_path("/site/public", "../escape.html"),
            Err(SiteError::UnsafeOutputPath(_))
        ));
        assert!(matches!(
            resolve_output_path("/site/public", "posts/../../escape.html"),
            Err(SiteError::UnsafeOutputPath(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_empty() {
        assert!(resolve_output_path("/site/public", "").is_err());
        assert!(resolve_output_path("/site/public", "/").is_err());
        assert!(resolve_output_path("/site/public", "a/..").is_err());
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("content/first.md"));
        assert!(is_markdown("content/SHOUT.MD"));
        assert!(!is_markdown("content/notes.txt"));
        assert!(!is_markdown("content/md"));
    }
}
