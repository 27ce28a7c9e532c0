/// Split a document into its YAML front matter and the body that follows.
///
/// Front matter must open on the very first line with `---` and close with a
/// line holding only `---`; whitespace around either fence is ignored.
/// Returns `None` when there is no complete block.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let opening = content.split_inclusive('\n').next()?;
    if !is_fence(opening) {
        return None;
    }
    let rest = &content[opening.len()..];

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

fn is_fence(line: &str) -> bool {
    line.trim() == "---"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let doc = "---\ntitle: Hello\n---\nWorld\n";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "World\n");
    }

    #[test]
    fn test_split_crlf_and_trailing_delimiter() {
        let doc = "---\r\ntitle: Hello\r\n---";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, "title: Hello\r\n");
        assert_eq!(body, "");
    }

    #[test]
    fn test_fences_with_trailing_whitespace() {
        let doc = "--- \ntitle: A\n---\t\r\nBody\n";
        let (yaml, body) = split_front_matter(doc).unwrap();
        assert_eq!(yaml, "title: A\n");
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn test_horizontal_rule_in_body_is_not_a_delimiter() {
        let doc = "---\ntitle: x\n---\nabove\n\n---\n\nbelow\n";
        let (_, body) = split_front_matter(doc).unwrap();
        assert!(body.contains("above"));
        assert!(body.contains("below"));
    }

    #[test]
    fn test_missing_block() {
        assert!(split_front_matter("# Just markdown\n").is_none());
        assert!(split_front_matter("---\ntitle: never closed\n").is_none());
        assert!(split_front_matter("\n---\ntitle: x\n---\n").is_none());
    }
}
