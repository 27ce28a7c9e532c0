use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::front_matter::types::{FrontMatter, ParsedFrontMatter};
use crate::front_matter::utils::split_front_matter;
use crate::utils::error::{SiteError, SiteResult};

/// Parse and validate the front matter of a content file.
///
/// A missing block, YAML that is not a mapping, or a required key that is
/// absent or of the wrong type is an error naming `path`.
pub fn parse(path: &Path, content: &str) -> SiteResult<ParsedFrontMatter> {
    let invalid = |message: String| SiteError::FrontMatter {
        path: path.to_path_buf(),
        message,
    };

    let (yaml, body) = split_front_matter(content)
        .ok_or_else(|| invalid("no front matter block found".to_string()))?;

    let meta = match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => return Err(invalid("front matter is not a mapping".to_string())),
        Err(e) => return Err(invalid(format!("invalid YAML: {}", e))),
    };

    let fields: FrontMatter = serde_yaml::from_value(Value::Mapping(meta.clone()))
        .map_err(|e| invalid(e.to_string()))?;

    Ok(ParsedFrontMatter {
        meta,
        fields,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "content/hello.md";

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: Hello\nurl: hello.html\ndate: 2024-01-01T00:00:00+00:00\ntype: post\ndraft: false\ntags: [a, b]\n---\nWorld\n";
        let parsed = parse(Path::new(PATH), content).unwrap();

        assert_eq!(parsed.fields.title, "Hello");
        assert_eq!(parsed.fields.url, "hello.html");
        assert_eq!(parsed.fields.date, "2024-01-01T00:00:00+00:00");
        assert_eq!(parsed.fields.page_type, "post");
        assert!(!parsed.fields.draft);
        assert!(parsed.meta.contains_key("tags"));
        assert_eq!(parsed.body, "World\n");
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let content = "---\ntitle: Hello\nurl: hello.html\ntype: post\ndraft: false\n---\nWorld\n";
        let err = parse(Path::new(PATH), content).unwrap_err();

        assert!(matches!(err, SiteError::FrontMatter { .. }));
        assert!(err.to_string().contains("date"));
        assert!(err.to_string().contains(PATH));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let content = "---\ntitle: Hello\nurl: hello.html\ndate: 2024-01-01T00:00:00+00:00\ntype: post\ndraft: maybe\n---\n";
        assert!(parse(Path::new(PATH), content).is_err());
    }

    #[test]
    fn test_no_block_is_rejected() {
        let err = parse(Path::new(PATH), "World\n").unwrap_err();
        assert!(err.to_string().contains("no front matter"));
    }

    #[test]
    fn test_non_mapping_is_rejected() {
        let err = parse(Path::new(PATH), "---\n- a\n- b\n---\n").unwrap_err();
        assert!(err.to_string().contains("not a mapping"));
    }
}
