use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Layout of the `date` key, e.g. `2024-01-01T00:00:00+00:00`
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// The keys every content file must declare.
///
/// Anything else in the block stays available through the raw mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Page title
    pub title: String,

    /// Output path relative to the output directory
    pub url: String,

    /// Creation date in `DATE_FORMAT`
    pub date: String,

    /// Page type, selects `<type>.html`
    #[serde(rename = "type")]
    pub page_type: String,

    /// Drafts are built but not written
    pub draft: bool,
}

impl FrontMatter {
    /// Parse `date`, or `None` when it does not follow `DATE_FORMAT`
    pub fn created(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// The timestamp given to pages whose date cannot be parsed:
    /// `0001-01-01T00:00:00+00:00`
    pub fn zero_timestamp() -> DateTime<FixedOffset> {
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN);
        NaiveDateTime::new(date, NaiveTime::default())
            .and_utc()
            .fixed_offset()
    }
}

/// A front matter block after parsing and validation
#[derive(Debug, Clone)]
pub struct ParsedFrontMatter {
    /// Every key from the block, untouched
    pub meta: Mapping,

    /// The validated required keys
    pub fields: FrontMatter,

    /// The document with the block removed
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn front_matter(date: &str) -> FrontMatter {
        FrontMatter {
            title: "Hello".to_string(),
            url: "hello.html".to_string(),
            date: date.to_string(),
            page_type: "post".to_string(),
            draft: false,
        }
    }

    #[test]
    fn test_created_parses_fixed_format() {
        let created = front_matter("2024-03-05T10:20:30+02:00").created().unwrap();
        assert_eq!(created.to_rfc3339(), "2024-03-05T10:20:30+02:00");
    }

    #[test]
    fn test_created_rejects_other_formats() {
        assert!(front_matter("2024-03-05").created().is_none());
        assert!(front_matter("March 5th").created().is_none());
    }

    #[test]
    fn test_zero_timestamp_sorts_before_everything() {
        let zero = FrontMatter::zero_timestamp();
        assert_eq!(zero.year(), 1);
        assert!(zero < front_matter("1970-01-01T00:00:00+00:00").created().unwrap());
    }
}
