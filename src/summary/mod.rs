//! Extractive summaries for content pages.
//!
//! A small TextRank: sentences and words are parsed out of plain text, word
//! pairs that sit next to each other form weighted relations, and sentences
//! are picked by the weight of the relations they contain.

mod language;
mod textrank;

use textrank::TextRank;

/// Maximum number of sentences collected by relation weight
pub const SENTENCE_LIMIT: usize = 50;

/// Pick a one-sentence summary for `text`.
///
/// Sentences are collected in relation-weight order and only the last one
/// collected is kept. Text without any word relation falls back to its first
/// sentence. Line breaks are removed from the result.
pub fn summarize(text: &str) -> String {
    let mut rank = TextRank::populate(text);
    rank.rank();

    let mut sentences = rank.sentences_by_relation_weight(SENTENCE_LIMIT);
    if sentences.is_empty() {
        sentences = rank.sentences_from(0, 1);
    }

    // Last sentence wins
    sentences
        .last()
        .map(|sentence| sentence.value.replace(['\n', '\r'], ""))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_a_single_sentence_from_the_text() {
        let text = "Rust makes systems programming safe. Systems programming needs speed.\n\
                    Rust compiles quickly enough. Cats sleep all day.";
        let summary = summarize(text);

        assert!(!summary.is_empty());
        assert!(text.replace('\n', "").contains(&summary));
        assert_eq!(summary.matches(". ").count(), 0);
    }

    #[test]
    fn test_last_collected_sentence_wins() {
        let text = "Static sites deploy anywhere. Static sites load fast. Dogs bark.";
        let mut rank = TextRank::populate(text);
        rank.rank();
        let collected = rank.sentences_by_relation_weight(SENTENCE_LIMIT);

        assert!(collected.len() >= 2);
        assert_eq!(summarize(text), collected.last().unwrap().value);
    }

    #[test]
    fn test_falls_back_to_first_sentence() {
        assert_eq!(summarize("World"), "World");
        assert_eq!(summarize("Hello there.\nSecond."), "Hello there.");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize("   \n  "), "");
    }

    #[test]
    fn test_line_breaks_removed() {
        let text = "Markdown files become\npages quickly. Markdown files become feeds.";
        assert!(!summarize(text).contains('\n'));
    }

    #[test]
    fn test_deterministic() {
        let text = "Alpha beta gamma. Gamma delta alpha. Beta gamma epsilon. Alpha beta again.";
        assert_eq!(summarize(text), summarize(text));
    }
}
