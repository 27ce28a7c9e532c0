use std::collections::{BTreeMap, HashMap, HashSet};

use super::language;

/// A sentence picked from the text, identified by its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub id: usize,
    pub value: String,
}

/// Two words that appear next to each other, with their normalized weight
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    pub left: String,
    pub right: String,
    pub qty: usize,
    pub weight: f64,
}

#[derive(Debug, Default)]
struct Relation {
    qty: usize,
    sentence_ids: Vec<usize>,
    weight: f64,
}

/// Word relation graph over the sentences of one text
#[derive(Debug, Default)]
pub struct TextRank {
    sentences: Vec<String>,
    words: Vec<String>,
    word_ids: HashMap<String, usize>,
    // Keyed by (lower word id, higher word id); ordered so ties rank by first
    // appearance
    relations: BTreeMap<(usize, usize), Relation>,
}

impl TextRank {
    /// Parse `text` into sentences, words, and adjacent-word relations
    pub fn populate(text: &str) -> Self {
        let mut rank = TextRank {
            sentences: language::sentences(text),
            ..TextRank::default()
        };

        for sentence_id in 0..rank.sentences.len() {
            let words: Vec<String> = language::words(&rank.sentences[sentence_id])
                .filter(|word| !language::is_stop_word(word))
                .collect();
            let ids: Vec<usize> = words.into_iter().map(|word| rank.word_id(word)).collect();

            for pair in ids.windows(2) {
                if pair[0] == pair[1] {
                    continue;
                }
                let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
                let relation = rank.relations.entry(key).or_default();
                relation.qty += 1;
                if relation.sentence_ids.last() != Some(&sentence_id) {
                    relation.sentence_ids.push(sentence_id);
                }
            }
        }

        rank
    }

    fn word_id(&mut self, word: String) -> usize {
        if let Some(&id) = self.word_ids.get(&word) {
            return id;
        }
        let id = self.words.len();
        self.words.push(word.clone());
        self.word_ids.insert(word, id);
        id
    }

    /// Weight each relation by its count, normalized into `0.0..=1.0`
    pub fn rank(&mut self) {
        let min = self.relations.values().map(|r| r.qty).min().unwrap_or(0);
        let max = self.relations.values().map(|r| r.qty).max().unwrap_or(0);

        for relation in self.relations.values_mut() {
            relation.weight = if max == min {
                1.0
            } else {
                (relation.qty - min) as f64 / (max - min) as f64
            };
        }
    }

    /// Number of parsed sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// All relations, heaviest first
    pub fn phrases(&self) -> Vec<Phrase> {
        self.ranked_relations()
            .into_iter()
            .map(|((left, right), relation)| Phrase {
                left: self.words[*left].clone(),
                right: self.words[*right].clone(),
                qty: relation.qty,
                weight: relation.weight,
            })
            .collect()
    }

    fn ranked_relations(&self) -> Vec<(&(usize, usize), &Relation)> {
        let mut ranked: Vec<_> = self.relations.iter().collect();
        // Stable: equal weights keep first-appearance order
        ranked.sort_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
        ranked
    }

    /// Collect up to `limit` distinct sentences, walking relations from the
    /// heaviest down and taking the sentences each relation occurs in
    pub fn sentences_by_relation_weight(&self, limit: usize) -> Vec<Sentence> {
        let mut seen = HashSet::new();
        let mut picked = Vec::new();

        'relations: for (_, relation) in self.ranked_relations() {
            for &id in &relation.sentence_ids {
                if picked.len() >= limit {
                    break 'relations;
                }
                if seen.insert(id) {
                    picked.push(self.sentence(id));
                }
            }
        }

        picked
    }

    /// Up to `limit` sentences in text order, starting at sentence `id`
    pub fn sentences_from(&self, id: usize, limit: usize) -> Vec<Sentence> {
        (id..self.sentences.len())
            .take(limit)
            .map(|id| self.sentence(id))
            .collect()
    }

    fn sentence(&self, id: usize) -> Sentence {
        Sentence {
            id,
            value: self.sentences[id].clone(),
        }
    }
}
