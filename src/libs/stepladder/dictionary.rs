use itertools::Itertools;

/// Per-letter Scrabble value used to score a word.
fn letter_value(c: char) -> u32 {
    match c {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

pub fn word_score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

fn hamming_distance_one(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() == 1
}

/// A length-`K` dictionary with precomputed scores and distance-1 adjacency.
pub struct Dictionary {
    pub words: Vec<String>,
    pub scores: Vec<u32>,
    /// `adjacency[i]` lists the indices of words at Hamming distance 1 from
    /// word `i`. Built by a pairwise scan, which is sufficient at the
    /// dictionary sizes these inputs produce.
    pub adjacency: Vec<Vec<usize>>,
}

impl Dictionary {
    /// Keeps only words of length `k`, deduplicated, and builds scores and
    /// adjacency over the retained set.
    pub fn build(words: &[String], k: usize) -> Self {
        let mut filtered: Vec<String> = Vec::new();
        for w in words {
            if w.chars().count() == k && !filtered.contains(w) {
                filtered.push(w.clone());
            }
        }
        let scores: Vec<u32> = filtered.iter().map(|w| word_score(w)).collect();

        let n = filtered.len();
        let mut adjacency = vec![Vec::new(); n];
        for (i, j) in (0..n).tuple_combinations() {
            if hamming_distance_one(&filtered[i], &filtered[j]) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }

        Self { words: filtered, scores, adjacency }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_score_sums_letter_values() {
        assert_eq!(word_score("CAT"), 3 + 1 + 1);
        assert_eq!(word_score("QUIZ"), 10 + 1 + 1 + 10);
    }

    #[test]
    fn build_drops_words_of_the_wrong_length() {
        let words = vec!["CAT".to_string(), "CATS".to_string(), "BAT".to_string()];
        let dict = Dictionary::build(&words, 3);
        assert_eq!(dict.words, vec!["CAT", "BAT"]);
    }

    #[test]
    fn build_dedups_repeated_words() {
        let words = vec!["CAT".to_string(), "CAT".to_string()];
        let dict = Dictionary::build(&words, 3);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn adjacency_links_words_at_hamming_distance_one() {
        let words = vec!["CAT".to_string(), "BAT".to_string(), "DOG".to_string()];
        let dict = Dictionary::build(&words, 3);
        assert_eq!(dict.adjacency[0], vec![1]);
        assert_eq!(dict.adjacency[1], vec![0]);
        assert!(dict.adjacency[2].is_empty());
    }
}
