//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the
//! `stop-words` crate with support for custom stopword lists (e.g.,
//! domain noise like news-agency names).

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("ko")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language code
    ///
    /// Supported languages include: ko, en, de, fr, es, it, pt, nl, ru.
    /// Unknown codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language code
    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "ko" | "korean" => {
                // Korean has no standard stopword list in the crate
                return Self::korean_stopwords();
            }
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            // Default to English for unknown languages
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Common Korean stopwords: particles, interjections, and frequent
    /// function words
    fn korean_stopwords() -> FxHashSet<String> {
        [
            "을", "를", "에", "의", "가", "은", "는", "이", "도", "로", "으로", "와", "과",
            "에서", "에게", "부터", "까지", "처럼", "보다", "한테", "께서", "이다", "하다",
            "되다", "있다", "없다", "같다", "그리고", "그러나", "하지만", "그래서", "또한",
            "및", "등", "때문", "따라", "의해", "위해", "대해", "통해", "중인", "만큼",
            "마찬가지", "아", "어", "휴", "아이구", "아이쿠", "아이고", "나", "너", "우리",
            "저희", "그것", "이것", "저것", "여기", "거기", "저기",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
