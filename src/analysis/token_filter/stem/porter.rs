//! Porter stemming algorithm implementation.
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Words containing non-ASCII characters are returned lowercased but
//! otherwise untouched.
//!
//! # Examples
//!
//! ```
//! use phalanx::analysis::token_filter::stem::Stemmer;
//! use phalanx::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("little"), "littl");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` acts as a vowel.
    fn is_vowel(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => true,
            b'y' if pos > 0 => !Self::is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// Calculate the measure of a word (number of VC patterns).
    fn measure(word: &str) -> usize {
        let bytes = word.as_bytes();
        let n = bytes.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !Self::is_vowel(bytes, i) {
            i += 1;
        }

        while i < n {
            while i < n && Self::is_vowel(bytes, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !Self::is_vowel(bytes, i) {
                i += 1;
            }
        }

        m
    }

    fn contains_vowel(word: &str) -> bool {
        let bytes = word.as_bytes();
        (0..bytes.len()).any(|i| Self::is_vowel(bytes, i))
    }

    fn ends_with_double_consonant(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !Self::is_vowel(bytes, len - 1)
    }

    /// Consonant-vowel-consonant ending, where the last consonant is not w, x or y.
    fn ends_cvc(word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 3
            && !Self::is_vowel(bytes, len - 3)
            && Self::is_vowel(bytes, len - 2)
            && !Self::is_vowel(bytes, len - 1)
            && !matches!(bytes[len - 1], b'w' | b'x' | b'y')
    }

    fn replace_suffix(word: &str, old_suffix: &str, new_suffix: &str, min_measure: usize) -> String {
        if let Some(stem) = word.strip_suffix(old_suffix) {
            if Self::measure(stem) >= min_measure {
                return format!("{stem}{new_suffix}");
            }
        }
        word.to_string()
    }

    fn step1a(word: &str) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if let Some(stem) = word.strip_suffix("ies") {
            format!("{stem}i")
        } else if word.ends_with("ss") {
            word.to_string()
        } else if let Some(stem) = word.strip_suffix('s') {
            stem.to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(word: &str) -> String {
        if word.ends_with("eed") {
            return Self::replace_suffix(word, "eed", "ee", 1);
        }

        let stem = match word.strip_suffix("ed").or_else(|| word.strip_suffix("ing")) {
            Some(stem) if Self::contains_vowel(stem) => stem,
            _ => return word.to_string(),
        };

        if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
            format!("{stem}e")
        } else if Self::ends_with_double_consonant(stem)
            && !stem.ends_with('l')
            && !stem.ends_with('s')
            && !stem.ends_with('z')
        {
            stem[..stem.len() - 1].to_string()
        } else if Self::measure(stem) == 1 && Self::ends_cvc(stem) {
            format!("{stem}e")
        } else {
            stem.to_string()
        }
    }

    fn step1c(word: &str) -> String {
        match word.strip_suffix('y') {
            Some(stem) if Self::contains_vowel(stem) => format!("{stem}i"),
            _ => word.to_string(),
        }
    }

    fn step2(word: &str) -> String {
        const SUFFIXES: &[(&str, &str)] = &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];

        for (old_suffix, new_suffix) in SUFFIXES {
            if word.ends_with(old_suffix) {
                return Self::replace_suffix(word, old_suffix, new_suffix, 1);
            }
        }
        word.to_string()
    }

    fn step3(word: &str) -> String {
        const SUFFIXES: &[(&str, &str)] = &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];

        for (old_suffix, new_suffix) in SUFFIXES {
            if word.ends_with(old_suffix) {
                return Self::replace_suffix(word, old_suffix, new_suffix, 1);
            }
        }
        word.to_string()
    }

    fn step4(word: &str) -> String {
        const SUFFIXES: &[&str] = &[
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion",
            "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];

        for suffix in SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if Self::measure(stem) > 1
                    && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
                {
                    return stem.to_string();
                }
            }
        }
        word.to_string()
    }

    fn step5(word: &str) -> String {
        let word = match word.strip_suffix('e') {
            Some(stem) => {
                let m = Self::measure(stem);
                if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                    stem.to_string()
                } else {
                    word.to_string()
                }
            }
            None => word.to_string(),
        };

        if word.ends_with("ll") && Self::measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = Self::step1a(&word);
        let word = Self::step1b(&word);
        let word = Self::step1c(&word);
        let word = Self::step2(&word);
        let word = Self::step3(&word);
        let word = Self::step4(&word);
        Self::step5(&word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
