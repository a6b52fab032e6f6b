use super::errors::{ErrorKind, Result, ResultExt};
use super::letters::Word;

use log::{debug, info};
use rand::{Rng, RngCore};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub trait Dictionary {
    /// Case-insensitive membership test.
    fn contains_word(&self, word: &str) -> bool;
    /// Picks a word uniformly at random.
    fn sample(&self, rng: &mut dyn RngCore) -> Result<Word>;
    fn len(&self) -> usize;
}

/// Admissible words read from the keys of a JSON object.
pub struct JsonDictionary {
    lookup: HashSet<String>,
    words: Vec<Word>,
}

impl JsonDictionary {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<JsonDictionary> {
        let path = path.as_ref();
        let resource = || ErrorKind::ResourceUnavailable(path.display().to_string());

        let contents = fs::read_to_string(path).chain_err(resource)?;
        let dictionary = JsonDictionary::from_json_str(&contents).chain_err(resource)?;
        info!("Loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Only the key set of the top-level object is read, values are ignored.
    pub fn from_json_str(json: &str) -> Result<JsonDictionary> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;
        Ok(JsonDictionary::from_words(entries.keys()))
    }

    /// Keeps the entries that are five alphabet letters and drops the rest.
    pub fn from_words<I, S>(entries: I) -> JsonDictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lookup = HashSet::new();
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for entry in entries {
            match entry.as_ref().parse::<Word>() {
                Ok(word) => {
                    if lookup.insert(word.to_lowercase()) {
                        words.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} entries that are not five-letter words", skipped);
        }

        JsonDictionary { lookup, words }
    }
}

impl Dictionary for JsonDictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Result<Word> {
        if self.words.is_empty() {
            bail!(ErrorKind::EmptyDictionary);
        }
        Ok(self.words[rng.gen_range(0..self.words.len())])
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::Error;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reads_keys_of_json_object() {
        let dict =
            JsonDictionary::from_json_str(r#"{"messi": 1, "perro": null, "señor": {}}"#).unwrap();
        assert_eq!(3, dict.len());
        assert!(dict.contains_word("messi"));
        assert!(dict.contains_word("PERRO"));
        assert!(dict.contains_word("SEÑOR"));
        assert!(!dict.contains_word("gatos"));
    }

    #[test]
    fn skips_entries_that_are_not_words() {
        let dict = JsonDictionary::from_words(["gato", "árbol", "messi", "12345", "canción"]);
        assert_eq!(1, dict.len());
        assert!(dict.contains_word("Messi"));
    }

    #[test]
    fn duplicates_are_stored_once() {
        let dict = JsonDictionary::from_words(["perro", "PERRO", "Perro"]);
        assert_eq!(1, dict.len());
    }

    #[test]
    fn rejects_json_that_is_not_an_object() {
        assert!(JsonDictionary::from_json_str(r#"["messi", "perro"]"#).is_err());
        assert!(JsonDictionary::from_json_str("{ not json").is_err());
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        match JsonDictionary::load("does/not/exist.json") {
            Err(Error(ErrorKind::ResourceUnavailable(path), _)) => {
                assert_eq!("does/not/exist.json", path)
            }
            _ => panic!("expected ResourceUnavailable"),
        }
    }

    #[test]
    fn sampling_empty_dictionary_fails() {
        let dict = JsonDictionary::from_words(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            dict.sample(&mut rng),
            Err(Error(ErrorKind::EmptyDictionary, _))
        ));
    }

    #[test]
    fn samples_words_from_the_dictionary() {
        let dict = JsonDictionary::from_words(["messi", "perro", "gatos", "señor"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let word = dict.sample(&mut rng).unwrap();
            assert!(dict.contains_word(&word.to_string()));
            seen.insert(word);
        }
        assert_eq!(4, seen.len());
    }

    #[test]
    fn bundled_word_list_loads() {
        let dict = JsonDictionary::load("constants/validGuesses.json").unwrap();
        assert!(dict.len() > 100);
        assert!(dict.contains_word("messi"));
    }
}
