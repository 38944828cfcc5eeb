use crate::{
    crossword::{BLACK, BLANK},
    error::Result,
};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Dictionary words bucketed by length, plus a membership set.
///
/// Buckets keep the order the words were read in; solution order depends on
/// it. Only lengths the template actually needs are retained.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words_by_length: FxHashMap<usize, Vec<Vec<char>>>,
    all_words: FxHashSet<String>,
}

impl WordIndex {
    pub fn build<R: BufRead>(reader: R, lengths: &FxHashSet<usize>) -> Result<WordIndex> {
        let mut words_by_length: FxHashMap<usize, Vec<Vec<char>>> = lengths
            .iter()
            .map(|length| (*length, vec![]))
            .collect();
        let mut all_words = FxHashSet::default();
        let mut skipped = 0;

        for line in reader.lines() {
            let line = line?;
            let word = line.trim_end();
            // a marker placed in the grid would read back as blank or black
            if word.contains(BLACK) || word.contains(BLANK) {
                skipped += 1;
                continue;
            }
            let chars: Vec<char> = word.chars().collect();

            match words_by_length.get_mut(&chars.len()) {
                Some(bucket) => {
                    bucket.push(chars);
                    all_words.insert(word.to_owned());
                }
                None => skipped += 1,
            }
        }

        debug!(
            "Indexed {} distinct words for lengths {:?}, skipped {}",
            all_words.len(),
            lengths,
            skipped
        );

        Ok(WordIndex {
            words_by_length,
            all_words,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P, lengths: &FxHashSet<usize>) -> Result<WordIndex> {
        let file = File::open(path)?;
        WordIndex::build(BufReader::new(file), lengths)
    }

    /// Words of exactly `length` characters, in source order.
    pub fn words(&self, length: usize) -> &[Vec<char>] {
        self.words_by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.all_words.contains(word)
    }

    pub fn all_words(&self) -> &FxHashSet<String> {
        &self.all_words
    }

    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}
