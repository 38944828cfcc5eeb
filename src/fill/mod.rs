use crate::{
    crossword::Crossword,
    entry::{self, Entry},
    error::Result,
    index::WordIndex,
    parse::{needed_lengths, parse},
};
use log::debug;
use rustc_hash::FxHashSet;
use std::{io::BufRead, path::Path, sync::Arc};

pub mod search;

pub use search::{Solutions, Statistics};

/// Owns everything derived from one template and word list.
///
/// The generator is never mutated by solving: each call to [`Generator::solve`]
/// clones the template grid and entries into its own [`FillState`], so any
/// number of searches can run side by side.
#[derive(Debug, Clone)]
pub struct Generator {
    grid: Crossword,
    entries: Arc<[Entry]>,
    index: WordIndex,
}

impl Generator {
    /// Parses `template` and reads the word list from `words`, one word per
    /// line.
    pub fn new<S: AsRef<str>, R: BufRead>(template: &[S], words: R) -> Result<Generator> {
        Generator::with_index(template, |lengths| WordIndex::build(words, lengths))
    }

    pub fn from_path<S: AsRef<str>, P: AsRef<Path>>(template: &[S], path: P) -> Result<Generator> {
        Generator::with_index(template, |lengths| WordIndex::load(path, lengths))
    }

    /// Parses `template`, then builds the index for the lengths it needs.
    /// An empty grid never touches the word list.
    fn with_index<S, F>(template: &[S], build: F) -> Result<Generator>
    where
        S: AsRef<str>,
        F: FnOnce(&FxHashSet<usize>) -> Result<WordIndex>,
    {
        let (grid, entries) = parse(template)?;
        let index = if grid.width == 0 || grid.height == 0 {
            WordIndex::default()
        } else {
            build(&needed_lengths(&entries))?
        };
        Ok(Generator::from_parts(grid, entries, index))
    }

    fn from_parts(grid: Crossword, entries: Vec<Entry>, index: WordIndex) -> Generator {
        debug!(
            "Generator ready: {} entries, {} to fill, {} words indexed",
            entries.len(),
            entries.iter().filter(|e| !e.is_complete()).count(),
            index.len()
        );
        Generator {
            grid,
            entries: entries.into(),
            index,
        }
    }

    /// Lazily enumerates every consistent fill, in a fixed order.
    pub fn solve(&self) -> Solutions<'_> {
        Solutions::new(self.entries.clone(), FillState::new(&self.grid, &self.entries), &self.index)
    }

    pub fn grid(&self) -> &Crossword {
        &self.grid
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }
}

/// The mutable side of one solve: a private grid and entry arena.
#[derive(Debug, Clone)]
pub(crate) struct FillState {
    pub(crate) grid: Crossword,
    pub(crate) entries: Vec<Entry>,
}

impl FillState {
    pub(crate) fn new(grid: &Crossword, entries: &[Entry]) -> FillState {
        FillState {
            grid: grid.clone(),
            entries: entries.to_vec(),
        }
    }

    pub(crate) fn apply_letter(&mut self, id: usize, word: &[char], position: usize) -> Result<bool> {
        entry::apply_letter(&mut self.entries, id, &mut self.grid, word, position)
    }

    pub(crate) fn revert_letter(&mut self, id: usize, position: usize) {
        entry::revert_letter(&mut self.entries, id, &mut self.grid, position)
    }

    pub(crate) fn verify(&mut self, id: usize, words: &FxHashSet<String>) -> bool {
        let FillState { grid, entries } = self;
        entries[id].verify(grid, words)
    }

    /// First word at or after `start` in entry `id`'s bucket that fits the
    /// grid as it stands.
    pub(crate) fn next_match(&self, id: usize, index: &WordIndex, start: usize) -> Option<usize> {
        let entry = &self.entries[id];
        index
            .words(entry.length)
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, word)| entry.matches(&self.grid, word))
            .map(|(position, _)| position)
    }
}
