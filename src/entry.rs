use crate::{
    crossword::{Crossword, CrosswordWordIterator, Direction, BLANK},
    error::{Inconsistency, Result},
};
use rustc_hash::FxHashSet;

/// One word slot: a maximal run of at least two non-black cells.
///
/// Entries live in a flat arena (a `Vec<Entry>`); crossings are stored as
/// indexes into that arena so the whole graph clones cheaply per solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) index: usize,
    pub(crate) start_row: usize,
    pub(crate) start_col: usize,
    pub(crate) length: usize,
    pub(crate) direction: Direction,
    pub(crate) intersections: Vec<Option<usize>>,
    pub(crate) remaining: usize,
    pub(crate) verified: bool,
}

impl Entry {
    pub(crate) fn new(
        grid: &Crossword,
        start_row: usize,
        start_col: usize,
        length: usize,
        direction: Direction,
    ) -> Entry {
        let mut entry = Entry {
            index: 0,
            start_row,
            start_col,
            length,
            direction,
            intersections: vec![None; length],
            remaining: 0,
            verified: false,
        };
        entry.remaining = CrosswordWordIterator::new(grid, &entry)
            .filter(|c| *c == BLANK)
            .count();
        // Runs fixed by the template are trusted as written.
        entry.verified = entry.remaining == 0;
        entry
    }

    /// Clue number shared by every entry starting on the same cell.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_across(&self) -> bool {
        self.direction == Direction::Across
    }

    pub fn is_down(&self) -> bool {
        self.direction == Direction::Down
    }

    /// Crossing entries by run position.
    pub fn intersections(&self) -> &[Option<usize>] {
        &self.intersections
    }

    pub fn remaining_blanks(&self) -> usize {
        self.remaining
    }

    /// Grid coordinates `(row, col)` of the cell at `position` in the run.
    pub fn cell(&self, position: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.start_row, self.start_col + position),
            Direction::Down => (self.start_row + position, self.start_col),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether `word` fits the run given the letters already on the grid.
    pub fn matches(&self, grid: &Crossword, word: &[char]) -> bool {
        word.len() == self.length
            && CrosswordWordIterator::new(grid, self)
                .zip(word)
                .all(|(cell, c)| cell == BLANK || cell == *c)
    }

    /// Memoized dictionary check of the current full word.
    pub fn verify(&mut self, grid: &Crossword, words: &FxHashSet<String>) -> bool {
        if self.verified {
            return true;
        }
        if !words.contains(&self.word(grid)) {
            return false;
        }
        self.verified = true;
        true
    }

    pub fn word(&self, grid: &Crossword) -> String {
        CrosswordWordIterator::new(grid, self).collect()
    }

    /// Run position of `(row, col)`, if this entry covers that cell.
    pub(crate) fn position_of(&self, row: usize, col: usize) -> Option<usize> {
        let position = match self.direction {
            Direction::Across if row == self.start_row => col.checked_sub(self.start_col)?,
            Direction::Down if col == self.start_col => row.checked_sub(self.start_row)?,
            _ => return None,
        };
        if position < self.length {
            Some(position)
        } else {
            None
        }
    }

    /// Records that `other` crosses this entry at `(row, col)`.
    pub(crate) fn link(
        &mut self,
        id: usize,
        row: usize,
        col: usize,
        other: usize,
    ) -> Result<usize> {
        let position = self
            .position_of(row, col)
            .ok_or(Inconsistency::InvalidIntersection { entry: id, row, col })?;
        if self.intersections[position].is_some() {
            return Err(Inconsistency::AlreadyLinked { entry: id, position }.into());
        }
        self.intersections[position] = Some(other);
        Ok(position)
    }

    fn letter_applied(&mut self) {
        self.remaining -= 1;
    }

    fn letter_reverted(&mut self) {
        self.verified = false;
        self.remaining += 1;
    }
}

/// Writes `word[position]` into entry `id`'s cell.
///
/// Returns `true` when a blank was filled, meaning the caller owes a
/// [`revert_letter`] for this position once it backtracks.
pub(crate) fn apply_letter(
    entries: &mut [Entry],
    id: usize,
    grid: &mut Crossword,
    word: &[char],
    position: usize,
) -> Result<bool> {
    let (row, col) = entries[id].cell(position);
    let expected = word[position];
    let found = grid.get(row, col);

    if found != BLANK {
        if found == expected {
            return Ok(false);
        }
        return Err(Inconsistency::LetterConflict {
            row,
            col,
            expected,
            found,
        }
        .into());
    }

    grid.set(row, col, expected);
    entries[id].letter_applied();
    if let Some(crossing) = entries[id].intersections[position] {
        entries[crossing].letter_applied();
    }
    Ok(true)
}

/// Undoes an [`apply_letter`] that returned `true`.
pub(crate) fn revert_letter(entries: &mut [Entry], id: usize, grid: &mut Crossword, position: usize) {
    let (row, col) = entries[id].cell(position);
    grid.set(row, col, BLANK);
    entries[id].letter_reverted();
    if let Some(crossing) = entries[id].intersections[position] {
        entries[crossing].letter_reverted();
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_letter, revert_letter, Entry};
    use crate::{
        crossword::{Crossword, Direction},
        error::{Error, Inconsistency},
    };
    use rustc_hash::FxHashSet;

    fn grid(rows: &[&str]) -> Crossword {
        let width = rows[0].len();
        let contents = rows.iter().flat_map(|row| row.chars()).collect();
        Crossword::from_cells(contents, width, rows.len())
    }

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn new_counts_blanks() {
        let g = grid(&["a.c.", "...."]);
        let entry = Entry::new(&g, 0, 0, 4, Direction::Across);

        assert_eq!(2, entry.remaining_blanks());
        assert!(!entry.is_complete());
        assert!(!entry.verified);

        let fixed = Entry::new(&g, 0, 0, 1, Direction::Across);
        assert!(fixed.is_complete());
        assert!(fixed.verified);
    }

    #[test]
    fn cell_follows_direction() {
        let g = grid(&["...", "...", "..."]);
        let across = Entry::new(&g, 1, 0, 3, Direction::Across);
        let down = Entry::new(&g, 0, 2, 3, Direction::Down);

        assert_eq!((1, 2), across.cell(2));
        assert_eq!((2, 2), down.cell(2));
        assert_eq!(Some(2), across.position_of(1, 2));
        assert_eq!(None, across.position_of(0, 2));
        assert_eq!(Some(1), down.position_of(1, 2));
        assert_eq!(None, down.position_of(1, 1));
    }

    #[test]
    fn matches_respects_fixed_letters() {
        let g = grid(&["c.t"]);
        let entry = Entry::new(&g, 0, 0, 3, Direction::Across);

        assert!(entry.matches(&g, &chars("cat")));
        assert!(entry.matches(&g, &chars("cot")));
        assert!(!entry.matches(&g, &chars("act")));
        assert!(!entry.matches(&g, &chars("cats")));
        assert!(!entry.matches(&g, &chars("ct")));
    }

    #[test]
    fn apply_and_revert_update_both_entries() {
        let mut g = grid(&["..", ".."]);
        let mut entries = vec![
            Entry::new(&g, 0, 0, 2, Direction::Across),
            Entry::new(&g, 0, 0, 2, Direction::Down),
        ];
        entries[0].intersections[0] = Some(1);
        entries[1].intersections[0] = Some(0);

        let word = chars("at");
        assert!(apply_letter(&mut entries, 0, &mut g, &word, 0).unwrap());
        assert_eq!('a', g.get(0, 0));
        assert_eq!(1, entries[0].remaining_blanks());
        assert_eq!(1, entries[1].remaining_blanks());

        assert!(apply_letter(&mut entries, 0, &mut g, &word, 1).unwrap());
        assert!(entries[0].is_complete());

        // Already holds the right letter: nothing to undo.
        let crossing = chars("ax");
        assert!(!apply_letter(&mut entries, 1, &mut g, &crossing, 0).unwrap());
        assert_eq!(1, entries[1].remaining_blanks());

        revert_letter(&mut entries, 0, &mut g, 1);
        revert_letter(&mut entries, 0, &mut g, 0);
        assert_eq!(String::from(".."), g.row(0));
        assert_eq!(2, entries[0].remaining_blanks());
        assert_eq!(2, entries[1].remaining_blanks());
    }

    #[test]
    fn apply_conflict_is_fatal() {
        let mut g = grid(&["ab"]);
        let mut entries = vec![Entry::new(&g, 0, 0, 2, Direction::Across)];

        let result = apply_letter(&mut entries, 0, &mut g, &chars("xb"), 0);
        match result {
            Err(Error::Inconsistent(Inconsistency::LetterConflict {
                expected, found, ..
            })) => {
                assert_eq!('x', expected);
                assert_eq!('a', found);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(String::from("ab"), g.row(0));
    }

    #[test]
    fn verify_is_memoized_and_cleared_by_revert() {
        let mut g = grid(&[".."]);
        let mut entries = vec![Entry::new(&g, 0, 0, 2, Direction::Across)];
        let mut words = FxHashSet::default();
        words.insert(String::from("at"));

        let word = chars("at");
        apply_letter(&mut entries, 0, &mut g, &word, 0).unwrap();
        apply_letter(&mut entries, 0, &mut g, &word, 1).unwrap();
        assert!(entries[0].verify(&g, &words));
        assert!(entries[0].verified);

        revert_letter(&mut entries, 0, &mut g, 1);
        assert!(!entries[0].verified);

        let other = chars("ax");
        apply_letter(&mut entries, 0, &mut g, &other, 1).unwrap();
        assert!(!entries[0].verify(&g, &words));
        assert_eq!(String::from("ax"), entries[0].word(&g));
    }

    #[test]
    fn fixed_entries_skip_the_dictionary() {
        let g = grid(&["zq"]);
        let mut entry = Entry::new(&g, 0, 0, 2, Direction::Across);

        assert!(entry.verify(&g, &FxHashSet::default()));
    }

    #[test]
    fn link_rejects_bad_positions() {
        let g = grid(&["...", "..."]);
        let mut entry = Entry::new(&g, 0, 0, 3, Direction::Across);

        assert_eq!(1, entry.link(0, 0, 1, 7).unwrap());
        assert_eq!(Some(7), entry.intersections()[1]);

        match entry.link(0, 0, 1, 8) {
            Err(Error::Inconsistent(Inconsistency::AlreadyLinked { position: 1, .. })) => {}
            other => panic!("unexpected {:?}", other),
        }
        match entry.link(0, 1, 1, 8) {
            Err(Error::Inconsistent(Inconsistency::InvalidIntersection { .. })) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
