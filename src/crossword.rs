use crate::entry::Entry;
use std::fmt;

/// Marks a cell that can never hold a letter.
pub const BLACK: char = '*';
/// Marks a cell still waiting for a letter.
pub const BLANK: char = '.';

/// A rectangular grid of cells stored row-major.
///
/// Every cell is [`BLACK`], [`BLANK`] or a letter. Letters are either fixed by
/// the template or written by the search; the grid itself does not tell them
/// apart, the entries covering the cell do.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Crossword {
    pub(crate) contents: Vec<char>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Crossword {
    pub(crate) fn from_cells(contents: Vec<char>, width: usize, height: usize) -> Crossword {
        debug_assert_eq!(contents.len(), width * height);
        Crossword {
            contents,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.contents[row * self.width + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, c: char) {
        self.contents[row * self.width + col] = c;
    }

    pub fn is_black(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == BLACK
    }

    pub fn row(&self, row: usize) -> String {
        self.contents[row * self.width..(row + 1) * self.width]
            .iter()
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |row| self.row(row))
    }

    pub fn has_blanks(&self) -> bool {
        self.contents.contains(&BLANK)
    }
}

/// Walks the cells covered by one entry, in run order.
#[derive(Clone, Debug)]
pub struct CrosswordWordIterator<'s> {
    crossword: &'s Crossword,
    entry: &'s Entry,
    index: usize,
}

impl<'s> CrosswordWordIterator<'s> {
    pub fn new(crossword: &'s Crossword, entry: &'s Entry) -> CrosswordWordIterator<'s> {
        CrosswordWordIterator {
            crossword,
            entry,
            index: 0,
        }
    }
}

impl<'s> Iterator for CrosswordWordIterator<'s> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.entry.length() {
            return None;
        }

        let (row, col) = self.entry.cell(self.index);
        self.index += 1;
        Some(self.crossword.get(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entry.length() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CrosswordWordIterator<'_> {}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

#[cfg(test)]
mod tests {
    use super::{Crossword, CrosswordWordIterator, Direction};
    use crate::entry::Entry;

    fn abc() -> Crossword {
        Crossword::from_cells("abcdefghi".chars().collect(), 3, 3)
    }

    #[test]
    fn it_works() {
        let c = abc();

        assert_eq!(3, c.width());
        assert_eq!(3, c.height());
        assert_eq!('e', c.get(1, 1));
        assert_eq!(String::from("ghi"), c.row(2));
        assert_eq!(String::from("abc\ndef\nghi\n"), c.to_string());
    }

    #[test]
    fn crossword_iterator_works() {
        let input = abc();

        let across = Entry::new(&input, 0, 0, 3, Direction::Across);
        let s: String = CrosswordWordIterator::new(&input, &across).collect();
        assert_eq!(String::from("abc"), s);

        let down = Entry::new(&input, 0, 1, 3, Direction::Down);
        let s: String = CrosswordWordIterator::new(&input, &down).collect();
        assert_eq!(String::from("beh"), s);
    }

    #[test]
    fn set_overwrites_one_cell() {
        let mut c = Crossword::from_cells("..*..".chars().collect(), 5, 1);
        assert!(c.has_blanks());
        assert!(c.is_black(0, 2));

        c.set(0, 0, 'x');
        assert_eq!(String::from("x.*.."), c.row(0));
    }
}
