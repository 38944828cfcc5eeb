//! Depth-first fill search with intersection look-ahead.
//!
//! The search is written as an explicit stack of choice points rather than
//! as recursion so that it can stop after every complete fill and pick up
//! again on the next call to [`Iterator::next`].
//!
//! Entries are visited in a fixed order (across entries row by row, then
//! down entries column by column). An entry is filled one letter at a time.
//! Once a word is fully placed, every crossing entry is checked: complete
//! crossings must be dictionary words and incomplete ones must still have a
//! candidate. The first incomplete crossing is then filled right away,
//! before returning to the fixed order.

use super::FillState;
use crate::{entry::Entry, error::Result, index::WordIndex, solution::Solution};
use log::trace;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Continue the fixed entry order at `entry_index`.
    Solve { entry_index: usize },
    /// Try the candidates for `entry` starting from bucket position `next`.
    Candidates {
        entry: usize,
        entry_index: usize,
        next: usize,
    },
    /// Place letter `position` of bucket word `word` into `entry`.
    Place {
        entry: usize,
        word: usize,
        entry_index: usize,
        position: usize,
    },
    /// Blank the cell again once everything above it has been explored.
    Revert { entry: usize, position: usize },
}

/// Counters describing how much work a search has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub candidates: usize,
    pub dead_ends: usize,
    pub solutions: usize,
}

/// Lazy sequence of every fill of a template.
///
/// Dropping the iterator abandons the search; it holds no outside
/// resources. After an error the iterator is exhausted.
pub struct Solutions<'g> {
    entries: Arc<[Entry]>,
    state: FillState,
    index: &'g WordIndex,
    stack: Vec<Frame>,
    statistics: Statistics,
}

impl<'g> Solutions<'g> {
    pub(crate) fn new(entries: Arc<[Entry]>, state: FillState, index: &'g WordIndex) -> Solutions<'g> {
        Solutions {
            entries,
            state,
            index,
            stack: vec![Frame::Solve { entry_index: 0 }],
            statistics: Statistics::default(),
        }
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    fn step(&mut self, frame: Frame) -> Result<Option<Solution>> {
        match frame {
            Frame::Solve { entry_index } => return Ok(self.solve_from(entry_index)),
            Frame::Candidates {
                entry,
                entry_index,
                next,
            } => {
                if let Some(word) = self.state.next_match(entry, self.index, next) {
                    self.statistics.candidates += 1;
                    self.stack.push(Frame::Candidates {
                        entry,
                        entry_index,
                        next: word + 1,
                    });
                    self.stack.push(Frame::Place {
                        entry,
                        word,
                        entry_index,
                        position: 0,
                    });
                }
            }
            Frame::Place {
                entry,
                word,
                entry_index,
                position,
            } => {
                let index = self.index;
                let letters = &index.words(self.state.entries[entry].length)[word];
                if position == letters.len() {
                    self.look_ahead(entry, entry_index);
                } else {
                    if self.state.apply_letter(entry, letters, position)? {
                        self.stack.push(Frame::Revert { entry, position });
                    }
                    self.stack.push(Frame::Place {
                        entry,
                        word,
                        entry_index,
                        position: position + 1,
                    });
                }
            }
            Frame::Revert { entry, position } => self.state.revert_letter(entry, position),
        }
        Ok(None)
    }

    fn solve_from(&mut self, entry_index: usize) -> Option<Solution> {
        if entry_index == self.state.entries.len() {
            self.statistics.solutions += 1;
            return Some(Solution::new(self.entries.clone(), self.state.grid.clone()));
        }

        if !self.state.entries[entry_index].is_complete() {
            self.stack.push(Frame::Candidates {
                entry: entry_index,
                entry_index,
                next: 0,
            });
        } else if self.state.verify(entry_index, self.index.all_words()) {
            self.stack.push(Frame::Solve {
                entry_index: entry_index + 1,
            });
        } else {
            self.dead_end(entry_index);
        }
        None
    }

    /// Runs once `entry` holds a whole word: vets every crossing and picks
    /// the first incomplete one to fill next.
    fn look_ahead(&mut self, entry: usize, entry_index: usize) {
        let mut target = None;

        for position in 0..self.state.entries[entry].length {
            let crossing = match self.state.entries[entry].intersections[position] {
                Some(crossing) => crossing,
                None => continue,
            };

            if self.state.entries[crossing].is_complete() {
                if !self.state.verify(crossing, self.index.all_words()) {
                    return self.dead_end(crossing);
                }
                continue;
            }

            if self.state.next_match(crossing, self.index, 0).is_none() {
                return self.dead_end(crossing);
            }
            if target.is_none() {
                target = Some(crossing);
            }
        }

        match target {
            Some(crossing) => self.stack.push(Frame::Candidates {
                entry: crossing,
                entry_index,
                next: 0,
            }),
            None => self.stack.push(Frame::Solve {
                entry_index: entry_index + 1,
            }),
        }
    }

    fn dead_end(&mut self, entry: usize) {
        self.statistics.dead_ends += 1;
        trace!(
            "Dead end at entry {} ({:?})",
            entry,
            self.state.entries[entry].word(&self.state.grid)
        );
    }

    /// Drops every pending choice, undoing the cells still owed a revert.
    fn unwind(&mut self) {
        while let Some(frame) = self.stack.pop() {
            if let Frame::Revert { entry, position } = frame {
                self.state.revert_letter(entry, position);
            }
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Result<Solution>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match self.step(frame) {
                Ok(Some(solution)) => return Some(Ok(solution)),
                Ok(None) => {}
                Err(err) => {
                    self.unwind();
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Solutions<'_> {}
