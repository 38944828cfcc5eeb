use crate::{
    crossword::{Crossword, Direction},
    entry::Entry,
};
use rustc_hash::FxHashMap;
use std::{fmt, sync::Arc};

/// One complete, consistent fill.
///
/// The entry list is shared with the generator that produced it; the grid is
/// a private snapshot, so a solution stays valid while the search moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    entries: Arc<[Entry]>,
    grid: Crossword,
}

impl Solution {
    pub(crate) fn new(entries: Arc<[Entry]>, grid: Crossword) -> Solution {
        Solution { entries, grid }
    }

    pub fn grid(&self) -> &Crossword {
        &self.grid
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn word(&self, entry: &Entry) -> String {
        entry.word(&self.grid)
    }

    /// Horizontal entries, by clue number.
    pub fn across(&self) -> Vec<&Entry> {
        self.clue_entries(Direction::Across)
    }

    /// Vertical entries, by clue number.
    pub fn down(&self) -> Vec<&Entry> {
        self.clue_entries(Direction::Down)
    }

    /// `(clue number, word)` pairs for one direction.
    pub fn clues(&self, direction: Direction) -> Vec<(usize, String)> {
        self.clue_entries(direction)
            .into_iter()
            .map(|entry| (entry.index(), self.word(entry)))
            .collect()
    }

    fn clue_entries(&self, direction: Direction) -> Vec<&Entry> {
        let mut result: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.direction() == direction)
            .collect();
        result.sort_by_key(|entry| entry.index());
        result
    }

    /// Renders the numbered, empty grid next to the across and down clue
    /// lists as a standalone HTML page.
    pub fn to_html(&self, heading: Option<&str>) -> String {
        let numbers: FxHashMap<(usize, usize), usize> = self
            .entries
            .iter()
            .map(|entry| (entry.start(), entry.index()))
            .collect();

        let mut grid_rows = String::new();
        for row in 0..self.grid.height() {
            grid_rows.push_str("<tr>");
            for col in 0..self.grid.width() {
                if self.grid.is_black(row, col) {
                    grid_rows.push_str("<td class=\"filled\"></td>");
                } else if let Some(number) = numbers.get(&(row, col)) {
                    grid_rows.push_str(&format!("<td>{}</td>", number));
                } else {
                    grid_rows.push_str("<td></td>");
                }
            }
            grid_rows.push_str("</tr>");
        }

        let clue_list = |direction| {
            self.clues(direction)
                .into_iter()
                .fold(String::new(), |mut acc, (number, word)| {
                    acc.push_str(&format!("<li value=\"{}\">{}</li>", number, escape(&word)));
                    acc
                })
        };

        let heading = match heading {
            Some(text) => format!("\n        <h1>{}</h1>", escape(text)),
            None => String::new(),
        };

        format!(
            "<html>
    <head>
        <title>Crossword</title>
        <style>
            body {{ font-family: Calibri; }}
            table {{ border-collapse: collapse; }}
            td {{ vertical-align: top; }}
            td.clues {{ padding: 0px 25px; }}
            td.clues td {{ width: 350px; font-size: 16pt; }}
            table.grid td {{
                border: 2px solid #888;
                width: 96px;
                height: 108px;
                margin: 0;
                padding: 1px 5px;
                font-size: 16pt;
                font-weight: bold;
            }}
            table.grid td.filled {{ background-color: #CCC; }}
        </style>
    </head>
    <body>{heading}
        <table>
            <tr>
                <td><table class=\"grid\">{grid}</table></td>
                <td class=\"clues\">
                    <table>
                        <tr>
                            <td>
                                <h2>Across</h2>
                                <ol>{across}</ol>
                            </td>
                            <td>
                                <h2>Down</h2>
                                <ol>{down}</ol>
                            </td>
                        </tr>
                    </table>
                </td>
            </tr>
        </table>
    </body>
</html>
",
            heading = heading,
            grid = grid_rows,
            across = clue_list(Direction::Across),
            down = clue_list(Direction::Down),
        )
    }
}

fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f)?;

        writeln!(f, "Across:")?;
        for (number, word) in self.clues(Direction::Across) {
            writeln!(f, "{}: {}", number, word)?;
        }
        writeln!(f)?;

        writeln!(f, "Down:")?;
        for (number, word) in self.clues(Direction::Down) {
            writeln!(f, "{}: {}", number, word)?;
        }
        Ok(())
    }
}
