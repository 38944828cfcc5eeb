use crate::{
    crossword::{Crossword, Direction, BLACK, BLANK},
    entry::Entry,
    error::{Inconsistency, MalformedTemplate, Result},
};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Turns template rows into a grid. Letters are lower-cased.
pub(crate) fn parse_template<S: AsRef<str>>(rows: &[S]) -> Result<Crossword> {
    let height = rows.len();
    let mut contents = vec![];
    let mut width = 0;

    for (row, template_row) in rows.iter().enumerate() {
        let template_row: Vec<char> = template_row.as_ref().to_lowercase().chars().collect();
        if row == 0 {
            width = template_row.len();
        } else if template_row.len() != width {
            return Err(MalformedTemplate::UnequalRows {
                row: row + 1,
                expected: width,
                found: template_row.len(),
            }
            .into());
        }

        for (col, c) in template_row.into_iter().enumerate() {
            if c == BLACK || c == BLANK || c.is_ascii_lowercase() {
                contents.push(c);
                continue;
            }
            return Err(MalformedTemplate::InvalidCharacter {
                row: row + 1,
                column: col + 1,
                character: c,
            }
            .into());
        }
    }

    Ok(Crossword::from_cells(contents, width, height))
}

/// Every maximal run of two or more non-black cells: across entries in
/// row-major order, then down entries in column-major order.
pub(crate) fn parse_entries(crossword: &Crossword) -> Vec<Entry> {
    let mut result = vec![];

    for row in 0..crossword.height {
        let mut start_col = None;
        for col in 0..crossword.width {
            if !crossword.is_black(row, col) {
                // found a letter or blank; is it our first?
                if start_col.is_none() {
                    start_col = Some(col);
                }
                continue;
            }
            if let Some(start) = start_col.take() {
                push_entry(&mut result, crossword, row, start, col - start, Direction::Across);
            }
        }
        // have to process end of row
        if let Some(start) = start_col {
            push_entry(
                &mut result,
                crossword,
                row,
                start,
                crossword.width - start,
                Direction::Across,
            );
        }
    }

    for col in 0..crossword.width {
        let mut start_row = None;
        for row in 0..crossword.height {
            if !crossword.is_black(row, col) {
                if start_row.is_none() {
                    start_row = Some(row);
                }
                continue;
            }
            if let Some(start) = start_row.take() {
                push_entry(&mut result, crossword, start, col, row - start, Direction::Down);
            }
        }
        if let Some(start) = start_row {
            push_entry(
                &mut result,
                crossword,
                start,
                col,
                crossword.height - start,
                Direction::Down,
            );
        }
    }

    result
}

fn push_entry(
    result: &mut Vec<Entry>,
    crossword: &Crossword,
    start_row: usize,
    start_col: usize,
    length: usize,
    direction: Direction,
) {
    // single cells are not word slots
    if length < 2 {
        return;
    }
    result.push(Entry::new(crossword, start_row, start_col, length, direction));
}

/// Maps every covered cell to the entry covering it in each direction.
pub(crate) fn build_lookup(entries: &[Entry]) -> Result<FxHashMap<(Direction, usize, usize), usize>> {
    let mut result = FxHashMap::default();

    for (id, entry) in entries.iter().enumerate() {
        for position in 0..entry.length {
            let (row, col) = entry.cell(position);
            if result.insert((entry.direction, row, col), id).is_some() {
                return Err(Inconsistency::CellAlreadyClaimed { row, col }.into());
            }
        }
    }

    Ok(result)
}

/// Links each across entry with the down entries crossing it, both ways.
pub(crate) fn link_intersections(entries: &mut [Entry]) -> Result<()> {
    let lookup = build_lookup(entries)?;

    for id in 0..entries.len() {
        if !entries[id].is_across() {
            continue;
        }
        for position in 0..entries[id].length {
            let (row, col) = entries[id].cell(position);
            let crossing = match lookup.get(&(Direction::Down, row, col)) {
                Some(crossing) => *crossing,
                None => continue,
            };
            entries[id].link(id, row, col, crossing)?;
            entries[crossing].link(crossing, row, col, id)?;
        }
    }

    Ok(())
}

/// Numbers distinct start cells 1, 2, 3... in row-major order.
pub(crate) fn assign_indexes(entries: &mut [Entry]) {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|id| entries[*id].start());

    let mut index = 0;
    let mut previous = None;
    for id in order {
        let start = entries[id].start();
        if previous != Some(start) {
            index += 1;
            previous = Some(start);
        }
        entries[id].index = index;
    }
}

/// Lengths of the entries the search will have to fill.
pub(crate) fn needed_lengths(entries: &[Entry]) -> FxHashSet<usize> {
    entries
        .iter()
        .filter(|entry| !entry.is_complete())
        .map(|entry| entry.length)
        .collect()
}

/// Parses a template into its grid and fully linked, numbered entries.
pub(crate) fn parse<S: AsRef<str>>(rows: &[S]) -> Result<(Crossword, Vec<Entry>)> {
    let grid = parse_template(rows)?;
    let mut entries = parse_entries(&grid);
    link_intersections(&mut entries)?;
    assign_indexes(&mut entries);

    debug!(
        "Parsed {}x{} template into {} entries ({} across)",
        grid.width,
        grid.height,
        entries.len(),
        entries.iter().filter(|e| e.is_across()).count()
    );

    Ok((grid, entries))
}
