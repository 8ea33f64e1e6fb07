use std::collections::HashMap;

/// How a nonterminal derives a span: the production used, plus the positions
/// where the span is cut between consecutive right-hand side symbols.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Backpointer {
    pub production: usize,
    pub splits: Vec<usize>,
}

type Cell = HashMap<String, Vec<Backpointer>>;

/// Derivable nonterminals for every span `[start, end)` of the input.
pub(crate) struct Chart {
    len: usize,
    cells: Vec<Cell>,
}

impl Chart {
    pub fn new(len: usize) -> Self {
        Chart {
            len,
            cells: (0..(len + 1) * (len + 1)).map(|_| Cell::new()).collect(),
        }
    }

    fn index(&self, start: usize, end: usize) -> usize {
        start * (self.len + 1) + end
    }

    fn cell(&self, start: usize, end: usize) -> Option<&Cell> {
        self.cells.get(self.index(start, end))
    }

    pub fn derives(&self, symbol: &str, start: usize, end: usize) -> bool {
        self.cell(start, end).is_some_and(|cell| cell.contains_key(symbol))
    }

    pub fn backpointers(&self, symbol: &str, start: usize, end: usize) -> &[Backpointer] {
        self.cell(start, end)
            .and_then(|cell| cell.get(symbol))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Records a derivation. Returns false when it was already known.
    pub fn add(&mut self, symbol: &str, start: usize, end: usize, backpointer: Backpointer) -> bool {
        let index = self.index(start, end);
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };

        let entry = cell.entry(symbol.to_string()).or_default();
        if entry.contains(&backpointer) {
            return false;
        }
        entry.push(backpointer);
        true
    }

    /// Puts the derivations of a finished span in production order, then by
    /// split position.
    pub fn seal(&mut self, start: usize, end: usize) {
        let index = self.index(start, end);
        if let Some(cell) = self.cells.get_mut(index) {
            cell.values_mut().for_each(|entry| entry.sort());
        }
    }

    pub fn symbols(&self, start: usize, end: usize) -> usize {
        self.cell(start, end).map_or(0, Cell::len)
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().flat_map(|cell| cell.values()).map(Vec::len).sum()
    }
}
