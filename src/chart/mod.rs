/*
    This module finds every parse of a sentence with a bottom-up chart
*/

mod table;

use std::iter::once;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::grammar::{Grammar, Symbol, UndefinedStart};
use crate::tree::ParseTree;
use table::{Backpointer, Chart};

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ParseError {
    // A sentence needs at least one word
    #[error("Cannot parse an empty sentence")]
    EmptyInput,
    // Words that appear in no terminal rule
    #[error("Grammar does not cover some of the input words: {}", .0.join(", "))]
    NoTerminalMatch(Vec<String>),
    // The requested start symbol is not defined
    #[error("Start symbol `{0}` has no rule")]
    UndefinedStart(String),
}

impl From<UndefinedStart> for ParseError {
    fn from(error: UndefinedStart) -> Self {
        ParseError::UndefinedStart(error.0)
    }
}

/// Every distinct parse of `tokens` from the grammar's start symbol.
///
/// An empty result means the words are known but no derivation spans the
/// whole sentence. Trees come out in production order, and for each
/// production by increasing split positions.
pub fn parse<S: AsRef<str>>(grammar: &Grammar, tokens: &[S]) -> Result<Vec<ParseTree>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let uncovered = grammar.uncovered(tokens);
    if !uncovered.is_empty() {
        return Err(ParseError::NoTerminalMatch(uncovered.into_iter().map(String::from).collect()));
    }
    grammar.start()?;

    let tokens: Vec<&str> = tokens.iter().map(AsRef::<str>::as_ref).collect();
    let mut parser = ChartParser::new(grammar, &tokens);
    parser.fill();

    let trees = parser.trees();
    debug!("{} tree(s) for {} token(s), {} chart edge(s)", trees.len(), tokens.len(), parser.chart.edge_count());

    Ok(trees)
}

struct ChartParser<'a> {
    grammar: &'a Grammar,
    tokens: &'a [&'a str],
    chart: Chart,
}

impl<'a> ChartParser<'a> {
    fn new(grammar: &'a Grammar, tokens: &'a [&'a str]) -> Self {
        ChartParser {
            grammar,
            tokens,
            chart: Chart::new(tokens.len()),
        }
    }

    // Whether `symbol` derives exactly the span `[start, end)`
    fn matches(&self, symbol: &Symbol, start: usize, end: usize) -> bool {
        match symbol {
            Symbol::Terminal(t) => end == start + 1 && self.tokens.get(start) == Some(&t.as_str()),
            Symbol::Nonterminal(n) => self.chart.derives(n, start, end),
        }
    }

    // Every way of cutting `[start, end)` into one non-empty piece per symbol,
    // as the cut positions, smallest first
    fn partitions(&self, rhs: &[Symbol], start: usize, end: usize) -> Vec<Vec<usize>> {
        match rhs {
            [] => Vec::new(),
            [last] => {
                if self.matches(last, start, end) {
                    vec![Vec::new()]
                } else {
                    Vec::new()
                }
            }
            [first, rest @ ..] => {
                let mut found = Vec::new();
                for mid in start + 1..=end.saturating_sub(rest.len()) {
                    if !self.matches(first, start, mid) {
                        continue;
                    }
                    for tail in self.partitions(rest, mid, end) {
                        found.push(once(mid).chain(tail).collect());
                    }
                }
                found
            }
        }
    }

    fn fill(&mut self) {
        let len = self.tokens.len();
        for width in 1..=len {
            for start in 0..=len - width {
                self.fill_span(start, start + width);
            }
        }
    }

    fn fill_span(&mut self, start: usize, end: usize) {
        let grammar = self.grammar;

        // Productions that consume input only look at shorter spans, which
        // are already complete
        for (index, production) in grammar.productions().iter().enumerate() {
            if production.is_unit() {
                continue;
            }
            for splits in self.partitions(&production.rhs, start, end) {
                self.chart.add(&production.lhs, start, end, Backpointer { production: index, splits });
            }
        }

        // Unit productions feed on this same span, so repeat until nothing new appears
        let units = grammar.productions().iter()
            .enumerate()
            .filter_map(|(index, production)| match production.rhs.as_slice() {
                [Symbol::Nonterminal(child)] => Some((index, production.lhs.as_str(), child.as_str())),
                _ => None,
            })
            .collect_vec();
        loop {
            let mut changed = false;
            for &(index, lhs, child) in &units {
                if self.chart.derives(child, start, end) {
                    changed |= self.chart.add(lhs, start, end, Backpointer { production: index, splits: Vec::new() });
                }
            }
            if !changed {
                break;
            }
        }

        self.chart.seal(start, end);
        trace!("span [{}, {}) derives {} symbol(s)", start, end, self.chart.symbols(start, end));
    }

    fn trees(&self) -> Vec<ParseTree> {
        let mut walk = Walk::default();
        let trees = self.trees_for(&self.grammar.start_symbol, 0, self.tokens.len(), &mut walk);

        if walk.pruned > 0 {
            warn!("skipped {} cyclic unit derivation(s)", walk.pruned);
        }

        // Duplicate productions produce identical trees
        trees.into_iter().unique().collect()
    }

    fn trees_for(&self, symbol: &str, start: usize, end: usize, walk: &mut Walk) -> Vec<ParseTree> {
        let key = (symbol.to_string(), start, end);
        // Only unit productions keep the span unchanged, so this cuts unit cycles
        if walk.visiting.contains(&key) {
            walk.pruned += 1;
            return Vec::new();
        }
        walk.visiting.push(key);

        let mut trees = Vec::new();
        for backpointer in self.chart.backpointers(symbol, start, end) {
            let Some(production) = self.grammar.production(backpointer.production) else {
                continue;
            };

            let bounds = once(start)
                .chain(backpointer.splits.iter().copied())
                .chain(once(end))
                .tuple_windows();

            let options = production.rhs.iter()
                .zip(bounds)
                .map(|(child, (from, to))| match child {
                    Symbol::Terminal(t) => vec![ParseTree::leaf(t.as_str())],
                    Symbol::Nonterminal(n) => self.trees_for(n, from, to, walk),
                })
                .collect_vec();

            trees.extend(
                options.into_iter()
                    .multi_cartesian_product()
                    .map(|children| ParseTree::node(symbol, children))
            );
        }

        walk.visiting.pop();
        trees
    }
}

#[derive(Default)]
struct Walk {
    visiting: Vec<(String, usize, usize)>,
    pruned: usize,
}
