/*
    This module is for storing and querying grammars
*/

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use itertools::Itertools;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Symbol {
    Terminal(String),
    Nonterminal(String),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "\"{}\"", t),
            Symbol::Nonterminal(n) => write!(f, "{}", n),
        }
    }
}

// A start symbol was requested that no rule defines
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Start symbol `{0}` has no rule")]
pub struct UndefinedStart(pub String);

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// The alternatives of a rewrite rule
pub type Rewrite = Vec<Alternative>;

/// A single `lhs -> rhs` production. Alternatives written with `|` become
/// separate productions sharing a left-hand side.
#[derive(Debug, PartialEq, Clone)]
pub struct Production {
    pub lhs: String,
    pub rhs: Alternative,
}

impl Production {
    /// A unit production rewrites to exactly one nonterminal and consumes no
    /// input of its own.
    pub fn is_unit(&self) -> bool {
        matches!(self.rhs.as_slice(), [Symbol::Nonterminal(_)])
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs.iter().join(" "))
    }
}

/// A verified context-free grammar. Productions keep the order they were
/// written in, which fixes the order trees come out of the chart parser.
#[derive(Debug, PartialEq, Clone)]
pub struct Grammar {
    pub start_symbol: String,
    productions: Vec<Production>,
    by_lhs: HashMap<String, Vec<usize>>,
    terminals: HashSet<String>,
}

impl Grammar {
    // Only the loader builds grammars, after the rules have been verified
    pub(crate) fn new(start_symbol: String, productions: Vec<Production>) -> Self {
        let mut by_lhs: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, production) in productions.iter().enumerate() {
            by_lhs.entry(production.lhs.clone()).or_default().push(i);
        }

        let terminals = productions.iter()
            .flat_map(|p| p.rhs.iter())
            .filter_map(|symbol| match symbol {
                Symbol::Terminal(t) => Some(t.clone()),
                Symbol::Nonterminal(_) => None,
            })
            .collect();

        Grammar {
            start_symbol,
            productions,
            by_lhs,
            terminals,
        }
    }

    /// The same grammar rooted at a different nonterminal.
    pub fn with_start(mut self, symbol: &str) -> Result<Self, UndefinedStart> {
        if !self.is_nonterminal(symbol) {
            return Err(UndefinedStart(symbol.to_string()));
        }
        self.start_symbol = symbol.to_string();
        Ok(self)
    }

    /// The start symbol, provided some rule defines it.
    pub fn start(&self) -> Result<&str, UndefinedStart> {
        if self.is_nonterminal(&self.start_symbol) {
            Ok(&self.start_symbol)
        } else {
            Err(UndefinedStart(self.start_symbol.clone()))
        }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn production(&self, index: usize) -> Option<&Production> {
        self.productions.get(index)
    }

    /// Productions for `lhs` in the order they were written.
    pub fn alternatives<'a>(&'a self, lhs: &str) -> impl Iterator<Item = &'a Production> + 'a {
        self.by_lhs
            .get(lhs)
            .into_iter()
            .flatten()
            .filter_map(move |&i| self.productions.get(i))
    }

    /// Nonterminals in order of first definition.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.productions.iter().map(|p| p.lhs.as_str()).unique()
    }

    pub fn is_nonterminal(&self, name: &str) -> bool {
        self.by_lhs.contains_key(name)
    }

    pub fn covers(&self, word: &str) -> bool {
        self.terminals.contains(word)
    }

    /// Distinct words that no terminal matches, in input order.
    pub fn uncovered<'a, S: AsRef<str>>(&self, tokens: &'a [S]) -> Vec<&'a str> {
        tokens.iter()
            .map(AsRef::<str>::as_ref)
            .filter(|word| !self.covers(word))
            .unique()
            .collect()
    }
}
