/*
    This module generates random sentences from a grammar
*/

use std::collections::HashMap;

use rand::prelude::*;

use crate::grammar::*;
use crate::tree::ParseTree;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GenerateError {
    // No derivation of the symbol fits in the remaining depth
    #[error("No derivation of `{0}` fits within the depth limit")]
    Unproductive(String),
}

pub type GenResult = Result<ParseTree, GenerateError>;

// The smallest tree height each nonterminal can derive. Nonterminals that
// never reach terminals are left out
fn min_heights(grammar: &Grammar) -> HashMap<&str, usize> {
    let mut heights: HashMap<&str, usize> = HashMap::new();

    loop {
        let mut changed = false;
        for production in grammar.productions() {
            let Some(height) = alternative_height(&production.rhs, &heights) else {
                continue;
            };
            let known = heights.entry(production.lhs.as_str()).or_insert(usize::MAX);
            if height < *known {
                *known = height;
                changed = true;
            }
        }
        if !changed {
            return heights;
        }
    }
}

fn alternative_height(alternative: &Alternative, heights: &HashMap<&str, usize>) -> Option<usize> {
    alternative.iter()
        .map(|symbol| match symbol {
            Symbol::Terminal(_) => Some(0),
            Symbol::Nonterminal(n) => heights.get(n.as_str()).copied(),
        })
        .try_fold(0, |tallest, height| height.map(|h| tallest.max(h)))
        .map(|tallest| tallest + 1)
}

struct Generator<'a, R: Rng + ?Sized> {
    grammar: &'a Grammar,
    heights: HashMap<&'a str, usize>,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Generator<'_, R> {
    fn generate_nonterminal(&mut self, nonterminal: &str, budget: usize) -> GenResult {
        let grammar = self.grammar;
        let eligible = grammar.alternatives(nonterminal)
            .filter(|p| alternative_height(&p.rhs, &self.heights).is_some_and(|h| h <= budget))
            .collect::<Vec<_>>();

        let production = eligible
            .choose(&mut *self.rng)
            .ok_or_else(|| GenerateError::Unproductive(nonterminal.to_string()))?;

        let mut children = Vec::with_capacity(production.rhs.len());
        for symbol in &production.rhs {
            children.push(self.generate_symbol(symbol, budget - 1)?);
        }

        Ok(ParseTree::node(nonterminal, children))
    }

    fn generate_symbol(&mut self, symbol: &Symbol, budget: usize) -> GenResult {
        match symbol {
            Symbol::Nonterminal(n) => self.generate_nonterminal(n, budget),
            Symbol::Terminal(t) => Ok(ParseTree::leaf(t.as_str())),
        }
    }
}

/// Draws a random derivation from the start symbol whose height is at most
/// `max_depth`.
pub fn generate<R: Rng + ?Sized>(grammar: &Grammar, rng: &mut R, max_depth: usize) -> GenResult {
    let mut generator = Generator {
        grammar,
        heights: min_heights(grammar),
        rng,
    };
    generator.generate_nonterminal(&grammar.start_symbol, max_depth)
}
