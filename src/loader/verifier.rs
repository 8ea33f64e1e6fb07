use std::collections::HashSet;

use crate::grammar::Symbol::Nonterminal;
use super::GrammarErrorType::UndefinedNonterminal;
use super::{Alternative, FileResult, GrammarError, GrammarErrors, Location, Rule};

fn get_alternative_undefined_symbols(alternative: &Alternative, location: &Location, defined: &HashSet<&str>) -> GrammarErrors {
    // Filter out everything but nonterminals and unwrap the text from the
    // nonterminals. Then filter out all the defined nonterminals.
    alternative.iter()
        .filter_map(|symbol| match symbol {
            Nonterminal(symbol) => Some(symbol),
            _ => None
        })
        .filter(|symbol| !defined.contains(symbol.as_str()))
        .map(|symbol_text| GrammarError {
            location: location.to_owned(),
            error: UndefinedNonterminal(symbol_text.to_owned())
        })
        .collect()
}

fn get_rule_undefined_symbols(rule: &Rule, defined: &HashSet<&str>) -> GrammarErrors {
    rule.rewrite.iter()
        .flat_map(|alternative| get_alternative_undefined_symbols(alternative, &rule.location, defined))
        .collect()
}

fn get_undefined_symbols(rules: &[Rule]) -> GrammarErrors {
    // A nonterminal may be defined over several lines, so collect every
    // left-hand side before checking any right-hand side
    let defined: HashSet<&str> = rules.iter().map(|rule| rule.symbol.as_str()).collect();

    rules.iter()
        .flat_map(|rule| get_rule_undefined_symbols(rule, &defined))
        .collect()
}

pub(super) fn verify_rules(rules: &[Rule]) -> FileResult<()> {
    let errors = get_undefined_symbols(rules);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::grammar::Symbol;

    fn rule(symbol: &str, rewrite: Vec<Alternative>, line: usize) -> Rule {
        Rule {
            symbol: symbol.to_string(),
            rewrite,
            location: Location { file: PathBuf::from("rules.cfg"), line }
        }
    }

    fn nt(name: &str) -> Symbol {
        Symbol::Nonterminal(name.to_string())
    }

    #[test]
    fn defined_across_lines() {
        let rules = vec![
            rule("S", vec![vec![nt("N"), nt("V")]], 1),
            rule("N", vec![vec![Symbol::Terminal("she".to_string())]], 2),
            rule("V", vec![vec![Symbol::Terminal("smiled".to_string())]], 3),
            rule("N", vec![vec![nt("N"), nt("N")]], 4),
        ];

        assert_eq!(verify_rules(&rules), Ok(()));
    }

    #[test]
    fn every_undefined_reference_is_reported() {
        let rules = vec![
            rule("S", vec![vec![nt("NP"), nt("VP")], vec![nt("CP")]], 1),
            rule("NP", vec![vec![nt("Det"), nt("N")]], 2),
        ];

        let undefined = verify_rules(&rules).unwrap_err()
            .into_iter()
            .map(|error| (error.location.line, error.error))
            .collect::<Vec<_>>();

        assert_eq!(undefined, vec![
            (1, UndefinedNonterminal("VP".to_string())),
            (1, UndefinedNonterminal("CP".to_string())),
            (2, UndefinedNonterminal("Det".to_string())),
            (2, UndefinedNonterminal("N".to_string())),
        ]);
    }
}
