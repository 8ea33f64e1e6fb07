/*
    This module reads context-free grammars written as `LHS -> A B | "word"`
*/

mod lexer;
mod verifier;

use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::error_handling::*;
use crate::grammar::*;
use lexer::*;
use verifier::verify_rules;

#[derive(Debug, thiserror::Error)]
pub enum GrammarErrorType {
    // A line which should contain a rule does not
    #[error("Expected `->` after nonterminal")]
    MissingArrow,
    // A rule has multiple arrows
    #[error("Unexpected `->` encountered")]
    UnexpectedArrow,
    // The user starts a rule line with something other than a nonterminal
    #[error("Tried to define something other than a nonterminal")]
    MissingNonterminal,
    // There is an unclosed quote
    #[error("Unmatched quotes")]
    UnmatchedQuote,
    // A rule or one of its alternatives has no symbols
    #[error("Empty right-hand side")]
    EmptyAlternative,
    // An undefined nonterminal was used
    #[error("Could not find definition for `{0}`")]
    UndefinedNonterminal(String),
    // Nothing in the source defines a rule
    #[error("Grammar contains no rules")]
    NoRules,
    // Somehow a full rewrite was parsed as a base alternative. parse_rewrite
    // splits on every `|` first, so only a loader bug can produce this
    #[error("Rewrite was not fully split (this is a problem with the loader, not the grammar)")]
    UnsplitRewrite,
    // A blank line got too deep into the parser. is_rule_line drops blank
    // lines first, so only a loader bug can produce this
    #[error("Blank line encountered in rule parser (this is a problem with the loader, not the grammar)")]
    UnexpectedBlankLine,
    // There was an issue with reading a file
    #[error("File error: {0}")]
    FileError(std::io::Error),
}

impl ErrorType for GrammarErrorType {}

impl PartialEq for GrammarErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GrammarErrorType::FileError(a), GrammarErrorType::FileError(b)) => a.kind() == b.kind(),
            (GrammarErrorType::UndefinedNonterminal(a), GrammarErrorType::UndefinedNonterminal(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

pub type GrammarError = Error<GrammarErrorType>;
pub type GrammarErrors = Errors<GrammarErrorType>;

fn io_error(error: std::io::Error, file: PathBuf) -> GrammarError {
    GrammarError {
        location: Location::file(file),
        error: GrammarErrorType::FileError(error)
    }
}

pub type Result<T> = std::result::Result<T, GrammarErrorType>;
pub type LineResult<T> = std::result::Result<T, GrammarError>;
pub type FileResult<T> = std::result::Result<T, GrammarErrors>;

// One source line: a left-hand side and the alternatives written on that line
#[derive(PartialEq, Debug)]
struct Rule {
    symbol: String,
    rewrite: Rewrite,
    location: Location
}

fn parse_alternative(tokens: &[Token]) -> Result<Alternative> {
    if tokens.is_empty() {
        return Err(GrammarErrorType::EmptyAlternative);
    }

    tokens.iter().map(|t| match t {
        Token::Arrow => Err(GrammarErrorType::UnexpectedArrow),
        Token::Or => Err(GrammarErrorType::UnsplitRewrite),
        Token::Nonterminal(s) => Ok(Symbol::Nonterminal(s.clone())),
        Token::Terminal(s) => Ok(Symbol::Terminal(s.clone()))
    }).collect()
}

fn parse_rewrite(tokens: &[Token]) -> Result<Rewrite> {
    tokens.split(|t| *t == Token::Or).map(parse_alternative).collect()
}

fn parse_line(tokens: &[Token], location: Location) -> Result<Rule> {
    let symbol = match tokens.first() {
        Some(Token::Nonterminal(s)) => Ok(s.clone()),
        Some(_) => Err(GrammarErrorType::MissingNonterminal),
        None => Err(GrammarErrorType::UnexpectedBlankLine)
    }?;

    if tokens.get(1) != Some(&Token::Arrow) {
        return Err(GrammarErrorType::MissingArrow)
    }

    let rewrite = parse_rewrite(tokens.get(2..).unwrap_or_default())?;

    Ok(Rule {
        symbol,
        rewrite,
        location
    })
}

fn parse_lex_line(line: &str, location: Location) -> LineResult<Rule> {
    lexer::lex_line(line)
        .and_then(|lexed_line| parse_line(&lexed_line, location.clone()))
        .map_err(|error| GrammarError { location, error })
}

fn is_rule_line(line: &String) -> bool {
    let line = line.trim_start();
    !line.is_empty() && !line.starts_with('#') && !line.starts_with(';')
}

// Returns an iterator over the lines of a file, with the io errors wrapped
// in GrammarError and enumerated
fn file_line_nums<'a>(file: File, path: &'a Path) -> impl Iterator<Item = (usize, LineResult<String>)> + 'a {
    std::io::BufReader::new(file)
        .lines()
        .map(move |line| line.map_err(|e| io_error(e, path.to_path_buf())))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line) || line.is_err())
        .map(|(num, line)| (num + 1, line))
}

fn text_line_nums(text: &str) -> impl Iterator<Item = (usize, LineResult<String>)> + '_ {
    text.lines()
        .map(|line| LineResult::Ok(line.to_string()))
        .enumerate()
        .filter(|(_, line)| line.as_ref().is_ok_and(is_rule_line))
        .map(|(num, line)| (num + 1, line))
}

// Splits every rule line into one production per alternative, keeping file order
fn grammar_from_rules(rules: Vec<Rule>, origin: &Path) -> FileResult<Grammar> {
    let start_symbol = match rules.first() {
        Some(rule) => rule.symbol.clone(),
        None => return Err(vec![GrammarError {
            location: Location::file(origin.to_path_buf()),
            error: GrammarErrorType::NoRules
        }])
    };

    verify_rules(&rules)?;

    let productions = rules.into_iter()
        .flat_map(|rule| {
            let lhs = rule.symbol;
            rule.rewrite.into_iter().map(move |rhs| Production { lhs: lhs.clone(), rhs })
        })
        .collect_vec();

    debug!("loaded {} productions from {}, start symbol `{}`", productions.len(), origin.display(), start_symbol);

    Ok(Grammar::new(start_symbol, productions))
}

fn parse_lines(lines: impl Iterator<Item = (usize, LineResult<String>)>, origin: &Path) -> FileResult<Grammar> {
    let parsed_lines = lines.map(|(num, line_res)| {
        line_res.and_then(|line| parse_lex_line(&line, Location {
            file: origin.to_path_buf(),
            line: num
        }))
    });

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition_result();
    if !errors.is_empty() {
        return Err(errors);
    }

    grammar_from_rules(rules, origin)
}

/// Reads a grammar from text. `origin` only labels error locations.
pub fn parse_str(text: &str, origin: impl AsRef<Path>) -> FileResult<Grammar> {
    parse_lines(text_line_nums(text), origin.as_ref())
}

pub fn parse_file(path: impl AsRef<Path>) -> FileResult<Grammar> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| vec![io_error(e, path.to_path_buf())])?;

    parse_lines(file_line_nums(file, path), path)
}
