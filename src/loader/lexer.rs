use std::iter::Peekable;
use std::str::Chars;

use itertools::{Itertools, PeekingNext};

use super::{GrammarErrorType, Result};

#[derive(PartialEq, Debug)]
pub enum Token {
    Arrow,
    Or,
    Nonterminal(String),
    Terminal(String)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

// True when the iterator is positioned on `->`
fn at_arrow(line: &Peekable<Chars>) -> bool {
    let mut ahead = line.clone();
    ahead.next() == Some('-') && ahead.next() == Some('>')
}

pub fn lex_terminal(line: &mut impl PeekingNext<Item = char>) -> Result<Token> {
    // Consume open quote, the same character has to close the terminal
    let quote = line.next().ok_or(GrammarErrorType::UnmatchedQuote)?;
    let token_text = line.peeking_take_while(|&c| c != quote).collect();

    // Check if there is a close quote and consume it if there is
    if line.next() != Some(quote) {
        return Err(GrammarErrorType::UnmatchedQuote);
    }

    Ok(Token::Terminal(token_text))
}

pub fn lex_nonterminal(line: &mut Peekable<Chars>) -> Result<Token> {
    let mut name = String::new();
    while let Some(&c) = line.peek() {
        if c.is_whitespace() || c == '|' || is_quote(c) || at_arrow(line) {
            break;
        }
        name.push(c);
        line.next();
    }

    Ok(Token::Nonterminal(name))
}

pub fn lex_line(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(&c) = line_chars.peek() {
        if at_arrow(&line_chars) {
            line_chars.next();
            line_chars.next();
            tokens.push(Token::Arrow);
        } else if c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if is_quote(c) {
            tokens.push(lex_terminal(&mut line_chars)?);
        } else if !c.is_whitespace() {
            tokens.push(lex_nonterminal(&mut line_chars)?);
        } else {
            line_chars.next();
        }
    }

    Ok(tokens)
}
