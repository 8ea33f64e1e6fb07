/*
    This module turns raw sentences into the words the parser sees
*/

use itertools::Itertools;

const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Lowercases `text`, splits it into words and drops every token that is not
/// made only of lowercase letters (punctuation, numbers, clitics).
pub fn tokenize(text: &str) -> Vec<String> {
    word_tokenize(&text.to_lowercase())
        .into_iter()
        .filter(|word| is_word(word))
        .map(str::to_string)
        .collect()
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
}

/// Splits on whitespace, then separates punctuation at either end of a word
/// and the usual English clitics (`don't` becomes `do n't`).
pub fn word_tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().flat_map(split_piece).collect()
}

fn split_piece(piece: &str) -> Vec<&str> {
    let start = piece.find(char::is_alphanumeric).unwrap_or(piece.len());
    let end = piece.rfind(char::is_alphanumeric)
        .map_or(start, |i| i + piece[i..].chars().next().map_or(0, char::len_utf8));

    let (leading, rest) = piece.split_at(start);
    let (core, trailing) = rest.split_at(end.saturating_sub(start));

    let mut tokens = leading.char_indices().map(|(i, c)| &leading[i..i + c.len_utf8()]).collect_vec();
    tokens.extend(split_clitic(core));
    tokens.extend(trailing.char_indices().map(|(i, c)| &trailing[i..i + c.len_utf8()]));
    tokens
}

fn split_clitic(word: &str) -> Vec<&str> {
    CLITICS.iter()
        .find(|clitic| word.len() > clitic.len() && word.ends_with(*clitic))
        .map_or_else(|| vec![word], |clitic| {
            let (stem, clitic) = word.split_at(word.len() - clitic.len());
            vec![stem, clitic]
        })
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Holmes sat.", &["holmes", "sat"])]
    #[case("  She never said a word until we were at the door here.", &["she", "never", "said", "a", "word", "until", "we", "were", "at", "the", "door", "here"])]
    #[case("Holmes lit a pipe, and 2 of them smiled!", &["holmes", "lit", "a", "pipe", "and", "of", "them", "smiled"])]
    #[case("\"Come home,\" she said.", &["come", "home", "she", "said"])]
    #[case("I don't know Holmes's arm-chair", &["i", "do", "know", "holmes"])]
    #[case("...", &[])]
    #[case("", &[])]
    fn tokenize_sentences(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(text), expected);
    }

    #[test]
    fn punctuation_becomes_tokens() {
        assert_eq!(word_tokenize("(the red pipe)."), vec!["(", "the", "red", "pipe", ")", "."]);
        assert_eq!(word_tokenize("we'll say \"hi\""), vec!["we", "'ll", "say", "\"", "hi", "\""]);
        assert_eq!(word_tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(word_tokenize("'s"), vec!["'", "s"]);
    }

    #[test]
    fn numbers_are_dropped() {
        assert!(tokenize("221 1887").is_empty());
        assert_eq!(tokenize("a2b thursday"), vec!["thursday"]);
    }
}
