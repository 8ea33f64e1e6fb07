/*
    This module holds the built-in English grammar
*/

/// The built-in English grammar: phrase structure rules followed by the
/// lexicon. `S` is the start symbol.
pub const ENGLISH: &str = r#"
S -> NP VP | NP VP CP | NP VP Conj VP
NP -> N | Det N | Det Adj NP | NP PP | PP NP | CP | Adj NP
VP -> V | VP NP | VP PP | PP VP | Adv VP | VP Adv | Conj VP | V VP
PP -> P | P NP
CP -> Conj S | Conj NP

Adj -> "country" | "dreadful" | "enigmatical" | "little" | "moist" | "red"
Adv -> "down" | "here" | "never"
Conj -> "and" | "until"
Det -> "a" | "an" | "his" | "my" | "the"
N -> "armchair" | "companion" | "day" | "door" | "hand" | "he" | "himself"
N -> "holmes" | "home" | "i" | "mess" | "paint" | "palm" | "pipe" | "she"
N -> "smile" | "thursday" | "walk" | "we" | "word"
P -> "at" | "before" | "in" | "of" | "on" | "to"
V -> "arrived" | "came" | "chuckled" | "had" | "lit" | "said" | "sat"
V -> "smiled" | "tell" | "were"
"#;

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::chart::parse;
    use crate::chunker::{chunk_text, extract_np_chunks};
    use crate::loader::parse_str;
    use crate::preprocess::tokenize;

    #[test]
    fn loads() {
        let grammar = parse_str(ENGLISH, "english.cfg").unwrap();

        assert_eq!(grammar.start_symbol, "S");
        assert_eq!(grammar.nonterminals().collect_vec(), vec![
            "S", "NP", "VP", "PP", "CP", "Adj", "Adv", "Conj", "Det", "N", "P", "V"
        ]);
        assert_eq!(grammar.alternatives("N").count(), 20);
    }

    #[test]
    fn holmes_sat() {
        let grammar = parse_str(ENGLISH, "english.cfg").unwrap();
        let tokens = tokenize("Holmes sat.");
        let trees = parse(&grammar, &tokens).unwrap();

        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].to_string(), "(S (NP (N holmes)) (VP (V sat)))");
        assert_eq!(extract_np_chunks(&trees[0]).into_iter().map(chunk_text).collect_vec(), vec!["holmes"]);
    }

    #[test]
    fn chunks_of_every_parse() {
        let grammar = parse_str(ENGLISH, "english.cfg").unwrap();
        let tokens = tokenize("Holmes lit a pipe.");
        let trees = parse(&grammar, &tokens).unwrap();

        assert!(!trees.is_empty());
        for tree in &trees {
            let chunks = extract_np_chunks(tree).into_iter().map(chunk_text).collect_vec();
            assert_eq!(chunks, vec!["holmes", "a pipe"]);
        }
    }

    #[test]
    fn unknown_word() {
        let grammar = parse_str(ENGLISH, "english.cfg").unwrap();

        assert!(parse(&grammar, &tokenize("Holmes sat on the zzz.")).is_err());
    }
}
