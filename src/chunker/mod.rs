/*
    This module finds noun phrase chunks: subtrees carrying the phrase label
    with no other subtree of the same label below them
*/

use itertools::Itertools;

use crate::tree::ParseTree;

pub const NOUN_PHRASE: &str = "NP";

/// Minimal `NP` subtrees of `tree`, left to right. Only `NP` labels count,
/// so a tree such as `(S (N she) (V smiled))` has no chunks.
pub fn extract_np_chunks(tree: &ParseTree) -> Vec<&ParseTree> {
    extract_chunks(tree, NOUN_PHRASE)
}

/// Minimal subtrees labelled `label`, left to right. Structurally identical
/// chunks found at different positions are reported once.
pub fn extract_chunks<'a>(tree: &'a ParseTree, label: &str) -> Vec<&'a ParseTree> {
    let mut chunks = Vec::new();
    collect_chunks(tree, label, &mut chunks);
    chunks.into_iter().unique().collect()
}

fn collect_chunks<'a>(tree: &'a ParseTree, label: &str, chunks: &mut Vec<&'a ParseTree>) {
    if tree.label() == Some(label) && !tree.contains_label(label) {
        chunks.push(tree);
        return;
    }

    for child in tree.children() {
        collect_chunks(child, label, chunks);
    }
}

/// The words of a chunk joined by single spaces.
pub fn chunk_text(chunk: &ParseTree) -> String {
    chunk.leaves().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse;
    use crate::loader::parse_str;

    fn node(label: &str, children: Vec<ParseTree>) -> ParseTree {
        ParseTree::node(label, children)
    }

    fn word(label: &str, token: &str) -> ParseTree {
        ParseTree::node(label, vec![ParseTree::leaf(token)])
    }

    fn texts(chunks: &[&ParseTree]) -> Vec<String> {
        chunks.iter().map(|chunk| chunk_text(chunk)).collect()
    }

    #[test]
    fn whole_noun_phrase() {
        let tree = node("NP", vec![word("Det", "the"), word("N", "pipe")]);
        let chunks = extract_np_chunks(&tree);

        assert_eq!(chunks, vec![&tree]);
        assert_eq!(texts(&chunks), vec!["the pipe"]);
    }

    #[test]
    fn nested_noun_phrases_keep_the_inner_ones() {
        // (NP (NP the pipe) (PP on (NP the armchair)))
        let the_pipe = node("NP", vec![word("Det", "the"), word("N", "pipe")]);
        let the_armchair = node("NP", vec![word("Det", "the"), word("N", "armchair")]);
        let tree = node("S", vec![
            node("NP", vec![
                the_pipe.clone(),
                node("PP", vec![word("P", "on"), the_armchair.clone()]),
            ]),
            word("V", "sat"),
        ]);

        assert_eq!(extract_np_chunks(&tree), vec![&the_pipe, &the_armchair]);
    }

    #[test]
    fn repeated_chunks_appear_once() {
        let holmes = node("NP", vec![word("N", "holmes")]);
        let tree = node("S", vec![holmes.clone(), word("Conj", "and"), holmes.clone()]);

        assert_eq!(texts(&extract_np_chunks(&tree)), vec!["holmes"]);
    }

    #[test]
    fn no_noun_phrases() {
        let tree = node("S", vec![word("N", "she"), word("V", "smiled")]);

        assert!(extract_np_chunks(&tree).is_empty());
        assert!(extract_np_chunks(&ParseTree::leaf("she")).is_empty());
    }

    #[test]
    fn other_labels() {
        let tree = node("S", vec![
            node("VP", vec![node("VP", vec![word("V", "sat")]), word("Adv", "down")]),
        ]);

        assert_eq!(texts(&extract_chunks(&tree, "VP")), vec!["sat"]);
    }

    #[test]
    fn chunks_from_parsed_sentence() {
        let grammar = parse_str("S -> N V\nN -> \"she\"\nV -> \"smiled\"", "tiny.cfg").unwrap();
        let trees = parse(&grammar, &["she", "smiled"]).unwrap();

        assert_eq!(trees.len(), 1);
        // `N` is not a phrase label
        assert!(extract_np_chunks(&trees[0]).is_empty());
        assert_eq!(texts(&extract_chunks(&trees[0], "N")), vec!["she"]);
    }

    #[test]
    fn chunks_are_never_nested() {
        let grammar = parse_str(
            "S -> NP V\nNP -> N | Det N | Det Adj NP | NP PP\nPP -> P NP\nN -> \"pipe\" | \"door\"\nDet -> \"the\" | \"a\"\nAdj -> \"red\"\nP -> \"at\"\nV -> \"smiled\"",
            "chunks.cfg",
        ).unwrap();
        let tokens = ["the", "red", "pipe", "at", "a", "door", "smiled"];

        let trees = parse(&grammar, &tokens).unwrap();
        assert!(!trees.is_empty());

        for tree in &trees {
            let chunks = extract_np_chunks(tree);
            assert!(!chunks.is_empty());
            for (a, b) in chunks.iter().tuple_combinations() {
                assert!(!a.subtrees().any(|t| t == *b));
                assert!(!b.subtrees().any(|t| t == *a));
            }
        }
    }
}
