//! Parses English sentences against a context-free grammar with a bottom-up
//! chart parser and pulls the noun phrase chunks out of every parse.

pub mod chart;
pub mod chunker;
pub mod english;
pub mod error_handling;
pub mod generator;
pub mod grammar;
pub mod loader;
pub mod preprocess;
pub mod tree;

pub use chart::{parse, ParseError};
pub use chunker::{chunk_text, extract_chunks, extract_np_chunks};
pub use grammar::Grammar;
pub use tree::ParseTree;
