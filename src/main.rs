mod cli;

use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::Cli;
use np_chunker::chunker::{chunk_text, extract_chunks, NOUN_PHRASE};
use np_chunker::english::ENGLISH;
use np_chunker::generator::generate;
use np_chunker::preprocess::tokenize;
use np_chunker::{loader, parse, Grammar, ParseError, ParseTree};

fn report<E: Display>(errors: impl IntoIterator<Item = E>) -> ExitCode {
    for error in errors {
        eprintln!("{}", error);
    }
    ExitCode::FAILURE
}

// What the program shows for one parse attempt
#[derive(Debug, PartialEq)]
enum Outcome {
    // Written to stdout, the program succeeds
    Printed(String),
    // Reported on stderr, the program fails
    Failed(ParseError),
}

fn present(result: Result<Vec<ParseTree>, ParseError>, label: &str) -> Outcome {
    let trees = match result {
        Ok(trees) => trees,
        Err(error) => return Outcome::Failed(error),
    };
    if trees.is_empty() {
        return Outcome::Printed("Could not parse sentence.\n".to_string());
    }

    let heading = if label == NOUN_PHRASE {
        "Noun Phrase Chunks".to_string()
    } else {
        format!("{} Chunks", label)
    };

    // Each tree followed by its chunks
    let mut output = String::new();
    for tree in &trees {
        output.push_str(&tree.render());
        output.push_str(&heading);
        output.push('\n');
        for chunk in extract_chunks(tree, label) {
            output.push_str(&chunk_text(chunk));
            output.push('\n');
        }
    }
    Outcome::Printed(output)
}

fn read_sentence(cli: &Cli) -> std::io::Result<String> {
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path);
    }

    print!("Sentence: ");
    std::io::stdout().flush()?;
    let mut sentence = String::new();
    std::io::stdin().read_line(&mut sentence)?;
    Ok(sentence)
}

fn sample(grammar: &Grammar, amount: u32, max_depth: usize) -> ExitCode {
    let mut rng = rand::thread_rng();
    for _ in 0..amount {
        match generate(grammar, &mut rng, max_depth) {
            Ok(tree) => println!("{}", tree.leaves().join(" ")),
            Err(error) => return report([error]),
        }
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let loaded = match &cli.grammar {
        Some(path) => loader::parse_file(path),
        None => loader::parse_str(ENGLISH, "<built-in>"),
    };
    let mut grammar = match loaded {
        Ok(grammar) => grammar,
        Err(errors) => return report(errors),
    };

    if let Some(start) = &cli.start {
        grammar = match grammar.with_start(start) {
            Ok(grammar) => grammar,
            Err(error) => return report([error]),
        };
    }

    if let Some(amount) = cli.sample {
        return sample(&grammar, amount, cli.max_depth);
    }

    let sentence = match read_sentence(&cli) {
        Ok(sentence) => sentence,
        Err(error) => return report([error]),
    };

    let tokens = tokenize(&sentence);
    debug!("tokens: {:?}", tokens);

    match present(parse(&grammar, &tokens), &cli.label) {
        Outcome::Printed(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Outcome::Failed(error) => report([error]),
    }
}

#[cfg(test)]
mod tests {
    use np_chunker::loader::parse_str;

    use super::*;

    fn english() -> Grammar {
        parse_str(ENGLISH, "english.cfg").unwrap()
    }

    #[test]
    fn present_parsed_sentence() {
        let grammar = english();
        let output = match present(parse(&grammar, &tokenize("Holmes sat.")), NOUN_PHRASE) {
            Outcome::Printed(output) => output,
            Outcome::Failed(error) => panic!("unexpected failure: {}", error),
        };

        let expected = "\
S
├── NP
│   └── N
│       └── holmes
└── VP
    └── V
        └── sat
Noun Phrase Chunks
holmes
";
        assert_eq!(output, expected);
    }

    #[test]
    fn present_other_label() {
        let grammar = english();

        assert!(matches!(
            present(parse(&grammar, &tokenize("Holmes sat.")), "VP"),
            Outcome::Printed(output) if output.ends_with("VP Chunks\nsat\n")
        ));
    }

    #[test]
    fn present_no_parse() {
        let grammar = english();

        assert_eq!(
            present(parse(&grammar, &tokenize("Sat holmes the.")), NOUN_PHRASE),
            Outcome::Printed("Could not parse sentence.\n".to_string())
        );
    }

    #[test]
    fn present_failures() {
        let grammar = english();

        assert_eq!(
            present(parse(&grammar, &tokenize("Holmes sat on the zzz.")), NOUN_PHRASE),
            Outcome::Failed(ParseError::NoTerminalMatch(vec!["zzz".to_string()]))
        );
        assert_eq!(
            present(parse(&grammar, &tokenize("1887!")), NOUN_PHRASE),
            Outcome::Failed(ParseError::EmptyInput)
        );
    }
}
