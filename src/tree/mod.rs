/*
    This module holds the trees produced by the chart parser
*/

use std::fmt::Display;

use itertools::Itertools;

/// A parse tree. Every node owns its children, and the leaves read left to
/// right reproduce the parsed tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseTree {
    Node { label: String, children: Vec<ParseTree> },
    Leaf(String),
}

impl ParseTree {
    pub fn node(label: impl Into<String>, children: Vec<ParseTree>) -> Self {
        ParseTree::Node { label: label.into(), children }
    }

    pub fn leaf(token: impl Into<String>) -> Self {
        ParseTree::Leaf(token.into())
    }

    /// The nonterminal at this node, `None` for a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            ParseTree::Node { label, .. } => Some(label),
            ParseTree::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node { children, .. } => children,
            ParseTree::Leaf(_) => &[],
        }
    }

    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        match self {
            ParseTree::Leaf(token) => leaves.push(token),
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    /// Every `Node` in the tree in pre-order, starting with this one.
    pub fn subtrees(&self) -> Subtrees<'_> {
        Subtrees { stack: vec![self] }
    }

    // A leaf has height 0, a node one more than its tallest child
    pub fn height(&self) -> usize {
        match self {
            ParseTree::Leaf(_) => 0,
            ParseTree::Node { children, .. } => 1 + children.iter().map(ParseTree::height).max().unwrap_or(0),
        }
    }

    /// Whether a proper descendant of this tree carries `label`.
    pub fn contains_label(&self, label: &str) -> bool {
        self.children()
            .iter()
            .any(|child| child.subtrees().any(|t| t.label() == Some(label)))
    }

    /// Draws the tree one node per line with box-drawing connectors.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "", "");
        out
    }

    fn render_into(&self, out: &mut String, lead: &str, indent: &str) {
        out.push_str(lead);
        match self {
            ParseTree::Leaf(token) => out.push_str(token),
            ParseTree::Node { label, .. } => out.push_str(label),
        }
        out.push('\n');

        let children = self.children();
        for (i, child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            let (branch, extend) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
            child.render_into(out, &format!("{indent}{branch}"), &format!("{indent}{extend}"));
        }
    }
}

impl Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseTree::Leaf(token) => write!(f, "{}", token),
            ParseTree::Node { label, children } if children.is_empty() => write!(f, "({})", label),
            ParseTree::Node { label, children } => write!(f, "({} {})", label, children.iter().join(" ")),
        }
    }
}

pub struct Subtrees<'a> {
    stack: Vec<&'a ParseTree>,
}

impl<'a> Iterator for Subtrees<'a> {
    type Item = &'a ParseTree;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(tree) = self.stack.pop() {
            if let ParseTree::Node { children, .. } = tree {
                // Reversed so the leftmost child comes off the stack first
                self.stack.extend(children.iter().rev());
                return Some(tree);
            }
        }
        None
    }
}
