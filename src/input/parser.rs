//! Command parser for the adventure prompt.
//!
//! The first word picks the verb (through a synonym table), everything after
//! it is the argument, rejoined with single spaces:
//!   "go north"              -> Verb::Go, argument="north"
//!   "take   Rusty    Key"   -> Verb::Take, argument="rusty key"
//!   "i"                     -> Verb::Inventory, argument=None
//!   "dance"                 -> Verb::Unknown("dance")

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Go,
    Take,
    Use,
    Look,
    Inventory,
    Help,
    Save,
    Load,
    Quit,
    /// First word is not a known verb (empty for blank input)
    Unknown(String),
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Use => "use",
            Verb::Look => "look",
            Verb::Inventory => "inventory",
            Verb::Help => "help",
            Verb::Save => "save",
            Verb::Load => "load",
            Verb::Quit => "quit",
            Verb::Unknown(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    /// Normalized input line
    pub original: String,
    /// The words after the verb
    pub args: Vec<String>,
    /// `args` joined with single spaces, `None` when there are no args
    pub argument: Option<String>,
}

impl Intent {
    pub fn is_blank(&self) -> bool {
        self.original.is_empty()
    }
}

pub fn parse_command(input: &str) -> Intent {
    let normalized = normalize(input);
    let mut tokens = normalized.split(' ').filter(|t| !t.is_empty());

    let Some(first) = tokens.next() else {
        return Intent {
            verb: Verb::Unknown(String::new()),
            original: normalized,
            args: vec![],
            argument: None,
        };
    };

    let verb = verb_map()
        .get(first)
        .cloned()
        .unwrap_or_else(|| Verb::Unknown(first.to_string()));

    let args: Vec<String> = tokens.map(str::to_string).collect();
    let argument = if args.is_empty() { None } else { Some(args.join(" ")) };

    Intent {
        verb,
        original: normalized,
        args,
        argument,
    }
}

//
// ---- Normalization ----
//

fn normalize(s: &str) -> String {
    // lowercase, trim, collapse whitespace
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for ch in s.trim().chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            last_space = false;
        }
    }
    out
}

//
// ---- Verb detection ----
//

fn verb_map() -> HashMap<&'static str, Verb> {
    use Verb::*;
    let mut m = HashMap::new();
    for k in ["go", "move", "walk"].iter() {
        m.insert(*k, Go);
    }
    for k in ["take", "get", "pick"].iter() {
        m.insert(*k, Take);
    }
    m.insert("use", Use);
    for k in ["look", "examine", "l"].iter() {
        m.insert(*k, Look);
    }
    for k in ["inventory", "inv", "i"].iter() {
        m.insert(*k, Inventory);
    }
    for k in ["help", "h"].iter() {
        m.insert(*k, Help);
    }
    m.insert("save", Save);
    m.insert("load", Load);
    for k in ["quit", "exit", "q"].iter() {
        m.insert(*k, Quit);
    }
    m
}
