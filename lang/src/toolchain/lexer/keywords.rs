//! Case-insensitive category word lists.
//!
//! The lexer ships no vocabulary of its own. The host loads the nine lists at configuration time
//! and the lexer only tests membership.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The nine word-list categories, in the order of their configuration index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Directives,
    Commands,
    CommandParameters,
    ControlFlow,
    BuiltinFunctions,
    BuiltinVariables,
    Keys,
    UserDefined1,
    UserDefined2,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Directives,
        Category::Commands,
        Category::CommandParameters,
        Category::ControlFlow,
        Category::BuiltinFunctions,
        Category::BuiltinVariables,
        Category::Keys,
        Category::UserDefined1,
        Category::UserDefined2,
    ];

    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The label an editor shows next to the list in its settings.
    pub fn description(self) -> &'static str {
        match self {
            Category::Directives => "Directives",
            Category::Commands => "Commands",
            Category::CommandParameters => "Command Parameters",
            Category::ControlFlow => "Control Flow",
            Category::BuiltinFunctions => "Built-in Functions",
            Category::BuiltinVariables => "Built-in Variables",
            Category::Keys => "Keyboard & Mouse Keys",
            Category::UserDefined1 => "User Defined 1",
            Category::UserDefined2 => "User Defined 2",
        }
    }

    /// Short name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Category::Directives => "directives",
            Category::Commands => "commands",
            Category::CommandParameters => "parameters",
            Category::ControlFlow => "flow",
            Category::BuiltinFunctions => "functions",
            Category::BuiltinVariables => "variables",
            Category::Keys => "keys",
            Category::UserDefined1 => "user1",
            Category::UserDefined2 => "user2",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Category, String> {
        if let Ok(index) = s.parse::<usize>() {
            return Category::from_index(index)
                .ok_or_else(|| format!("word list index {} out of range 0-8", index));
        }
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown word list category '{}'", s))
    }
}

/// A set of lowercased words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    pub fn new() -> WordList {
        WordList::default()
    }

    /// Builds a list from whitespace separated words.
    pub fn parse(contents: &str) -> WordList {
        WordList { words: contents.split_ascii_whitespace().map(str::to_lowercase).collect() }
    }

    pub fn contains(&self, word: &str) -> bool {
        // Scans lowercase the word before asking, skip the allocation when possible.
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// All nine category lists.
#[derive(Clone, Debug, Default)]
pub struct Keywords {
    lists: [WordList; 9],
}

impl Keywords {
    pub fn new() -> Keywords {
        Keywords::default()
    }

    /// Replaces the contents of one list. Returns true if the list changed, which tells the host
    /// that styled text must be lexed again.
    pub fn set(&mut self, category: Category, contents: &str) -> bool {
        let list = WordList::parse(contents);
        let slot = &mut self.lists[category.index()];
        if *slot == list {
            return false;
        }
        tracing::debug!(%category, words = list.len(), "word list changed");
        *slot = list;
        true
    }

    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.lists[category.index()].contains(word)
    }

    pub fn list(&self, category: Category) -> &WordList {
        &self.lists[category.index()]
    }
}
