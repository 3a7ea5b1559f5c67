//! Command system for user actions

use std::collections::HashMap;

/// Command identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId(pub String);

impl CommandId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Rename commands
    pub const RENAME_CONFIRM: &'static str = "rename.confirm";
    pub const RENAME_SKIP: &'static str = "rename.skip";

    // Input commands
    pub const INPUT_RECALL_ORIGINAL: &'static str = "input.recall_original";
    pub const INPUT_CLEAR: &'static str = "input.clear";
}

/// A user action addressed to the rename workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: CommandId,
}

impl Command {
    pub fn new(id: &str) -> Self {
        Self { id: CommandId::new(id) }
    }
}

/// Default key bindings: command id -> key names
pub fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    kb.insert(CommandId::RENAME_CONFIRM.into(), vec!["Return".into()]);
    kb.insert(CommandId::RENAME_SKIP.into(), vec!["Tab".into()]);
    kb.insert(CommandId::INPUT_RECALL_ORIGINAL.into(), vec!["Up".into()]);
    kb.insert(CommandId::INPUT_CLEAR.into(), vec!["Down".into()]);

    kb
}
