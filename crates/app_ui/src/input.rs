//! Input handling and keybinding resolution
//!
//! Bound keys are taken out of the egui input before the text field runs,
//! so Enter/Tab/arrows act as shortcuts instead of editing keys.

use app_core::Command;
use egui::{Event, Key, Modifiers};
use std::collections::HashMap;

/// Maps key presses to commands
pub struct InputHandler {
    bindings: HashMap<Key, String>,
}

impl InputHandler {
    /// Create a new input handler from `command id -> key names` bindings
    pub fn new(bindings: HashMap<String, Vec<String>>) -> Self {
        // Invert the bindings map: command -> keys becomes key -> command
        let mut key_to_command = HashMap::new();

        for (command, keys) in bindings {
            for name in keys {
                match key_from_name(&name) {
                    Some(key) => {
                        key_to_command.insert(key, command.clone());
                    }
                    None => tracing::warn!("Unknown key '{}' bound to {}", name, command),
                }
            }
        }

        Self {
            bindings: key_to_command,
        }
    }

    /// Command bound to an unmodified key press
    pub fn command_for(&self, key: Key) -> Option<Command> {
        self.bindings.get(&key).map(|cmd_id| Command::new(cmd_id))
    }

    /// Consume this frame's bound key presses and return their commands in order
    pub fn poll(&self, ctx: &egui::Context) -> Vec<Command> {
        ctx.input_mut(|input| {
            let pressed: Vec<Key> = input
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Key { key, pressed: true, modifiers, .. }
                        if modifiers.is_none() && self.bindings.contains_key(key) =>
                    {
                        Some(*key)
                    }
                    _ => None,
                })
                .collect();

            for key in &pressed {
                input.consume_key(Modifiers::NONE, *key);
            }

            pressed
                .into_iter()
                .filter_map(|key| {
                    tracing::debug!("Key pressed: {:?}", key);
                    self.command_for(key)
                })
                .collect()
        })
    }
}

/// Convert a key name from the bindings table to an egui key
fn key_from_name(name: &str) -> Option<Key> {
    match name {
        "Return" | "Enter" => Some(Key::Enter),
        "Tab" => Some(Key::Tab),
        "Up" => Some(Key::ArrowUp),
        "Down" => Some(Key::ArrowDown),
        "Left" => Some(Key::ArrowLeft),
        "Right" => Some(Key::ArrowRight),
        "Escape" => Some(Key::Escape),
        "Space" => Some(Key::Space),
        other => Key::from_name(other),
    }
}
