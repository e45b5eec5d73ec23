use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::application::{CommandRegistration, HostApi};
use crate::domain::SynonymResult;

/// A terminal stand-in for the editor host, used by the CLI binary: the
/// "selection" is the word passed on the command line, notices go to stderr,
/// and results render to stdout.
pub struct TerminalHost {
    selection: String,
    commands: Mutex<HashMap<&'static str, CommandRegistration>>,
}

impl TerminalHost {
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
            commands: Mutex::new(HashMap::new()),
        }
    }

    /// Invoke a registered command with the current selection, as the editor
    /// would after a palette action. Returns `false` for an unknown id.
    pub async fn invoke(&self, id: &str) -> bool {
        let handler = {
            let commands = self.commands.lock().expect("command table lock");
            commands.get(id).map(|registration| registration.handler())
        };

        match handler {
            Some(handler) => {
                handler.execute(self.selection(), self).await;
                true
            }
            None => false,
        }
    }
}

impl HostApi for TerminalHost {
    fn register_command(&self, registration: CommandRegistration) {
        debug!("registering command {}", registration.id());
        self.commands
            .lock()
            .expect("command table lock")
            .insert(registration.id(), registration);
    }

    fn selection(&self) -> String {
        self.selection.clone()
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_result(&self, word: &str, result: &SynonymResult) {
        println!("\"{word}\"");
        match result {
            SynonymResult::List(synonyms) => {
                for (i, synonym) in synonyms.iter().enumerate() {
                    println!("{}. {}", i + 1, synonym);
                }
            }
            SynonymResult::Raw(text) => {
                for line in text.lines() {
                    println!("  | {line}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invoke_returns_false_for_unknown_command() {
        let host = TerminalHost::new("word");
        assert!(!host.invoke("missing-command").await);
    }
}
