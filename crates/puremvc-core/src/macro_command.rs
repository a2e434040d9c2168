//! # Macro Command
//!
//! A command that runs an ordered list of sub-commands.

use crate::controller::CommandFactory;
use crate::error::HandlerResult;
use crate::interfaces::Command;
use crate::notification::Notification;
use crate::notifier::{Notifier, Notify};
use std::sync::Arc;
use tracing::trace;

/// Executes sub-commands first-in first-out with the same notification.
///
/// Each sub-command is built fresh and initialized with this command's
/// scope. The first failure stops the sequence.
#[derive(Default)]
pub struct MacroCommand {
    notifier: Notifier,
    sub_commands: Vec<CommandFactory>,
}

impl MacroCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sub-command factory.
    pub fn add_sub_command<F>(&mut self, factory: F)
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        self.sub_commands.push(Arc::new(factory));
    }

    /// Builder form of [`MacroCommand::add_sub_command`].
    #[must_use]
    pub fn with_sub_command<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn Command> + Send + Sync + 'static,
    {
        self.add_sub_command(factory);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sub_commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sub_commands.is_empty()
    }
}

impl Notify for MacroCommand {
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

impl Command for MacroCommand {
    fn execute(&self, note: &Notification) -> HandlerResult {
        let scope = self.notifier.scope()?;
        trace!(
            key = %scope.key(),
            notification = note.name(),
            steps = self.sub_commands.len(),
            "Running macro command"
        );
        for factory in &self.sub_commands {
            let command = factory();
            command.initialize_notifier(&scope);
            command.execute(note)?;
        }
        Ok(())
    }
}
