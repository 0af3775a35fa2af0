use crate::option::OptionGroup;

/// The command line surface of the application a script is generated for.
#[derive(Clone, Debug)]
pub struct CommandRegistry {
    command_name: String,
    description: String,
    global: OptionGroup,
    commands: Vec<(String, OptionGroup)>,
}

impl CommandRegistry {
    pub fn new<N: Into<String>, D: Into<String>>(command_name: N, description: D) -> Self {
        Self {
            command_name: command_name.into(),
            description: description.into(),
            global: OptionGroup::new(),
            commands: Vec::new(),
        }
    }

    /// Options accepted regardless of the subcommand.
    pub fn global(mut self, options: OptionGroup) -> Self {
        self.global = options;
        self
    }

    /// Registers a subcommand. Registering a name twice replaces the earlier
    /// options but keeps its original position.
    pub fn command<S: Into<String>>(mut self, name: S, options: OptionGroup) -> Self {
        let name = name.into();
        match self.commands.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = options,
            None => self.commands.push((name, options)),
        }
        self
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn global_options(&self) -> &OptionGroup {
        &self.global
    }

    pub fn commands(&self) -> impl Iterator<Item = (&str, &OptionGroup)> {
        self.commands.iter().map(|(name, group)| (name.as_str(), group))
    }
}
