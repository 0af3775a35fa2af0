use tracing::debug;
use crate::{
    classify::{classify, Category},
    option::OptionDescriptor,
    registry::CommandRegistry,
};

/// Whether generic options are repeated in every subcommand's option list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenericOptions {
    #[default]
    Keep,
    Subtract,
}

/// The whole command line surface of an application, assembled once.
#[derive(Clone, Debug)]
pub struct CommandCatalog {
    command_name: String,
    command_description: String,
    generic_options: Vec<OptionDescriptor>,
    command_options: Vec<(String, Vec<OptionDescriptor>)>,
    all_options: Vec<OptionDescriptor>,
}

impl CommandCatalog {
    pub fn build(registry: &CommandRegistry, generic: GenericOptions) -> Self {
        let generic_options = registry.global_options().extract();
        let mut all_options = Vec::new();
        merge(&mut all_options, &generic_options);

        let command_options: Vec<_> = registry
            .commands()
            .map(|(name, group)| {
                let mut options = group.extract();
                merge(&mut all_options, &options);
                if generic == GenericOptions::Subtract {
                    options.retain(|o| !generic_options.contains(o));
                }
                (name.to_owned(), options)
            })
            .collect();

        debug!(
            "catalog for {}: {} commands, {} generic options, {} distinct options",
            registry.command_name(),
            command_options.len(),
            generic_options.len(),
            all_options.len()
        );

        Self {
            command_name: registry.command_name().to_owned(),
            command_description: registry.description().to_owned(),
            generic_options,
            command_options,
            all_options,
        }
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn command_description(&self) -> &str {
        &self.command_description
    }

    /// Subcommand names in registration order.
    pub fn base_commands(&self) -> impl Iterator<Item = &str> {
        self.command_options.iter().map(|(name, _)| name.as_str())
    }

    pub fn generic_options(&self) -> &[OptionDescriptor] {
        &self.generic_options
    }

    pub fn command_options(&self) -> impl Iterator<Item = (&str, &[OptionDescriptor])> {
        self.command_options.iter().map(|(name, options)| (name.as_str(), options.as_slice()))
    }

    pub fn options_of(&self, command: &str) -> Option<&[OptionDescriptor]> {
        self.command_options
            .iter()
            .find(|(name, _)| name == command)
            .map(|(_, options)| options.as_slice())
    }

    /// Every distinct option of the application, in discovery order.
    pub fn all_options(&self) -> &[OptionDescriptor] {
        &self.all_options
    }

    pub fn options_in(&self, category: Category) -> impl Iterator<Item = &OptionDescriptor> {
        classify(&self.all_options, category.token())
    }
}

fn merge(set: &mut Vec<OptionDescriptor>, options: &[OptionDescriptor]) {
    for option in options {
        if !set.contains(option) {
            set.push(option.clone());
        }
    }
}
