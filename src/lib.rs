pub mod catalog;
pub mod classify;
pub mod cli;
pub mod error;
pub mod option;
pub mod registry;
pub mod script;
pub mod zanata;

use std::path::PathBuf;
use catalog::{CommandCatalog, GenericOptions};
use error::Result;
use registry::CommandRegistry;
use script::ParentDirs;

pub const DEFAULT_HEADER: &str = "COPYING-header.txt";

pub struct Config {
    pub output: PathBuf,
    pub header: PathBuf,
    pub generic_options: GenericOptions,
    pub parent_dirs: ParentDirs,
}

impl Config {
    /// Output and header next to the working directory, default policies.
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            output: default_output(registry),
            header: PathBuf::from(".").join(DEFAULT_HEADER),
            generic_options: GenericOptions::default(),
            parent_dirs: ParentDirs::default(),
        }
    }
}

pub fn default_output(registry: &CommandRegistry) -> PathBuf {
    PathBuf::from(".").join(format!("{}-completion", registry.command_name()))
}

/// Reads the header, renders the script and writes it. Nothing is written
/// unless every line could be produced.
pub fn generate(registry: &CommandRegistry, config: &Config) -> Result<PathBuf> {
    let header = script::read_header(&config.header)?;
    let catalog = CommandCatalog::build(registry, config.generic_options);
    let lines = script::render(&catalog, &header);
    script::write_script(&config.output, &lines, config.parent_dirs)?;
    Ok(config.output.clone())
}
