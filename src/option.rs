use std::fmt::{self, Display, Formatter};
use tracing::warn;

/// One command line flag as seen by the completion script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionDescriptor {
    name: String,
    meta_var: Option<String>,
}

impl OptionDescriptor {
    /// A flag taking no value, e.g. `--help`.
    pub fn flag<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), meta_var: None }
    }

    /// A flag taking a value whose shape is hinted by `meta_var`, e.g. `FILE`.
    pub fn with_value<S: Into<String>, M: Into<String>>(name: S, meta_var: M) -> Self {
        let meta_var = meta_var.into();
        Self {
            name: name.into(),
            meta_var: if meta_var.is_empty() { None } else { Some(meta_var) },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta_var(&self) -> Option<&str> {
        self.meta_var.as_deref()
    }

    fn is_well_formed(&self) -> bool {
        !self.name.is_empty() && !self.name.chars().any(char::is_whitespace)
    }
}

impl Display for OptionDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.meta_var {
            Some(meta_var) => write!(f, "{} {}", self.name, meta_var),
            None => f.write_str(&self.name),
        }
    }
}

pub fn option_name(option: &OptionDescriptor) -> &str {
    option.name()
}

/// Space separated option names, in the given order.
pub fn join_names<'a, I: IntoIterator<Item = &'a OptionDescriptor>>(options: I) -> String {
    options.into_iter().map(option_name).collect::<Vec<_>>().join(" ")
}

/// The statically declared option set of a command.
///
/// A group owns its declared options and may include other groups. Including
/// a group is how shared options (connection settings, push/pull settings...)
/// end up on several commands.
#[derive(Clone, Debug, Default)]
pub struct OptionGroup {
    options: Vec<OptionDescriptor>,
    includes: Vec<OptionGroup>,
}

impl OptionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    pub fn flag<S: Into<String>>(self, name: S) -> Self {
        self.option(OptionDescriptor::flag(name))
    }

    pub fn value<S: Into<String>, M: Into<String>>(self, name: S, meta_var: M) -> Self {
        self.option(OptionDescriptor::with_value(name, meta_var))
    }

    pub fn include(mut self, group: &OptionGroup) -> Self {
        self.includes.push(group.clone());
        self
    }

    /// Every option declared on this group followed by those of the included
    /// groups, depth first in inclusion order. Malformed descriptors are skipped.
    pub fn extract(&self) -> Vec<OptionDescriptor> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<OptionDescriptor>) {
        for option in &self.options {
            if option.is_well_formed() {
                out.push(option.clone());
            } else {
                warn!("skipping malformed option {:?}", option.name());
            }
        }
        for group in &self.includes {
            group.collect_into(out);
        }
    }
}
