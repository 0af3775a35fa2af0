use crate::option::OptionDescriptor;

/// Kinds of option values the completion script knows how to complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    File,
    Dir,
    Url,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::File, Category::Dir, Category::Url];

    /// Substring looked for in an option's meta-variable.
    pub fn token(&self) -> &'static str {
        match self {
            Category::File => "file",
            Category::Dir => "dir",
            Category::Url => "url",
        }
    }

    /// The `compgen` invocation producing candidates for this category.
    pub fn compgen(&self) -> &'static str {
        match self {
            Category::File => "compgen -df ${cur}",
            Category::Dir => "compgen -d ${cur}",
            Category::Url => "compgen -A hostname ${cur}",
        }
    }
}

/// Options whose lowercased meta-variable contains `token`.
///
/// This is a heuristic: a hint such as `FILEDIR` matches both `file` and
/// `dir`, and callers get the option under each matching token.
pub fn classify<'a, I>(options: I, token: &'a str) -> impl Iterator<Item = &'a OptionDescriptor>
where
    I: IntoIterator<Item = &'a OptionDescriptor>,
{
    options.into_iter().filter(move |option| {
        option
            .meta_var()
            .map_or(false, |meta_var| meta_var.to_lowercase().contains(token))
    })
}
