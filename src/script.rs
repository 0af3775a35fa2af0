use std::{fs, path::Path};
use tracing::info;
use crate::{
    catalog::CommandCatalog,
    classify::Category,
    error::{Error, Result},
    option::join_names,
};

/// Name of the shell function doing the completion.
pub const FUNCTION_NAME: &str = "_zanata";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// What to do when the output file's directory does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParentDirs {
    #[default]
    Create,
    Require,
}

pub fn read_header(path: &Path) -> Result<Vec<String>> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(String::from).collect())
        .map_err(|source| Error::ReadHeader { path: path.to_owned(), source })
}

/// Builds the whole completion script, one entry per line.
pub fn render(catalog: &CommandCatalog, header: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    for line in header {
        lines.push(if line.is_empty() { "#".to_owned() } else { format!("# {}", line) });
    }
    lines.push("#".to_owned());
    lines.push(format!("# Completion for {}", catalog.command_description()));
    lines.push(format!("# Generated by {}", env!("CARGO_PKG_NAME")));
    lines.push("#".to_owned());

    let cmds = catalog.base_commands().collect::<Vec<_>>().join(" ");
    lines.push(format!("{}()", FUNCTION_NAME));
    lines.push("{".to_owned());
    lines.push("    local cur prev opts base cmds".to_owned());
    lines.push("    COMPREPLY=()".to_owned());
    lines.push("    cur=\"${COMP_WORDS[COMP_CWORD]}\"".to_owned());
    lines.push("    prev=\"${COMP_WORDS[COMP_CWORD-1]}\"".to_owned());
    lines.push("    base=\"${COMP_WORDS[1]}\"".to_owned());
    lines.push(format!("    cmds=\"{}\"", cmds));

    // subcommand position
    lines.push("    if [[ ${#COMP_WORDS[@]} == 2 ]] ; then".to_owned());
    lines.push("        COMPREPLY=( $(compgen -W \"${cmds} --help\" -- ${cur}) )".to_owned());
    lines.push("        return 0".to_owned());
    lines.push("    fi".to_owned());

    lines.push("    if [[ ${COMP_WORDS[1]} == '--help' ]] ; then".to_owned());
    lines.push("        COMPREPLY=( $(compgen -W \"${cmds}\" -- ${cur}) )".to_owned());
    lines.push("        return 0".to_owned());
    lines.push("    fi".to_owned());

    lines.push("    case \"${prev}\" in".to_owned());
    for category in Category::ALL {
        for option in catalog.options_in(category) {
            lines.push(format!("        {})", option.name()));
            lines.push(format!("            COMPREPLY=( $({}) )", category.compgen()));
            lines.push("            return 0".to_owned());
            lines.push("            ;;".to_owned());
        }
    }
    lines.push("    esac".to_owned());

    lines.push("    case \"${base}\" in".to_owned());
    for (command, options) in catalog.command_options() {
        let local_var = format!("{}_opts", shell_identifier(command));
        lines.push(format!("        {})", command));
        lines.push(format!("            local {}=\"{}\"", local_var, join_names(options)));
        lines.push(format!("            COMPREPLY=( $(compgen -W \"${{{}}}\" -- ${{cur}}) )", local_var));
        lines.push("            return 0".to_owned());
        lines.push("            ;;".to_owned());
    }
    lines.push("    esac".to_owned());

    lines.push("}".to_owned());
    lines.push(format!("complete -F {} {}", FUNCTION_NAME, catalog.command_name()));
    lines
}

/// Writes the rendered lines in a single call, replacing any existing file.
pub fn write_script(path: &Path, lines: &[String], parents: ParentDirs) -> Result<()> {
    info!("writing bash completion file to {}", path.display());
    if parents == ParentDirs::Create {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| Error::CreateDir { path: dir.to_owned(), source })?;
        }
    }
    fs::write(path, lines.join(LINE_SEPARATOR))
        .map_err(|source| Error::WriteScript { path: path.to_owned(), source })
}

// `list-remote` is a fine case label but not a variable name
fn shell_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
