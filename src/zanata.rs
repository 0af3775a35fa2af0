//! Option definitions of the `zanata-cli` client.
//!
//! Commands are composed from the shared groups below, the same way the
//! client assembles its option beans.

use crate::{option::OptionGroup, registry::CommandRegistry};

pub const COMMAND_NAME: &str = "zanata-cli";
pub const COMMAND_DESCRIPTION: &str = "Zanata Java command-line client";

fn basic_options() -> OptionGroup {
    OptionGroup::new()
        .flag("--help")
        .flag("--errors")
        .flag("--debug")
        .flag("--quiet")
        .flag("--batch-mode")
        .flag("--interactive-mode")
}

fn config_options() -> OptionGroup {
    OptionGroup::new()
        .value("--url", "URL")
        .value("--user", "USER")
        .value("--key", "KEY")
        .value("--user-config", "FILENAME")
        .value("--project-config", "FILENAME")
        .flag("--disable-ssl-cert")
        .flag("--log-http")
        .include(&basic_options())
}

fn project_options() -> OptionGroup {
    OptionGroup::new()
        .value("--project", "PROJ")
        .value("--project-version", "VER")
        .value("--project-type", "TYPE")
        .include(&config_options())
}

fn push_pull_options() -> OptionGroup {
    OptionGroup::new()
        .value("--src-dir", "DIR")
        .value("--trans-dir", "DIR")
        .value("--locales", "LOCALES")
        .value("--includes", "INCLUDES")
        .value("--excludes", "EXCLUDES")
        .value("--from-doc", "DOCID")
        .flag("--dry-run")
        .flag("--case-sensitive")
        .include(&project_options())
}

fn init() -> OptionGroup {
    OptionGroup::new().include(&config_options())
}

fn list_remote() -> OptionGroup {
    OptionGroup::new().include(&project_options())
}

fn pull() -> OptionGroup {
    OptionGroup::new()
        .value("--pull-type", "TYPE")
        .flag("--create-skeletons")
        .flag("--encode-tabs")
        .flag("--include-fuzzy")
        .value("--min-doc-percent", "PERCENT")
        .include(&push_pull_options())
}

fn push() -> OptionGroup {
    OptionGroup::new()
        .value("--push-type", "TYPE")
        .value("--merge-type", "TYPE")
        .value("--file-types", "TYPES")
        .value("--validate", "TYPE")
        .flag("--copy-trans")
        .flag("--delete-obsolete-modules")
        .value("--max-batch-size", "BYTES")
        .include(&push_pull_options())
}

fn put_project() -> OptionGroup {
    OptionGroup::new()
        .value("--project-slug", "PROJ")
        .value("--project-name", "NAME")
        .value("--project-desc", "DESC")
        .value("--default-project-type", "TYPE")
        .value("--source-code-url", "URL")
        .include(&config_options())
}

fn put_user() -> OptionGroup {
    OptionGroup::new()
        .value("--user-name", "NAME")
        .value("--user-email", "EMAIL")
        .value("--user-username", "USERNAME")
        .value("--user-passwordhash", "PWHASH")
        .value("--user-key", "KEY")
        .value("--user-langs", "LANGS")
        .value("--user-roles", "ROLES")
        .flag("--user-disabled")
        .include(&config_options())
}

fn put_version() -> OptionGroup {
    OptionGroup::new()
        .value("--version-project", "PROJ")
        .value("--version-slug", "VER")
        .value("--project-type", "TYPE")
        .include(&config_options())
}

fn stats() -> OptionGroup {
    OptionGroup::new()
        .flag("--details")
        .value("--docid", "DOCID")
        .value("--format", "FORMAT")
        .value("--word", "WORD")
        .include(&project_options())
}

fn glossary_push() -> OptionGroup {
    OptionGroup::new()
        .value("--file", "FILE")
        .value("--trans-lang", "LOCALE")
        .value("--batch-size", "SIZE")
        .include(&config_options())
}

fn glossary_delete() -> OptionGroup {
    OptionGroup::new()
        .value("--id", "ID")
        .flag("--all")
        .include(&config_options())
}

pub fn registry() -> CommandRegistry {
    CommandRegistry::new(COMMAND_NAME, COMMAND_DESCRIPTION)
        .global(basic_options())
        .command("init", init())
        .command("list-remote", list_remote())
        .command("pull", pull())
        .command("push", push())
        .command("put-project", put_project())
        .command("put-user", put_user())
        .command("put-version", put_version())
        .command("stats", stats())
        .command("glossary-push", glossary_push())
        .command("glossary-delete", glossary_delete())
}
