use std::path::PathBuf;
use clap::{crate_name, crate_version, App, Arg, AppSettings};
use crate::{registry::CommandRegistry, Config};

pub fn parse(registry: &CommandRegistry) -> Config {
    let app = App::new(crate_name!())
        .version(crate_version!())
        .setting(AppSettings::ColoredHelp)
        .about("Generates the bash completion script of a command line client.")
        .arg(
            Arg::with_name("OUTPUT")
                .help(&format!("<PATH> of the generated script [default: ./{}-completion]", registry.command_name()))
        )
        .arg(
            Arg::with_name("HEADER")
                .help(&format!("<PATH> of the license header [default: ./{}]", crate::DEFAULT_HEADER))
        )
        .get_matches();

    let mut config = Config::new(registry);
    if let Some(output) = app.value_of_os("OUTPUT") {
        config.output = PathBuf::from(output);
    }
    if let Some(header) = app.value_of_os("HEADER") {
        config.header = PathBuf::from(header);
    }
    config
}
