use std::{fs::{self, create_dir}, io, path::{Path, PathBuf}};
use assert_cmd::Command;
use tempfile::TempDir;
use zanata_compgen::{
    catalog::{CommandCatalog, GenericOptions},
    generate,
    option::OptionGroup,
    registry::CommandRegistry,
    script::{render, write_script, ParentDirs, LINE_SEPARATOR},
    Config,
};

fn registry() -> CommandRegistry {
    CommandRegistry::new("app", "App CLI")
        .global(OptionGroup::new().flag("--help"))
        .command("push", OptionGroup::new().value("--file", "FILE"))
        .command("pull", OptionGroup::new())
}

fn header() -> Vec<String> {
    vec!["Copyright X".to_owned(), String::new()]
}

fn rendered() -> Vec<String> {
    render(&CommandCatalog::build(&registry(), GenericOptions::default()), &header())
}

fn position(lines: &[String], line: &str) -> usize {
    lines.iter().position(|l| l == line).unwrap_or_else(|| panic!("missing line {:?}", line))
}

fn setup_dir() -> io::Result<(TempDir, PathBuf)> {
    let tmp_dir = TempDir::new()?;
    let header = tmp_dir.path().join("header.txt");
    fs::write(&header, "Copyright X\n\n")?;
    Ok((tmp_dir, header))
}

#[test]
fn script_layout() {
    let lines = rendered();
    assert_eq!(lines[0], "# Copyright X");
    assert_eq!(lines[1], "#");
    assert_eq!(lines[3], "# Completion for App CLI");
    assert!(lines.contains(&"    cmds=\"push pull\"".to_owned()));

    let file = position(&lines, "        --file)");
    assert_eq!(lines[file + 1], "            COMPREPLY=( $(compgen -df ${cur}) )");

    let push = position(&lines, "        push)");
    assert_eq!(lines[push + 1], "            local push_opts=\"--file\"");
    assert_eq!(lines[push + 2], "            COMPREPLY=( $(compgen -W \"${push_opts}\" -- ${cur}) )");

    assert_eq!(lines.last().unwrap(), "complete -F _zanata app");
}

#[test]
fn generic_options_stay_in_command_lists_by_default() {
    let global = OptionGroup::new().flag("--help");
    let registry = CommandRegistry::new("app", "App CLI")
        .global(global.clone())
        .command("push", OptionGroup::new().value("--file", "FILE").include(&global))
        .command("pull", OptionGroup::new().include(&global));

    let kept = render(&CommandCatalog::build(&registry, GenericOptions::default()), &header());
    assert!(kept.contains(&"            local push_opts=\"--file --help\"".to_owned()));
    assert!(kept.contains(&"            local pull_opts=\"--help\"".to_owned()));

    let subtracted = render(&CommandCatalog::build(&registry, GenericOptions::Subtract), &header());
    assert!(subtracted.contains(&"            local push_opts=\"--file\"".to_owned()));
    assert!(subtracted.contains(&"            local pull_opts=\"\"".to_owned()));
}

#[test]
fn multi_category_options_get_a_branch_each() {
    let registry = CommandRegistry::new("app", "App CLI")
        .command("sync", OptionGroup::new().value("--target", "filedir"));
    let lines = render(&CommandCatalog::build(&registry, GenericOptions::Keep), &[]);
    let branches: Vec<_> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| *l == "        --target)")
        .map(|(i, _)| lines[i + 1].as_str())
        .collect();
    assert_eq!(branches, [
        "            COMPREPLY=( $(compgen -df ${cur}) )",
        "            COMPREPLY=( $(compgen -d ${cur}) )",
    ]);
}

#[test]
fn generate_is_deterministic() -> io::Result<()> {
    let (tmp_dir, header) = setup_dir()?;
    let mut config = Config::new(&registry());
    config.header = header;

    config.output = tmp_dir.path().join("first");
    generate(&registry(), &config).unwrap();
    config.output = tmp_dir.path().join("second");
    generate(&registry(), &config).unwrap();

    let first = fs::read(tmp_dir.path().join("first"))?;
    assert_eq!(first, fs::read(tmp_dir.path().join("second"))?);
    let text = String::from_utf8(first).unwrap();
    assert!(text.starts_with(&format!("# Copyright X{0}#{0}", LINE_SEPARATOR)));
    assert!(text.ends_with("complete -F _zanata app"));
    Ok(())
}

#[test]
fn missing_parent_is_created() -> io::Result<()> {
    let tmp_dir = TempDir::new()?;
    let output = tmp_dir.path().join("a").join("b").join("app-completion");
    write_script(&output, &rendered(), ParentDirs::Create).unwrap();
    assert!(output.is_file());
    Ok(())
}

#[test]
fn missing_parent_is_an_error_when_required() -> io::Result<()> {
    let tmp_dir = TempDir::new()?;
    let output = tmp_dir.path().join("a").join("app-completion");
    let err = write_script(&output, &rendered(), ParentDirs::Require).unwrap_err();
    assert!(err.to_string().starts_with("cannot write completion script"));
    assert!(!tmp_dir.path().join("a").exists());
    Ok(())
}

#[test]
fn unreadable_header_writes_nothing() -> io::Result<()> {
    let tmp_dir = TempDir::new()?;
    let mut config = Config::new(&registry());
    config.header = tmp_dir.path().join("no-such-header");
    config.output = tmp_dir.path().join("app-completion");

    let err = generate(&registry(), &config).unwrap_err();
    assert!(err.to_string().starts_with("cannot read header file"));
    assert!(!config.output.exists());
    Ok(())
}

#[test]
fn existing_output_is_replaced() -> io::Result<()> {
    let tmp_dir = TempDir::new()?;
    let output = tmp_dir.path().join("app-completion");
    fs::write(&output, "stale content that is longer than nothing")?;
    write_script(&output, &["echo".to_owned()], ParentDirs::Require).unwrap();
    assert_eq!(fs::read_to_string(&output)?, "echo");
    Ok(())
}

#[cfg(unix)]
mod bash {
    use super::*;

    fn complete(script: &Path, words: &[&str], cwd: &Path) -> String {
        let words = words.iter().map(|w| format!("'{}'", w)).collect::<Vec<_>>().join(" ");
        let shell_cmd = format!(
            "source '{}'; COMP_WORDS=({}); COMP_CWORD=$((${{#COMP_WORDS[@]}} - 1)); _zanata; echo \"${{COMPREPLY[*]}}\"",
            script.display(),
            words,
        );
        let output = Command::new("bash")
            .arg("-c")
            .arg(shell_cmd)
            .current_dir(cwd)
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        String::from_utf8(output.stdout).unwrap().trim_end().to_owned()
    }

    fn setup() -> io::Result<(TempDir, PathBuf, PathBuf)> {
        let (tmp_dir, _) = setup_dir()?;
        let script = tmp_dir.path().join("app-completion");
        write_script(&script, &rendered(), ParentDirs::Require).unwrap();
        let cwd = tmp_dir.path().join("work");
        create_dir(&cwd)?;
        fs::write(cwd.join("notes.txt"), "")?;
        Ok((tmp_dir, script, cwd))
    }

    #[test]
    fn script_is_valid_bash() -> io::Result<()> {
        let (_tmp_dir, script, _) = setup()?;
        Command::new("bash").arg("-n").arg(&script).assert().success();
        Ok(())
    }

    #[test]
    fn completes_subcommands() -> io::Result<()> {
        let (_tmp_dir, script, cwd) = setup()?;
        assert_eq!(complete(&script, &["app", "pu"], &cwd), "push pull");
        assert_eq!(complete(&script, &["app", "--"], &cwd), "--help");
        assert_eq!(complete(&script, &["app", "--help", "pu"], &cwd), "push pull");
        Ok(())
    }

    #[test]
    fn completes_command_options() -> io::Result<()> {
        let (_tmp_dir, script, cwd) = setup()?;
        assert_eq!(complete(&script, &["app", "push", "--f"], &cwd), "--file");
        assert_eq!(complete(&script, &["app", "pull", "--f"], &cwd), "");
        Ok(())
    }

    #[test]
    fn completes_file_values() -> io::Result<()> {
        let (_tmp_dir, script, cwd) = setup()?;
        assert_eq!(complete(&script, &["app", "push", "--file", "no"], &cwd), "notes.txt");
        Ok(())
    }
}
