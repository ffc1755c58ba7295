//! Tests for the completions command

use clap_complete::Shell;
use unified_search::cli::commands::completions::write_completions;

#[test]
fn test_bash_completions_mention_commands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);

    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("unified-search"));
    assert!(script.contains("serve"));
    assert!(script.contains("show-config"));
}

#[test]
fn test_every_shell_generates_output() {
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let mut out = Vec::new();
        write_completions(shell, &mut out);
        assert!(!out.is_empty(), "{shell:?} produced no output");
    }
}
