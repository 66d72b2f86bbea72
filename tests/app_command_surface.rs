use sunny::app::run_cli;

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

#[test]
fn app_command_surface_no_arguments_prints_usage() {
    let output = run_cli(Vec::new()).expect("usage is not an error");
    assert!(output.starts_with("Usage: sunny <command>"));
    assert!(output.contains("index rebuild"));
}

#[test]
fn app_command_surface_help_aliases_print_usage() {
    for alias in ["help", "--help", "-h"] {
        let output = run_cli(args(&[alias])).expect("help succeeds");
        assert!(output.contains("interactive assistant session"));
    }
}

#[test]
fn app_command_surface_unknown_command_is_an_error() {
    let err = run_cli(args(&["bogus"])).expect_err("unknown command fails");
    assert!(err.contains("unknown command `bogus`"));
    assert!(err.contains("Usage: sunny <command>"));
}

#[test]
fn app_command_surface_ask_requires_an_utterance() {
    let err = run_cli(args(&["ask"])).expect_err("empty ask fails");
    assert!(err.contains("ask requires an utterance"));

    let err = run_cli(args(&["ask", "   "])).expect_err("blank ask fails");
    assert!(err.contains("ask requires an utterance"));
}
