use crate::router::Router;
use std::io::{BufRead, Write};
use std::time::Instant;

pub const REPL_EXIT_COMMANDS: &[&str] = &["exit", "quit"];
const SHELL_ESCAPE_PREFIX: &str = "run:";

pub fn is_exit_command(line: &str) -> bool {
    REPL_EXIT_COMMANDS
        .iter()
        .any(|command| line.trim().eq_ignore_ascii_case(command))
}

/// One line in, one routed reply out, until `exit`/`quit` or EOF. Lines
/// starting with `run:` execute the remainder as a shell command directly.
pub fn run_repl(
    router: &mut Router<'_>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(output, "Sunny - type 'exit' to quit.\n")?;
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nSunny: Bye!")?;
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_exit_command(line) {
            writeln!(output, "Sunny: Bye!")?;
            return Ok(());
        }

        let started_at = Instant::now();
        let reply = match line.strip_prefix(SHELL_ESCAPE_PREFIX) {
            Some(command) => router.route_shell_escape(line, command.trim()),
            None => router.route(line),
        };
        let elapsed_ms = started_at.elapsed().as_millis();

        writeln!(output, "\nSunny: {reply}")?;
        writeln!(output, "[{elapsed_ms} ms]\n")?;
    }
}
