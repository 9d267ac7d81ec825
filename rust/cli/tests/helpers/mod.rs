//! Shared runner for driving the CLI in-process.
//!
//! ```rust,ignore
//! let res = run_cli(&["eval", "As", "Ks", "Qs", "Js", "Ts"], "");
//! assert_eq!(res.exit_code, 0);
//! ```

use std::io::Cursor;

#[derive(Debug)]
pub struct CliOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `holdem <args>` with `input` as stdin.
pub fn run_cli(args: &[&str], input: &str) -> CliOutput {
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = holdem_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliOutput {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
