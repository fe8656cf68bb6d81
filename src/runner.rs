use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::error::{MeCabError, Result};
use crate::types::MeCabConfig;

/// Output format selector, mapped onto the analyzer's `-O` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputMode {
    Plain,
    Dump,
    Chasen,
    ChasenWithSpaces,
    Simple,
    Wakati,
    Yomi,
}

impl OutputMode {
    pub(crate) fn flag(self) -> Option<&'static str> {
        match self {
            OutputMode::Plain => None,
            OutputMode::Dump => Some("-Odump"),
            OutputMode::Chasen => Some("-Ochasen"),
            OutputMode::ChasenWithSpaces => Some("-Ochasen2"),
            OutputMode::Simple => Some("-Osimple"),
            OutputMode::Wakati => Some("-Owakati"),
            OutputMode::Yomi => Some("-Oyomi"),
        }
    }
}

/// Runs the configured analyzer command once: spawn, write `text` to stdin,
/// close stdin, wait for exit, return decoded stdout.
///
/// The child is reaped on every path out of this function. A non-zero exit
/// becomes [`MeCabError::RunFailure`] carrying stderr, falling back to stdout
/// and then to the raw exit status.
pub(crate) fn run_analyzer(
    cmd: &[String],
    config: &MeCabConfig,
    mode: OutputMode,
    text: &str,
) -> Result<String> {
    let (program, args) = cmd.split_first().ok_or_else(|| {
        MeCabError::InvalidArgument("command vector must contain the executable".to_string())
    })?;

    let mut command = Command::new(program);
    command.args(args);
    if let Some(flag) = mode.flag() {
        command.arg(flag);
    }
    if let Some(working_dir) = &config.working_dir {
        command.current_dir(working_dir);
    }
    command.envs(&config.env);
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .map_err(|error| MeCabError::RunFailure(format!("failed to spawn {program}: {error}")))?;

    // stdin is always piped above, so take() cannot come back empty.
    let mut stdin = match child.stdin.take() {
        Some(stdin) => stdin,
        None => {
            reap(&mut child);
            return Err(MeCabError::RunFailure(
                "child process stdin was not captured".to_string(),
            ));
        }
    };
    if let Err(error) = stdin.write_all(text.as_bytes()) {
        reap(&mut child);
        return Err(MeCabError::RunFailure(format!(
            "failed to write analyzer input: {error}"
        )));
    }
    // Dropping the handle closes the stream and signals end-of-input.
    drop(stdin);

    let output = child.wait_with_output().map_err(|error| {
        MeCabError::RunFailure(format!("failed to collect analyzer output: {error}"))
    })?;

    if !output.status.success() {
        return Err(MeCabError::RunFailure(failure_details(&output)));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn reap(child: &mut std::process::Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn failure_details(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }
    format!("process exited with status {}", output.status)
}
