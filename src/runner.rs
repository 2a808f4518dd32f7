//! Subprocess execution and result mapping for jdeps runs.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use crate::command::JdepsCommand;
use crate::config::AnalysisConfig;
use crate::errors::{JdepsError, Result};
use crate::resolver::JdepsResolver;
use crate::target::TargetProvider;

/// Outcome of one child-process run
#[derive(Debug, Clone)]
pub struct Invocation {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub command_line: String,
}

/// Resolve the executable, build the command line, run jdeps, and relay the
/// outcome into the logging and failure model.
pub fn run_analysis(
    resolver: &JdepsResolver,
    config: &AnalysisConfig,
    target: &dyn TargetProvider,
) -> Result<()> {
    let executable = resolver.resolve()?;
    let command = JdepsCommand::build(executable, config, target)?;
    let invocation = execute(&command, &config.output_directory)?;
    report(&invocation)
}

/// Run the command to completion, draining both output streams while the
/// child executes.
pub fn execute(command: &JdepsCommand, working_dir: &Path) -> Result<Invocation> {
    let command_line = command.to_string();
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("{command_line}");
    }

    fs::create_dir_all(working_dir).map_err(|e| launch_error(&command_line, e))?;

    let mut child = Command::new(command.program())
        .args(command.args())
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| launch_error(&command_line, e))?;

    // Both pipes are drained while the child runs; reading either one only
    // after exit can deadlock once the OS pipe buffer fills.
    let stderr_pipe = child.stderr.take();
    let stderr_reader = thread::spawn(move || capture(stderr_pipe));
    let stdout = capture(child.stdout.take()).map_err(|e| launch_error(&command_line, e))?;

    let status = child.wait().map_err(|e| launch_error(&command_line, e))?;
    let stderr = stderr_reader
        .join()
        .map_err(|_| {
            launch_error(
                &command_line,
                io::Error::other("stderr capture thread panicked"),
            )
        })?
        .map_err(|e| launch_error(&command_line, e))?;

    Ok(Invocation {
        // Signal-terminated children carry no exit code.
        exit_code: status.code().unwrap_or(-1),
        stdout,
        stderr,
        command_line,
    })
}

/// Map an [`Invocation`] onto the logging and failure model.
///
/// jdeps reports progress on stderr even when it succeeds; on a zero exit
/// those lines are warnings, not failure evidence. On a non-zero exit the
/// full stderr rides inside the error instead.
pub fn report(invocation: &Invocation) -> Result<()> {
    let output = invocation.stdout.trim();

    if invocation.exit_code != 0 {
        if !output.is_empty() {
            log::info!("\n{output}");
        }
        return Err(JdepsError::ToolExecution {
            exit_code: invocation.exit_code,
            stderr: invocation.stderr.clone(),
            command: invocation.command_line.clone(),
        });
    }

    if !output.is_empty() {
        log::info!("\n{output}");
    }

    if !invocation.stderr.is_empty() && log::log_enabled!(log::Level::Warn) {
        log::warn!("JDeps Warnings");
        for line in warning_lines(&invocation.stderr) {
            log::warn!("{line}");
        }
    }

    Ok(())
}

/// Non-empty stderr lines, trimmed, one warning each.
fn warning_lines(stderr: &str) -> impl Iterator<Item = &str> {
    stderr.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn capture<R: Read>(pipe: Option<R>) -> io::Result<String> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buffer)?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn launch_error(command_line: &str, source: io::Error) -> JdepsError {
    JdepsError::ProcessLaunch {
        command: command_line.to_string(),
        source,
    }
}
