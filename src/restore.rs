/// External face-restoration call
///
/// GFPGAN itself lives outside this program. We only know how to launch it
/// with an input path (a single image or a folder) and an output folder, and
/// whether it succeeded.

use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use crate::config::RestoreCommand;
use crate::error::{AppError, Result};
use crate::state::data::RunConfig;

/// Lines of stderr kept in a failure message
const STDERR_TAIL_LINES: usize = 5;

/// Something that can restore the faces in `input`, writing into `output`
pub trait Restorer: Send + Sync {
    fn restore(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Runs the inference routine as a child process
#[derive(Debug, Clone)]
pub struct CommandRestorer {
    command: RestoreCommand,
}

impl CommandRestorer {
    pub fn new(command: RestoreCommand) -> Self {
        Self { command }
    }

    /// Argument list with `{input}` / `{output}` filled in
    fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        self.command
            .args
            .iter()
            .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
            .collect()
    }
}

impl Restorer for CommandRestorer {
    fn restore(&self, input: &Path, output: &Path) -> Result<()> {
        let args = self.args(input, output);
        log::info!("🚀 Running {} {}", self.command.program, args.join(" "));

        let mut command = Command::new(&self.command.program);
        command.args(&args);
        if let Some(dir) = &self.command.working_dir {
            command.current_dir(dir);
        }

        let result = command
            .output()
            .map_err(|e| AppError::Inference(format!("could not start {}: {}", self.command.program, e)))?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr);
        let lines: Vec<&str> = stderr.lines().collect();
        let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");

        Err(AppError::Inference(if tail.is_empty() {
            format!("{} exited with {}", self.command.program, result.status)
        } else {
            format!("{} exited with {}:\n{}", self.command.program, result.status, tail)
        }))
    }
}

impl RunConfig {
    /// Perform the single blocking restoration call for this run
    pub fn execute(&self, restorer: &dyn Restorer) -> Result<()> {
        restorer.restore(self.request.input(), &self.output_folder)
    }
}

/// Run the restoration on a blocking worker so the UI keeps repainting
pub async fn run_restoration(restorer: Arc<dyn Restorer>, config: RunConfig) -> std::result::Result<(), String> {
    tokio::task::spawn_blocking(move || config.execute(restorer.as_ref()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}
