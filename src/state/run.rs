//! Restoration run orchestration.
//!
//! Drives a `RestoreRequest` through output-folder selection, confirmation
//! and the external inference call. The state machine itself never blocks or
//! opens dialogs; the app feeds it the results of those.

use std::path::PathBuf;

use super::data::{RestoreRequest, RunConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    AwaitingOutputFolder(RestoreRequest),
    AwaitingConfirmation(RunConfig),
    Running(RunConfig),
    Complete(RunConfig),
    /// User cancelled on the summary screen
    Cancelled,
    /// User dismissed the output-folder prompt
    Abandoned,
    Failed { config: RunConfig, reason: String },
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    state: RunState,
}

impl Orchestrator {
    pub fn new(request: RestoreRequest) -> Self {
        Self {
            state: RunState::AwaitingOutputFolder(request),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Feed the answer of the output-folder prompt. `None` abandons the run.
    pub fn output_folder_chosen(&mut self, folder: Option<PathBuf>) {
        let RunState::AwaitingOutputFolder(request) = &self.state else {
            log::warn!("Output folder chosen in state {:?}, ignoring", self.state);
            return;
        };

        self.state = match folder {
            Some(output_folder) => RunState::AwaitingConfirmation(RunConfig {
                request: request.clone(),
                output_folder,
            }),
            None => {
                log::info!("No output folder chosen, ending session");
                RunState::Abandoned
            }
        };
    }

    /// Confirm the summary. Returns the config to execute; only the first
    /// confirmation yields one.
    pub fn confirm(&mut self) -> Option<RunConfig> {
        let RunState::AwaitingConfirmation(config) = &self.state else {
            log::warn!("Confirm in state {:?}, ignoring", self.state);
            return None;
        };

        let config = config.clone();
        self.state = RunState::Running(config.clone());
        Some(config)
    }

    pub fn cancel(&mut self) {
        if matches!(self.state, RunState::AwaitingConfirmation(_)) {
            self.state = RunState::Cancelled;
        } else {
            log::warn!("Cancel in state {:?}, ignoring", self.state);
        }
    }

    /// Record the outcome of the external call.
    pub fn finished(&mut self, outcome: Result<(), String>) {
        let RunState::Running(config) = &self.state else {
            log::warn!("Run finished in state {:?}, ignoring", self.state);
            return;
        };

        let config = config.clone();
        self.state = match outcome {
            Ok(()) => RunState::Complete(config),
            Err(reason) => RunState::Failed { config, reason },
        };
    }

    /// True once no further input can change the outcome
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            RunState::Complete(_) | RunState::Cancelled | RunState::Abandoned | RunState::Failed { .. }
        )
    }
}
