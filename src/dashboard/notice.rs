use std::fmt;

use crate::gateway::GatewayError;
use crate::logic::validation::ValidationError;

/// User action a failure is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadData,
    AddPlant,
    MovePlant,
    UpdatePlant,
    RemovePlant,
    AddPlot,
    UpdatePlot,
    RemovePlot,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::LoadData => "load data",
            Action::AddPlant => "add plant",
            Action::MovePlant => "move plant",
            Action::UpdatePlant => "update plant",
            Action::RemovePlant => "remove plant",
            Action::AddPlot => "add plot",
            Action::UpdatePlot => "update plot",
            Action::RemovePlot => "remove plot",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Another request from this dialog is still in progress")]
    Busy,
    #[error("The dialog is closed")]
    Closed,
}

impl SubmitError {
    /// The blocking message shown for this failure.
    pub fn notice(&self, action: Action) -> Notice {
        let message = match self {
            SubmitError::Gateway(err) if err.is_conflict() => err.to_string(),
            SubmitError::Gateway(err) => format!("Failed to {action}: {err}"),
            other => other.to_string(),
        };
        Notice { message }
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
