use crate::meeting::Priority;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ProgressError {
    #[error("Unknown phase id {id}")]
    UnknownPhase { id: String },
    #[error("Unknown checkpoint id {id}")]
    UnknownCheckpoint { id: String },
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Checkpoint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[cfg_attr(feature = "serde", serde(rename = "assignedTo"))]
    pub assignee: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

impl Checkpoint {
    /// The library keeps no ambient clock; callers pass today's date in.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProjectPhase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub expanded: bool,
    pub checkpoints: Vec<Checkpoint>,
}

impl ProjectPhase {
    pub fn completed_checkpoints(&self) -> usize {
        self.checkpoints.iter().filter(|cp| cp.completed).count()
    }

    /// Completion percentage of this phase, 0 when it has no checkpoints.
    pub fn progress(&self) -> f32 {
        percentage(self.completed_checkpoints(), self.checkpoints.len())
    }
}

/// Completion percentage across every phase's checkpoints.
pub fn overall_progress(phases: &[ProjectPhase]) -> f32 {
    let total: usize = phases.iter().map(|phase| phase.checkpoints.len()).sum();
    let completed: usize = phases.iter().map(|phase| phase.completed_checkpoints()).sum();
    percentage(completed, total)
}

fn percentage(completed: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        completed as f32 / total as f32 * 100.0
    }
}

/// Flips one checkpoint's completed flag and returns the new value.
pub fn toggle_checkpoint(
    phases: &mut [ProjectPhase],
    phase_id: &str,
    checkpoint_id: &str,
) -> Result<bool, ProgressError> {
    let phase = phases
        .iter_mut()
        .find(|phase| phase.id == phase_id)
        .ok_or_else(|| ProgressError::UnknownPhase {
            id: phase_id.to_string(),
        })?;

    let checkpoint = phase
        .checkpoints
        .iter_mut()
        .find(|cp| cp.id == checkpoint_id)
        .ok_or_else(|| ProgressError::UnknownCheckpoint {
            id: checkpoint_id.to_string(),
        })?;

    checkpoint.completed = !checkpoint.completed;
    Ok(checkpoint.completed)
}

/// Flips a phase's expanded flag and returns the new value. Display
/// state, but it lives with the phase data the way the rest of the
/// dashboard state does.
pub fn toggle_expansion(
    phases: &mut [ProjectPhase],
    phase_id: &str,
) -> Result<bool, ProgressError> {
    let phase = phases
        .iter_mut()
        .find(|phase| phase.id == phase_id)
        .ok_or_else(|| ProgressError::UnknownPhase {
            id: phase_id.to_string(),
        })?;

    phase.expanded = !phase.expanded;
    Ok(phase.expanded)
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressSample {
    pub date: NaiveDate,
    pub progress: f32,
}

/// Dated progress readings behind the progress chart. One sample per
/// date; recording twice on a day replaces that day's value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProgressHistory {
    samples: Vec<ProgressSample>,
}

impl ProgressHistory {
    pub fn new(samples: Vec<ProgressSample>) -> ProgressHistory {
        ProgressHistory { samples }
    }

    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    pub fn record(&mut self, date: NaiveDate, progress: f32) {
        match self.samples.iter_mut().find(|sample| sample.date == date) {
            Some(sample) => sample.progress = progress,
            None => self.samples.push(ProgressSample { date, progress }),
        }
    }
}
