use crate::meeting::Priority;
use crate::time::UtcOffset;
use core::fmt;
use log::debug;
use thiserror::Error;

pub type TaskId = u32;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum HandoffError {
    #[error("Unknown task id {id}")]
    UnknownTask { id: TaskId },
    #[error("Unknown team id {id}")]
    UnknownTeam { id: String },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TaskStatus {
    Pending,
    InProgress,
    Blocked,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Completed => "completed",
        })
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// `None` while a task waits for assignment, e.g. right after a handoff.
    #[cfg_attr(feature = "serde", serde(rename = "assignedTo"))]
    pub assignee: Option<String>,
    pub team: String,
    pub dependencies: Vec<TaskId>,
    pub priority: Priority,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Team {
    pub id: String,
    pub name: String,
    pub utc_offset: UtcOffset,
}

impl Team {
    pub fn new(id: &str, name: &str, utc_offset: UtcOffset) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            utc_offset,
        }
    }
}

/// The shared task list plus the teams tasks can be handed to. All
/// mutation goes through the operations below; there is no ambient state.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskBoard {
    tasks: Vec<Task>,
    teams: Vec<Team>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>, teams: Vec<Team>) -> TaskBoard {
        TaskBoard { tasks, teams }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn complete_task(&mut self, id: TaskId) -> Result<(), HandoffError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(HandoffError::UnknownTask { id })?;
        task.status = TaskStatus::Completed;
        Ok(())
    }

    /// Transfers a task to another team. The receiving team owns it, the
    /// assignee clears until someone picks it up, and work is considered
    /// in progress again.
    pub fn hand_off(&mut self, id: TaskId, team_id: &str) -> Result<(), HandoffError> {
        let team_name = self
            .team(team_id)
            .ok_or_else(|| HandoffError::UnknownTeam {
                id: team_id.to_string(),
            })?
            .name
            .clone();

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(HandoffError::UnknownTask { id })?;

        debug!("handing off task {} to {}", id, team_name);

        task.team = team_name;
        task.assignee = None;
        task.status = TaskStatus::InProgress;

        Ok(())
    }

    /// The tasks a given task depends on, in dependency-list order.
    pub fn dependencies_of(&self, task: &Task) -> Vec<&Task> {
        task.dependencies
            .iter()
            .filter_map(|&id| self.get(id))
            .collect()
    }
}
