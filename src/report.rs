use crate::task::{Task, Team};
use chrono::NaiveDate;

/// A daily handoff summary passed between shifts.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandoffReport {
    pub id: u32,
    pub date: NaiveDate,
    pub team: String,
    pub summary: String,
    pub completed_tasks: Vec<String>,
    pub issues: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Source of handoff reports. The library ships a canned template
/// generator only; real summarization lives behind this seam, if ever.
pub trait ReportGenerator {
    fn generate(&self, id: u32, team: &str, date: NaiveDate) -> HandoffReport;
}

/// Mock generator returning the same fixed report lines every time. This
/// simulates the "AI" writer; it performs no inference and never will
/// inside this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateReportGenerator;

impl ReportGenerator for TemplateReportGenerator {
    fn generate(&self, id: u32, team: &str, date: NaiveDate) -> HandoffReport {
        HandoffReport {
            id,
            date,
            team: team.to_string(),
            summary: "AI-generated summary of today's work progress and key achievements."
                .to_string(),
            completed_tasks: vec![
                "Task 1 automatically detected from commits".to_string(),
                "Task 2 extracted from project management tool".to_string(),
                "Task 3 identified from communication channels".to_string(),
            ],
            issues: vec![
                "Potential blocker identified in dependency X".to_string(),
                "Performance concern in module Y".to_string(),
            ],
            next_steps: vec![
                "Suggested next task based on project timeline".to_string(),
                "Critical path item requiring attention".to_string(),
                "Recommended follow-up for pending issues".to_string(),
            ],
        }
    }
}

/// Fixed-template handoff suggestion: names the first team other than the
/// one currently holding the task. A simulation stub, same as the report
/// generator.
pub fn handoff_recommendation(task: &Task, teams: &[Team]) -> String {
    match teams.iter().find(|team| team.name != task.team) {
        Some(team) => format!(
            "Based on task dependencies and team availability, we recommend handing off to the {} team. \
             Their timezone (UTC{:+}) provides optimal coverage for this task.",
            team.name,
            team.utc_offset.hours()
        ),
        None => format!("No alternative team is available for \"{}\".", task.title),
    }
}
