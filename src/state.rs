use crate::meeting::{validate_catalog, Meeting};
use crate::member::{MemberId, Roster, ValidationError};
use crate::overlap::WeeklyOverlap;
use crate::progress::{
    overall_progress, toggle_checkpoint, toggle_expansion, ProgressError, ProgressHistory,
    ProjectPhase,
};
use crate::report::{HandoffReport, ReportGenerator};
use crate::sample;
use crate::task::{HandoffError, Task, TaskBoard, TaskId};
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeSet;

/// The dashboard's entire state, owned in one place. Every update is an
/// operation on this store; the selection operations recompute the full
/// weekly overlap synchronously before returning, so readers always see
/// grid and recommendations consistent with the selection.
#[derive(Clone, Debug)]
pub struct Dashboard {
    roster: Roster,
    meetings: Vec<Meeting>,
    board: TaskBoard,
    reports: Vec<HandoffReport>,
    next_report_id: u32,
    phases: Vec<ProjectPhase>,
    history: ProgressHistory,
    selected_meeting: Option<String>,
    selected: BTreeSet<MemberId>,
    overlap: WeeklyOverlap,
}

impl Dashboard {
    /// Builds a dashboard over externally supplied data, validating the
    /// roster and the meeting catalog against it. The selection starts
    /// empty, so the overlap outputs start empty too.
    pub fn new(
        roster: Roster,
        meetings: Vec<Meeting>,
        board: TaskBoard,
        reports: Vec<HandoffReport>,
        phases: Vec<ProjectPhase>,
        history: ProgressHistory,
    ) -> Result<Dashboard, ValidationError> {
        roster.validate()?;
        validate_catalog(&roster, &meetings)?;

        let next_report_id = reports.iter().map(|report| report.id).max().unwrap_or(0) + 1;

        Ok(Dashboard {
            roster,
            meetings,
            board,
            reports,
            next_report_id,
            phases,
            history,
            selected_meeting: None,
            selected: BTreeSet::new(),
            overlap: WeeklyOverlap::empty(),
        })
    }

    /// The demo dashboard, seeded with the static sample data. The
    /// literals are known-good, so no validation pass is needed.
    pub fn sample() -> Dashboard {
        let reports = sample::sample_reports();
        let next_report_id = reports.iter().map(|report| report.id).max().unwrap_or(0) + 1;

        Dashboard {
            roster: sample::sample_roster(),
            meetings: sample::sample_meetings(),
            board: sample::sample_board(),
            reports,
            next_report_id,
            phases: sample::sample_phases(),
            history: sample::sample_history(),
            selected_meeting: None,
            selected: BTreeSet::new(),
            overlap: WeeklyOverlap::empty(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn reports(&self) -> &[HandoffReport] {
        &self.reports
    }

    pub fn phases(&self) -> &[ProjectPhase] {
        &self.phases
    }

    pub fn history(&self) -> &ProgressHistory {
        &self.history
    }

    pub fn selection(&self) -> &BTreeSet<MemberId> {
        &self.selected
    }

    pub fn selected_meeting(&self) -> Option<&str> {
        self.selected_meeting.as_deref()
    }

    pub fn overlap(&self) -> &WeeklyOverlap {
        &self.overlap
    }

    /// Replaces the selection wholesale with the meeting's required
    /// attendees, then recomputes.
    pub fn select_meeting(&mut self, meeting_id: &str) -> Result<(), ValidationError> {
        let meeting = self
            .meetings
            .iter()
            .find(|meeting| meeting.id == meeting_id)
            .ok_or_else(|| ValidationError::UnknownMeeting {
                id: meeting_id.to_string(),
            })?;

        self.selected = meeting.required_attendees.iter().cloned().collect();
        self.selected_meeting = Some(meeting.id.clone());
        self.recompute();
        Ok(())
    }

    /// Adds or removes one member from the selection; returns whether the
    /// member is selected afterwards.
    pub fn toggle_attendee(&mut self, member_id: &str) -> Result<bool, ValidationError> {
        if self.roster.get(member_id).is_none() {
            return Err(ValidationError::UnknownMember {
                id: member_id.to_string(),
            });
        }

        let now_selected = if self.selected.remove(member_id) {
            false
        } else {
            self.selected.insert(member_id.to_string());
            true
        };

        self.recompute();
        Ok(now_selected)
    }

    pub fn clear_selection(&mut self) {
        self.selected_meeting = None;
        self.selected.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.overlap = WeeklyOverlap::plan(&self.roster, &self.selected);
        debug!(
            "selection changed: {} attendees, {} recommended slots",
            self.selected.len(),
            self.overlap.recommended.len()
        );
    }

    /// Runs a generator and prepends its report, newest first.
    pub fn generate_report<G>(&mut self, generator: &G, team: &str, date: NaiveDate) -> &HandoffReport
    where
        G: ReportGenerator + ?Sized,
    {
        let report = generator.generate(self.next_report_id, team, date);
        self.next_report_id += 1;
        self.reports.insert(0, report);
        &self.reports[0]
    }

    pub fn add_task(&mut self, task: Task) {
        self.board.add_task(task);
    }

    pub fn complete_task(&mut self, id: TaskId) -> Result<(), HandoffError> {
        self.board.complete_task(id)
    }

    pub fn hand_off_task(&mut self, id: TaskId, team_id: &str) -> Result<(), HandoffError> {
        self.board.hand_off(id, team_id)
    }

    /// Flips one checkpoint, records the new overall percentage into the
    /// history under `today`, and returns that percentage.
    pub fn toggle_checkpoint(
        &mut self,
        phase_id: &str,
        checkpoint_id: &str,
        today: NaiveDate,
    ) -> Result<f32, ProgressError> {
        toggle_checkpoint(&mut self.phases, phase_id, checkpoint_id)?;
        let progress = overall_progress(&self.phases);
        self.history.record(today, progress);
        Ok(progress)
    }

    pub fn toggle_phase(&mut self, phase_id: &str) -> Result<bool, ProgressError> {
        toggle_expansion(&mut self.phases, phase_id)
    }
}
