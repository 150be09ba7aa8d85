pub mod meeting;
pub mod member;
pub mod overlap;
pub mod progress;
pub mod report;
pub mod sample;
pub mod state;
pub mod task;
pub mod time;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod tests {

    #[test]
    fn local_time_always_lands_in_range() {
        use crate::time::{local_minutes, UtcOffset};

        let mut offset = -720;
        while offset <= 840 {
            for hour in 0..24u8 {
                let local = local_minutes(hour, UtcOffset::from_minutes(offset));
                assert!(local < 24 * 60, "hour {} offset {} gave {}", hour, offset, local);
            }
            offset += 30;
        }
    }

    #[test]
    fn converts_half_hour_offsets_exactly() {
        use crate::sample::sample_roster;
        use crate::time::Weekday;

        let roster = sample_roster();
        let raj = roster.get("5").unwrap();

        // 04:00 UTC is 09:30 in Kolkata, before the [10, 19) window opens
        assert_eq!(raj.local_minutes(4), 9 * 60 + 30);
        assert!(!raj.available_at(Weekday::Monday, 4));

        // 05:00 UTC is 10:30, inside the window
        assert!(raj.available_at(Weekday::Monday, 5));
    }

    #[test]
    fn empty_selection_yields_empty_outputs() {
        use crate::overlap::{recommend, OverlapGrid};
        use crate::sample::sample_roster;
        use std::collections::BTreeSet;

        let roster = sample_roster();
        let selected = BTreeSet::new();

        let grid = OverlapGrid::compute(&roster, &selected);
        assert!(grid.is_empty());
        assert!(recommend(&grid, &roster, &selected).is_empty());
    }

    #[test]
    fn always_available_member_fills_the_grid() {
        use crate::member::{Roster, TeamMember};
        use crate::overlap::{recommend, OverlapGrid};
        use crate::time::{AvailabilityWindow, UtcOffset, Weekday};
        use std::collections::BTreeSet;

        let windows = Weekday::ALL
            .iter()
            .map(|&day| AvailabilityWindow::new(day, 0, 24))
            .collect();
        let roster = Roster::new(vec![TeamMember::new(
            "1",
            "Always On",
            "Engineer",
            "Europe/London (UTC+0)",
            UtcOffset::UTC,
            windows,
        )]);
        let selected: BTreeSet<String> = vec!["1".to_string()].into_iter().collect();

        let grid = OverlapGrid::compute(&roster, &selected);
        assert_eq!(grid.days.len(), 5);
        for day in &grid.days {
            assert_eq!(day.slots.len(), 24);
            assert!(day.slots.iter().all(|slot| slot.attendees.len() == 1));
        }

        // all 120 slots qualify; the in-hours slots outscore the rest and
        // the cap keeps the first three of Monday
        let recommended = recommend(&grid, &roster, &selected);
        assert_eq!(recommended.len(), 3);
        for (n, slot) in recommended.iter().enumerate() {
            assert_eq!(slot.day, Weekday::Monday);
            assert_eq!(slot.hour, 9 + n as u8);
            assert_eq!(slot.score, 15);
        }
    }

    #[test]
    fn full_overlap_shrinks_as_the_selection_grows() {
        use crate::overlap::OverlapGrid;
        use crate::sample::sample_roster;
        use std::collections::BTreeSet;

        let roster = sample_roster();

        let count_full = |selected: &BTreeSet<String>| -> usize {
            let grid = OverlapGrid::compute(&roster, selected);
            grid.days
                .iter()
                .flat_map(|day| day.slots.iter())
                .filter(|slot| slot.attendees.len() == selected.len())
                .count()
        };

        let mut selected: BTreeSet<String> = vec!["1".to_string()].into_iter().collect();
        let mut previous = count_full(&selected);

        for id in ["2", "3", "4", "5"].iter() {
            selected.insert(id.to_string());
            let current = count_full(&selected);
            assert!(
                current <= previous,
                "selection of {} members has {} full slots, previous had {}",
                selected.len(),
                current,
                previous
            );
            previous = current;
        }
    }

    #[test]
    fn scores_and_ranks_the_two_member_week() {
        use crate::overlap::{recommend, OverlapGrid, RecommendedSlot};
        use crate::sample::sample_roster;
        use crate::time::Weekday;
        use std::collections::BTreeSet;

        let roster = sample_roster();
        let selected: BTreeSet<String> =
            vec!["1".to_string(), "2".to_string()].into_iter().collect();

        let grid = OverlapGrid::compute(&roster, &selected);

        // 09:00 UTC Monday: Sarah at 17:00 (in [9, 18)), Michael at 10:00
        let monday = &grid.days[0];
        assert_eq!(monday.day, Weekday::Monday);
        assert_eq!(monday.slots[9].attendees.len(), 2);

        // 18:00 UTC Monday: Sarah's local 02:00 rules her out
        assert!(monday.slots[18].attendees.is_empty());

        // both members sit inside local [9, 17] at 08:00 and 09:00 UTC;
        // 17:00 on the dot still counts, the bound is inclusive
        let recommended = recommend(&grid, &roster, &selected);
        assert_eq!(
            recommended,
            vec![
                RecommendedSlot { day: Weekday::Monday, hour: 8, score: 25 },
                RecommendedSlot { day: Weekday::Monday, hour: 9, score: 25 },
                RecommendedSlot { day: Weekday::Tuesday, hour: 8, score: 25 },
            ]
        );

        // identical input, identical ranking
        assert_eq!(recommended, recommend(&grid, &roster, &selected));
    }

    #[test]
    fn merges_full_hours_into_spans() {
        use crate::overlap::{HourSpan, OverlapGrid};
        use crate::sample::sample_roster;
        use std::collections::BTreeSet;

        let roster = sample_roster();
        let selected: BTreeSet<String> =
            vec!["1".to_string(), "2".to_string()].into_iter().collect();

        let grid = OverlapGrid::compute(&roster, &selected);

        // Monday's full-overlap hours are 07:00 through 09:00 UTC
        assert_eq!(
            grid.days[0].full_spans(2),
            vec![HourSpan { start: 7, end: 10 }]
        );
        assert!(grid.days[0].full_spans(0).is_empty());
    }

    #[test]
    fn validates_the_roster() {
        use crate::member::{Roster, TeamMember, ValidationError};
        use crate::time::{AvailabilityWindow, UtcOffset, Weekday};

        let member = |windows| {
            TeamMember::new("1", "Test", "Engineer", "UTC", UtcOffset::UTC, windows)
        };

        assert_eq!(
            Roster::new(vec![member(vec![AvailabilityWindow::new(
                Weekday::Monday,
                18,
                9
            )])])
            .validate(),
            Err(ValidationError::EmptyWindow {
                member: "1".to_string(),
                day: Weekday::Monday
            })
        );

        assert_eq!(
            Roster::new(vec![member(vec![
                AvailabilityWindow::new(Weekday::Monday, 9, 12),
                AvailabilityWindow::new(Weekday::Monday, 13, 17),
            ])])
            .validate(),
            Err(ValidationError::DuplicateWindow {
                member: "1".to_string(),
                day: Weekday::Monday
            })
        );

        assert_eq!(
            Roster::new(vec![member(vec![]), member(vec![])]).validate(),
            Err(ValidationError::DuplicateMember { id: "1".to_string() })
        );

        assert_eq!(crate::sample::sample_roster().validate(), Ok(()));
    }

    #[test]
    fn validates_the_meeting_catalog() {
        use crate::meeting::{validate_catalog, Meeting, Priority};
        use crate::member::ValidationError;
        use crate::sample::{sample_meetings, sample_roster};

        let roster = sample_roster();
        assert_eq!(validate_catalog(&roster, &sample_meetings()), Ok(()));

        let rogue = Meeting::new(
            "9",
            "Ghost Sync",
            "Nobody can attend this",
            30,
            Priority::Low,
            vec!["99".to_string()],
        );
        assert_eq!(
            validate_catalog(&roster, &[rogue]),
            Err(ValidationError::UnknownAttendee {
                meeting: "9".to_string(),
                member: "99".to_string()
            })
        );
    }

    #[test]
    fn meeting_selection_drives_the_dashboard() {
        use crate::member::ValidationError;
        use crate::state::Dashboard;

        let mut dashboard = Dashboard::sample();
        assert!(dashboard.selection().is_empty());
        assert!(dashboard.overlap().grid.is_empty());
        assert!(dashboard.overlap().recommended.is_empty());

        dashboard.select_meeting("2").unwrap();
        assert_eq!(dashboard.selected_meeting(), Some("2"));
        assert_eq!(dashboard.selection().len(), 3);
        assert_eq!(dashboard.overlap().grid.days.len(), 5);

        assert_eq!(dashboard.toggle_attendee("2"), Ok(false));
        assert_eq!(dashboard.selection().len(), 2);

        assert_eq!(dashboard.toggle_attendee("2"), Ok(true));
        assert_eq!(dashboard.selection().len(), 3);

        assert_eq!(
            dashboard.toggle_attendee("99"),
            Err(ValidationError::UnknownMember { id: "99".to_string() })
        );

        assert_eq!(
            dashboard.select_meeting("nope"),
            Err(ValidationError::UnknownMeeting { id: "nope".to_string() })
        );

        dashboard.clear_selection();
        assert!(dashboard.selection().is_empty());
        assert!(dashboard.overlap().grid.is_empty());
        assert!(dashboard.overlap().recommended.is_empty());
    }

    #[test]
    fn generates_reports_newest_first() {
        use crate::report::TemplateReportGenerator;
        use crate::state::Dashboard;
        use chrono::NaiveDate;

        let mut dashboard = Dashboard::sample();
        assert_eq!(dashboard.reports().len(), 3);

        let date = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
        let report = dashboard.generate_report(&TemplateReportGenerator, "Current Team", date);
        assert_eq!(report.id, 4);
        assert_eq!(report.completed_tasks.len(), 3);

        assert_eq!(dashboard.reports().len(), 4);
        assert_eq!(dashboard.reports()[0].id, 4);
        assert_eq!(dashboard.reports()[0].team, "Current Team");
    }

    #[test]
    fn hands_tasks_between_teams() {
        use crate::sample::sample_board;
        use crate::task::{HandoffError, TaskStatus};

        let mut board = sample_board();

        board.hand_off(3, "apac").unwrap();
        let task = board.get(3).unwrap();
        assert_eq!(task.team, "APAC Development");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee, None);

        assert_eq!(
            board.hand_off(3, "antarctica"),
            Err(HandoffError::UnknownTeam { id: "antarctica".to_string() })
        );
        assert_eq!(
            board.complete_task(42),
            Err(HandoffError::UnknownTask { id: 42 })
        );

        board.complete_task(4).unwrap();
        assert_eq!(board.get(4).unwrap().status, TaskStatus::Completed);

        let dependencies: Vec<u32> = board
            .dependencies_of(board.get(3).unwrap())
            .iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(dependencies, vec![1, 2]);
    }

    #[test]
    fn recommends_a_handoff_team() {
        use crate::report::handoff_recommendation;
        use crate::sample::{sample_board, sample_teams};

        let board = sample_board();
        let advice = handoff_recommendation(board.get(3).unwrap(), &sample_teams());

        assert!(advice.contains("APAC Development"));
        assert!(advice.contains("UTC+8"));
    }

    #[test]
    fn tracks_project_progress() {
        use crate::progress::overall_progress;
        use crate::sample::sample_phases;
        use crate::state::Dashboard;
        use chrono::NaiveDate;

        let phases = sample_phases();
        // 2 of 16 checkpoints done in the seed data
        assert_eq!(overall_progress(&phases), 12.5);
        assert!((phases[0].progress() - 66.666_67).abs() < 1e-3);
        assert_eq!(phases[1].progress(), 0.0);

        let mut dashboard = Dashboard::sample();
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();

        let progress = dashboard.toggle_checkpoint("phase-1", "cp-1-3", today).unwrap();
        assert_eq!(progress, 18.75);
        assert_eq!(dashboard.history().samples().len(), 10);

        // same day toggled again: the sample is replaced, not appended
        let progress = dashboard.toggle_checkpoint("phase-1", "cp-1-3", today).unwrap();
        assert_eq!(progress, 12.5);
        assert_eq!(dashboard.history().samples().len(), 10);

        assert!(dashboard.toggle_checkpoint("phase-9", "cp-1-3", today).is_err());
        assert!(dashboard.toggle_checkpoint("phase-1", "cp-9-9", today).is_err());

        assert_eq!(dashboard.toggle_phase("phase-2"), Ok(true));
        assert_eq!(dashboard.toggle_phase("phase-2"), Ok(false));
    }

    #[test]
    fn formats_hours_for_display() {
        use crate::sample::sample_roster;
        use crate::time::{format_hour_12, format_utc_hour};

        assert_eq!(format_hour_12(0), "12 AM");
        assert_eq!(format_hour_12(12 * 60), "12 PM");
        assert_eq!(format_hour_12(23 * 60 + 59), "11 PM");
        assert_eq!(format_utc_hour(9), "9:00 UTC");

        // display floors the half hour away; comparisons never use this
        let roster = sample_roster();
        assert_eq!(roster.get("5").unwrap().local_time_label(4), "9 AM");
    }

    #[test]
    fn checkpoints_know_when_they_are_late() {
        use crate::sample::sample_phases;
        use chrono::NaiveDate;

        let phases = sample_phases();
        let checkpoint = &phases[0].checkpoints[2];

        let before = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(!checkpoint.is_past_due(before));
        assert!(checkpoint.is_past_due(after));
    }
}
