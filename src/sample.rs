//! The seeded demo data. Everything here reproduces the static arrays the
//! dashboard ships with; nothing in the library depends on it except
//! `Dashboard::sample`, tests, and benches.

use crate::meeting::{Meeting, Priority};
use crate::member::{Roster, TeamMember};
use crate::progress::{Checkpoint, ProgressHistory, ProgressSample, ProjectPhase};
use crate::report::HandoffReport;
use crate::task::{Task, TaskBoard, TaskStatus, Team};
use crate::time::{AvailabilityWindow, UtcOffset, Weekday};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

// Monday through Thursday share one window; Friday ends an hour early.
fn weekly(start: u8, end: u8, friday_end: u8) -> Vec<AvailabilityWindow> {
    vec![
        AvailabilityWindow::new(Weekday::Monday, start, end),
        AvailabilityWindow::new(Weekday::Tuesday, start, end),
        AvailabilityWindow::new(Weekday::Wednesday, start, end),
        AvailabilityWindow::new(Weekday::Thursday, start, end),
        AvailabilityWindow::new(Weekday::Friday, start, friday_end),
    ]
}

pub fn sample_roster() -> Roster {
    Roster::new(vec![
        TeamMember::new(
            "1",
            "Sarah Chen",
            "Senior Developer",
            "Asia/Singapore (UTC+8)",
            UtcOffset::from_hours(8.0),
            weekly(9, 18, 17),
        ),
        TeamMember::new(
            "2",
            "Michael Rodriguez",
            "UI/UX Designer",
            "Europe/Berlin (UTC+1)",
            UtcOffset::from_hours(1.0),
            weekly(8, 17, 16),
        ),
        TeamMember::new(
            "3",
            "James Wilson",
            "Backend Engineer",
            "America/New_York (UTC-5)",
            UtcOffset::from_hours(-5.0),
            weekly(10, 19, 18),
        ),
        TeamMember::new(
            "4",
            "Emma Johnson",
            "Product Manager",
            "Europe/London (UTC+0)",
            UtcOffset::UTC,
            weekly(9, 18, 17),
        ),
        TeamMember::new(
            "5",
            "Raj Patel",
            "QA Engineer",
            "Asia/Kolkata (UTC+5:30)",
            UtcOffset::from_hours(5.5),
            weekly(10, 19, 18),
        ),
    ])
}

pub fn sample_meetings() -> Vec<Meeting> {
    let everyone = || -> Vec<String> {
        vec!["1", "2", "3", "4", "5"].into_iter().map(String::from).collect()
    };
    vec![
        Meeting::new(
            "1",
            "Sprint Planning",
            "Plan tasks for the upcoming sprint and assign responsibilities",
            60,
            Priority::High,
            everyone(),
        ),
        Meeting::new(
            "2",
            "Design Review",
            "Review and provide feedback on the latest UI designs",
            90,
            Priority::Medium,
            vec!["1".to_string(), "2".to_string(), "4".to_string()],
        ),
        Meeting::new(
            "3",
            "Backend Architecture Discussion",
            "Discuss changes to the API structure and database schema",
            60,
            Priority::High,
            vec!["1".to_string(), "3".to_string(), "5".to_string()],
        ),
        Meeting::new(
            "4",
            "Weekly Team Sync",
            "General team sync to discuss progress and blockers",
            30,
            Priority::Medium,
            everyone(),
        ),
    ]
}

pub fn sample_teams() -> Vec<Team> {
    vec![
        Team::new("apac", "APAC Development", UtcOffset::from_hours(8.0)),
        Team::new("emea", "EMEA Design", UtcOffset::from_hours(1.0)),
        Team::new("americas", "Americas Engineering", UtcOffset::from_hours(-5.0)),
        Team::new("emea-product", "EMEA Product", UtcOffset::from_hours(2.0)),
    ]
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Update user authentication flow".to_string(),
            description: "Implement new OAuth2 flow and update login screens".to_string(),
            status: TaskStatus::Completed,
            assignee: Some("Sarah Chen".to_string()),
            team: "APAC Development".to_string(),
            dependencies: vec![],
            priority: Priority::High,
        },
        Task {
            id: 2,
            title: "Design system component updates".to_string(),
            description: "Update button and form components to match new brand guidelines"
                .to_string(),
            status: TaskStatus::InProgress,
            assignee: Some("Michael Rodriguez".to_string()),
            team: "EMEA Design".to_string(),
            dependencies: vec![1],
            priority: Priority::Medium,
        },
        Task {
            id: 3,
            title: "API integration for notification service".to_string(),
            description: "Connect to new notification API and implement client-side handlers"
                .to_string(),
            status: TaskStatus::Blocked,
            assignee: None,
            team: "Pending Assignment".to_string(),
            dependencies: vec![1, 2],
            priority: Priority::High,
        },
        Task {
            id: 4,
            title: "Performance optimization for dashboard".to_string(),
            description: "Reduce load time and optimize rendering of dashboard components"
                .to_string(),
            status: TaskStatus::InProgress,
            assignee: Some("James Wilson".to_string()),
            team: "Americas Engineering".to_string(),
            dependencies: vec![],
            priority: Priority::Medium,
        },
        Task {
            id: 5,
            title: "User testing coordination".to_string(),
            description: "Schedule and coordinate user testing sessions for new features"
                .to_string(),
            status: TaskStatus::InProgress,
            assignee: Some("Emma Johnson".to_string()),
            team: "EMEA Product".to_string(),
            dependencies: vec![2],
            priority: Priority::Low,
        },
    ]
}

pub fn sample_board() -> TaskBoard {
    TaskBoard::new(sample_tasks(), sample_teams())
}

pub fn sample_reports() -> Vec<HandoffReport> {
    vec![
        HandoffReport {
            id: 1,
            date: date(2025, 4, 15),
            team: "APAC Development".to_string(),
            summary: "Completed user authentication flow updates and started work on the \
                      notification system integration."
                .to_string(),
            completed_tasks: vec![
                "Updated OAuth2 implementation".to_string(),
                "Fixed login screen responsiveness issues".to_string(),
                "Added remember me functionality".to_string(),
                "Updated user session management".to_string(),
            ],
            issues: vec![
                "API rate limiting causing occasional timeouts".to_string(),
                "Mobile layout issues on smaller devices".to_string(),
            ],
            next_steps: vec![
                "Complete notification API integration".to_string(),
                "Address mobile layout issues".to_string(),
                "Begin work on user profile enhancements".to_string(),
            ],
        },
        HandoffReport {
            id: 2,
            date: date(2025, 4, 14),
            team: "EMEA Design".to_string(),
            summary: "Finalized design system component updates and completed user testing for \
                      the new dashboard layout."
                .to_string(),
            completed_tasks: vec![
                "Updated button component styles".to_string(),
                "Redesigned form elements".to_string(),
                "Completed user testing sessions".to_string(),
                "Documented design system changes".to_string(),
            ],
            issues: vec![
                "Color contrast issues in dark mode".to_string(),
                "Inconsistent spacing in mobile views".to_string(),
            ],
            next_steps: vec![
                "Address accessibility feedback".to_string(),
                "Finalize dark mode theme".to_string(),
                "Prepare design handoff for development".to_string(),
            ],
        },
        HandoffReport {
            id: 3,
            date: date(2025, 4, 13),
            team: "Americas Engineering".to_string(),
            summary: "Improved dashboard performance and fixed critical bugs in the reporting \
                      module."
                .to_string(),
            completed_tasks: vec![
                "Optimized dashboard loading time by 40%".to_string(),
                "Fixed data visualization rendering issues".to_string(),
                "Resolved memory leak in reporting module".to_string(),
                "Updated dependencies to latest versions".to_string(),
            ],
            issues: vec![
                "Edge case in data filtering not handled".to_string(),
                "Intermittent connection issues with analytics API".to_string(),
            ],
            next_steps: vec![
                "Complete edge case handling".to_string(),
                "Implement offline mode for reports".to_string(),
                "Begin integration with new metrics API".to_string(),
            ],
        },
    ]
}

fn checkpoint(
    id: &str,
    title: &str,
    description: &str,
    completed: bool,
    assignee: &str,
    due: NaiveDate,
    priority: Priority,
) -> Checkpoint {
    Checkpoint {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        assignee: assignee.to_string(),
        due_date: due,
        priority,
    }
}

pub fn sample_phases() -> Vec<ProjectPhase> {
    vec![
        ProjectPhase {
            id: "phase-1".to_string(),
            title: "Planning & Requirements".to_string(),
            description: "Define project scope, requirements, and initial architecture"
                .to_string(),
            expanded: true,
            checkpoints: vec![
                checkpoint(
                    "cp-1-1",
                    "Project Kickoff",
                    "Initial meeting with stakeholders to align on project goals",
                    true,
                    "Sarah Chen",
                    date(2025, 1, 15),
                    Priority::High,
                ),
                checkpoint(
                    "cp-1-2",
                    "Requirements Documentation",
                    "Document all functional and non-functional requirements",
                    true,
                    "Michael Rodriguez",
                    date(2025, 1, 22),
                    Priority::High,
                ),
                checkpoint(
                    "cp-1-3",
                    "Technical Specification",
                    "Create detailed technical specifications and architecture diagrams",
                    false,
                    "Jamal Washington",
                    date(2025, 1, 30),
                    Priority::Medium,
                ),
            ],
        },
        ProjectPhase {
            id: "phase-2".to_string(),
            title: "Design & Prototyping".to_string(),
            description: "Create UI/UX designs and initial prototypes".to_string(),
            expanded: false,
            checkpoints: vec![
                checkpoint(
                    "cp-2-1",
                    "UI/UX Design",
                    "Create wireframes and design mockups for all interfaces",
                    false,
                    "Emma Patel",
                    date(2025, 2, 10),
                    Priority::High,
                ),
                checkpoint(
                    "cp-2-2",
                    "Prototype Development",
                    "Develop interactive prototypes for user testing",
                    false,
                    "David Kim",
                    date(2025, 2, 20),
                    Priority::Medium,
                ),
                checkpoint(
                    "cp-2-3",
                    "Design Review",
                    "Conduct design review with stakeholders and gather feedback",
                    false,
                    "Emma Patel",
                    date(2025, 2, 25),
                    Priority::Medium,
                ),
            ],
        },
        ProjectPhase {
            id: "phase-3".to_string(),
            title: "Development".to_string(),
            description: "Implement core functionality and features".to_string(),
            expanded: false,
            checkpoints: vec![
                checkpoint(
                    "cp-3-1",
                    "Backend Infrastructure",
                    "Set up servers, databases, and core infrastructure",
                    false,
                    "Alex Johnson",
                    date(2025, 3, 10),
                    Priority::High,
                ),
                checkpoint(
                    "cp-3-2",
                    "Frontend Implementation",
                    "Develop user interfaces and client-side functionality",
                    false,
                    "Sophia Garcia",
                    date(2025, 3, 20),
                    Priority::High,
                ),
                checkpoint(
                    "cp-3-3",
                    "API Development",
                    "Create RESTful APIs for data exchange",
                    false,
                    "Marcus Lee",
                    date(2025, 3, 15),
                    Priority::Medium,
                ),
                checkpoint(
                    "cp-3-4",
                    "Integration",
                    "Integrate frontend and backend components",
                    false,
                    "Team",
                    date(2025, 3, 30),
                    Priority::High,
                ),
            ],
        },
        ProjectPhase {
            id: "phase-4".to_string(),
            title: "Testing & QA".to_string(),
            description: "Ensure quality through comprehensive testing".to_string(),
            expanded: false,
            checkpoints: vec![
                checkpoint(
                    "cp-4-1",
                    "Unit Testing",
                    "Write and execute unit tests for all components",
                    false,
                    "Ryan Wilson",
                    date(2025, 4, 10),
                    Priority::Medium,
                ),
                checkpoint(
                    "cp-4-2",
                    "Integration Testing",
                    "Test interactions between integrated components",
                    false,
                    "Olivia Martinez",
                    date(2025, 4, 15),
                    Priority::High,
                ),
                checkpoint(
                    "cp-4-3",
                    "User Acceptance Testing",
                    "Conduct UAT with stakeholders and end users",
                    false,
                    "Sarah Chen",
                    date(2025, 4, 25),
                    Priority::High,
                ),
            ],
        },
        ProjectPhase {
            id: "phase-5".to_string(),
            title: "Deployment & Launch".to_string(),
            description: "Deploy to production and launch the project".to_string(),
            expanded: false,
            checkpoints: vec![
                checkpoint(
                    "cp-5-1",
                    "Deployment Planning",
                    "Create detailed deployment plan and rollback strategy",
                    false,
                    "Jamal Washington",
                    date(2025, 5, 5),
                    Priority::High,
                ),
                checkpoint(
                    "cp-5-2",
                    "Production Deployment",
                    "Deploy application to production environment",
                    false,
                    "DevOps Team",
                    date(2025, 5, 15),
                    Priority::High,
                ),
                checkpoint(
                    "cp-5-3",
                    "Post-Launch Monitoring",
                    "Monitor application performance and address issues",
                    false,
                    "Alex Johnson",
                    date(2025, 5, 20),
                    Priority::Medium,
                ),
            ],
        },
    ]
}

pub fn sample_history() -> ProgressHistory {
    let points = [
        (date(2025, 1, 10), 0.0),
        (date(2025, 1, 15), 5.0),
        (date(2025, 1, 22), 10.0),
        (date(2025, 1, 30), 12.0),
        (date(2025, 2, 10), 15.0),
        (date(2025, 2, 20), 18.0),
        (date(2025, 3, 1), 22.0),
        (date(2025, 3, 15), 28.0),
        (date(2025, 4, 1), 35.0),
    ];
    ProgressHistory::new(
        points
            .iter()
            .map(|&(date, progress)| ProgressSample { date, progress })
            .collect(),
    )
}
