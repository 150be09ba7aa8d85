use crate::member::{MemberId, Roster, ValidationError};
use core::fmt;

/// Closed set of priority tags shared by meetings, tasks, and checkpoints.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

/// A catalog entry. The overlap engine never reads these directly; a
/// meeting only seeds the selected-attendee set when the user picks it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: u16,
    pub priority: Priority,
    pub required_attendees: Vec<MemberId>,
}

impl Meeting {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        duration_minutes: u16,
        priority: Priority,
        required_attendees: Vec<MemberId>,
    ) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration_minutes,
            priority,
            required_attendees,
        }
    }

    /// Duration in (possibly fractional) hours, for display.
    pub fn duration_hours(&self) -> f32 {
        f32::from(self.duration_minutes) / 60.0
    }
}

/// Checks that every required attendee of every meeting exists in the
/// roster. Run once at load, like `Roster::validate`.
pub fn validate_catalog(roster: &Roster, meetings: &[Meeting]) -> Result<(), ValidationError> {
    for meeting in meetings {
        for member in &meeting.required_attendees {
            if roster.get(member).is_none() {
                return Err(ValidationError::UnknownAttendee {
                    meeting: meeting.id.clone(),
                    member: member.clone(),
                });
            }
        }
    }
    Ok(())
}
