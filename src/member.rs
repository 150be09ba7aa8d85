use crate::time::{format_hour_12, local_minutes, AvailabilityWindow, Minutes, UtcOffset, Weekday};
use itertools::Itertools;
use thiserror::Error;

pub type MemberId = String;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate member id {id}")]
    DuplicateMember { id: MemberId },
    #[error("Empty availability window for member {member} on {day}")]
    EmptyWindow { member: MemberId, day: Weekday },
    #[error("More than one availability window for member {member} on {day}")]
    DuplicateWindow { member: MemberId, day: Weekday },
    #[error("Meeting {meeting} requires unknown attendee {member}")]
    UnknownAttendee { meeting: String, member: MemberId },
    #[error("Unknown meeting id {id}")]
    UnknownMeeting { id: String },
    #[error("Unknown member id {id}")]
    UnknownMember { id: MemberId },
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    #[cfg_attr(feature = "serde", serde(rename = "timezone"))]
    pub time_zone: String,
    pub utc_offset: UtcOffset,
    pub availability: Vec<AvailabilityWindow>,
}

impl TeamMember {
    pub fn new(
        id: &str,
        name: &str,
        role: &str,
        time_zone: &str,
        utc_offset: UtcOffset,
        availability: Vec<AvailabilityWindow>,
    ) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            time_zone: time_zone.to_string(),
            utc_offset,
            availability,
        }
    }

    /// The availability window for one weekday, if the member works that day.
    pub fn window_on(&self, day: Weekday) -> Option<&AvailabilityWindow> {
        self.availability.iter().find(|window| window.day == day)
    }

    /// This member's local time of day at the given UTC hour.
    pub fn local_minutes(&self, utc_hour: u8) -> Minutes {
        local_minutes(utc_hour, self.utc_offset)
    }

    /// Whether the member is reachable at a UTC hour on a weekday.
    /// A member with no window for the weekday is unavailable all day.
    ///
    /// # Examples
    /// ```
    /// use handoff_libs::member::TeamMember;
    /// use handoff_libs::time::{AvailabilityWindow, UtcOffset, Weekday};
    ///
    /// let member = TeamMember::new(
    ///     "1",
    ///     "Sarah Chen",
    ///     "Senior Developer",
    ///     "Asia/Singapore (UTC+8)",
    ///     UtcOffset::from_hours(8.0),
    ///     vec![AvailabilityWindow::new(Weekday::Monday, 9, 18)],
    /// );
    ///
    /// // 09:00 UTC is 17:00 in Singapore, inside [9, 18)
    /// assert!(member.available_at(Weekday::Monday, 9));
    /// // 10:00 UTC is 18:00, the excluded end of the window
    /// assert!(!member.available_at(Weekday::Monday, 10));
    /// // no window on Tuesday at all
    /// assert!(!member.available_at(Weekday::Tuesday, 9));
    /// ```
    pub fn available_at(&self, day: Weekday, utc_hour: u8) -> bool {
        self.window_on(day)
            .map_or(false, |window| window.contains(self.local_minutes(utc_hour)))
    }

    /// 12-hour-clock label of this member's local time at a UTC hour.
    pub fn local_time_label(&self, utc_hour: u8) -> String {
        format_hour_12(self.local_minutes(utc_hour))
    }
}

/// The fixed team roster. Members are load-time constants; nothing in the
/// library mutates a member after construction.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    members: Vec<TeamMember>,
}

impl Roster {
    pub fn new(members: Vec<TeamMember>) -> Roster {
        Roster { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Load-time data-quality checks. The overlap engine itself assumes a
    /// well-formed roster; callers validate once after construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(id) = self
            .members
            .iter()
            .map(|member| member.id.as_str())
            .duplicates()
            .next()
        {
            return Err(ValidationError::DuplicateMember { id: id.to_string() });
        }

        for member in &self.members {
            if let Some(window) = member.availability.iter().find(|w| w.start >= w.end) {
                return Err(ValidationError::EmptyWindow {
                    member: member.id.clone(),
                    day: window.day,
                });
            }

            if let Some(day) = member
                .availability
                .iter()
                .map(|window| window.day)
                .duplicates()
                .next()
            {
                return Err(ValidationError::DuplicateWindow {
                    member: member.id.clone(),
                    day,
                });
            }
        }

        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Roster {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len: usize = u.int_in_range(1..=8)?;
        let mut members = Vec::with_capacity(len);
        for n in 0..len {
            let utc_offset = u.arbitrary::<UtcOffset>()?;
            let mut availability = Vec::new();
            for &day in Weekday::ALL.iter() {
                if u.arbitrary::<bool>()? {
                    let start: u8 = u.int_in_range(0..=23)?;
                    let end: u8 = u.int_in_range(start + 1..=24)?;
                    availability.push(AvailabilityWindow::new(day, start, end));
                }
            }
            members.push(TeamMember {
                id: u.arbitrary::<uuid::Uuid>()?.to_string(),
                name: format!("Member {}", n + 1),
                role: "Engineer".to_string(),
                time_zone: format!("UTC{:+}", utc_offset.hours()),
                utc_offset,
                availability,
            });
        }
        Ok(Roster::new(members))
    }
}
