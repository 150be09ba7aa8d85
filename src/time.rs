use core::fmt;

/// Local time of day in minutes since midnight, always in `[0, 1440)`.
///
/// Half-hour time zones shift local time by 30 minutes, so a whole-hour
/// resolution cannot represent them. Comparisons against availability
/// windows always use this unrounded value; only display flooring loses
/// the fraction.
pub type Minutes = u16;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// The five weekdays tracked by the planner, Monday through Friday.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed offset from Coordinated Universal Time, stored in minutes so
/// that half-hour zones such as UTC+5:30 stay exact.
///
/// # Examples
/// ```
/// use handoff_libs::time::UtcOffset;
///
/// let kolkata = UtcOffset::from_hours(5.5);
///
/// assert_eq!(kolkata.minutes(), 330);
/// assert_eq!(kolkata.hours(), 5.5);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct UtcOffset(i16);

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset(0);

    /// Construct an offset from (possibly fractional) hours east of UTC.
    pub fn from_hours(hours: f32) -> UtcOffset {
        UtcOffset((hours * 60.0).round() as i16)
    }

    pub fn from_minutes(minutes: i16) -> UtcOffset {
        UtcOffset(minutes)
    }

    pub fn minutes(self) -> i16 {
        self.0
    }

    pub fn hours(self) -> f32 {
        f32::from(self.0) / 60.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UtcOffset {
    /// Offsets travel as fractional hours, e.g. `5.5` for UTC+5:30.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f32(self.hours())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UtcOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(UtcOffset::from_hours)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for UtcOffset {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(UtcOffset::from_minutes(u.int_in_range(-720..=840)?))
    }
}

/// Converts a UTC hour to a member's local time of day.
///
/// `rem_euclid` keeps the result in `[0, 1440)` for negative offsets,
/// where a plain `%` would hand back a negative remainder.
///
/// # Examples
/// ```
/// use handoff_libs::time::{local_minutes, UtcOffset};
///
/// // 00:00 UTC is 19:00 the previous evening in New York
/// assert_eq!(local_minutes(0, UtcOffset::from_hours(-5.0)), 19 * 60);
///
/// // 04:00 UTC is 09:30 in Kolkata
/// assert_eq!(local_minutes(4, UtcOffset::from_hours(5.5)), 9 * 60 + 30);
/// ```
pub fn local_minutes(utc_hour: u8, offset: UtcOffset) -> Minutes {
    (i32::from(utc_hour) * 60 + i32::from(offset.minutes())).rem_euclid(MINUTES_PER_DAY) as Minutes
}

/// A half-open local-time interval `[start, end)` during which a member
/// is reachable on one weekday. Hour bounds; the end hour itself is not
/// available.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityWindow {
    pub day: Weekday,
    pub start: u8,
    pub end: u8,
}

impl AvailabilityWindow {
    pub fn new(day: Weekday, start: u8, end: u8) -> AvailabilityWindow {
        AvailabilityWindow { day, start, end }
    }

    /// Whether a local time of day falls inside the window.
    ///
    /// # Examples
    /// ```
    /// use handoff_libs::time::{AvailabilityWindow, Weekday};
    ///
    /// let monday = AvailabilityWindow::new(Weekday::Monday, 9, 18);
    ///
    /// assert!(monday.contains(9 * 60));
    /// assert!(monday.contains(9 * 60 + 30));
    /// assert!(!monday.contains(18 * 60));
    /// ```
    pub fn contains(&self, local: Minutes) -> bool {
        local >= Minutes::from(self.start) * 60 && local < Minutes::from(self.end) * 60
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for AvailabilityWindow {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let day = u.arbitrary::<Weekday>()?;
        let start: u8 = u.int_in_range(0..=23)?;
        let end: u8 = u.int_in_range(start + 1..=24)?;
        Ok(AvailabilityWindow { day, start, end })
    }
}

/// 12-hour-clock label for a local time of day. Floors to the hour; this
/// is display only and must never feed back into window comparisons.
///
/// # Examples
/// ```
/// use handoff_libs::time::format_hour_12;
///
/// assert_eq!(format_hour_12(0), "12 AM");
/// assert_eq!(format_hour_12(9 * 60 + 30), "9 AM");
/// assert_eq!(format_hour_12(17 * 60), "5 PM");
/// ```
pub fn format_hour_12(local: Minutes) -> String {
    let hour = local / 60;
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", hour_12, meridiem)
}

pub fn format_utc_hour(utc_hour: u8) -> String {
    format!("{}:00 UTC", utc_hour)
}
