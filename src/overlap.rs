use crate::member::{MemberId, Roster, TeamMember};
use crate::time::{Minutes, Weekday};
use itertools::Itertools;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Ranked recommendations are cut off after this many slots.
pub const MAX_RECOMMENDATIONS: usize = 3;

const ATTENDANCE_WEIGHT: u32 = 10;
const IDEAL_HOURS_BONUS: u32 = 5;

// 09:00 through 17:00 local. Closed on both ends, unlike the half-open
// availability windows; the asymmetry is inherited behavior and kept.
const IDEAL_START: Minutes = 9 * 60;
const IDEAL_END: Minutes = 17 * 60;

/// One cell of the weekly grid: the selected members locally available
/// at this UTC hour.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourSlot {
    pub hour: u8,
    pub attendees: Vec<MemberId>,
}

/// All 24 UTC-hour cells of one weekday.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayOverlap {
    pub day: Weekday,
    pub slots: Vec<HourSlot>,
}

impl DayOverlap {
    /// Contiguous half-open UTC-hour spans of this day in which at least
    /// `required` of the selected attendees are available.
    pub fn full_spans(&self, required: usize) -> Vec<HourSpan> {
        if required == 0 {
            return Vec::new();
        }
        self.slots
            .iter()
            .filter(|slot| slot.attendees.len() >= required)
            .map(|slot| slot.hour)
            .merge_spans()
    }
}

/// A half-open `[start, end)` run of UTC hours.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourSpan {
    pub start: u8,
    pub end: u8,
}

pub trait SpanMerge {
    fn merge_spans(self) -> Vec<HourSpan>;
}

impl<T> SpanMerge for T
where
    T: Iterator<Item = u8>,
{
    /// Folds ascending hours into contiguous spans.
    ///
    /// # Examples
    /// ```
    /// use handoff_libs::overlap::{HourSpan, SpanMerge};
    ///
    /// let spans = vec![7u8, 8, 9, 14, 22, 23].into_iter().merge_spans();
    ///
    /// assert_eq!(
    ///     spans,
    ///     vec![
    ///         HourSpan { start: 7, end: 10 },
    ///         HourSpan { start: 14, end: 15 },
    ///         HourSpan { start: 22, end: 24 },
    ///     ]
    /// );
    /// ```
    fn merge_spans(self) -> Vec<HourSpan> {
        let (open, mut spans) = self.fold(
            (None, Vec::new()),
            |(open, mut spans): (Option<HourSpan>, Vec<HourSpan>), hour| match open {
                Some(span) if span.end == hour => (
                    Some(HourSpan {
                        start: span.start,
                        end: hour + 1,
                    }),
                    spans,
                ),
                Some(span) => {
                    spans.push(span);
                    (
                        Some(HourSpan {
                            start: hour,
                            end: hour + 1,
                        }),
                        spans,
                    )
                }
                None => (
                    Some(HourSpan {
                        start: hour,
                        end: hour + 1,
                    }),
                    spans,
                ),
            },
        );

        if let Some(span) = open {
            spans.push(span);
        }

        spans
    }
}

/// The derived weekly availability grid. Recomputed in full on every
/// selection change, never updated incrementally.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapGrid {
    pub days: Vec<DayOverlap>,
}

impl OverlapGrid {
    /// Computes which selected members are available per (weekday, UTC
    /// hour). An empty selection yields an empty grid; that is the
    /// defined result, not an error.
    pub fn compute(roster: &Roster, selected: &BTreeSet<MemberId>) -> OverlapGrid {
        if selected.is_empty() {
            return OverlapGrid::default();
        }

        let members = selected_members(roster, selected);
        let days = Weekday::ALL
            .iter()
            .map(|&day| DayOverlap {
                day,
                slots: (0..24)
                    .map(|hour| HourSlot {
                        hour,
                        attendees: members
                            .iter()
                            .filter(|member| member.available_at(day, hour))
                            .map(|member| member.id.clone())
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        trace!(
            "computed weekly grid for {} of {} selected ids",
            members.len(),
            selected.len()
        );

        OverlapGrid { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// A candidate meeting slot in which every selected attendee is
/// available, with its score.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedSlot {
    pub day: Weekday,
    pub hour: u8,
    pub score: u32,
}

/// Ranks the grid's full-overlap cells and keeps the best three.
///
/// Scoring: attendance weight per available member, plus a flat bonus
/// when the slot lands inside every attendee's local 9:00-17:00. Partial
/// overlap never qualifies. Ties keep day-then-hour source order, so
/// identical inputs always rank identically. An empty result means no
/// perfect overlap exists; callers must not treat it as a failure.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use handoff_libs::member::{Roster, TeamMember};
/// use handoff_libs::overlap::{recommend, OverlapGrid};
/// use handoff_libs::time::{AvailabilityWindow, UtcOffset, Weekday};
///
/// let roster = Roster::new(vec![TeamMember::new(
///     "4",
///     "Emma Johnson",
///     "Product Manager",
///     "Europe/London (UTC+0)",
///     UtcOffset::UTC,
///     vec![AvailabilityWindow::new(Weekday::Monday, 9, 18)],
/// )]);
/// let selected: BTreeSet<String> = vec!["4".to_string()].into_iter().collect();
///
/// let grid = OverlapGrid::compute(&roster, &selected);
/// let slots = recommend(&grid, &roster, &selected);
///
/// // 9, 10, and 11 o'clock all carry the in-hours bonus; earlier wins ties
/// assert_eq!(slots.len(), 3);
/// assert!(slots.iter().all(|slot| slot.score == 15 && slot.day == Weekday::Monday));
/// assert_eq!(slots[0].hour, 9);
/// ```
pub fn recommend(
    grid: &OverlapGrid,
    roster: &Roster,
    selected: &BTreeSet<MemberId>,
) -> Vec<RecommendedSlot> {
    if selected.is_empty() {
        return Vec::new();
    }

    let members = selected_members(roster, selected);
    let members = &members;
    let required = selected.len();

    let ranked: Vec<RecommendedSlot> = grid
        .days
        .iter()
        .flat_map(|day| {
            day.slots
                .iter()
                .filter(move |slot| slot.attendees.len() == required)
                .map(move |slot| {
                    let mut score = slot.attendees.len() as u32 * ATTENDANCE_WEIGHT;

                    let in_ideal_hours = members.iter().all(|member| {
                        let local = member.local_minutes(slot.hour);
                        local >= IDEAL_START && local <= IDEAL_END
                    });
                    if in_ideal_hours {
                        score += IDEAL_HOURS_BONUS;
                    }

                    RecommendedSlot {
                        day: day.day,
                        hour: slot.hour,
                        score,
                    }
                })
        })
        .sorted_by_key(|slot| Reverse(slot.score))
        .take(MAX_RECOMMENDATIONS)
        .collect();

    debug!("{} recommended slots for {} attendees", ranked.len(), required);

    ranked
}

/// Grid and recommendations bundled, as the presentation layer consumes
/// them together.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyOverlap {
    pub grid: OverlapGrid,
    pub recommended: Vec<RecommendedSlot>,
}

impl WeeklyOverlap {
    pub fn empty() -> WeeklyOverlap {
        WeeklyOverlap::default()
    }

    /// The full derivation: grid first, then ranking over it. Pure in
    /// (roster, selection); no side effects beyond logging.
    pub fn plan(roster: &Roster, selected: &BTreeSet<MemberId>) -> WeeklyOverlap {
        let grid = OverlapGrid::compute(roster, selected);
        let recommended = recommend(&grid, roster, selected);
        WeeklyOverlap { grid, recommended }
    }
}

fn selected_members<'a>(roster: &'a Roster, selected: &BTreeSet<MemberId>) -> Vec<&'a TeamMember> {
    roster
        .members()
        .iter()
        .filter(|member| selected.contains(&member.id))
        .collect()
}
