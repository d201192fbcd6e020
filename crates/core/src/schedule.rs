//! Schedule-conflict validation for class meetings.
//!
//! A meeting occupies a room and an instructor for a weekly time slot. Two
//! invariants must hold for all distinct stored meetings A and B:
//!
//! - same room + same day  => time ranges must not overlap
//! - same instructor + same day => time ranges must not overlap
//!
//! Overlap is half-open: `a.start < b.end && b.start < a.end`, so a meeting
//! ending at 10:00 and one starting at 10:00 do not conflict.
//!
//! The decision logic here is pure; the repository layer runs the two
//! overlap queries inside a transaction (holding advisory locks keyed by
//! room/day and instructor/day) and feeds the results to [`evaluate`].

use serde::{Deserialize, Serialize};

use crate::types::{DbId, TimeOfDay};

/// Day of the week a meeting recurs on. Stored as 1 (Monday) .. 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Parse a stored 1-based day number. Returns `None` outside 1..=7.
    pub fn from_i16(day: i16) -> Option<Self> {
        match day {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// The 1-based day number used in storage and on the wire.
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A half-open time-of-day range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Two ranges overlap iff `self.start < other.end && other.start < self.end`.
    ///
    /// Boundary touching (one ends exactly when the other starts) is not
    /// an overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// A fully-populated meeting candidate, ready for conflict validation.
#[derive(Debug, Clone, Copy)]
pub struct MeetingSlot {
    pub room_id: DbId,
    pub professor_id: DbId,
    pub day: Weekday,
    pub time: TimeRange,
}

/// A partially-constructed meeting candidate.
///
/// Every field is an explicit `Option`; any absent field means the candidate
/// is still being assembled and conflict validation is skipped (it will run
/// once the candidate is complete, before anything is persisted). This is a
/// deliberate input state, not a bypass of a completed record.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingDraft {
    pub room_id: Option<DbId>,
    pub professor_id: Option<DbId>,
    pub day: Option<Weekday>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl MeetingDraft {
    /// Returns the completed slot if every field is present.
    pub fn complete(&self) -> Option<MeetingSlot> {
        Some(MeetingSlot {
            room_id: self.room_id?,
            professor_id: self.professor_id?,
            day: self.day?,
            time: TimeRange {
                start: self.start?,
                end: self.end?,
            },
        })
    }
}

/// A stored meeting that overlaps the candidate. Carried inside
/// [`ScheduleConflict`] so error messages can name the exact clash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictingMeeting {
    pub meeting_id: DbId,
    pub room_id: DbId,
    pub professor_id: DbId,
    /// 1 (Monday) .. 7 (Sunday).
    pub day: i16,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl ConflictingMeeting {
    fn describe(&self) -> String {
        let day = Weekday::from_i16(self.day).map_or("unknown day", Weekday::name);
        format!(
            "meeting {} on {} {}-{}",
            self.meeting_id,
            day,
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Why a candidate meeting was rejected.
///
/// Messages are operator-facing and surfaced verbatim by the API layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleConflict {
    #[error(
        "The chosen time frame conflicts with an existing room schedule ({existing})",
        existing = .existing.describe()
    )]
    Room { existing: ConflictingMeeting },

    #[error(
        "The chosen time frame conflicts with an existing instructor schedule ({existing})",
        existing = .existing.describe()
    )]
    Instructor { existing: ConflictingMeeting },

    #[error(
        "The chosen time frame conflicts with both an existing room schedule ({room}) \
         and an existing instructor schedule ({instructor})",
        room = .room.describe(),
        instructor = .instructor.describe()
    )]
    Both {
        room: ConflictingMeeting,
        instructor: ConflictingMeeting,
    },
}

/// Decide the outcome of a conflict check.
///
/// `room_conflicts` and `instructor_conflicts` are the stored meetings that
/// overlap the candidate in the same room / under the same instructor on the
/// same day (the candidate's own prior row already excluded for updates).
/// Priority: both non-empty beats room-only beats instructor-only.
pub fn evaluate(
    room_conflicts: &[ConflictingMeeting],
    instructor_conflicts: &[ConflictingMeeting],
) -> Result<(), ScheduleConflict> {
    match (room_conflicts.first(), instructor_conflicts.first()) {
        (Some(room), Some(instructor)) => Err(ScheduleConflict::Both {
            room: room.clone(),
            instructor: instructor.clone(),
        }),
        (Some(room), None) => Err(ScheduleConflict::Room {
            existing: room.clone(),
        }),
        (None, Some(instructor)) => Err(ScheduleConflict::Instructor {
            existing: instructor.clone(),
        }),
        (None, None) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange {
            start: t(start.0, start.1),
            end: t(end.0, end.1),
        }
    }

    fn existing(meeting_id: DbId) -> ConflictingMeeting {
        ConflictingMeeting {
            meeting_id,
            room_id: 1,
            professor_id: 1,
            day: 1,
            start_time: t(9, 0),
            end_time: t(10, 0),
        }
    }

    // -----------------------------------------------------------------------
    // Overlap predicate
    // -----------------------------------------------------------------------

    #[test]
    fn overlapping_ranges() {
        let a = range((9, 0), (10, 0));
        let b = range((9, 30), (10, 30));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = range((9, 0), (10, 0));
        let b = range((9, 30), (10, 30));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));

        let c = range((11, 0), (12, 0));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn boundary_touch_is_not_overlap() {
        // A meeting ending at 10:00 and one starting at 10:00 do not conflict.
        let a = range((9, 0), (10, 0));
        let b = range((10, 0), (11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn containment_is_overlap() {
        let outer = range((8, 0), (12, 0));
        let inner = range((9, 0), (10, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn identical_ranges_overlap() {
        let a = range((9, 0), (10, 0));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = range((9, 0), (10, 0));
        let b = range((13, 0), (14, 0));
        assert!(!a.overlaps(&b));
    }

    // -----------------------------------------------------------------------
    // Decision priority
    // -----------------------------------------------------------------------

    #[test]
    fn no_conflicts_passes() {
        assert!(evaluate(&[], &[]).is_ok());
    }

    #[test]
    fn room_only_conflict() {
        let err = evaluate(&[existing(7)], &[]).unwrap_err();
        match err {
            ScheduleConflict::Room { existing } => assert_eq!(existing.meeting_id, 7),
            other => panic!("expected Room conflict, got {other:?}"),
        }
    }

    #[test]
    fn instructor_only_conflict() {
        let err = evaluate(&[], &[existing(9)]).unwrap_err();
        match err {
            ScheduleConflict::Instructor { existing } => assert_eq!(existing.meeting_id, 9),
            other => panic!("expected Instructor conflict, got {other:?}"),
        }
    }

    #[test]
    fn both_beats_room_and_instructor() {
        let err = evaluate(&[existing(7)], &[existing(9)]).unwrap_err();
        match err {
            ScheduleConflict::Both { room, instructor } => {
                assert_eq!(room.meeting_id, 7);
                assert_eq!(instructor.meeting_id, 9);
            }
            other => panic!("expected Both conflict, got {other:?}"),
        }
    }

    #[test]
    fn conflict_messages_name_the_clash() {
        let err = evaluate(&[existing(7)], &[]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("room schedule"), "got: {msg}");
        assert!(msg.contains("meeting 7"), "got: {msg}");
        assert!(msg.contains("Monday"), "got: {msg}");
        assert!(msg.contains("09:00-10:00"), "got: {msg}");
    }

    // -----------------------------------------------------------------------
    // Draft completeness
    // -----------------------------------------------------------------------

    #[test]
    fn complete_draft_yields_slot() {
        let draft = MeetingDraft {
            room_id: Some(1),
            professor_id: Some(2),
            day: Some(Weekday::Monday),
            start: Some(t(9, 0)),
            end: Some(t(10, 0)),
        };
        let slot = draft.complete().expect("draft is complete");
        assert_eq!(slot.room_id, 1);
        assert_eq!(slot.professor_id, 2);
        assert_eq!(slot.day, Weekday::Monday);
    }

    #[test]
    fn draft_missing_end_time_is_incomplete() {
        let draft = MeetingDraft {
            room_id: Some(1),
            professor_id: Some(2),
            day: Some(Weekday::Monday),
            start: Some(t(9, 0)),
            end: None,
        };
        assert!(draft.complete().is_none());
    }

    #[test]
    fn empty_draft_is_incomplete() {
        assert!(MeetingDraft::default().complete().is_none());
    }

    // -----------------------------------------------------------------------
    // Weekday conversions
    // -----------------------------------------------------------------------

    #[test]
    fn weekday_round_trips() {
        for day in 1..=7i16 {
            let parsed = Weekday::from_i16(day).expect("1..=7 are valid");
            assert_eq!(parsed.as_i16(), day);
        }
    }

    #[test]
    fn weekday_rejects_out_of_range() {
        assert!(Weekday::from_i16(0).is_none());
        assert!(Weekday::from_i16(8).is_none());
        assert!(Weekday::from_i16(-1).is_none());
    }
}
