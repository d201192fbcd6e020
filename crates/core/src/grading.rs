//! Grade rating / remark agreement rules.
//!
//! A student-record row is either ungraded (rating and remark both absent)
//! or graded, in which case the rating must sit in 0..=100 and the remark
//! must agree with the rating band:
//!
//! - `PSD` (passed):     75 <= rating <= 100
//! - `FLD` (failed):      0 <  rating <  75
//! - `DRP` (dropped):     rating == 0
//! - `INC` (incomplete):  rating == 0
//!
//! The same rules are mirrored as CHECK constraints on `student_records`
//! so that a write slipping past this validation still cannot store an
//! inconsistent grade.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Final remark for a graded student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remark {
    /// Passed.
    #[serde(rename = "PSD")]
    Passed,
    /// Failed.
    #[serde(rename = "FLD")]
    Failed,
    /// Dropped.
    #[serde(rename = "DRP")]
    Dropped,
    /// Incomplete.
    #[serde(rename = "INC")]
    Incomplete,
}

impl Remark {
    /// Parse the three-letter storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PSD" => Some(Self::Passed),
            "FLD" => Some(Self::Failed),
            "DRP" => Some(Self::Dropped),
            "INC" => Some(Self::Incomplete),
            _ => None,
        }
    }

    /// The three-letter code stored in the database.
    pub fn code(self) -> &'static str {
        match self {
            Self::Passed => "PSD",
            Self::Failed => "FLD",
            Self::Dropped => "DRP",
            Self::Incomplete => "INC",
        }
    }
}

/// Validate that a rating and remark agree.
///
/// Both absent is valid (not yet graded). One absent without the other, a
/// rating outside 0..=100, or a remark that does not match the rating band
/// all fail with [`CoreError::Validation`].
pub fn validate_grade(rating: Option<f64>, remark: Option<Remark>) -> Result<(), CoreError> {
    let (rating, remark) = match (rating, remark) {
        (None, None) => return Ok(()),
        (Some(r), Some(m)) => (r, m),
        (Some(_), None) => {
            return Err(CoreError::Validation(
                "A rating requires a matching remark".into(),
            ))
        }
        (None, Some(_)) => {
            return Err(CoreError::Validation(
                "A remark requires a matching rating".into(),
            ))
        }
    };

    if !(0.0..=100.0).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 0 and 100, got {rating}"
        )));
    }

    let matches = match remark {
        Remark::Passed => (75.0..=100.0).contains(&rating),
        Remark::Failed => rating > 0.0 && rating < 75.0,
        Remark::Dropped | Remark::Incomplete => rating == 0.0,
    };

    if matches {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating {rating} does not match remark {}",
            remark.code()
        )))
    }
}
