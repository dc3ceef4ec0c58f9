//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct and [`AttendanceStatus`]
//! enum for the daily attendance rows fed into a payroll calculation.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recorded status of an employee for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// Worked a full day.
    Present,
    /// Did not work; counts as a leave day.
    Absent,
    /// Worked half a day; counts half present and half leave.
    HalfDay,
    /// Arrived late.
    Late,
    /// Public or company holiday.
    Holiday,
    /// On approved leave.
    OnLeave,
}

/// A single day's attendance for an employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     status: AttendanceStatus::Present,
///     check_in: Some(NaiveDateTime::parse_from_str("2024-03-04 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
///     check_out: Some(NaiveDateTime::parse_from_str("2024-03-04 19:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
/// };
/// assert_eq!(record.worked_hours(), Some(Decimal::new(105, 1))); // 10.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The recorded status.
    pub status: AttendanceStatus,
    /// When the employee checked in, if captured.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// When the employee checked out, if captured.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    /// Returns the hours between check-in and check-out.
    ///
    /// `None` unless both timestamps are present. A check-out before the
    /// check-in gives a negative value.
    pub fn worked_hours(&self) -> Option<Decimal> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        let seconds = (check_out - check_in).num_seconds();
        Some(Decimal::new(seconds, 0) / Decimal::new(3600, 0))
    }
}
