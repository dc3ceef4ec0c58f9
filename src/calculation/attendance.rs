//! Attendance aggregation.
//!
//! This module reduces a month's attendance records to present days, leave
//! days and overtime hours.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep};

const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Attendance totals for a payroll month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days counted as present.
    pub present_days: Decimal,
    /// Days counted as leave.
    pub leave_days: Decimal,
    /// Hours worked beyond the standard day, summed over PRESENT records.
    pub overtime_hours: Decimal,
    /// Records that fell inside the month.
    pub records_in_period: usize,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Aggregates attendance records for a calendar month.
///
/// Records dated outside `month`/`year` are dropped without error. Then:
/// - `PRESENT` adds one present day, and any check-in/check-out span above
///   `standard_daily_hours` adds to overtime
/// - `ABSENT` adds one leave day
/// - `HALF_DAY` adds half a day to both present and leave
/// - every other status is ignored
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     AttendanceRecord {
///         date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///         status: AttendanceStatus::Present,
///         check_in: None,
///         check_out: None,
///     },
///     AttendanceRecord {
///         date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///         status: AttendanceStatus::HalfDay,
///         check_in: None,
///         check_out: None,
///     },
/// ];
///
/// let summary = aggregate_attendance(&records, 3, 2024, Decimal::new(8, 0), 1);
/// assert_eq!(summary.present_days, Decimal::new(15, 1));
/// assert_eq!(summary.leave_days, Decimal::new(5, 1));
/// ```
pub fn aggregate_attendance(
    records: &[AttendanceRecord],
    month: u32,
    year: i32,
    standard_daily_hours: Decimal,
    step_number: u32,
) -> AttendanceSummary {
    let mut present_days = Decimal::ZERO;
    let mut leave_days = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut records_in_period = 0;
    let mut ignored = 0;

    for record in records
        .iter()
        .filter(|r| r.date.month() == month && r.date.year() == year)
    {
        records_in_period += 1;
        match record.status {
            AttendanceStatus::Present => {
                present_days += Decimal::ONE;
                if let Some(hours) = record.worked_hours() {
                    if hours > standard_daily_hours {
                        overtime_hours += hours - standard_daily_hours;
                    }
                }
            }
            AttendanceStatus::Absent => leave_days += Decimal::ONE,
            AttendanceStatus::HalfDay => {
                present_days += HALF_DAY;
                leave_days += HALF_DAY;
            }
            AttendanceStatus::Late | AttendanceStatus::Holiday | AttendanceStatus::OnLeave => {
                ignored += 1;
            }
        }
    }

    let excluded = records.len() - records_in_period;

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_aggregation".to_string(),
        rule_name: "Attendance Aggregation".to_string(),
        formula: "PRESENT +1 present; ABSENT +1 leave; HALF_DAY +0.5 each; hours above standard day are overtime".to_string(),
        input: serde_json::json!({
            "records": records.len(),
            "month": month,
            "year": year,
            "standard_daily_hours": standard_daily_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "present_days": present_days.normalize().to_string(),
            "leave_days": leave_days.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "records_in_period": records_in_period,
            "records_excluded": excluded,
            "records_ignored": ignored
        }),
        reasoning: format!(
            "{} of {} records fall in {:04}-{:02}: {} present, {} leave, {} overtime hours ({} with uncounted status)",
            records_in_period,
            records.len(),
            year,
            month,
            present_days.normalize(),
            leave_days.normalize(),
            overtime_hours.normalize(),
            ignored
        ),
    };

    AttendanceSummary {
        present_days,
        leave_days,
        overtime_hours,
        records_in_period,
        audit_step,
    }
}
