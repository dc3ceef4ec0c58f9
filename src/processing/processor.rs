//! Batch payroll processing.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::records::{AuditLogEntry, PayrollInputRecord, PayrollRecord, RecordStatus};
use super::request::ProcessingRequest;
use crate::calculation::{
    PayrollEstimate, PayrollSummary, calculate_payroll, estimate_payroll, summarize_payroll,
    validate_payroll,
};
use crate::config::{ConfigLoader, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeePayrollInput;

/// An employee that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingFailure {
    /// The employee.
    pub employee_id: String,
    /// Why processing failed.
    pub error: String,
}

/// Everything produced by one payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier of the run.
    pub run_id: Uuid,
    /// The payroll month.
    pub month: u32,
    /// The payroll year.
    pub year: i32,
    /// When the run was processed.
    pub processed_at: DateTime<Utc>,
    /// One record per processed employee, in input order.
    pub records: Vec<PayrollRecord>,
    /// The input breakdown of each record, in the same order.
    pub inputs: Vec<PayrollInputRecord>,
    /// One audit entry per record, in the same order.
    pub audit_log: Vec<AuditLogEntry>,
    /// Totals over records that were not rejected.
    pub summary: PayrollSummary,
    /// Employees that could not be processed.
    pub failures: Vec<ProcessingFailure>,
}

impl PayrollRun {
    /// Returns the records with the given status.
    pub fn records_with_status(&self, status: RecordStatus) -> impl Iterator<Item = &PayrollRecord> {
        self.records.iter().filter(move |r| r.status == status)
    }

    /// Returns the record for an employee, if one was produced.
    pub fn record(&self, employee_id: &str) -> Option<&PayrollRecord> {
        self.records.iter().find(|r| r.result.employee_id == employee_id)
    }
}

/// Runs payroll for many employees against a shared configuration.
///
/// Cloning a processor is cheap; clones share the configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::EmployeePayrollInput;
/// use payroll_engine::processing::{PayrollProcessor, ProcessingRequest};
/// use rust_decimal::Decimal;
///
/// let processor = PayrollProcessor::new(PayrollConfig::default());
/// let input = EmployeePayrollInput {
///     employee_id: "emp_001".to_string(),
///     month: 4,
///     year: 2024,
///     basic_salary: Decimal::new(30000, 0),
///     hire_date: None,
///     exit_date: None,
///     attendance: vec![],
///     variable_pay: vec![],
///     allowances: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
/// };
///
/// let run = processor.process(&ProcessingRequest::new(4, 2024), &[input]).unwrap();
/// assert_eq!(run.records.len(), 1);
/// assert!(run.failures.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PayrollProcessor {
    config: Arc<PayrollConfig>,
}

struct ProcessedEmployee {
    record: PayrollRecord,
    input: PayrollInputRecord,
    audit: AuditLogEntry,
}

impl PayrollProcessor {
    /// Creates a processor with the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Processes payroll for every input targeted by `request`.
    ///
    /// Inputs not named in `request.employee_ids` (when given) are skipped.
    /// Inputs for another period, or that the calculator rejects, become
    /// failures; the rest of the run continues.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the request's month is
    /// outside 1-12.
    pub fn process(
        &self,
        request: &ProcessingRequest,
        inputs: &[EmployeePayrollInput],
    ) -> EngineResult<PayrollRun> {
        request.validate()?;

        let start_time = Instant::now();
        let run_id = Uuid::new_v4();
        let processed_at = Utc::now();

        let targets: Vec<&EmployeePayrollInput> = inputs
            .iter()
            .filter(|input| request.includes(&input.employee_id))
            .collect();

        info!(
            run_id = %run_id,
            period = %request.period_label(),
            employees = targets.len(),
            skipped = inputs.len() - targets.len(),
            "Processing payroll run"
        );

        let outcomes: Vec<Result<ProcessedEmployee, ProcessingFailure>> = targets
            .par_iter()
            .map(|input| {
                self.process_employee(request, input, run_id, processed_at)
                    .map_err(|err| {
                        warn!(
                            run_id = %run_id,
                            employee_id = %input.employee_id,
                            error = %err,
                            "Payroll processing failed"
                        );
                        ProcessingFailure {
                            employee_id: input.employee_id.clone(),
                            error: err.to_string(),
                        }
                    })
            })
            .collect();

        let mut records = Vec::with_capacity(outcomes.len());
        let mut input_records = Vec::with_capacity(outcomes.len());
        let mut audit_log = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(processed) => {
                    records.push(processed.record);
                    input_records.push(processed.input);
                    audit_log.push(processed.audit);
                }
                Err(failure) => failures.push(failure),
            }
        }

        let accepted: Vec<_> = records
            .iter()
            .filter(|r| r.status != RecordStatus::Rejected)
            .map(|r| r.result.clone())
            .collect();
        let summary = summarize_payroll(&accepted);

        info!(
            run_id = %run_id,
            records = records.len(),
            rejected = records.len() - accepted.len(),
            failures = failures.len(),
            total_net_salary = %summary.total_net_salary,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Payroll run completed"
        );

        Ok(PayrollRun {
            run_id,
            month: request.month,
            year: request.year,
            processed_at,
            records,
            inputs: input_records,
            audit_log,
            summary,
            failures,
        })
    }

    /// Produces an on-demand estimate for one employee.
    pub fn estimate(&self, input: &EmployeePayrollInput) -> EngineResult<PayrollEstimate> {
        estimate_payroll(input, &self.config)
    }

    fn process_employee(
        &self,
        request: &ProcessingRequest,
        input: &EmployeePayrollInput,
        run_id: Uuid,
        processed_at: DateTime<Utc>,
    ) -> EngineResult<ProcessedEmployee> {
        if input.month != request.month || input.year != request.year {
            return Err(EngineError::PeriodMismatch {
                employee_id: input.employee_id.clone(),
                expected: request.period_label(),
                actual: input.period_label(),
            });
        }

        let result = calculate_payroll(input, &request.options, &self.config)?;
        let validation = validate_payroll(&result, &self.config);
        let status = RecordStatus::from_outcome(&validation);

        match status {
            RecordStatus::Rejected => warn!(
                run_id = %run_id,
                employee_id = %input.employee_id,
                errors = ?validation.errors,
                "Payroll rejected by validation"
            ),
            _ => info!(
                run_id = %run_id,
                employee_id = %input.employee_id,
                net_salary = %result.net_salary,
                warnings = validation.warnings.len(),
                "Payroll processed"
            ),
        }

        let record = PayrollRecord {
            id: Uuid::new_v4(),
            run_id,
            result,
            validation,
            status,
            processed_at,
        };
        let input_record = PayrollInputRecord::from_result(record.id, &record.result);
        let audit = AuditLogEntry::processed(&record);

        Ok(ProcessedEmployee {
            record,
            input: input_record,
            audit,
        })
    }
}

impl From<ConfigLoader> for PayrollProcessor {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, AttendanceStatus};
    use chrono::{Datelike, NaiveDate, Weekday};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(id: &str, basic: &str) -> EmployeePayrollInput {
        let attendance = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .iter_days()
            .take_while(|d| d.month() == 4)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .map(|date| AttendanceRecord {
                date,
                status: AttendanceStatus::Present,
                check_in: None,
                check_out: None,
            })
            .collect();

        EmployeePayrollInput {
            employee_id: id.to_string(),
            month: 4,
            year: 2024,
            basic_salary: dec(basic),
            hire_date: None,
            exit_date: None,
            attendance,
            variable_pay: vec![],
            allowances: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }

    fn processor() -> PayrollProcessor {
        PayrollProcessor::new(PayrollConfig::default())
    }

    #[test]
    fn test_processor_is_clone_and_send() {
        fn assert_clone_send_sync<T: Clone + Send + Sync>() {}
        assert_clone_send_sync::<PayrollProcessor>();
    }

    #[test]
    fn test_records_follow_input_order() {
        let inputs: Vec<_> = (1..=20)
            .map(|i| create_test_input(&format!("emp_{:03}", i), "30000"))
            .collect();

        let run = processor()
            .process(&ProcessingRequest::new(4, 2024), &inputs)
            .unwrap();

        let ids: Vec<_> = run.records.iter().map(|r| r.result.employee_id.clone()).collect();
        let expected: Vec<_> = inputs.iter().map(|i| i.employee_id.clone()).collect();
        assert_eq!(ids, expected);
        assert_eq!(run.inputs.len(), 20);
        assert_eq!(run.audit_log.len(), 20);
    }

    #[test]
    fn test_records_are_linked() {
        let run = processor()
            .process(&ProcessingRequest::new(4, 2024), &[create_test_input("emp_001", "50000")])
            .unwrap();

        let record = &run.records[0];
        assert_eq!(record.run_id, run.run_id);
        assert_eq!(run.inputs[0].payroll_id, record.id);
        assert_eq!(run.inputs[0].present_days, dec("22"));
        assert_eq!(run.audit_log[0].payroll_id, record.id);
        assert_eq!(run.audit_log[0].period, "2024-04");
        assert_eq!(run.audit_log[0].net_salary, dec("61492"));
        assert_eq!(run.audit_log[0].action, "PAYROLL_PROCESSED");
    }

    #[test]
    fn test_employee_filter() {
        let inputs = vec![
            create_test_input("emp_001", "30000"),
            create_test_input("emp_002", "40000"),
            create_test_input("emp_003", "50000"),
        ];
        let request = ProcessingRequest::new(4, 2024).for_employees(["emp_003", "emp_001"]);

        let run = processor().process(&request, &inputs).unwrap();
        let ids: Vec<_> = run.records.iter().map(|r| r.result.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_001", "emp_003"]);
        assert_eq!(run.summary.employee_count, 2);
    }

    #[test]
    fn test_period_mismatch_is_a_failure() {
        let mut other = create_test_input("emp_002", "30000");
        other.month = 5;

        let run = processor()
            .process(
                &ProcessingRequest::new(4, 2024),
                &[create_test_input("emp_001", "30000"), other],
            )
            .unwrap();

        assert_eq!(run.records.len(), 1);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.failures[0].employee_id, "emp_002");
        assert!(run.failures[0].error.contains("2024-05"));
    }

    #[test]
    fn test_invalid_input_is_a_failure() {
        let mut bad = create_test_input("emp_bad", "30000");
        bad.basic_salary = dec("-500");

        let run = processor()
            .process(&ProcessingRequest::new(4, 2024), &[bad])
            .unwrap();
        assert!(run.records.is_empty());
        assert!(run.failures[0].error.contains("basic_salary"));
    }

    #[test]
    fn test_oversized_salary_fails_without_losing_the_run() {
        let mut huge = create_test_input("emp_huge", "30000");
        huge.basic_salary = dec("10000000000000000000000000000");

        let run = processor()
            .process(
                &ProcessingRequest::new(4, 2024),
                &[huge, create_test_input("emp_001", "50000")],
            )
            .unwrap();

        assert_eq!(run.records.len(), 1);
        assert_eq!(run.failures[0].employee_id, "emp_huge");
        assert!(run.failures[0].error.contains("must not exceed"));
    }

    #[test]
    fn test_invalid_request_month() {
        let err = processor()
            .process(&ProcessingRequest::new(0, 2024), &[])
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPeriod { month: 0, .. }));
    }

    #[test]
    fn test_rejected_records_are_excluded_from_summary() {
        let good = create_test_input("emp_001", "50000");
        let mut negative = create_test_input("emp_002", "10000");
        negative.other_deductions = dec("100000");

        let run = processor()
            .process(&ProcessingRequest::new(4, 2024), &[good, negative])
            .unwrap();

        assert_eq!(run.records.len(), 2);
        assert_eq!(run.records_with_status(RecordStatus::Rejected).count(), 1);
        let rejected = run.record("emp_002").unwrap();
        assert_eq!(
            rejected.validation.errors,
            vec!["Net salary cannot be negative"]
        );
        assert_eq!(run.summary.employee_count, 1);
        assert_eq!(run.summary.total_net_salary, dec("61492"));
    }

    #[test]
    fn test_estimate_uses_shared_config() {
        let mut config = PayrollConfig::default();
        config.statutory.max_pf_amount = dec("1000");
        let processor = PayrollProcessor::new(config);

        let estimate = processor.estimate(&create_test_input("emp_001", "50000")).unwrap();
        assert_eq!(estimate.pf, dec("1000"));
    }
}
