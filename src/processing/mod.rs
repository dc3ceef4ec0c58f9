//! Payroll processing for the Payroll Engine.
//!
//! This module runs the calculator across a month's employees, validates
//! each result, and produces the records a persistence layer would store.
//! It performs no I/O.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//! use payroll_engine::processing::{PayrollProcessor, ProcessingRequest};
//!
//! let processor = PayrollProcessor::from(ConfigLoader::load("./config/standard")?);
//! let run = processor.process(&ProcessingRequest::new(4, 2024), &[])?;
//! println!("{} records, {} failures", run.records.len(), run.failures.len());
//! # Ok::<(), payroll_engine::error::EngineError>(())
//! ```

mod processor;
mod records;
mod request;

pub use processor::{PayrollProcessor, PayrollRun, ProcessingFailure};
pub use records::{
    AuditLogEntry, PAYROLL_PROCESSED_ACTION, PayrollInputRecord, PayrollRecord, RecordStatus,
};
pub use request::ProcessingRequest;
