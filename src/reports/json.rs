//! JSON format report generation

use super::{CompareReport, ReportGenerator, TraceReport};
use crate::error::CycleStepperError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &TraceReport) -> Result<String, CycleStepperError> {
        serde_json::to_string_pretty(report).map_err(CycleStepperError::Json)
    }

    fn generate_comparison(&self, report: &CompareReport) -> Result<String, CycleStepperError> {
        serde_json::to_string_pretty(report).map_err(CycleStepperError::Json)
    }
}
