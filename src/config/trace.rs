//! Trace command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::core::{Algorithm, ListInput};

#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub list: ListInput,
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    list: Option<ListInput>,
    algorithm: Option<Algorithm>,
    format: Option<OutputFormat>,
    output: Option<Option<PathBuf>>,
}

impl TraceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list: ListInput) -> Self {
        self.list = Some(list);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for TraceConfigBuilder {
    type Config = TraceConfig;

    fn build(self) -> Result<Self::Config, crate::error::CycleStepperError> {
        Ok(TraceConfig {
            list: self.list.ok_or_else(|| missing_field("list"))?,
            algorithm: self.algorithm.ok_or_else(|| missing_field("algorithm"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::CycleStepperError;

    #[test]
    fn test_missing_algorithm_is_reported() {
        let err = TraceConfig::builder()
            .with_list(ListInput::new(vec![1], -1).unwrap())
            .with_format(OutputFormat::Human)
            .with_output(None)
            .build()
            .unwrap_err();

        match err {
            CycleStepperError::ConfigurationError { message } => {
                assert_eq!(message, "Missing required field: algorithm");
            }
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}
