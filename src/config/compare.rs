//! Compare command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::core::ListInput;

#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub list: ListInput,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl CompareConfig {
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct CompareConfigBuilder {
    list: Option<ListInput>,
    format: Option<OutputFormat>,
    output: Option<Option<PathBuf>>,
}

impl CompareConfigBuilder {
    pub fn with_list(mut self, list: ListInput) -> Self {
        self.list = Some(list);
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

impl crate::common::ConfigBuilder for CompareConfigBuilder {
    type Config = CompareConfig;

    fn build(self) -> Result<Self::Config, crate::error::CycleStepperError> {
        Ok(CompareConfig {
            list: self.list.ok_or_else(|| missing_field("list"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}
