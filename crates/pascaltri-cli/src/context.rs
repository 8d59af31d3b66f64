use crate::config::{ConfigSource, Settings};
use crate::diagnostics::Diagnostics;

/// Everything a handler needs for one run.
pub struct ExecutionContext {
    settings: Settings,
    diagnostics: Diagnostics,
    config_source: Option<ConfigSource>,
}

impl ExecutionContext {
    pub fn new(settings: Settings, config_source: Option<ConfigSource>) -> Self {
        Self {
            diagnostics: Diagnostics::new(settings.log_level),
            settings,
            config_source,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn config_source(&self) -> Option<&ConfigSource> {
        self.config_source.as_ref()
    }
}
