//! Reporting configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Log unclassified driver errors at `warn` instead of `debug`.
    ///
    /// Unclassified failures never produce a report line either way; this
    /// only raises their visibility on the diagnostic log.
    #[serde(default)]
    pub verbose_unclassified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quiet() {
        assert!(!ReportConfig::default().verbose_unclassified);
    }
}
