use serde::Deserialize;

/// Query string accepted by the call analysis endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct CallAnalysisQuery {
    pub analysis_type: Option<String>,
}

impl CallAnalysisQuery {
    /// Requested analysis, `default` when omitted.
    #[must_use]
    pub fn analysis_type(&self) -> &str {
        self.analysis_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or("default")
    }
}
