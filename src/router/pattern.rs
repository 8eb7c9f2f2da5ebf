use crate::error::RouterError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// A compiled path template.
///
/// Templates are regular-expression sources. Compilation anchors the
/// template to the full subject (`^...$`) and matches case-insensitively,
/// so `/pets/(?P<id>\d+)` accepts `/pets/42` but never `/x/pets/42/y`.
/// Named capture groups become binding candidates; unnamed groups still
/// participate in matching but contribute no captures.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    regex: Regex,
}

impl PathPattern {
    /// Compile a template, failing fast on malformed regex source.
    pub fn compile(template: &str) -> Result<Self, RouterError> {
        let anchored = format!("^{template}$");
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .map_err(|source| RouterError::InvalidPattern {
                pattern: template.to_string(),
                source,
            })?;
        Ok(Self {
            template: template.to_string(),
            regex,
        })
    }

    /// The template source this pattern was compiled from, without anchors.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Test a concrete path, returning named captures on a match.
    ///
    /// Returns `None` on non-match. On match, the map holds every named
    /// group that participated — an empty-string capture is present, an
    /// optional group that was not taken is absent. Matching is pure: the
    /// same pattern and path always yield the same result.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(path)?;
        let mut values = HashMap::new();
        for name in self.regex.capture_names().flatten() {
            if let Some(m) = captures.name(name) {
                values.insert(name.to_string(), m.as_str().to_string());
            }
        }
        Some(values)
    }
}
