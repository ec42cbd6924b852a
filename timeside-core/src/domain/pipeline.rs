//! Pipeline domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reference::{resource_path, strip_host};

/// Presets applied by the import pipeline, in order
///
/// The spectrogram preset is left out: its analysis is broken server side
/// (Parisson/TimeSide#200).
pub const DEFAULT_PRESETS: [&str; 3] = [
    // aubio pitch
    "/timeside/api/presets/38ec5bf4-9a2f-4733-a7a2-ec41d25724f6/",
    // mean DC pitch
    "/timeside/api/presets/bdd4456e-7239-4fb2-b1c3-58831f045aa1/",
    // flac + aubio
    "/timeside/api/presets/44778ece-fe2d-47bb-b590-4c3ce79e1dae/",
];

/// Named, ordered set of analysis presets (a TimeSide "experience")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(rename = "uuid")]
    pub id: Uuid,
    pub title: String,
    /// Preset hyperlinks as returned by the server (usually absolute URLs)
    #[serde(default)]
    pub presets: Vec<String>,
}

impl Pipeline {
    /// Hyperlink used to reference this pipeline from a job
    pub fn reference(&self) -> String {
        resource_path("experiences", self.id)
    }

    /// Preset hyperlinks with scheme and host removed
    pub fn preset_paths(&self) -> Vec<String> {
        self.presets.iter().map(|p| strip_host(p)).collect()
    }

    /// Order-sensitive comparison of the current presets against `desired`
    pub fn matches_presets<S: AsRef<str>>(&self, desired: &[S]) -> bool {
        let current = self.preset_paths();
        current.len() == desired.len()
            && current
                .iter()
                .zip(desired)
                .all(|(have, want)| have == &strip_host(want.as_ref()))
    }
}

/// The default preset set as owned strings
pub fn default_presets() -> Vec<String> {
    DEFAULT_PRESETS.iter().map(|p| p.to_string()).collect()
}
