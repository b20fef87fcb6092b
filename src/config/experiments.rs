use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::EXPERIMENT_NORMALISED_UPLOAD_PATHS;

/// Experiments this build knows about
pub const KNOWN_EXPERIMENTS: &[&str] = &[EXPERIMENT_NORMALISED_UPLOAD_PATHS];

/// Read-only view of feature flags, queried at collection time
pub trait FeatureFlags: Send + Sync {
    fn is_enabled(&self, name: &str) -> bool;
}

/// An explicit set of enabled experiments.
///
/// Passed into each collection call instead of living in a process-wide
/// registry, so concurrent callers never observe each other's flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Experiments {
    enabled: BTreeSet<String>,
}

impl Experiments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a flag set from names, warning about unknown experiments
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut experiments = Self::new();
        for name in names {
            experiments.enable(name.as_ref());
        }
        experiments
    }

    pub fn enable(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if !KNOWN_EXPERIMENTS.contains(&name) {
            warn!("Unknown experiment {:?} enabled", name);
        }
        self.enabled.insert(name.to_string())
    }

    pub fn disable(&mut self, name: &str) -> bool {
        self.enabled.remove(name.trim())
    }

    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }
}

impl FeatureFlags for Experiments {
    fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }
}
