/// Core data structures for deprecation findings
///
/// This module defines the records produced by the rule engine and the
/// display mode consumed by the report printers.
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// One deprecation/removal notice for a specific cluster resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Finding {
    pub name: String,         // "my-ingress"
    pub namespace: String,    // "default"
    pub kind: String,         // "Ingress"
    pub api_version: String,  // "extensions/v1beta1"
    pub rule_set: String,     // "Deprecated APIs removed in 1.22"
    pub replace_with: String, // "networking.k8s.io/v1"
    pub since: String,        // "1.14.0"
    #[serde(serialize_with = "serialize_sorted")]
    pub labels: HashMap<String, String>,
}

/// Serialize a label map with its keys in order so exports are stable
fn serialize_sorted<S: Serializer>(labels: &HashMap<String, String>, serializer: S) -> Result<S::Ok, S::Error> {
    let sorted: BTreeMap<&String, &String> = labels.iter().collect();
    sorted.serialize(serializer)
}

impl Finding {
    /// Flatten labels into `key=value` pairs joined by commas, keys sorted
    pub fn labels_string(&self) -> String {
        let mut keys: Vec<&String> = self.labels.keys().collect();
        keys.sort();
        keys.iter()
            .map(|k| format!("{}={}", k, self.labels[*k]))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Whether the LABELS column is shown: None = unset, Some(bool) = explicit
pub type LabelMode = Option<bool>;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "data_structures_test.rs"]
mod data_structures_test;
