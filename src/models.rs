//! Frontend Models
//!
//! Data structures matching the catalog service's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Recipe record as returned by `/products`.
///
/// Everything except `id` is optional on the wire; incomplete records are
/// filtered out by the view-model rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub diet_labels: Option<Vec<String>>,
    #[serde(default)]
    pub url: Option<String>,
}

/// json-server hands out numeric ids for generated records
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
        RawId::Null(()) => String::new(),
    })
}

/// Search parameters; empty strings mean "no filter"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub diet: String,
}

impl SearchFilter {
    pub fn new(query: &str, diet: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            diet: diet.to_string(),
        }
    }
}
