use std::collections::BTreeMap;

use serde::Serialize;

/// goes as query parameter
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub field_selector: Option<String>,
    pub label_selector: Option<String>,
    pub limit: Option<u32>,
}

impl ListOptions {
    pub fn labels<S: Into<String>>(label_selector: S) -> Self {
        Self {
            label_selector: Some(label_selector.into()),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if let Some(fields) = &self.field_selector {
            query.insert("fieldSelector".to_owned(), fields.clone());
        }
        if let Some(labels) = &self.label_selector {
            query.insert("labelSelector".to_owned(), labels.clone());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_owned(), limit.to_string());
        }
        query
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    pub kind: &'static str,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation_policy: Option<PropagationPolicy>,
}

impl Default for DeleteOptions {
    fn default() -> Self {
        Self {
            kind: "DeleteOptions",
            api_version: "v1",
            grace_period_seconds: None,
            propagation_policy: None,
        }
    }
}

impl DeleteOptions {
    pub fn propagation(policy: PropagationPolicy) -> Self {
        Self {
            propagation_policy: Some(policy),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationPolicy {
    Orphan,
    Background,
    Foreground,
}
