//! Blueprint and bundle catalog input types.

use serde::{Deserialize, Serialize};

/// Input for the `GetBlueprints` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlueprintsInput {
    /// Whether to include inactive blueprints in the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,

    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Input for the `GetBundles` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBundlesInput {
    /// Whether to include inactive bundles in the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_inactive: Option<bool>,

    /// The token returned by a previous request, to advance to the next page
    /// of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}
