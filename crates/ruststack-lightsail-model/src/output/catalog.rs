//! Blueprint and bundle catalog output types.

use serde::{Deserialize, Serialize};

use crate::types::{Blueprint, Bundle};

/// Output for the `GetBlueprints` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlueprintsOutput {
    /// The available blueprints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprints: Option<Vec<Blueprint>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Output for the `GetBundles` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBundlesOutput {
    /// The available bundles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundles: Option<Vec<Bundle>>,

    /// The token for the next page of results, present when more results
    /// exist than fit in a single response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlueprintType, InstancePlatform};

    #[test]
    fn test_should_deserialize_blueprint_catalog_page() {
        let json = r#"{
            "blueprints": [
                {
                    "blueprintId": "os_amlinux_2016_03",
                    "name": "Amazon Linux",
                    "group": "amazon-linux",
                    "type": "os",
                    "isActive": true,
                    "minPower": 0,
                    "version": "2016.03.0",
                    "platform": "LINUX_UNIX"
                },
                {
                    "blueprintId": "app_wordpress_4_4",
                    "name": "WordPress",
                    "group": "wordpress",
                    "type": "app",
                    "isActive": true,
                    "minPower": 0,
                    "platform": "LINUX_UNIX"
                }
            ],
            "nextPageToken": "page-2"
        }"#;
        let output: GetBlueprintsOutput =
            serde_json::from_str(json).expect("deserialize GetBlueprintsOutput");
        let blueprints = output.blueprints.as_deref().expect("blueprints");
        assert_eq!(blueprints.len(), 2);
        assert_eq!(blueprints[0].blueprint_type, Some(BlueprintType::Os));
        assert_eq!(blueprints[1].name.as_deref(), Some("WordPress"));
        assert_eq!(output.next_page_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_should_deserialize_bundle_catalog_page() {
        let json = r#"{
            "bundles": [{
                "price": 5.0,
                "cpuCount": 1,
                "diskSizeInGb": 20,
                "bundleId": "nano_1_0",
                "instanceType": "t2.nano",
                "isActive": true,
                "name": "Nano",
                "power": 300,
                "ramSizeInGb": 0.5,
                "transferPerMonthInGb": 1000,
                "supportedPlatforms": ["LINUX_UNIX"]
            }]
        }"#;
        let output: GetBundlesOutput =
            serde_json::from_str(json).expect("deserialize GetBundlesOutput");
        let bundles = output.bundles.as_deref().expect("bundles");
        assert_eq!(bundles[0].ram_size_in_gb, Some(0.5));
        assert_eq!(
            bundles[0].supported_platforms,
            Some(vec![InstancePlatform::LinuxUnix])
        );
        assert_eq!(output.next_page_token, None);
    }
}
