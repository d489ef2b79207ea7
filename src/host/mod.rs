//! host - API/web host resolution
//!
//! Determines which instance an entity's API calls should target. The
//! public host pair is the default; a host-override annotation selects
//! an instance record from the configuration, first match wins.
//!
//! Resolution never fails: an absent or unmatched override, or a
//! malformed record, silently falls back to the defaults. That is
//! deliberate policy, not an error path.

use crate::catalog::{Entity, ANNOTATION_HOST};
use crate::config::InstanceConfig;

/// Default public API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default public web base URL.
pub const DEFAULT_WEB_BASE: &str = "https://github.com";

/// Resolved host pair for an entity.
///
/// `api_base` receives all REST calls; `web_base` is only used to build
/// user-facing deep links. The two differ on self-hosted instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    /// Base URL for REST API calls.
    pub api_base: String,
    /// Base URL for web links.
    pub web_base: String,
}

impl Hosts {
    /// The public host pair.
    pub fn public() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            web_base: DEFAULT_WEB_BASE.to_string(),
        }
    }

    /// Host pair for a configured instance.
    ///
    /// Missing URL fields are derived from the host using the GitHub
    /// Enterprise convention.
    fn for_instance(instance: &InstanceConfig) -> Self {
        Self {
            api_base: instance
                .api_base_url
                .clone()
                .unwrap_or_else(|| format!("https://{}/api/v3", instance.host)),
            web_base: instance
                .web_base_url
                .clone()
                .unwrap_or_else(|| format!("https://{}", instance.host)),
        }
    }
}

impl Default for Hosts {
    fn default() -> Self {
        Self::public()
    }
}

/// Resolve the host pair for an entity.
///
/// Looks up the host-override annotation and searches `instances` for
/// the first record with a matching host. Absent or unmatched input
/// resolves to [`Hosts::public`].
pub fn resolve(entity: &Entity, instances: &[InstanceConfig]) -> Hosts {
    match entity.annotation(ANNOTATION_HOST) {
        Some(host) => instances
            .iter()
            .find(|instance| instance.host == host)
            .map(Hosts::for_instance)
            .unwrap_or_else(Hosts::public),
        None => Hosts::public(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ANNOTATION_PROJECT_SLUG;

    fn instance(host: &str, api: Option<&str>, web: Option<&str>) -> InstanceConfig {
        InstanceConfig {
            host: host.to_string(),
            api_base_url: api.map(String::from),
            web_base_url: web.map(String::from),
        }
    }

    #[test]
    fn no_annotation_resolves_public() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_PROJECT_SLUG, "acme/widgets");
        let instances = vec![instance("ghe.internal", None, None)];

        assert_eq!(resolve(&entity, &instances), Hosts::public());
    }

    #[test]
    fn unmatched_annotation_falls_back_to_public() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_HOST, "unknown.example.com");
        let instances = vec![instance("ghe.internal", None, None)];

        assert_eq!(resolve(&entity, &instances), Hosts::public());
    }

    #[test]
    fn matched_annotation_uses_instance_urls() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_HOST, "ghe.internal");
        let instances = vec![instance(
            "ghe.internal",
            Some("https://ghe.internal/api/custom"),
            Some("https://ghe.internal/web"),
        )];

        let hosts = resolve(&entity, &instances);
        assert_eq!(hosts.api_base, "https://ghe.internal/api/custom");
        assert_eq!(hosts.web_base, "https://ghe.internal/web");
    }

    #[test]
    fn missing_urls_derived_from_host() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_HOST, "ghe.internal");
        let instances = vec![instance("ghe.internal", None, None)];

        let hosts = resolve(&entity, &instances);
        assert_eq!(hosts.api_base, "https://ghe.internal/api/v3");
        assert_eq!(hosts.web_base, "https://ghe.internal");
    }

    #[test]
    fn first_match_wins() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_HOST, "ghe.internal");
        let instances = vec![
            instance("ghe.internal", Some("https://first/api"), None),
            instance("ghe.internal", Some("https://second/api"), None),
        ];

        assert_eq!(resolve(&entity, &instances).api_base, "https://first/api");
    }

    #[test]
    fn empty_config_resolves_public() {
        let entity = Entity::new("svc").with_annotation(ANNOTATION_HOST, "ghe.internal");

        assert_eq!(resolve(&entity, &[]), Hosts::public());
    }
}
