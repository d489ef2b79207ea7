//! insights - Entity-facing composition of the data-access layer
//!
//! Ties the pieces together: locate the repository an entity refers to,
//! resolve the instance to talk to, and expose the per-card fetches
//! over one [`ApiClient`]. Cards consume the results through
//! [`AsyncResource`] snapshots and never perform I/O themselves.

use std::sync::Arc;

use serde_json::Value;

use crate::api::models::{Branch, Contributor, Languages, LicenseInfo, Readme, Release};
use crate::api::{ApiClient, InsightsError, PageRequest};
use crate::auth::TokenProvider;
use crate::catalog::{locate, Entity, NotConfigured, ProjectRef};
use crate::config::InstanceConfig;
use crate::host::{self, Hosts};
use crate::resource::{AsyncResource, DependencyKey};

/// Entry point holding the credential seam and instance configuration.
pub struct Insights {
    token_provider: Arc<dyn TokenProvider>,
    instances: Vec<InstanceConfig>,
}

impl Insights {
    /// Create the entry point.
    pub fn new(token_provider: Arc<dyn TokenProvider>, instances: Vec<InstanceConfig>) -> Self {
        Self {
            token_provider,
            instances,
        }
    }

    /// Bind to the repository an entity refers to.
    ///
    /// Resolves the project identity and host pair up front; no HTTP
    /// happens here. Returns [`NotConfigured`] when the entity has no
    /// project-slug annotation, in which case callers render nothing
    /// and issue no requests.
    pub fn for_entity(&self, entity: &Entity) -> Result<EntityInsights, NotConfigured> {
        let project = locate(entity)?;
        let hosts = host::resolve(entity, &self.instances);
        let client = ApiClient::for_hosts(Arc::clone(&self.token_provider), &hosts);
        Ok(EntityInsights {
            project,
            hosts,
            client,
        })
    }
}

impl std::fmt::Debug for Insights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Insights")
            .field("instances", &self.instances.len())
            .finish_non_exhaustive()
    }
}

/// Data access for one entity's repository.
#[derive(Debug)]
pub struct EntityInsights {
    project: ProjectRef,
    hosts: Hosts,
    client: ApiClient,
}

impl EntityInsights {
    /// The resolved repository identity.
    pub fn project(&self) -> &ProjectRef {
        &self.project
    }

    /// The resolved host pair.
    pub fn hosts(&self) -> &Hosts {
        &self.hosts
    }

    /// Web deep link for a repository page (e.g., "releases").
    pub fn web_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.hosts.web_base, self.project.owner, self.project.repo, path
        )
    }

    /// Fetch a paginated resource as opaque items.
    pub async fn raw(&self, request: &PageRequest) -> Result<Vec<Value>, InsightsError> {
        self.client.fetch_paged(&self.project, request).await
    }

    /// Drive `resource` with a raw paginated fetch.
    ///
    /// The dependency key is the fingerprint of the project identity
    /// and page window; re-invocation with unchanged inputs is a no-op,
    /// and a concurrent call with changed inputs supersedes this one.
    pub async fn load_raw(
        &self,
        resource: &AsyncResource<Vec<Value>>,
        request: &PageRequest,
    ) {
        let key = DependencyKey::for_request(&self.project, request);
        resource.load(key, self.raw(request)).await;
    }

    /// Published releases, newest first (server order).
    pub async fn releases(
        &self,
        per_page: u32,
        max_items: usize,
    ) -> Result<Vec<Release>, InsightsError> {
        let request = PageRequest::new("releases", per_page, max_items);
        self.client.fetch_paged_as(&self.project, &request).await
    }

    /// Contributors ordered by commit count (server order).
    pub async fn contributors(
        &self,
        per_page: u32,
        max_items: usize,
    ) -> Result<Vec<Contributor>, InsightsError> {
        let request = PageRequest::new("contributors", per_page, max_items);
        self.client.fetch_paged_as(&self.project, &request).await
    }

    /// Bytes of code per language.
    pub async fn languages(&self) -> Result<Languages, InsightsError> {
        self.client.get_resource(&self.project, "languages").await
    }

    /// The repository README.
    pub async fn readme(&self) -> Result<Readme, InsightsError> {
        self.client.get_resource(&self.project, "readme").await
    }

    /// Protected branches, for the compliance card.
    pub async fn protected_branches(
        &self,
        max_items: usize,
    ) -> Result<Vec<Branch>, InsightsError> {
        let request = PageRequest::new("branches?protected=true", crate::api::MAX_PAGE_SIZE, max_items);
        self.client.fetch_paged_as(&self.project, &request).await
    }

    /// The repository license, for the compliance card.
    pub async fn license(&self) -> Result<LicenseInfo, InsightsError> {
        self.client.get_resource(&self.project, "license").await
    }
}
