// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Access to the cluster control plane.
//!
//! [`ClusterApi`] is the seam between the dashboard and the Kubernetes API:
//! [`KubeCluster`] talks to a real API server, tests plug in an in-memory
//! fake. Handlers never see either directly, they go through the typed
//! verbs on [`Cluster`].

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use kube::api::{
    Api, ApiResource, DeleteParams, DynamicObject, ListParams, Patch, PatchParams, PostParams,
};
use kube::config::{InferConfigError, KubeConfigOptions, KubeconfigError};
use serde_json::Value;
use snafu::futures::TryFutureExt;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::config::Config;
use crate::types::kind::ResourceKind;

/// Upstream API failure. Whatever went wrong, callers only look at the
/// status code and the message.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Kubernetes API error: {}", source))]
    Kube { source: kube::Error },

    #[snafu(display("cluster API returned {} ({}): {}", code, reason, message))]
    Status {
        code: u16,
        reason: String,
        message: String,
    },
}

impl Error {
    /// HTTP-like status code of the failure. Failures that never got an
    /// HTTP response from the API server are reported as 502.
    pub fn code(&self) -> u16 {
        match self {
            Error::Kube {
                source: kube::Error::Api(response),
            } => response.code,
            Error::Kube {
                source: kube::Error::Auth(_),
            } => 401,
            Error::Kube { .. } => 502,
            Error::Status { code, .. } => *code,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Error::Kube {
                source: kube::Error::Api(response),
            } => response.message.clone(),
            Error::Kube { source } => source.to_string(),
            Error::Status { message, .. } => message.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == 404
    }
}

#[derive(Debug, Snafu)]
pub enum ConnectError {
    #[snafu(display("failed to load kubeconfig context '{}': {}", context, source))]
    Kubeconfig {
        context: String,
        source: KubeconfigError,
    },

    #[snafu(display("failed to infer cluster configuration: {}", source))]
    InferConfig { source: InferConfigError },

    #[snafu(display("failed to create Kubernetes client: {}", source))]
    Client { source: kube::Error },
}

/// Verb level access to one API resource. `namespace` is `None` for
/// cluster-wide calls and for cluster-scoped kinds.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn list(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
    ) -> Result<Vec<DynamicObject>, Error>;

    async fn get(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<DynamicObject, Error>;

    async fn create(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error>;

    async fn replace(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error>;

    /// JSON merge patch.
    async fn patch(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
        patch: &Value,
    ) -> Result<DynamicObject, Error>;

    /// Deletes with foreground propagation, so dependents go first.
    async fn delete(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<(), Error>;
}

/// [`ClusterApi`] backed by a Kubernetes API server.
#[derive(Clone)]
pub struct KubeCluster {
    client: kube::Client,
}

impl KubeCluster {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient credentials: the named kubeconfig
    /// context if one is configured, otherwise in-cluster config or the
    /// current kubeconfig context.
    pub async fn connect(config: &Config) -> Result<Self, ConnectError> {
        let mut kube_config = match &config.kube_context {
            Some(context) => {
                let options = KubeConfigOptions {
                    context: Some(context.clone()),
                    ..Default::default()
                };
                kube::Config::from_kubeconfig(&options)
                    .context(KubeconfigSnafu { context })
                    .await?
            }
            None => kube::Config::infer().context(InferConfigSnafu).await?,
        };

        if config.insecure_skip_tls_verify {
            info!("TLS verification of the cluster API is disabled");
            kube_config.accept_invalid_certs = true;
        }

        let client = kube::Client::try_from(kube_config).context(ClientSnafu)?;
        debug!("Kubernetes client initialized");
        Ok(Self::new(client))
    }

    fn api(&self, resource: &ApiResource, namespace: Option<&str>) -> Api<DynamicObject> {
        match namespace {
            Some(ns) => Api::namespaced_with(self.client.clone(), ns, resource),
            None => Api::all_with(self.client.clone(), resource),
        }
    }
}

#[async_trait]
impl ClusterApi for KubeCluster {
    async fn list(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
    ) -> Result<Vec<DynamicObject>, Error> {
        let list = self
            .api(resource, namespace)
            .list(&ListParams::default())
            .context(KubeSnafu)
            .await?;

        debug!(
            "listed {} {} in {}",
            list.items.len(),
            resource.plural,
            namespace.unwrap_or("all namespaces")
        );
        Ok(list.items)
    }

    async fn get(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<DynamicObject, Error> {
        self.api(resource, namespace)
            .get(name)
            .context(KubeSnafu)
            .await
    }

    async fn create(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error> {
        self.api(resource, namespace)
            .create(&PostParams::default(), body)
            .context(KubeSnafu)
            .await
    }

    async fn replace(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error> {
        self.api(resource, namespace)
            .replace(name, &PostParams::default(), body)
            .context(KubeSnafu)
            .await
    }

    async fn patch(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
        patch: &Value,
    ) -> Result<DynamicObject, Error> {
        self.api(resource, namespace)
            .patch(name, &PatchParams::default(), &Patch::Merge(patch))
            .context(KubeSnafu)
            .await
    }

    async fn delete(
        &self,
        resource: &ApiResource,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<(), Error> {
        self.api(resource, namespace)
            .delete(name, &DeleteParams::foreground())
            .context(KubeSnafu)
            .await?;
        Ok(())
    }
}

/// Process-wide handle on the cluster, cheap to clone into every request.
///
/// Verbs are typed by [`ResourceKind`]; the namespace argument is dropped
/// for cluster-scoped kinds.
#[derive(Clone)]
pub struct Cluster {
    api: Arc<dyn ClusterApi>,
}

impl Debug for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cluster").finish_non_exhaustive()
    }
}

impl Cluster {
    pub fn new(api: impl ClusterApi + 'static) -> Self {
        Self::from_shared(Arc::new(api))
    }

    pub fn from_shared(api: Arc<dyn ClusterApi>) -> Self {
        Self { api }
    }

    fn scope<K: ResourceKind>(namespace: Option<&str>) -> Option<&str> {
        namespace.filter(|_| K::NAMESPACED)
    }

    pub async fn list_all<K: ResourceKind>(&self) -> Result<Vec<DynamicObject>, Error> {
        self.api.list(&K::api_resource(), None).await
    }

    pub async fn list_in_namespace<K: ResourceKind>(
        &self,
        namespace: &str,
    ) -> Result<Vec<DynamicObject>, Error> {
        self.api
            .list(&K::api_resource(), Self::scope::<K>(Some(namespace)))
            .await
    }

    pub async fn get<K: ResourceKind>(
        &self,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<DynamicObject, Error> {
        self.api
            .get(&K::api_resource(), Self::scope::<K>(namespace), name)
            .await
    }

    pub async fn create<K: ResourceKind>(
        &self,
        namespace: Option<&str>,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error> {
        self.api
            .create(&K::api_resource(), Self::scope::<K>(namespace), body)
            .await
    }

    pub async fn replace<K: ResourceKind>(
        &self,
        namespace: Option<&str>,
        name: &str,
        body: &DynamicObject,
    ) -> Result<DynamicObject, Error> {
        self.api
            .replace(&K::api_resource(), Self::scope::<K>(namespace), name, body)
            .await
    }

    pub async fn patch<K: ResourceKind>(
        &self,
        namespace: Option<&str>,
        name: &str,
        patch: &Value,
    ) -> Result<DynamicObject, Error> {
        self.api
            .patch(&K::api_resource(), Self::scope::<K>(namespace), name, patch)
            .await
    }

    pub async fn delete<K: ResourceKind>(
        &self,
        namespace: Option<&str>,
        name: &str,
    ) -> Result<(), Error> {
        self.api
            .delete(&K::api_resource(), Self::scope::<K>(namespace), name)
            .await
    }
}
