//! Demo data for the bundled proxy configurations.
//!
//! Three configurations are generated: a front proxy, a double proxy that
//! backhauls traffic to the front proxy, and a service to service (local)
//! proxy. The tables below are passed to the templates as context; they are
//! example inputs, not part of the rendering mechanism.

use crate::context::Context;
use crate::generator::Job;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::Path;

/// Options for one internal cluster, such as `timeout_ms`. Empty for every demo cluster.
pub type ClusterOptions = IndexMap<String, minijinja::Value>;

/// Internal clusters keyed by name.
pub type Clusters = IndexMap<String, ClusterOptions>;

/// An upstream host reached through an external virtual host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalHost {
    pub name: String,
    pub domain: String,
    pub remote_address: String,
    pub verify_subject_alt_name: Vec<String>,
    pub ssl: bool,
}

/// An external service exposed to local proxies on its own port.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalVirtualHost {
    pub name: String,
    pub address: String,
    pub hosts: Vec<ExternalHost>,
    pub is_amzn_service: bool,
    pub cluster_type: String,
}

/// A sharded database reached through a set of mongos routers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MongosServer {
    pub address: String,
    pub hosts: Vec<String>,
    /// Whether the global rate limit service is called for new connections.
    pub ratelimit: bool,
}

/// Everything the demo templates need.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    /// Internal services the front proxy routes to.
    pub front_envoy_clusters: Clusters,
    /// Internal services reachable through the local egress port.
    pub service_to_service_clusters: Clusters,
    pub external_virtual_hosts: Vec<ExternalVirtualHost>,
    /// Mongo clusters keyed by database name. Empty removes all mongo configuration.
    pub mongos_servers: IndexMap<String, MongosServer>,
}

pub const FRONT_PROXY_TEMPLATE: &str = "envoy_front_proxy.template.json";
pub const DOUBLE_PROXY_TEMPLATE: &str = "envoy_double_proxy.template.json";
pub const SERVICE_TO_SERVICE_TEMPLATE: &str = "envoy_service_to_service.template.json";

fn clusters(names: &[&str]) -> Clusters {
    names.iter().map(|name| (name.to_string(), ClusterOptions::new())).collect()
}

impl Default for DemoData {
    fn default() -> Self {
        let dynamodb_iad = ExternalVirtualHost {
            name: "dynamodb_iad".to_string(),
            address: "tcp://127.0.0.1:9204".to_string(),
            hosts: vec![ExternalHost {
                name: "dynamodb_iad".to_string(),
                domain: "*".to_string(),
                remote_address: "dynamodb.us-east-1.amazonaws.com:443".to_string(),
                verify_subject_alt_name: vec!["dynamodb.us-east-1.amazonaws.com".to_string()],
                ssl: true,
            }],
            is_amzn_service: true,
            cluster_type: "logical_dns".to_string(),
        };

        let mut mongos_servers = IndexMap::new();
        mongos_servers.insert(
            "somedb".to_string(),
            MongosServer {
                address: "tcp://127.0.0.1:27019".to_string(),
                hosts: (1..=4)
                    .map(|n| format!("router{n}.yourcompany.net:27817"))
                    .collect(),
                ratelimit: true,
            },
        );

        Self {
            front_envoy_clusters: clusters(&["service1", "service2", "service3"]),
            service_to_service_clusters: clusters(&["ratelimit", "service1", "service3"]),
            external_virtual_hosts: vec![dynamodb_iad],
            mongos_servers,
        }
    }
}

impl DemoData {
    /// Builds the generation jobs for the three demo configurations.
    ///
    /// Output files are named after their template, without the `.template` part.
    pub fn jobs<P: AsRef<Path>>(&self, output_dir: P) -> Vec<Job> {
        let output_dir = output_dir.as_ref();

        let front_proxy = Context::new().with("clusters", &self.front_envoy_clusters);
        let service_to_service = Context::new()
            .with("internal_virtual_hosts", &self.service_to_service_clusters)
            .with("external_virtual_hosts", &self.external_virtual_hosts)
            .with("mongos_servers", &self.mongos_servers);

        vec![
            Job::new(
                FRONT_PROXY_TEMPLATE,
                output_dir.join("envoy_front_proxy.json"),
                front_proxy,
            ),
            Job::new(
                DOUBLE_PROXY_TEMPLATE,
                output_dir.join("envoy_double_proxy.json"),
                Context::new(),
            ),
            Job::new(
                SERVICE_TO_SERVICE_TEMPLATE,
                output_dir.join("envoy_service_to_service.json"),
                service_to_service,
            ),
        ]
    }
}
