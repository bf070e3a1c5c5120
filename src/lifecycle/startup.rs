//! Startup orchestration.
//!
//! # Responsibilities
//! - Pick the router backend from the configured mode
//! - Wire production factories into the router builder
//! - Record the outcome
//!
//! # Design Decisions
//! - Fail fast: the caller applies the fatal policy to the result
//! - One router per session

use tracing::Span;

use crate::config::{RouterMode, SyncConfig};
use crate::messagebus::NatsMessageBus;
use crate::observability::metrics;
use crate::routing::{BuildError, RouterBuilder, SyncRouter};
use crate::tcp::RoutingApiRouter;
use crate::uaa::HttpUaaClient;

/// Build the production router selected by `config.router_mode`.
pub fn build_router(config: &SyncConfig, span: &Span) -> Result<SyncRouter, BuildError> {
    let builder = RouterBuilder::new(config, span);

    let result = match config.router_mode {
        RouterMode::Tcp => builder
            .create_tcp_router(HttpUaaClient::new, RoutingApiRouter::<HttpUaaClient>::new)
            .map(SyncRouter::Tcp),
        RouterMode::Http => {
            let servers = config.nats_servers.clone();
            Ok(SyncRouter::Http(
                builder.create_http_router(|span| NatsMessageBus::new(span, servers)),
            ))
        }
    };

    metrics::record_router_build(config.router_mode, result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageBusServer;
    use ::metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Recorder that keeps every registered counter with its labels.
    #[derive(Default)]
    struct CountingRecorder {
        counters: Mutex<Vec<(String, Vec<(String, String)>, Arc<AtomicU64>)>>,
    }

    impl CountingRecorder {
        fn counted(&self) -> Vec<(String, Vec<(String, String)>, u64)> {
            self.counters
                .lock()
                .unwrap()
                .iter()
                .map(|(name, labels, value)| (name.clone(), labels.clone(), value.load(Ordering::SeqCst)))
                .collect()
        }
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let value = Arc::new(AtomicU64::new(0));
            let labels = key
                .labels()
                .map(|l| (l.key().to_string(), l.value().to_string()))
                .collect();
            self.counters
                .lock()
                .unwrap()
                .push((key.name().to_string(), labels, value.clone()));
            Counter::from_arc(value)
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn tcp_config() -> SyncConfig {
        SyncConfig {
            router_mode: RouterMode::Tcp,
            routing_api_url: "https://api.cf.example.org".into(),
            uaa_api_url: "https://uaa.cf.example.org".into(),
            routing_api_username: "routeUser".into(),
            routing_api_client_secret: "aabbcc".into(),
            skip_tls_verification: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_selects_tcp_router() {
        let router = build_router(&tcp_config(), &Span::none()).unwrap();
        assert_eq!(router.mode(), RouterMode::Tcp);
        assert_eq!(router.describe(), "tcp router via https://api.cf.example.org/");
    }

    #[test]
    fn test_selects_http_router() {
        let config = SyncConfig {
            nats_servers: vec![MessageBusServer {
                host: "host".into(),
                user: "user".into(),
                password: "password".into(),
            }],
            ..Default::default()
        };
        match build_router(&config, &Span::none()).unwrap() {
            SyncRouter::Http(router) => assert_eq!(router.servers(), config.nats_servers.as_slice()),
            other => panic!("expected http router, got {other:?}"),
        }
    }

    #[test]
    fn test_tcp_failure_names_stage() {
        let mut config = tcp_config();
        config.routing_api_client_secret.clear();
        let err = build_router(&config, &Span::none()).unwrap_err();
        assert!(matches!(err, BuildError::AuthClient(_)));

        let mut config = tcp_config();
        config.routing_api_url = "not a url".into();
        let err = build_router(&config, &Span::none()).unwrap_err();
        assert!(matches!(err, BuildError::TcpRouter(_)));
    }

    #[test]
    fn test_records_build_outcome() {
        let recorder = CountingRecorder::default();
        let mut failing = tcp_config();
        failing.routing_api_client_secret.clear();

        ::metrics::with_local_recorder(&recorder, || {
            build_router(&tcp_config(), &Span::none()).unwrap();
            build_router(&failing, &Span::none()).unwrap_err();
        });

        let label = |k: &str, v: &str| (k.to_string(), v.to_string());
        assert_eq!(
            recorder.counted(),
            vec![
                (
                    "route_sync_router_builds_total".to_string(),
                    vec![label("kind", "tcp"), label("outcome", "success")],
                    1,
                ),
                (
                    "route_sync_router_builds_total".to_string(),
                    vec![label("kind", "tcp"), label("outcome", "failure")],
                    1,
                ),
            ]
        );
    }
}
