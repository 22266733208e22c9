#![allow(dead_code)]

use ensembl::reqwest::{Request, Response};
use ensembl::reqwest_middleware::{Middleware, Next};
use ensembl::{EnsemblClient, EnsemblClientBuilder, ServerUrl};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use task_local_extensions::Extensions;
use wiremock::MockServer;

pub type AnyResult = Result<(), Box<dyn std::error::Error>>;

pub fn builder_for(server: &MockServer) -> EnsemblClientBuilder {
    let url: ServerUrl = server.uri().parse().unwrap();
    EnsemblClient::builder_with_url(url)
}

pub fn client_for(server: &MockServer) -> EnsemblClient {
    builder_for(server).build().unwrap()
}

/// Counts the requests which pass through it.
#[derive(Clone, Default)]
pub struct CountingMiddleware(pub Arc<AtomicUsize>);

impl CountingMiddleware {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Middleware for CountingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> ensembl::reqwest_middleware::Result<Response> {
        self.0.fetch_add(1, Ordering::SeqCst);
        next.run(req, extensions).await
    }
}
