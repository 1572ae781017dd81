//! The batch driver.
//!
//! Runs one operation over an ordered batch of items: resolve parameters
//! per item, build the request, execute it through the injected
//! [`HttpClient`], and map the result or error into one output record
//! per item. Items are processed sequentially, in input order; each
//! request is independent and no state is shared across items beyond the
//! read-only credential and operation selection.
//!
//! Cancellation follows async drop semantics: dropping the future
//! returned by [`Dispatcher::execute`] abandons the in-flight request,
//! and no compensating actions are performed for whatever the remote
//! API already committed.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, warn};

use helium_credential::{CredentialResolver, HeliumApiCredential};

use crate::error::NodeError;
use crate::item::{Item, OutputRecord};
use crate::operations::build_request;
use crate::params::{ItemParameters, ParameterResolver};
use crate::resource::{Operation, Resource};
use crate::transport::{HttpClient, TransportFailure};

/// What to do when an item fails.
///
/// Read once per batch. In [`ContinueOnFail`](Self::ContinueOnFail) mode
/// every failure becomes an error record for that item only; in
/// [`FailFast`](Self::FailFast) mode the first failure aborts the whole
/// batch and no further items are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Convert per-item failures into `{"error": ...}` records and keep going.
    ContinueOnFail,
    /// Abort the batch on the first failure.
    #[default]
    FailFast,
}

/// Executes batches against an injected HTTP client.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn HttpClient>,
}

impl Dispatcher {
    /// Create a dispatcher over the given client.
    #[must_use]
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Run `operation` over `items`, producing one output record per
    /// item in input order.
    ///
    /// # Errors
    ///
    /// In [`ErrorMode::FailFast`], the first per-item failure is
    /// classified per resource and returned; no partial results are kept.
    /// In [`ErrorMode::ContinueOnFail`] this only fails if the batch
    /// cannot start at all.
    pub async fn execute(
        &self,
        operation: Operation,
        items: &[Item],
        credential: &HeliumApiCredential,
        resolver: &dyn ParameterResolver,
        mode: ErrorMode,
    ) -> Result<Vec<OutputRecord>, NodeError> {
        debug!(
            resource = operation.resource().key(),
            operation = operation.key(),
            items = items.len(),
            "dispatching batch"
        );

        let mut records = Vec::with_capacity(items.len());

        for index in 0..items.len() {
            let params = ItemParameters::new(resolver, index);
            match self.run_item(operation, &params, credential).await {
                Ok(response) => records.push(OutputRecord::new(response, index)),
                Err(err) => match mode {
                    ErrorMode::ContinueOnFail => {
                        warn!(item = index, error = %err, "item failed, continuing");
                        records.push(OutputRecord::new(
                            error_payload(operation, index, &err),
                            index,
                        ));
                    }
                    ErrorMode::FailFast => {
                        return Err(classify(operation.resource(), err));
                    }
                },
            }
        }

        Ok(records)
    }

    /// Resolve the credential once, then run the batch with it.
    ///
    /// # Errors
    ///
    /// Fails with [`NodeError::Credential`] before any item is processed
    /// when the host cannot produce the credential; batch errors are as
    /// for [`execute`](Self::execute).
    pub async fn execute_with(
        &self,
        operation: Operation,
        items: &[Item],
        credentials: &dyn CredentialResolver,
        resolver: &dyn ParameterResolver,
        mode: ErrorMode,
    ) -> Result<Vec<OutputRecord>, NodeError> {
        let credential = credentials.resolve().await?;
        self.execute(operation, items, &credential, resolver, mode)
            .await
    }

    /// Build and execute the request for a single item.
    async fn run_item(
        &self,
        operation: Operation,
        params: &ItemParameters<'_>,
        credential: &HeliumApiCredential,
    ) -> Result<Value, NodeError> {
        let spec = build_request(operation, params, credential)?;
        self.client.send(&spec).await.map_err(NodeError::from)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl From<TransportFailure> for NodeError {
    fn from(failure: TransportFailure) -> Self {
        match failure.status {
            Some(status) => Self::Api {
                message: failure.message,
                status: Some(status),
                body: failure.body,
            },
            None => Self::Transport(failure.message),
        }
    }
}

/// The `json` payload of a continue-mode error record.
///
/// Every resource reports at least the message; the accounts handlers
/// additionally attach the operation and item index.
fn error_payload(operation: Operation, index: usize, err: &NodeError) -> Value {
    match operation.resource() {
        Resource::Accounts => json!({
            "error": err.message(),
            "operation": operation.key(),
            "itemIndex": index,
        }),
        _ => json!({ "error": err.message() }),
    }
}

/// Re-classify the first failure before aborting the batch, mirroring
/// each resource handler's historical throw behavior.
fn classify(resource: Resource, err: NodeError) -> NodeError {
    match resource {
        // These resources surface every abort as an API error, even when
        // the client never produced a response. Blockchain additionally
        // replaces the message on a 404.
        Resource::Validators | Resource::Blockchain => {
            let err = match err {
                NodeError::Api { .. } => err,
                other => NodeError::api(other.message().to_owned()),
            };
            match (resource, err) {
                (
                    Resource::Blockchain,
                    NodeError::Api {
                        status: Some(404),
                        body,
                        ..
                    },
                ) => NodeError::Api {
                    message: "Resource not found".to_owned(),
                    status: Some(404),
                    body,
                },
                (_, err) => err,
            }
        }
        // The rest keep the classification from the transport layer:
        // Api when the failure carried a status/body, the original error
        // otherwise.
        Resource::Hotspots | Resource::Accounts | Resource::Rewards | Resource::Elections => err,
    }
}
