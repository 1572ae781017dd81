//! # Helium Network Node
//!
//! A workflow-automation node exposing the Helium Network blockchain API
//! (hotspots, accounts, validators, rewards, blocks, elections) as
//! point-and-click operations.
//!
//! The crate has two halves. The **operation registry** is a static
//! declaration of every resource, operation, and parameter, consumed by
//! the host's UI. The **request dispatcher** runs a batch: for each
//! input item it resolves the declared parameters, builds one HTTP
//! request, executes it through an injected client, and pairs the
//! response — or a per-item error record — back to the item's index.
//!
//! The host runtime, its parameter UI, and credential storage all stay
//! on the far side of three ports: [`ParameterResolver`],
//! [`HttpClient`], and the credential resolver in `helium-credential`.
//!
//! ## Core Types
//!
//! - [`NodeDescriptor`] — node identity, credential requirement, registry
//! - [`OperationRegistry`] — `operations_for` / `parameters_for` lookups
//! - [`Operation`] / [`Resource`] — closed selector enums
//! - [`Dispatcher`] — the batch driver
//! - [`RequestSpec`] — the deterministic per-item request description
//! - [`ErrorMode`] — continue-on-fail versus fail-fast
//! - [`NodeError`] — validation / API / transport classification
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use helium_credential::HeliumApiCredential;
//! use helium_node::{Dispatcher, ErrorMode, Item, Operation, ReqwestClient};
//!
//! let dispatcher = Dispatcher::new(Arc::new(ReqwestClient::new()));
//! let operation = Operation::parse("hotspots", "listHotspots").unwrap();
//! let records = dispatcher
//!     .execute(
//!         operation,
//!         &[Item::empty()],
//!         &HeliumApiCredential::anonymous(),
//!         &resolver,
//!         ErrorMode::ContinueOnFail,
//!     )
//!     .await?;
//! ```

#![warn(missing_docs)]

/// The batch driver and error-mode policy.
pub mod dispatcher;
/// Error classification for node execution.
pub mod error;
/// Input items and paired output records.
pub mod item;
/// The node descriptor for host registration.
pub mod node;
/// Per-resource request builders.
pub mod operations;
/// Parameter resolution port and typed readers.
pub mod params;
/// The operation registry and its declarative tables.
pub mod registry;
/// The per-item request description.
pub mod request;
/// Resource and operation selector enums.
pub mod resource;
/// HTTP client port and the reqwest driver.
pub mod transport;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use dispatcher::{Dispatcher, ErrorMode};
pub use error::NodeError;
pub use item::{Item, OutputRecord, PairedItem};
pub use node::NodeDescriptor;
pub use params::{ItemParameters, ParameterResolver};
pub use registry::{OperationDescriptor, OperationRegistry};
pub use request::RequestSpec;
pub use resource::{
    AccountOperation, BlockchainOperation, ElectionOperation, HotspotOperation, Operation,
    Resource, RewardOperation, ValidatorOperation,
};
pub use transport::{HttpClient, ReqwestClient, TransportFailure};

// Re-export the credential and parameter types node consumers need, so
// hosts can depend on `helium-node` alone.
pub use helium_credential::{CredentialDescription, CredentialResolver, HeliumApiCredential};
pub use helium_parameter::{ParameterCollection, ParameterDef};
