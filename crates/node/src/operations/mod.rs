//! Per-resource request builders.
//!
//! One module per API resource, mirroring the per-resource handlers of
//! the node's UI surface. Each builder turns an operation plus one
//! item's resolved parameters into a [`RequestSpec`]; nothing here
//! performs IO.

mod accounts;
mod blockchain;
mod elections;
mod hotspots;
mod rewards;
mod validators;

use helium_credential::HeliumApiCredential;

use crate::error::NodeError;
use crate::params::ItemParameters;
use crate::request::RequestSpec;
use crate::resource::Operation;

/// Build the request for one operation and one item.
pub fn build_request(
    operation: Operation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    match operation {
        Operation::Hotspots(op) => hotspots::build(op, params, credential),
        Operation::Accounts(op) => accounts::build(op, params, credential),
        Operation::Validators(op) => validators::build(op, params, credential),
        Operation::Rewards(op) => rewards::build(op, params, credential),
        Operation::Blockchain(op) => blockchain::build(op, params, credential),
        Operation::Elections(op) => elections::build(op, params, credential),
    }
}
