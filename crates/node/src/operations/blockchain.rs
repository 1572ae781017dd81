use helium_credential::HeliumApiCredential;
use serde_json::json;

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, omit_if_zero, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::BlockchainOperation;

pub(crate) fn build(
    op: BlockchainOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    let base = &credential.base_url;

    let spec = match op {
        BlockchainOperation::ListBlocks => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 20.0)?;

            RequestSpec::get(format!("{base}/blocks"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        BlockchainOperation::GetBlock => {
            let height = params.required_number("height")?;
            RequestSpec::get(format!("{base}/blocks/{}", format_number(height)))
        }

        BlockchainOperation::GetBlockTransactions => {
            let height = params.required_number("height")?;
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 20.0)?;

            RequestSpec::get(format!("{base}/blocks/{}/transactions", format_number(height)))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        BlockchainOperation::GetTransaction => {
            let hash = params.required_string("hash")?;
            RequestSpec::get(format!("{base}/transactions/{hash}"))
        }

        BlockchainOperation::GetPendingTransactions => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 20.0)?;

            RequestSpec::get(format!("{base}/pending_transactions"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        BlockchainOperation::BroadcastTransaction => {
            let txn = params.required_string("txn")?;

            RequestSpec::post(format!("{base}/transactions")).json_body(json!({ "txn": txn }))
        }

        BlockchainOperation::GetNetworkStats => RequestSpec::get(format!("{base}/stats")),
    };

    Ok(spec.bearer_auth(credential).content_type_json())
}
