use helium_credential::HeliumApiCredential;
use serde_json::json;

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, omit_if_zero, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::AccountOperation;

pub(crate) fn build(
    op: AccountOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    // Every accounts operation addresses a single account; the address is
    // read up front, before operation dispatch.
    let address = params.required_string("address")?;
    let base = &credential.base_url;

    let spec = match op {
        AccountOperation::GetAccount => {
            RequestSpec::get(format!("{base}/accounts/{address}"))
        }

        AccountOperation::GetAccountHotspots => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/accounts/{address}/hotspots"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        AccountOperation::GetAccountValidators => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/accounts/{address}/validators"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        AccountOperation::GetAccountActivity => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;
            let filter_types = params.optional_string("filterTypes", "")?;

            RequestSpec::get(format!("{base}/accounts/{address}/activity"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
                .query_opt("filter_types", omit_if_empty(filter_types))
        }

        AccountOperation::GetAccountRewards => {
            let cursor = params.optional_string("cursor", "")?;
            let min_time = params.optional_string("minTime", "")?;
            let max_time = params.optional_string("maxTime", "")?;

            RequestSpec::get(format!("{base}/accounts/{address}/rewards"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("min_time", omit_if_empty(min_time))
                .query_opt("max_time", omit_if_empty(max_time))
        }

        AccountOperation::GetPendingTransactions => {
            RequestSpec::get(format!("{base}/accounts/{address}/pending_transactions"))
        }

        AccountOperation::SubmitTransaction => {
            let txn = params.required_string("txn")?;

            RequestSpec::post(format!("{base}/accounts/{address}/transactions"))
                .json_body(json!({ "txn": txn }))
        }
    };

    // This resource historically sends `Accept` where the others send
    // `Content-Type`; submitTransaction sends both.
    let spec = spec.bearer_auth(credential).accept_json();
    Ok(if matches!(op, AccountOperation::SubmitTransaction) {
        spec.content_type_json()
    } else {
        spec
    })
}
