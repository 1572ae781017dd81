use helium_credential::HeliumApiCredential;
use serde_json::json;

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, omit_if_zero, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::RewardOperation;

pub(crate) fn build(
    op: RewardOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    let base = &credential.base_url;

    let spec = match op {
        RewardOperation::GetRewardsSum => {
            let min_time = params.required_string("minTime")?;
            let max_time = params.required_string("maxTime")?;
            let bucket = params.optional_string("bucket", "day")?;

            RequestSpec::get(format!("{base}/rewards/sum"))
                .query("min_time", min_time)
                .query("max_time", max_time)
                .query("bucket", bucket)
        }

        RewardOperation::GetBlockRewardsByAccount => {
            let block = params.required_number("block")?;
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/rewards/{}/accounts", format_number(block)))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        RewardOperation::GetBlockRewardsByHotspot => {
            let block = params.required_number("block")?;
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/rewards/{}/hotspots", format_number(block)))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        RewardOperation::ClaimRewards => {
            let account = params.required_string("account")?;
            let signature = params.required_string("signature")?;

            RequestSpec::post(format!("{base}/rewards/claim"))
                .json_body(json!({ "account": account, "signature": signature }))
        }

        RewardOperation::GetOraclePrice => RequestSpec::get(format!("{base}/rewards/oracle")),

        RewardOperation::GetRewardPredictions => {
            let address = params.required_string("address")?;
            let kind = params.optional_string("type", "account")?;

            RequestSpec::get(format!("{base}/rewards/predictions"))
                .query("address", address)
                .query("type", kind)
        }
    };

    Ok(spec.bearer_auth(credential).content_type_json())
}
