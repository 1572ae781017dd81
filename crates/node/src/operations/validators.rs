use helium_credential::HeliumApiCredential;
use serde_json::json;

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::ValidatorOperation;

pub(crate) fn build(
    op: ValidatorOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    let base = &credential.base_url;

    let spec = match op {
        ValidatorOperation::ListValidators => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 20.0)?;

            // Unlike the other list operations, `limit` is always sent
            // here, default included.
            RequestSpec::get(format!("{base}/validators"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query("limit", format_number(limit))
        }

        ValidatorOperation::GetValidator => {
            let address = params.required_string("address")?;
            RequestSpec::get(format!("{base}/validators/{address}"))
        }

        ValidatorOperation::GetValidatorActivity => {
            let address = params.required_string("address")?;
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 20.0)?;

            RequestSpec::get(format!("{base}/validators/{address}/activity"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query("limit", format_number(limit))
        }

        ValidatorOperation::GetValidatorRewards => {
            let address = params.required_string("address")?;
            let min_time = params.optional_string("min_time", "")?;
            let max_time = params.optional_string("max_time", "")?;

            RequestSpec::get(format!("{base}/validators/{address}/rewards"))
                .query_opt("min_time", omit_if_empty(min_time))
                .query_opt("max_time", omit_if_empty(max_time))
        }

        ValidatorOperation::CreateValidator => {
            let address = params.required_string("address")?;
            let stake = params.optional_number("stake", 10_000.0)?;

            RequestSpec::post(format!("{base}/validators"))
                .json_body(json!({ "address": address, "stake": stake }))
        }

        ValidatorOperation::UpdateValidator => {
            let address = params.required_string("address")?;
            let name = params.required_string("name")?;

            RequestSpec::patch(format!("{base}/validators/{address}"))
                .json_body(json!({ "name": name }))
        }

        ValidatorOperation::UnstakeValidator => {
            let address = params.required_string("address")?;
            RequestSpec::delete(format!("{base}/validators/{address}/stake"))
        }
    };

    Ok(spec.bearer_auth(credential).content_type_json())
}
