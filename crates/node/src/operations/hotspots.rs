use helium_credential::HeliumApiCredential;
use serde_json::{Map, Value};

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, omit_if_zero, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::HotspotOperation;

pub(crate) fn build(
    op: HotspotOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    let base = &credential.base_url;

    let spec = match op {
        HotspotOperation::ListHotspots => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/hotspots"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        HotspotOperation::GetHotspot => {
            let address = params.required_string("address")?;
            RequestSpec::get(format!("{base}/hotspots/{address}"))
        }

        HotspotOperation::GetHotspotActivity => {
            let address = params.required_string("address")?;
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/hotspots/{address}/activity"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        HotspotOperation::GetHotspotRewards => {
            let address = params.required_string("address")?;
            let min_time = params.optional_string("min_time", "")?;
            let max_time = params.optional_string("max_time", "")?;

            RequestSpec::get(format!("{base}/hotspots/{address}/rewards"))
                .query_opt("min_time", omit_if_empty(min_time))
                .query_opt("max_time", omit_if_empty(max_time))
        }

        HotspotOperation::GetHotspotWitnesses => {
            let address = params.required_string("address")?;
            let cursor = params.optional_string("cursor", "")?;

            RequestSpec::get(format!("{base}/hotspots/{address}/witnesses"))
                .query_opt("cursor", omit_if_empty(cursor))
        }

        HotspotOperation::GetHotspotChallenged => {
            let address = params.required_string("address")?;
            let cursor = params.optional_string("cursor", "")?;

            RequestSpec::get(format!("{base}/hotspots/{address}/challenged"))
                .query_opt("cursor", omit_if_empty(cursor))
        }

        HotspotOperation::UpdateHotspot => {
            let address = params.required_string("address")?;
            let name = params.optional_string("name", "")?;
            let lat = params.optional_number("lat", 0.0)?;
            let lng = params.optional_number("lng", 0.0)?;

            // Fields at their defaults stay out of the body entirely;
            // the body object itself is always sent, even when empty.
            let mut body = Map::new();
            if let Some(name) = omit_if_empty(name) {
                body.insert("name".to_owned(), Value::from(name));
            }
            if let Some(lat) = omit_if_zero(lat) {
                body.insert("lat".to_owned(), Value::from(lat));
            }
            if let Some(lng) = omit_if_zero(lng) {
                body.insert("lng".to_owned(), Value::from(lng));
            }

            RequestSpec::patch(format!("{base}/hotspots/{address}"))
                .json_body(Value::Object(body))
        }
    };

    Ok(spec.bearer_auth(credential).content_type_json())
}
