use helium_credential::HeliumApiCredential;
use serde_json::json;

use crate::error::NodeError;
use crate::params::{format_number, omit_if_empty, omit_if_zero, ItemParameters};
use crate::request::RequestSpec;
use crate::resource::ElectionOperation;

pub(crate) fn build(
    op: ElectionOperation,
    params: &ItemParameters<'_>,
    credential: &HeliumApiCredential,
) -> Result<RequestSpec, NodeError> {
    let base = &credential.base_url;

    let spec = match op {
        ElectionOperation::ListElections => {
            let cursor = params.optional_string("cursor", "")?;
            let limit = params.optional_number("limit", 100.0)?;

            RequestSpec::get(format!("{base}/elections"))
                .query_opt("cursor", omit_if_empty(cursor))
                .query_opt("limit", omit_if_zero(limit).map(format_number))
        }

        ElectionOperation::GetElection => {
            let height = params.required_number("height")?;
            RequestSpec::get(format!("{base}/elections/{}", format_number(height)))
        }

        ElectionOperation::GetCurrentElection => {
            RequestSpec::get(format!("{base}/elections/current"))
        }

        ElectionOperation::SubmitVote => {
            let proposal_id = params.required_string("proposalId")?;
            let vote = params.optional_string("vote", "yes")?;
            let signature = params.required_string("signature")?;

            RequestSpec::post(format!("{base}/votes")).json_body(json!({
                "proposal_id": proposal_id,
                "vote": vote,
                "signature": signature,
            }))
        }

        ElectionOperation::GetProposalVotes => {
            let proposal_id = params.required_string("proposalId")?;
            let cursor = params.optional_string("cursor", "")?;

            RequestSpec::get(format!("{base}/votes/{proposal_id}"))
                .query_opt("cursor", omit_if_empty(cursor))
        }

        ElectionOperation::ListProposals => {
            let status = params.optional_string("status", "active")?;
            let cursor = params.optional_string("cursor", "")?;

            // "all" means no status filter at all.
            RequestSpec::get(format!("{base}/proposals"))
                .query_opt("status", omit_if_empty(status).filter(|s| s != "all"))
                .query_opt("cursor", omit_if_empty(cursor))
        }

        ElectionOperation::GetProposal => {
            let proposal_id = params.required_string("proposalId")?;
            RequestSpec::get(format!("{base}/proposals/{proposal_id}"))
        }
    };

    Ok(spec.bearer_auth(credential).content_type_json())
}
