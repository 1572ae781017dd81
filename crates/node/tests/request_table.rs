//! Request construction across the full operation table: method, path,
//! query omission rules, bodies, and header conventions.

mod common;

use http::Method;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use common::MapResolver;
use helium_node::operations::build_request;
use helium_node::{HeliumApiCredential, ItemParameters, NodeError, Operation, RequestSpec};

const BASE: &str = "https://api.helium.io/v1";

fn build(resource: &str, op: &str, pairs: &[(&str, Value)]) -> RequestSpec {
    try_build(resource, op, pairs).unwrap()
}

fn try_build(resource: &str, op: &str, pairs: &[(&str, Value)]) -> Result<RequestSpec, NodeError> {
    let resolver = MapResolver::new(pairs);
    let params = ItemParameters::new(&resolver, 0);
    let credential = HeliumApiCredential::with_api_key("test-api-key");
    let operation = Operation::parse(resource, op).unwrap();
    build_request(operation, &params, &credential)
}

fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ── Path-only GET operations ────────────────────────────────────────────────

#[rstest]
#[case("hotspots", "getHotspot", &[("address", json!("11abc"))], "/hotspots/11abc")]
#[case("accounts", "getAccount", &[("address", json!("ADDR"))], "/accounts/ADDR")]
#[case(
    "accounts",
    "getPendingTransactions",
    &[("address", json!("ADDR"))],
    "/accounts/ADDR/pending_transactions"
)]
#[case("validators", "getValidator", &[("address", json!("VADDR"))], "/validators/VADDR")]
#[case("rewards", "getOraclePrice", &[], "/rewards/oracle")]
#[case("blockchain", "getBlock", &[("height", json!(500_000))], "/blocks/500000")]
#[case("blockchain", "getTransaction", &[("hash", json!("txhash1"))], "/transactions/txhash1")]
#[case("blockchain", "getNetworkStats", &[], "/stats")]
#[case("elections", "getElection", &[("height", json!(921_555))], "/elections/921555")]
#[case("elections", "getCurrentElection", &[], "/elections/current")]
#[case("elections", "getProposal", &[("proposalId", json!("prop-7"))], "/proposals/prop-7")]
fn get_operations_build_expected_paths(
    #[case] resource: &str,
    #[case] op: &str,
    #[case] pairs: &[(&str, Value)],
    #[case] path: &str,
) {
    let spec = build(resource, op, pairs);
    assert_eq!(spec.method, Method::GET);
    assert_eq!(spec.url, format!("{BASE}{path}"));
    assert!(spec.query.is_empty());
    assert!(spec.body.is_none());
}

// ── Query omission rules ────────────────────────────────────────────────────

#[test]
fn list_hotspots_omits_empty_cursor_and_keeps_default_limit() {
    let spec = build(
        "hotspots",
        "listHotspots",
        &[("cursor", json!("")), ("limit", json!(100))],
    );
    assert_eq!(spec.url, format!("{BASE}/hotspots"));
    assert_eq!(spec.query, q(&[("limit", "100")]));
}

#[test]
fn list_hotspots_includes_cursor_when_present() {
    let spec = build(
        "hotspots",
        "listHotspots",
        &[("cursor", json!("page2")), ("limit", json!(25))],
    );
    assert_eq!(spec.query, q(&[("cursor", "page2"), ("limit", "25")]));
}

#[test]
fn list_hotspots_zero_limit_is_omitted() {
    let spec = build("hotspots", "listHotspots", &[("limit", json!(0))]);
    assert!(spec.query.is_empty());
}

#[test]
fn hotspot_rewards_time_window_omitted_when_empty() {
    let spec = build("hotspots", "getHotspotRewards", &[("address", json!("11abc"))]);
    assert_eq!(spec.url, format!("{BASE}/hotspots/11abc/rewards"));
    assert!(spec.query.is_empty());

    let spec = build(
        "hotspots",
        "getHotspotRewards",
        &[
            ("address", json!("11abc")),
            ("min_time", json!("2023-01-01T00:00:00Z")),
            ("max_time", json!("2023-12-31T23:59:59Z")),
        ],
    );
    assert_eq!(
        spec.query,
        q(&[
            ("min_time", "2023-01-01T00:00:00Z"),
            ("max_time", "2023-12-31T23:59:59Z"),
        ])
    );
}

#[test]
fn account_activity_filter_types_renames_to_snake_case() {
    let spec = build(
        "accounts",
        "getAccountActivity",
        &[
            ("address", json!("ADDR")),
            ("cursor", json!("c1")),
            ("limit", json!(50)),
            ("filterTypes", json!("payment_v1,rewards_v1")),
        ],
    );
    assert_eq!(spec.url, format!("{BASE}/accounts/ADDR/activity"));
    assert_eq!(
        spec.query,
        q(&[
            ("cursor", "c1"),
            ("limit", "50"),
            ("filter_types", "payment_v1,rewards_v1"),
        ])
    );
}

#[test]
fn account_rewards_maps_camel_case_times() {
    let spec = build(
        "accounts",
        "getAccountRewards",
        &[
            ("address", json!("ADDR")),
            ("minTime", json!("2023-01-01T00:00:00Z")),
        ],
    );
    assert_eq!(
        spec.query,
        q(&[("min_time", "2023-01-01T00:00:00Z")])
    );
}

#[test]
fn validators_always_send_limit() {
    // Even at its default and even with no cursor, limit goes out.
    let spec = build("validators", "listValidators", &[]);
    assert_eq!(spec.url, format!("{BASE}/validators"));
    assert_eq!(spec.query, q(&[("limit", "20")]));

    let spec = build(
        "validators",
        "getValidatorActivity",
        &[("address", json!("VADDR")), ("cursor", json!("c9"))],
    );
    assert_eq!(spec.url, format!("{BASE}/validators/VADDR/activity"));
    assert_eq!(spec.query, q(&[("cursor", "c9"), ("limit", "20")]));
}

#[test]
fn rewards_sum_sends_the_full_window() {
    let spec = build(
        "rewards",
        "getRewardsSum",
        &[
            ("minTime", json!("2023-01-01T00:00:00Z")),
            ("maxTime", json!("2023-01-31T23:59:59Z")),
            ("bucket", json!("week")),
        ],
    );
    assert_eq!(spec.url, format!("{BASE}/rewards/sum"));
    assert_eq!(
        spec.query,
        q(&[
            ("min_time", "2023-01-01T00:00:00Z"),
            ("max_time", "2023-01-31T23:59:59Z"),
            ("bucket", "week"),
        ])
    );
}

#[test]
fn rewards_sum_bucket_defaults_to_day() {
    let spec = build(
        "rewards",
        "getRewardsSum",
        &[
            ("minTime", json!("2023-01-01T00:00:00Z")),
            ("maxTime", json!("2023-01-31T23:59:59Z")),
        ],
    );
    assert_eq!(
        spec.query.last(),
        Some(&("bucket".to_owned(), "day".to_owned()))
    );
}

#[test]
fn block_rewards_template_the_block_into_the_path() {
    let spec = build(
        "rewards",
        "getBlockRewardsByAccount",
        &[("block", json!(1_234_567)), ("cursor", json!("c"))],
    );
    assert_eq!(spec.url, format!("{BASE}/rewards/1234567/accounts"));
    assert_eq!(spec.query, q(&[("cursor", "c"), ("limit", "100")]));

    let spec = build("rewards", "getBlockRewardsByHotspot", &[("block", json!(42))]);
    assert_eq!(spec.url, format!("{BASE}/rewards/42/hotspots"));
    assert_eq!(spec.query, q(&[("limit", "100")]));
}

#[test]
fn reward_predictions_always_send_address_and_type() {
    let spec = build(
        "rewards",
        "getRewardPredictions",
        &[("address", json!("ADDR"))],
    );
    assert_eq!(spec.url, format!("{BASE}/rewards/predictions"));
    assert_eq!(spec.query, q(&[("address", "ADDR"), ("type", "account")]));
}

#[test]
fn list_proposals_omits_status_all() {
    let spec = build("elections", "listProposals", &[("status", json!("all"))]);
    assert!(spec.query.is_empty());

    let spec = build(
        "elections",
        "listProposals",
        &[("status", json!("pending")), ("cursor", json!("c3"))],
    );
    assert_eq!(spec.query, q(&[("status", "pending"), ("cursor", "c3")]));

    // Untouched, the declared default applies.
    let spec = build("elections", "listProposals", &[]);
    assert_eq!(spec.query, q(&[("status", "active")]));
}

#[test]
fn proposal_votes_take_only_a_cursor() {
    let spec = build(
        "elections",
        "getProposalVotes",
        &[("proposalId", json!("prop-7")), ("cursor", json!("c4"))],
    );
    assert_eq!(spec.url, format!("{BASE}/votes/prop-7"));
    assert_eq!(spec.query, q(&[("cursor", "c4")]));
}

// ── Bodies ──────────────────────────────────────────────────────────────────

#[test]
fn submit_transaction_posts_txn_body() {
    let spec = build(
        "accounts",
        "submitTransaction",
        &[("address", json!("ADDR")), ("txn", json!("SIGNED"))],
    );
    assert_eq!(spec.method, Method::POST);
    assert_eq!(spec.url, format!("{BASE}/accounts/ADDR/transactions"));
    assert_eq!(spec.body, Some(json!({"txn": "SIGNED"})));
}

#[test]
fn broadcast_transaction_posts_txn_body() {
    let spec = build("blockchain", "broadcastTransaction", &[("txn", json!("SIGNED"))]);
    assert_eq!(spec.method, Method::POST);
    assert_eq!(spec.url, format!("{BASE}/transactions"));
    assert_eq!(spec.body, Some(json!({"txn": "SIGNED"})));
}

#[test]
fn create_validator_posts_address_and_stake() {
    let spec = build(
        "validators",
        "createValidator",
        &[("address", json!("VADDR")), ("stake", json!(15_000))],
    );
    assert_eq!(spec.method, Method::POST);
    assert_eq!(spec.url, format!("{BASE}/validators"));
    assert_eq!(spec.body, Some(json!({"address": "VADDR", "stake": 15000.0})));
}

#[test]
fn update_validator_patches_name() {
    let spec = build(
        "validators",
        "updateValidator",
        &[("address", json!("VADDR")), ("name", json!("my-validator"))],
    );
    assert_eq!(spec.method, Method::PATCH);
    assert_eq!(spec.url, format!("{BASE}/validators/VADDR"));
    assert_eq!(spec.body, Some(json!({"name": "my-validator"})));
}

#[test]
fn unstake_validator_is_a_bare_delete() {
    let spec = build("validators", "unstakeValidator", &[("address", json!("VADDR"))]);
    assert_eq!(spec.method, Method::DELETE);
    assert_eq!(spec.url, format!("{BASE}/validators/VADDR/stake"));
    assert!(spec.body.is_none());
    assert!(spec.query.is_empty());
}

#[test]
fn claim_rewards_posts_account_and_signature() {
    let spec = build(
        "rewards",
        "claimRewards",
        &[("account", json!("ADDR")), ("signature", json!("sig64"))],
    );
    assert_eq!(spec.method, Method::POST);
    assert_eq!(spec.url, format!("{BASE}/rewards/claim"));
    assert_eq!(spec.body, Some(json!({"account": "ADDR", "signature": "sig64"})));
}

#[test]
fn submit_vote_posts_snake_case_proposal_id() {
    let spec = build(
        "elections",
        "submitVote",
        &[
            ("proposalId", json!("prop-7")),
            ("vote", json!("abstain")),
            ("signature", json!("sig64")),
        ],
    );
    assert_eq!(spec.method, Method::POST);
    assert_eq!(spec.url, format!("{BASE}/votes"));
    assert_eq!(
        spec.body,
        Some(json!({
            "proposal_id": "prop-7",
            "vote": "abstain",
            "signature": "sig64",
        }))
    );
}

#[test]
fn update_hotspot_drops_default_valued_fields() {
    // All fields at their defaults: the PATCH still carries a body, but
    // an empty one.
    let spec = build("hotspots", "updateHotspot", &[("address", json!("11abc"))]);
    assert_eq!(spec.method, Method::PATCH);
    assert_eq!(spec.url, format!("{BASE}/hotspots/11abc"));
    assert_eq!(spec.body, Some(json!({})));
}

#[test]
fn update_hotspot_zero_coordinates_are_treated_as_unset() {
    let spec = build(
        "hotspots",
        "updateHotspot",
        &[
            ("address", json!("11abc")),
            ("name", json!("roof-antenna")),
            ("lat", json!(0)),
            ("lng", json!(-122.4194)),
        ],
    );
    // lat == 0 is indistinguishable from "not provided" and stays out.
    assert_eq!(
        spec.body,
        Some(json!({"name": "roof-antenna", "lng": -122.4194}))
    );
}

// ── Headers ─────────────────────────────────────────────────────────────────

#[test]
fn hotspots_send_bearer_and_content_type() {
    let spec = build("hotspots", "listHotspots", &[]);
    assert_eq!(spec.header_value("Authorization"), Some("Bearer test-api-key"));
    assert_eq!(spec.header_value("Content-Type"), Some("application/json"));
    assert_eq!(spec.header_value("Accept"), None);
}

#[test]
fn accounts_send_accept_instead_of_content_type() {
    let spec = build("accounts", "getAccount", &[("address", json!("ADDR"))]);
    assert_eq!(spec.header_value("Accept"), Some("application/json"));
    assert_eq!(spec.header_value("Content-Type"), None);
}

#[test]
fn submit_transaction_sends_both_accept_and_content_type() {
    let spec = build(
        "accounts",
        "submitTransaction",
        &[("address", json!("ADDR")), ("txn", json!("SIGNED"))],
    );
    assert_eq!(spec.header_value("Accept"), Some("application/json"));
    assert_eq!(spec.header_value("Content-Type"), Some("application/json"));
}

#[test]
fn anonymous_credential_sends_no_authorization() {
    let resolver = MapResolver::new(&[]);
    let params = ItemParameters::new(&resolver, 0);
    let operation = Operation::parse("blockchain", "getNetworkStats").unwrap();
    let spec = build_request(operation, &params, &HeliumApiCredential::anonymous()).unwrap();

    assert_eq!(spec.header_value("Authorization"), None);
}

#[test]
fn custom_base_url_prefixes_every_path() {
    let resolver = MapResolver::new(&[]);
    let params = ItemParameters::new(&resolver, 0);
    let operation = Operation::parse("blockchain", "listBlocks").unwrap();
    let credential =
        HeliumApiCredential::anonymous().with_base_url("https://helium.staging.example/v2");
    let spec = build_request(operation, &params, &credential).unwrap();

    assert_eq!(spec.url, "https://helium.staging.example/v2/blocks");
}

// ── Required-parameter enforcement ──────────────────────────────────────────

#[rstest]
#[case("hotspots", "getHotspot", "address")]
#[case("accounts", "getAccount", "address")]
#[case("accounts", "submitTransaction", "address")]
#[case("validators", "updateValidator", "address")]
#[case("rewards", "claimRewards", "account")]
#[case("rewards", "getRewardsSum", "minTime")]
#[case("blockchain", "getTransaction", "hash")]
#[case("blockchain", "getBlock", "height")]
#[case("elections", "getProposal", "proposalId")]
fn missing_required_parameter_fails_validation(
    #[case] resource: &str,
    #[case] op: &str,
    #[case] key: &str,
) {
    let err = try_build(resource, op, &[]).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.message(), format!("required parameter `{key}` is missing"));
}

#[test]
fn construction_is_deterministic() {
    let pairs = [
        ("address", json!("ADDR")),
        ("cursor", json!("c1")),
        ("limit", json!(10)),
    ];
    let first = build("accounts", "getAccountHotspots", &pairs);
    let second = build("accounts", "getAccountHotspots", &pairs);
    assert_eq!(first, second);
}
