//! The operation registry.
//!
//! Static declaration of every resource, its operations, and the
//! parameters each operation accepts — the schema the host UI renders.
//! Built once at startup, immutable thereafter; lookups have no side
//! effects and an unknown selector simply yields nothing.

use std::collections::HashMap;

use helium_parameter::prelude::*;

use crate::resource::{
    AccountOperation, BlockchainOperation, ElectionOperation, HotspotOperation, Operation,
    Resource, RewardOperation, ValidatorOperation,
};

/// One operation as the host sees it: selector value, display name,
/// short description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// The operation selector.
    pub operation: Operation,
    /// Human-readable display name (e.g. `"List Hotspots"`).
    pub name: &'static str,
    /// Short description of what the operation does.
    pub description: &'static str,
}

/// Immutable lookup from resources to operations and from operations to
/// their parameter sets.
#[derive(Debug, Clone)]
pub struct OperationRegistry {
    operations: HashMap<Resource, Vec<OperationDescriptor>>,
    parameters: HashMap<Operation, ParameterCollection>,
    empty: ParameterCollection,
}

impl OperationRegistry {
    /// Build the full registry.
    #[must_use]
    pub fn new() -> Self {
        let mut operations: HashMap<Resource, Vec<OperationDescriptor>> = HashMap::new();
        let mut parameters: HashMap<Operation, ParameterCollection> = HashMap::new();

        for (operation, params) in declarations() {
            operations
                .entry(operation.resource())
                .or_default()
                .push(OperationDescriptor {
                    operation,
                    name: operation.name(),
                    description: operation.description(),
                });
            parameters.insert(operation, params);
        }

        Self {
            operations,
            parameters,
            empty: ParameterCollection::new(),
        }
    }

    /// The operations a resource exposes, in UI declaration order.
    ///
    /// Empty for a resource with no declared operations.
    #[must_use]
    pub fn operations_for(&self, resource: Resource) -> &[OperationDescriptor] {
        self.operations.get(&resource).map_or(&[], Vec::as_slice)
    }

    /// The parameters an operation accepts, in declaration order.
    ///
    /// Empty for parameterless operations.
    #[must_use]
    pub fn parameters_for(&self, operation: Operation) -> &ParameterCollection {
        self.parameters.get(&operation).unwrap_or(&self.empty)
    }

    /// The operation a resource's selector starts on.
    #[must_use]
    pub fn default_operation(&self, resource: Resource) -> Option<Operation> {
        self.operations_for(resource).first().map(|d| d.operation)
    }

    /// Resolve host-supplied selector keys to an operation.
    #[must_use]
    pub fn lookup(&self, resource_key: &str, operation_key: &str) -> Option<Operation> {
        Operation::parse(resource_key, operation_key)
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Declarations ────────────────────────────────────────────────────────────
//
// One entry per operation. Shorthands below keep the tables close to the
// shape of the node's UI definition.

fn text(key: &str, name: &str, description: &str) -> ParameterDef {
    ParameterDef::Text(TextParameter::new(key, name).described(description).with_default(""))
}

fn required_text(key: &str, name: &str, description: &str) -> ParameterDef {
    ParameterDef::Text(TextParameter::new(key, name).described(description).required())
}

fn number(key: &str, name: &str, description: &str, default: f64) -> ParameterDef {
    ParameterDef::Number(NumberParameter::new(key, name).described(description).with_default(default))
}

fn required_number(key: &str, name: &str, description: &str) -> ParameterDef {
    ParameterDef::Number(NumberParameter::new(key, name).described(description).required())
}

fn date_time(key: &str, name: &str, description: &str) -> ParameterDef {
    ParameterDef::DateTime(DateTimeParameter::new(key, name).described(description))
}

fn cursor() -> ParameterDef {
    text("cursor", "Cursor", "Cursor for pagination")
}

fn declarations() -> Vec<(Operation, ParameterCollection)> {
    let mut all = Vec::with_capacity(41);
    all.extend(hotspot_declarations());
    all.extend(account_declarations());
    all.extend(validator_declarations());
    all.extend(reward_declarations());
    all.extend(blockchain_declarations());
    all.extend(election_declarations());
    all
}

fn hotspot_declarations() -> Vec<(Operation, ParameterCollection)> {
    use HotspotOperation::*;

    let address = || required_text("address", "Hotspot Address", "The hotspot address");
    let limit = || number("limit", "Limit", "Number of results to return", 100.0);

    vec![
        (
            Operation::Hotspots(ListHotspots),
            ParameterCollection::new().with(cursor()).with(limit()),
        ),
        (
            Operation::Hotspots(GetHotspot),
            ParameterCollection::new().with(address()),
        ),
        (
            Operation::Hotspots(GetHotspotActivity),
            ParameterCollection::new().with(address()).with(cursor()).with(limit()),
        ),
        (
            Operation::Hotspots(GetHotspotRewards),
            ParameterCollection::new()
                .with(address())
                .with(date_time("min_time", "Min Time", "Minimum time for rewards query"))
                .with(date_time("max_time", "Max Time", "Maximum time for rewards query")),
        ),
        (
            Operation::Hotspots(GetHotspotWitnesses),
            ParameterCollection::new().with(address()).with(cursor()),
        ),
        (
            Operation::Hotspots(GetHotspotChallenged),
            ParameterCollection::new().with(address()).with(cursor()),
        ),
        (
            Operation::Hotspots(UpdateHotspot),
            ParameterCollection::new()
                .with(address())
                .with(text("name", "Name", "New name for the hotspot"))
                .with(number("lat", "Latitude", "Latitude coordinate", 0.0))
                .with(number("lng", "Longitude", "Longitude coordinate", 0.0)),
        ),
    ]
}

fn account_declarations() -> Vec<(Operation, ParameterCollection)> {
    use AccountOperation::*;

    let address = || required_text("address", "Account Address", "The Helium account address");
    let limit = || {
        ParameterDef::Number(
            NumberParameter::new("limit", "Limit")
                .described("Maximum number of results to return")
                .with_default(100.0)
                .with_range(1.0, 1000.0),
        )
    };

    vec![
        (
            Operation::Accounts(GetAccount),
            ParameterCollection::new().with(address()),
        ),
        (
            Operation::Accounts(GetAccountHotspots),
            ParameterCollection::new().with(address()).with(cursor()).with(limit()),
        ),
        (
            Operation::Accounts(GetAccountValidators),
            ParameterCollection::new().with(address()).with(cursor()).with(limit()),
        ),
        (
            Operation::Accounts(GetAccountActivity),
            ParameterCollection::new()
                .with(address())
                .with(cursor())
                .with(limit())
                .with(ParameterDef::Text(
                    TextParameter::new("filterTypes", "Filter Types")
                        .described("Comma-separated list of transaction types to filter by")
                        .with_placeholder("payment_v1,rewards_v1")
                        .with_default(""),
                )),
        ),
        (
            Operation::Accounts(GetAccountRewards),
            ParameterCollection::new()
                .with(address())
                .with(cursor())
                .with(ParameterDef::Text(
                    TextParameter::new("minTime", "Min Time")
                        .described("Minimum time for rewards query (ISO 8601 format)")
                        .with_placeholder("2023-01-01T00:00:00Z")
                        .with_default(""),
                ))
                .with(ParameterDef::Text(
                    TextParameter::new("maxTime", "Max Time")
                        .described("Maximum time for rewards query (ISO 8601 format)")
                        .with_placeholder("2023-12-31T23:59:59Z")
                        .with_default(""),
                )),
        ),
        (
            Operation::Accounts(GetPendingTransactions),
            ParameterCollection::new().with(address()),
        ),
        (
            Operation::Accounts(SubmitTransaction),
            ParameterCollection::new().with(address()).with(required_text(
                "txn",
                "Transaction Data",
                "The signed transaction data to submit",
            )),
        ),
    ]
}

fn validator_declarations() -> Vec<(Operation, ParameterCollection)> {
    use ValidatorOperation::*;

    let address = || required_text("address", "Validator Address", "The validator address");
    let limit = || number("limit", "Limit", "Maximum number of results to return", 20.0);

    vec![
        (
            Operation::Validators(ListValidators),
            ParameterCollection::new().with(cursor()).with(limit()),
        ),
        (
            Operation::Validators(GetValidator),
            ParameterCollection::new().with(address()),
        ),
        (
            Operation::Validators(GetValidatorActivity),
            ParameterCollection::new()
                .with(address())
                .with(text("cursor", "Activity Cursor", "Cursor for paginating activity results"))
                .with(limit()),
        ),
        (
            Operation::Validators(GetValidatorRewards),
            ParameterCollection::new()
                .with(address())
                .with(date_time("min_time", "Min Time", "Minimum time for reward period"))
                .with(date_time("max_time", "Max Time", "Maximum time for reward period")),
        ),
        (
            Operation::Validators(CreateValidator),
            ParameterCollection::new()
                .with(required_text(
                    "address",
                    "Validator Address",
                    "The validator address to create",
                ))
                .with(ParameterDef::Number(
                    NumberParameter::new("stake", "Stake Amount")
                        .described("Amount of HNT to stake (minimum 10,000 HNT)")
                        .required()
                        .with_default(10_000.0),
                )),
        ),
        (
            Operation::Validators(UpdateValidator),
            ParameterCollection::new().with(address()).with(required_text(
                "name",
                "Validator Name",
                "New name for the validator",
            )),
        ),
        (
            Operation::Validators(UnstakeValidator),
            ParameterCollection::new().with(address()),
        ),
    ]
}

fn reward_declarations() -> Vec<(Operation, ParameterCollection)> {
    use RewardOperation::*;

    let block = || required_number("block", "Block Number", "The block number to get rewards for");
    let limit = || number("limit", "Limit", "Maximum number of results to return", 100.0);

    vec![
        (
            Operation::Rewards(GetRewardsSum),
            ParameterCollection::new()
                .with(required_text(
                    "minTime",
                    "Min Time",
                    "Minimum time for the reward period (ISO 8601 format)",
                ))
                .with(required_text(
                    "maxTime",
                    "Max Time",
                    "Maximum time for the reward period (ISO 8601 format)",
                ))
                .with(ParameterDef::Select(
                    SelectParameter::new("bucket", "Bucket")
                        .described("Time bucket for grouping rewards")
                        .required()
                        .with_default("day")
                        .with_choices([
                            ("Hour", "hour"),
                            ("Day", "day"),
                            ("Week", "week"),
                            ("Month", "month"),
                        ]),
                )),
        ),
        (
            Operation::Rewards(GetBlockRewardsByAccount),
            ParameterCollection::new().with(block()).with(cursor()).with(limit()),
        ),
        (
            Operation::Rewards(GetBlockRewardsByHotspot),
            ParameterCollection::new().with(block()).with(cursor()).with(limit()),
        ),
        (
            Operation::Rewards(ClaimRewards),
            ParameterCollection::new()
                .with(required_text(
                    "account",
                    "Account Address",
                    "The account address to claim rewards for",
                ))
                .with(required_text(
                    "signature",
                    "Signature",
                    "Blockchain wallet signature for reward claim authorization",
                )),
        ),
        (Operation::Rewards(GetOraclePrice), ParameterCollection::new()),
        (
            Operation::Rewards(GetRewardPredictions),
            ParameterCollection::new()
                .with(required_text(
                    "address",
                    "Address",
                    "The address to get reward predictions for",
                ))
                .with(ParameterDef::Select(
                    SelectParameter::new("type", "Type")
                        .described("Type of entity to get predictions for")
                        .with_default("account")
                        .with_choices([
                            ("Account", "account"),
                            ("Hotspot", "hotspot"),
                            ("Validator", "validator"),
                        ]),
                )),
        ),
    ]
}

fn blockchain_declarations() -> Vec<(Operation, ParameterCollection)> {
    use BlockchainOperation::*;

    let limit = || number("limit", "Limit", "Maximum number of results to return", 20.0);

    vec![
        (
            Operation::Blockchain(ListBlocks),
            ParameterCollection::new().with(cursor()).with(limit()),
        ),
        (
            Operation::Blockchain(GetBlock),
            ParameterCollection::new().with(required_number(
                "height",
                "Block Height",
                "The block height to retrieve",
            )),
        ),
        (
            Operation::Blockchain(GetBlockTransactions),
            ParameterCollection::new()
                .with(required_number(
                    "height",
                    "Block Height",
                    "The block height to get transactions for",
                ))
                .with(cursor())
                .with(limit()),
        ),
        (
            Operation::Blockchain(GetTransaction),
            ParameterCollection::new().with(required_text(
                "hash",
                "Transaction Hash",
                "The transaction hash to retrieve",
            )),
        ),
        (
            Operation::Blockchain(GetPendingTransactions),
            ParameterCollection::new().with(cursor()).with(limit()),
        ),
        (
            Operation::Blockchain(BroadcastTransaction),
            ParameterCollection::new().with(required_text(
                "txn",
                "Transaction Data",
                "The signed transaction data to broadcast",
            )),
        ),
        (Operation::Blockchain(GetNetworkStats), ParameterCollection::new()),
    ]
}

fn election_declarations() -> Vec<(Operation, ParameterCollection)> {
    use ElectionOperation::*;

    let proposal_id = || {
        required_text("proposalId", "Proposal ID", "The ID of the governance proposal")
    };

    vec![
        (
            Operation::Elections(ListElections),
            ParameterCollection::new()
                .with(cursor())
                .with(number("limit", "Limit", "Maximum number of results to return", 100.0)),
        ),
        (
            Operation::Elections(GetElection),
            ParameterCollection::new().with(required_number(
                "height",
                "Block Height",
                "The block height of the election",
            )),
        ),
        (Operation::Elections(GetCurrentElection), ParameterCollection::new()),
        (
            Operation::Elections(SubmitVote),
            ParameterCollection::new()
                .with(proposal_id())
                .with(ParameterDef::Select(
                    SelectParameter::new("vote", "Vote")
                        .described("The vote choice")
                        .required()
                        .with_default("yes")
                        .with_choices([("Yes", "yes"), ("No", "no"), ("Abstain", "abstain")]),
                ))
                .with(required_text(
                    "signature",
                    "Signature",
                    "Blockchain wallet signature for the vote",
                )),
        ),
        (
            Operation::Elections(GetProposalVotes),
            ParameterCollection::new().with(proposal_id()).with(cursor()),
        ),
        (
            Operation::Elections(ListProposals),
            ParameterCollection::new()
                .with(ParameterDef::Select(
                    SelectParameter::new("status", "Status")
                        .described("Filter proposals by status")
                        .with_default("active")
                        .with_choices([
                            ("Active", "active"),
                            ("Pending", "pending"),
                            ("Closed", "closed"),
                            ("All", "all"),
                        ]),
                ))
                .with(cursor()),
        ),
        (
            Operation::Elections(GetProposal),
            ParameterCollection::new().with(proposal_id()),
        ),
    ]
}
