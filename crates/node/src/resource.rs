//! Resource and operation selectors.
//!
//! The original dispatch branched on raw strings at call time; here the
//! whole surface is a closed set of enums matched exhaustively, so an
//! unknown (resource, operation) pair is rejected once at batch start
//! instead of surfacing as a runtime error mid-item.

use serde::{Deserialize, Serialize};

/// The six API resources the node exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Wireless gateway devices registered on the network.
    Hotspots,
    /// Wallet accounts and their holdings.
    Accounts,
    /// Staked consensus participants.
    Validators,
    /// Reward sums, distributions, and predictions.
    Rewards,
    /// Blocks, transactions, and network statistics.
    Blockchain,
    /// Consensus group elections and governance.
    Elections,
}

impl Resource {
    /// Every resource, in UI declaration order.
    pub const ALL: [Self; 6] = [
        Self::Hotspots,
        Self::Accounts,
        Self::Validators,
        Self::Rewards,
        Self::Blockchain,
        Self::Elections,
    ];

    /// The wire key the host selects this resource by.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Hotspots => "hotspots",
            Self::Accounts => "accounts",
            Self::Validators => "validators",
            Self::Rewards => "rewards",
            Self::Blockchain => "blockchain",
            Self::Elections => "elections",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hotspots => "Hotspots",
            Self::Accounts => "Accounts",
            Self::Validators => "Validators",
            Self::Rewards => "Rewards",
            Self::Blockchain => "Blockchain",
            Self::Elections => "Elections",
        }
    }

    /// Resolve a wire key back to a resource.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == key)
    }
}

macro_rules! operation_enum {
    (
        $(#[$doc:meta])*
        $enum_name:ident {
            $( $variant:ident => ($key:literal, $name:literal, $desc:literal) ),+ $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $enum_name {
            $(
                #[doc = $desc]
                $variant,
            )+
        }

        impl $enum_name {
            /// Every operation, in UI declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// The wire key the host selects this operation by.
            #[must_use]
            pub fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            /// Human-readable display name.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Short description of what the operation does.
            #[must_use]
            pub fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )+
                }
            }

            /// Resolve a wire key back to an operation.
            #[must_use]
            pub fn from_key(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| op.key() == key)
            }
        }
    };
}

operation_enum! {
    /// Operations on the `hotspots` resource.
    HotspotOperation {
        ListHotspots => ("listHotspots", "List Hotspots", "Get all hotspots with pagination"),
        GetHotspot => ("getHotspot", "Get Hotspot", "Get specific hotspot by address"),
        GetHotspotActivity => ("getHotspotActivity", "Get Hotspot Activity", "Get hotspot activity history"),
        GetHotspotRewards => ("getHotspotRewards", "Get Hotspot Rewards", "Get rewards earned by hotspot"),
        GetHotspotWitnesses => ("getHotspotWitnesses", "Get Hotspot Witnesses", "Get hotspots witnessed by this hotspot"),
        GetHotspotChallenged => ("getHotspotChallenged", "Get Hotspot Challenged", "Get challenge activity for hotspot"),
        UpdateHotspot => ("updateHotspot", "Update Hotspot", "Update hotspot settings like name or location"),
    }
}

operation_enum! {
    /// Operations on the `accounts` resource.
    AccountOperation {
        GetAccount => ("getAccount", "Get Account", "Get account information by address"),
        GetAccountHotspots => ("getAccountHotspots", "Get Account Hotspots", "Get hotspots owned by account"),
        GetAccountValidators => ("getAccountValidators", "Get Account Validators", "Get validators owned by account"),
        GetAccountActivity => ("getAccountActivity", "Get Account Activity", "Get account transaction activity"),
        GetAccountRewards => ("getAccountRewards", "Get Account Rewards", "Get rewards earned by account"),
        GetPendingTransactions => ("getPendingTransactions", "Get Pending Transactions", "Get pending transactions for account"),
        SubmitTransaction => ("submitTransaction", "Submit Transaction", "Submit a signed transaction"),
    }
}

operation_enum! {
    /// Operations on the `validators` resource.
    ValidatorOperation {
        ListValidators => ("listValidators", "List Validators", "Get all validators with pagination"),
        GetValidator => ("getValidator", "Get Validator", "Get specific validator by address"),
        GetValidatorActivity => ("getValidatorActivity", "Get Validator Activity", "Get validator activity and consensus participation"),
        GetValidatorRewards => ("getValidatorRewards", "Get Validator Rewards", "Get rewards earned by validator"),
        CreateValidator => ("createValidator", "Create Validator", "Stake HNT to create a new validator"),
        UpdateValidator => ("updateValidator", "Update Validator", "Update validator settings"),
        UnstakeValidator => ("unstakeValidator", "Unstake Validator", "Initiate validator unstaking process"),
    }
}

operation_enum! {
    /// Operations on the `rewards` resource.
    RewardOperation {
        GetRewardsSum => ("getRewardsSum", "Get Rewards Sum", "Get total rewards for time period"),
        GetBlockRewardsByAccount => ("getBlockRewardsByAccount", "Get Block Rewards By Account", "Get reward distribution for specific block by account"),
        GetBlockRewardsByHotspot => ("getBlockRewardsByHotspot", "Get Block Rewards By Hotspot", "Get hotspot rewards for specific block"),
        ClaimRewards => ("claimRewards", "Claim Rewards", "Claim pending rewards to wallet"),
        GetOraclePrice => ("getOraclePrice", "Get Oracle Price", "Get current HNT oracle price"),
        GetRewardPredictions => ("getRewardPredictions", "Get Reward Predictions", "Get predicted rewards for next epoch"),
    }
}

operation_enum! {
    /// Operations on the `blockchain` resource.
    BlockchainOperation {
        ListBlocks => ("listBlocks", "List Blocks", "Get recent blocks with pagination"),
        GetBlock => ("getBlock", "Get Block", "Get specific block by height"),
        GetBlockTransactions => ("getBlockTransactions", "Get Block Transactions", "Get transactions in a block"),
        GetTransaction => ("getTransaction", "Get Transaction", "Get transaction details by hash"),
        GetPendingTransactions => ("getPendingTransactions", "Get Pending Transactions", "Get pending transaction pool"),
        BroadcastTransaction => ("broadcastTransaction", "Broadcast Transaction", "Broadcast signed transaction to network"),
        GetNetworkStats => ("getNetworkStats", "Get Network Stats", "Get current network statistics"),
    }
}

operation_enum! {
    /// Operations on the `elections` resource.
    ElectionOperation {
        ListElections => ("listElections", "List Elections", "Get consensus group elections"),
        GetElection => ("getElection", "Get Election", "Get specific election by block height"),
        GetCurrentElection => ("getCurrentElection", "Get Current Election", "Get current consensus group"),
        SubmitVote => ("submitVote", "Submit Vote", "Submit governance vote"),
        GetProposalVotes => ("getProposalVotes", "Get Proposal Votes", "Get votes for governance proposal"),
        ListProposals => ("listProposals", "List Proposals", "Get active governance proposals"),
        GetProposal => ("getProposal", "Get Proposal", "Get specific governance proposal"),
    }
}

/// A fully-resolved (resource, operation) pair.
///
/// This is the value the dispatcher runs: every reachable pair is a
/// variant here, so dispatch is exhaustive and the "unknown operation"
/// runtime path of the original does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "resource", content = "operation", rename_all = "lowercase")]
pub enum Operation {
    /// A hotspots operation.
    Hotspots(HotspotOperation),
    /// An accounts operation.
    Accounts(AccountOperation),
    /// A validators operation.
    Validators(ValidatorOperation),
    /// A rewards operation.
    Rewards(RewardOperation),
    /// A blockchain operation.
    Blockchain(BlockchainOperation),
    /// An elections operation.
    Elections(ElectionOperation),
}

impl Operation {
    /// The resource this operation belongs to.
    #[must_use]
    pub fn resource(self) -> Resource {
        match self {
            Self::Hotspots(_) => Resource::Hotspots,
            Self::Accounts(_) => Resource::Accounts,
            Self::Validators(_) => Resource::Validators,
            Self::Rewards(_) => Resource::Rewards,
            Self::Blockchain(_) => Resource::Blockchain,
            Self::Elections(_) => Resource::Elections,
        }
    }

    /// The operation's wire key (e.g. `"listHotspots"`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Hotspots(op) => op.key(),
            Self::Accounts(op) => op.key(),
            Self::Validators(op) => op.key(),
            Self::Rewards(op) => op.key(),
            Self::Blockchain(op) => op.key(),
            Self::Elections(op) => op.key(),
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hotspots(op) => op.name(),
            Self::Accounts(op) => op.name(),
            Self::Validators(op) => op.name(),
            Self::Rewards(op) => op.name(),
            Self::Blockchain(op) => op.name(),
            Self::Elections(op) => op.name(),
        }
    }

    /// Short description of what the operation does.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Hotspots(op) => op.description(),
            Self::Accounts(op) => op.description(),
            Self::Validators(op) => op.description(),
            Self::Rewards(op) => op.description(),
            Self::Blockchain(op) => op.description(),
            Self::Elections(op) => op.description(),
        }
    }

    /// Resolve a (resource key, operation key) pair from the host.
    ///
    /// Returns `None` when either key is unknown or the operation does
    /// not belong to the resource.
    #[must_use]
    pub fn parse(resource: &str, operation: &str) -> Option<Self> {
        match Resource::from_key(resource)? {
            Resource::Hotspots => HotspotOperation::from_key(operation).map(Self::Hotspots),
            Resource::Accounts => AccountOperation::from_key(operation).map(Self::Accounts),
            Resource::Validators => ValidatorOperation::from_key(operation).map(Self::Validators),
            Resource::Rewards => RewardOperation::from_key(operation).map(Self::Rewards),
            Resource::Blockchain => BlockchainOperation::from_key(operation).map(Self::Blockchain),
            Resource::Elections => ElectionOperation::from_key(operation).map(Self::Elections),
        }
    }
}
