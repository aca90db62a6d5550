use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError};
use tracing::{debug, trace};

/// Networks the header knows how to name.
///
/// The set is closed: a wallet on any other chain is still reported as being on
/// the wrong network, it just doesn't get a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u64)]
pub enum ChainId {
    Mainnet = 1,
    Ropsten = 3,
    Rinkeby = 4,
    Goerli = 5,
    Kovan = 42,
    Arbitrum = 152_709_604_825_713,
}

impl ChainId {
    /// The network this client is built to trade on.
    pub const TARGET: ChainId = ChainId::Arbitrum;

    pub const ALL: [ChainId; 6] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Rinkeby,
        ChainId::Goerli,
        ChainId::Kovan,
        ChainId::Arbitrum,
    ];

    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|chain| chain.id() == id)
    }

    /// Human readable name, used in call-to-action texts.
    pub fn name(self) -> &'static str {
        match self {
            ChainId::Mainnet => "Mainnet",
            ChainId::Ropsten => "Ropsten",
            ChainId::Rinkeby => "Rinkeby",
            ChainId::Goerli => "Görli",
            ChainId::Kovan => "Kovan",
            ChainId::Arbitrum => "Arbitrum",
        }
    }

    /// Badge text for this network, `None` for the target network.
    pub fn label(self) -> Option<&'static str> {
        match self {
            ChainId::Arbitrum => None,
            other => Some(other.name()),
        }
    }

    pub fn is_target(self) -> bool {
        self == Self::TARGET
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u64> for ChainId {
    type Error = ChainIdError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(ChainIdError::Unknown(id))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainIdError {
    #[error("empty chain id")]
    Empty,
    #[error("invalid chain id {0:?}: {1}")]
    Invalid(String, ParseIntError),
    #[error("unknown chain id {0}")]
    Unknown(u64),
}

/// Badge text for a raw chain id.
///
/// Ids outside the table behave like the target network: no badge.
pub fn network_label(chain_id: u64) -> Option<&'static str> {
    match ChainId::from_id(chain_id) {
        Some(chain) => chain.label(),
        None => {
            trace!(chain_id, "no label for unknown chain");
            None
        }
    }
}

/// Parses a chain id as reported by a wallet.
///
/// EIP-1193 wallets send a `0x`-prefixed hex quantity, some older ones send a
/// decimal string (or a number, which reaches us already stringified).
pub fn parse_chain_id(raw: &str) -> Result<u64, ChainIdError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ChainIdError::Empty);
    }
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|err| {
        debug!(raw, %err, "unparseable chain id");
        ChainIdError::Invalid(raw.to_owned(), err)
    })
}

/// Hex quantity for `wallet_switchEthereumChain`.
pub fn chain_id_to_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}
