use crate::{chain::ChainId, Account};
use serde::Serialize;

/// What the header knows about the user's wallet.
///
/// This is always derived from the current account and chain id, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionStatus {
    Disconnected,
    ConnectedWrongNetwork,
    ConnectedTargetNetwork,
}

impl ConnectionStatus {
    /// Resolves against [`ChainId::TARGET`].
    ///
    /// A missing account or a missing chain id is neutral: no wrong-network
    /// warning is raised until a wallet reports both.
    pub fn resolve(account: Option<&Account>, chain_id: Option<u64>) -> Self {
        match (account, chain_id) {
            (None, _) | (_, None) => Self::Disconnected,
            (Some(_), Some(id)) if id != ChainId::TARGET.id() => Self::ConnectedWrongNetwork,
            (Some(_), Some(_)) => Self::ConnectedTargetNetwork,
        }
    }

    pub fn is_wrong_network(self) -> bool {
        matches!(self, Self::ConnectedWrongNetwork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::Address;

    fn account() -> Address {
        Address::repeat_byte(0xab)
    }

    #[test]
    fn target_chain_with_account_is_connected() {
        assert_eq!(
            ConnectionStatus::resolve(Some(&account()), Some(ChainId::TARGET.id())),
            ConnectionStatus::ConnectedTargetNetwork
        );
    }

    #[test]
    fn any_other_chain_with_account_is_wrong_network() {
        let known = ChainId::ALL.into_iter().filter(|c| !c.is_target()).map(ChainId::id);
        for id in known.chain([0, 10, 137, 421611, u64::MAX]) {
            assert_eq!(
                ConnectionStatus::resolve(Some(&account()), Some(id)),
                ConnectionStatus::ConnectedWrongNetwork,
                "chain {id}"
            );
        }
    }

    #[test]
    fn no_account_never_warns() {
        for id in [None, Some(1), Some(4), Some(ChainId::TARGET.id()), Some(999)] {
            let status = ConnectionStatus::resolve(None, id);
            assert_eq!(status, ConnectionStatus::Disconnected, "chain {id:?}");
            assert!(!status.is_wrong_network());
        }
    }

    #[test]
    fn missing_chain_id_is_neutral() {
        let status = ConnectionStatus::resolve(Some(&account()), None);
        assert_eq!(status, ConnectionStatus::Disconnected);
        assert!(!status.is_wrong_network());
    }
}
