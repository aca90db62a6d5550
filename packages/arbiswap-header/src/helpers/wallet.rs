use arbiswap_header_types::ChainId;
use arbiswap_wallet::provider::{ProviderError, UNRECOGNIZED_CHAIN};

pub(crate) const NO_WALLET: &str =
    "You do not have a browser wallet, please install one to continue";

/// User-facing text for a failed wallet request.
pub(crate) fn describe_error(err: &ProviderError) -> String {
    match err {
        ProviderError::RPC(err) if err.is_user_rejection() => {
            "Request rejected in your wallet".to_owned()
        }
        ProviderError::RPC(err) if err.code == UNRECOGNIZED_CHAIN => {
            format!("{} is not configured in your wallet", ChainId::TARGET)
        }
        ProviderError::Unsupported(_) => NO_WALLET.to_owned(),
        other => format!("Error: {}", other),
    }
}
