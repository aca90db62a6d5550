use crate::console::console_error;
use arbiswap_header_types::{Account, Balances, EthBalance};
use arbiswap_wallet::{yew::WalletStatus, Generation, Provider};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

async fn fetch_balance(provider: &Provider, account: Account) -> Result<EthBalance, String> {
    let quantity =
        provider.get_balance(format!("{:#x}", account)).await.map_err(|e| e.to_string())?;
    EthBalance::from_quantity(&quantity).map_err(|e| e.to_string())
}

/// Native balance of the active account, read through the wallet.
///
/// The account has no entry while the read is in flight or after it failed,
/// which the header shows as loading. Replies to reads started for an earlier
/// provider, account or chain are dropped.
#[hook]
pub(crate) fn use_eth_balances(status: Option<WalletStatus>) -> Balances {
    let balances = use_state(Balances::new);
    let generation = use_memo(|_| Generation::new(), ());

    #[derive(PartialEq, Clone)]
    struct Deps {
        provider: Option<Provider>,
        account: Option<Account>,
        chain_id: Option<u64>,
    }
    let deps = Deps {
        provider: status.as_ref().map(|s| s.provider.clone()),
        account: status.as_ref().and_then(WalletStatus::account),
        chain_id: status.as_ref().and_then(|s| s.chain_id),
    };

    {
        let balances = balances.clone();
        let generation = Generation::clone(&generation);
        use_effect_with_deps(
            move |deps| {
                let ticket = generation.next();
                balances.set(Balances::new());
                if let Deps { provider: Some(provider), account: Some(account), .. } = deps.clone()
                {
                    spawn_local(async move {
                        let result = fetch_balance(&provider, account).await;
                        if !ticket.is_current() {
                            return;
                        }
                        match result {
                            Ok(balance) => balances.set(Balances::from([(account, balance)])),
                            Err(err) => console_error!("balance of {:#x}: {}", account, err),
                        }
                    });
                }
                move || generation.invalidate()
            },
            deps,
        );
    }

    Balances::clone(&balances)
}
