use crate::console::{console_error, console_log};

use super::{
    generation::Generation,
    provider::{self, ProviderError},
};
use arbiswap_header_types::{active_account, parse_chain_id, Account};
use std::rc::Rc;
use web_sys::{window, Window};
use yew::prelude::*;

fn get_provider(window: &Option<Window>) -> Result<provider::Provider, ProviderError> {
    let window: &Window =
        window.as_ref().ok_or(ProviderError::Unsupported("no window available".to_owned()))?;
    let provider = provider::Provider::new(window)?;
    Ok(provider)
}

fn set_chain_id(chain_id: &UseStateHandle<Option<u64>>, raw: Result<String, ProviderError>) {
    let parsed = raw.map_err(|err| err.to_string()).and_then(|raw| {
        parse_chain_id(&raw).map_err(|err| err.to_string())
    });
    match parsed {
        Ok(value) => chain_id.set(Some(value)),
        Err(err) => {
            console_error!("invalid chain id: {}", err);
            chain_id.set(None);
        }
    }
}

fn set_accounts(
    accounts: &UseStateHandle<Option<Vec<String>>>,
    raw: Result<Vec<String>, ProviderError>,
) {
    match raw {
        Ok(new_accounts) => accounts.set(Some(new_accounts)),
        Err(err) => {
            console_error!("invalid accounts: {}", err);
            accounts.set(None);
        }
    }
}

/// Reads the state the wallet already has, events only report changes.
///
/// A reply is dropped when an event updated the same value in the meantime.
fn fetch_initial_state(
    provider: provider::Provider,
    chain_id: UseStateHandle<Option<u64>>,
    accounts: UseStateHandle<Option<Vec<String>>>,
    freshness: &Freshness,
) {
    let chain_ticket = freshness.chain_id.next();
    let accounts_ticket = freshness.accounts.next();
    wasm_bindgen_futures::spawn_local(async move {
        let raw_chain_id = provider.chain_id().await;
        if chain_ticket.is_current() {
            set_chain_id(&chain_id, raw_chain_id);
        }
        let raw_accounts = provider.accounts().await;
        if accounts_ticket.is_current() {
            set_accounts(&accounts, raw_accounts);
        }
    });
}

/// One counter per value the wallet reports, shared by reads and events.
#[derive(Clone, Default)]
struct Freshness {
    chain_id: Generation,
    accounts: Generation,
}

impl Freshness {
    fn invalidate(&self) {
        self.chain_id.invalidate();
        self.accounts.invalidate();
    }
}

fn listen_to_provider(
    provider: provider::Provider,
    chain_id: UseStateHandle<Option<u64>>,
    accounts: UseStateHandle<Option<Vec<String>>>,
    freshness: &Freshness,
) -> Result<Box<dyn Fn()>, ProviderError> {
    let connect_cb = Box::new(|info: Result<provider::ConnectInfo, ProviderError>| {
        console_log!("on_connect: {:?}", info);
    });

    let chain_changed_cb = {
        let chain_id = chain_id.clone();
        let generation = freshness.chain_id.clone();
        Box::new(move |new_chain_id: Result<String, ProviderError>| {
            generation.invalidate();
            set_chain_id(&chain_id, new_chain_id);
        })
    };

    let accounts_changed_cb = {
        let accounts = accounts.clone();
        let generation = freshness.accounts.clone();
        Box::new(move |new_accounts: Result<Vec<String>, ProviderError>| {
            generation.invalidate();
            set_accounts(&accounts, new_accounts);
        })
    };

    let disconnect_cb = {
        let freshness = freshness.clone();
        Box::new(move |err: Result<provider::RPCError, ProviderError>| {
            console_log!("on_disconnect: {:?}", err);
            freshness.invalidate();
            chain_id.set(None);
            accounts.set(None);
        })
    };

    let connect_closure = provider.on_connect(connect_cb)?;
    let chain_changed_closure = provider.on_chain_changed(chain_changed_cb)?;
    let accounts_changed_closure = provider.on_accounts_changed(accounts_changed_cb)?;
    let disconnect_closure = provider.on_disconnect(disconnect_cb)?;

    let freshness = freshness.clone();
    Ok(Box::new(move || {
        freshness.invalidate();
        // nothing to do if removal fails, the provider is going away anyway
        let _ = provider.remove_connect_listener(&connect_closure);
        let _ = provider.remove_chain_changed_listener(&chain_changed_closure);
        let _ = provider.remove_accounts_changed_listener(&accounts_changed_closure);
        let _ = provider.remove_disconnect_listener(&disconnect_closure);
    }))
}

#[derive(Debug, PartialEq, Clone)]
pub struct WalletStatus {
    pub provider: provider::Provider,
    pub chain_id: Option<u64>,
    pub accounts: Option<Vec<String>>,
}

impl WalletStatus {
    /// The account the wallet exposes first, if any.
    pub fn account(&self) -> Option<Account> {
        self.accounts.as_deref().and_then(active_account::<String>)
    }
}

/// Live wallet state.
///
/// `None` until the provider has been looked up, `Some(Err(_))` when the page
/// has no usable wallet.
#[hook]
pub fn use_wallet() -> Option<Result<WalletStatus, ProviderError>> {
    let provider = use_state(|| None);
    let error = use_state(|| None);
    let chain_id = use_state(|| None);
    let accounts = use_state(|| None);

    {
        let provider = provider.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |window| {
                match get_provider(window) {
                    Ok(p) => {
                        provider.set(Some(Rc::new(p)));
                        error.set(None);
                    }
                    Err(err) => {
                        provider.set(None);
                        error.set(Some(err));
                    }
                };
            },
            window(),
        );
    }

    {
        let error = error.clone();
        let chain_id = chain_id.clone();
        let accounts = accounts.clone();
        use_effect_with_deps(
            move |provider| -> Box<dyn Fn()> {
                match provider.as_deref() {
                    None => Box::new(|| {}),
                    Some(provider) => {
                        let freshness = Freshness::default();
                        fetch_initial_state(
                            provider.clone(),
                            chain_id.clone(),
                            accounts.clone(),
                            &freshness,
                        );
                        match listen_to_provider(provider.clone(), chain_id, accounts, &freshness) {
                            Ok(cleanup) => {
                                error.set(None);
                                cleanup
                            }
                            Err(err) => {
                                freshness.invalidate();
                                error.set(Some(err));
                                Box::new(|| {})
                            }
                        }
                    }
                }
            },
            Option::clone(&provider),
        );
    }

    if let Some(ref err) = Option::clone(&error) {
        return Some(Err(err.clone()));
    };

    provider.as_deref().map(|provider| {
        Ok(WalletStatus {
            provider: provider.clone(),
            chain_id: *chain_id,
            accounts: Option::clone(&accounts),
        })
    })
}
