use js_sys::{Function, Object};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use wasm_bindgen::{closure::Closure, prelude::*, JsValue};
use web_sys::Window;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("rpc error: {0}")]
    RPC(RPCError),
    #[error("deserialize error: {0}")]
    Deserialize(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<JsValue> for ProviderError {
    fn from(js: JsValue) -> Self {
        Self::Unsupported(format!("unsupported JS call: {:?}", js))
    }
}

impl From<serde_wasm_bindgen::Error> for ProviderError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

/// EIP-1193 provider injected by the browser wallet.
#[derive(Debug, PartialEq, Clone)]
pub struct Provider {
    this: JsValue,
    request: Function,
    // EIP-1193 uses EventEmitter instead of EventTarget
    on: Function,
    remove_listener: Function,
    // non-standards
    pub _is_coinbase_wallet: Option<bool>, // provided by CoinBase Wallet
    pub _is_meta_mask: Option<bool>,       // provided by MetaMask
}

impl Provider {
    pub fn new(win: &Window) -> Result<Self, ProviderError> {
        let provider = win
            .get("ethereum")
            .ok_or_else(|| ProviderError::Unsupported("missing provider".to_owned()))?;
        Self::from_object(provider)
    }

    fn from_object(provider: Object) -> Result<Self, ProviderError> {
        let request = js_sys::Reflect::get(&provider, &JsValue::from("request"))?;
        let on = js_sys::Reflect::get(&provider, &JsValue::from("on"))?;
        let remove_listener = js_sys::Reflect::get(&provider, &JsValue::from("removeListener"))?;
        if !request.is_function() || !on.is_function() || !remove_listener.is_function() {
            return Err(ProviderError::Unsupported("not an EIP-1193 provider".to_owned()));
        }
        let is_coinbase_wallet =
            js_sys::Reflect::get(&provider, &JsValue::from("isCoinbaseWallet")).ok();
        let is_meta_mask = js_sys::Reflect::get(&provider, &JsValue::from("isMetaMask")).ok();
        Ok(Self {
            this: provider.into(),
            request: request.into(),
            on: on.into(),
            remove_listener: remove_listener.into(),
            _is_coinbase_wallet: is_coinbase_wallet.and_then(|v| v.as_bool()),
            _is_meta_mask: is_meta_mask.and_then(|v| v.as_bool()),
        })
    }

    pub fn wallet_name(&self) -> &'static str {
        if self._is_coinbase_wallet.unwrap_or(false) {
            "CoinBase Wallet"
        } else if self._is_meta_mask.unwrap_or(false) {
            "MetaMask"
        } else {
            "Browser Wallet"
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ConnectInfo {
    #[serde(rename = "chainId")]
    pub chain_id: String,
}

fn parse_js<T: for<'de> serde::Deserialize<'de>>(data: JsValue) -> Result<T, ProviderError> {
    Ok(serde_wasm_bindgen::from_value(data)?)
}

/// Chain ids arrive as hex strings, but some wallets emit plain numbers.
fn parse_chain_id_value(data: JsValue) -> Result<String, ProviderError> {
    match parse_js::<Value>(data)? {
        Value::String(chain_id) => Ok(chain_id),
        Value::Number(chain_id) => Ok(chain_id.to_string()),
        other => Err(ProviderError::Deserialize(format!("unexpected chain id: {}", other))),
    }
}

pub type Callback = Closure<dyn Fn(JsValue)>;

static CONNECT: &str = "connect";
static DISCONNECT: &str = "disconnect";
static CHAIN_CHANGED: &str = "chainChanged";
static ACCOUNTS_CHANGED: &str = "accountsChanged";

impl Provider {
    pub fn on(&self, event: &str, callback: &Callback) -> Result<(), ProviderError> {
        self.on.call2(&self.this, &JsValue::from(event), callback.as_ref().unchecked_ref())?;
        Ok(())
    }

    pub fn on_connect(
        &self,
        callback: Box<dyn Fn(Result<ConnectInfo, ProviderError>)>,
    ) -> Result<Callback, ProviderError> {
        let closure = Closure::new(move |data| callback(parse_js(data)));
        self.on(CONNECT, &closure)?;
        Ok(closure)
    }

    pub fn on_disconnect(
        &self,
        callback: Box<dyn Fn(Result<RPCError, ProviderError>)>,
    ) -> Result<Callback, ProviderError> {
        let closure = Closure::new(move |data| callback(parse_js(data)));
        self.on(DISCONNECT, &closure)?;
        Ok(closure)
    }

    pub fn on_chain_changed(
        &self,
        callback: Box<dyn Fn(Result<String, ProviderError>)>,
    ) -> Result<Callback, ProviderError> {
        let closure = Closure::new(move |data| callback(parse_chain_id_value(data)));
        self.on(CHAIN_CHANGED, &closure)?;
        Ok(closure)
    }

    pub fn on_accounts_changed(
        &self,
        callback: Box<dyn Fn(Result<Vec<String>, ProviderError>)>,
    ) -> Result<Callback, ProviderError> {
        let closure = Closure::new(move |data| callback(parse_js(data)));
        self.on(ACCOUNTS_CHANGED, &closure)?;
        Ok(closure)
    }

    pub fn remove_listener(&self, event: &str, callback: &Callback) -> Result<(), ProviderError> {
        self.remove_listener.call2(
            &self.this,
            &JsValue::from(event),
            callback.as_ref().unchecked_ref(),
        )?;
        Ok(())
    }

    pub fn remove_connect_listener(&self, callback: &Callback) -> Result<(), ProviderError> {
        self.remove_listener(CONNECT, callback)
    }

    pub fn remove_disconnect_listener(&self, callback: &Callback) -> Result<(), ProviderError> {
        self.remove_listener(DISCONNECT, callback)
    }

    pub fn remove_chain_changed_listener(&self, callback: &Callback) -> Result<(), ProviderError> {
        self.remove_listener(CHAIN_CHANGED, callback)
    }

    pub fn remove_accounts_changed_listener(
        &self,
        callback: &Callback,
    ) -> Result<(), ProviderError> {
        self.remove_listener(ACCOUNTS_CHANGED, callback)
    }
}

#[derive(Serialize)]
pub struct RequestMethod<T> {
    pub method: String,
    pub params: Option<Vec<T>>,
}

pub const USER_REJECTED_REQUEST: i64 = 4001;
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RPCError {
    pub code: i64,
    pub message: String,
    pub data: Option<Value>,
}

impl RPCError {
    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_REQUEST
    }
}

impl fmt::Display for RPCError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.message)
    }
}

#[derive(Serialize)]
struct SwitchEthereumChainParams {
    #[serde(rename = "chainId")]
    chain_id: String,
}

static REQUEST_SWITCH_CHAIN_ID: &str = "wallet_switchEthereumChain";
static REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
static ACCOUNTS: &str = "eth_accounts";
static CHAIN_ID: &str = "eth_chainId";
static GET_BALANCE: &str = "eth_getBalance";

impl Provider {
    pub async fn request<T: Serialize>(
        &self,
        method: &str,
        params: Option<Vec<T>>,
    ) -> Result<JsValue, ProviderError> {
        let promise = self.request.call1(
            &self.this,
            &serde_wasm_bindgen::to_value(&RequestMethod { method: method.to_owned(), params })?,
        )?;
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::from(promise)).await.map_err(|e| {
            match serde_wasm_bindgen::from_value(e) {
                Ok(err) => ProviderError::RPC(err),
                Err(err) => ProviderError::Deserialize(err.to_string()),
            }
        })
    }

    /// Prompts the user to connect; resolves with the exposed accounts.
    pub async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let data = self.request::<()>(REQUEST_ACCOUNTS, None).await?;
        parse_js(data)
    }

    /// Accounts already exposed to this page, without prompting.
    pub async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        let data = self.request::<()>(ACCOUNTS, None).await?;
        parse_js(data)
    }

    pub async fn chain_id(&self) -> Result<String, ProviderError> {
        let data = self.request::<()>(CHAIN_ID, None).await?;
        parse_chain_id_value(data)
    }

    /// Native balance at the latest block, as a hex quantity.
    pub async fn get_balance(&self, address: String) -> Result<String, ProviderError> {
        let data = self.request(GET_BALANCE, Some(vec![address, "latest".to_owned()])).await?;
        parse_js(data)
    }

    /// `chain_id` is a `0x`-prefixed hex quantity.
    pub async fn request_switch_chain(&self, chain_id: String) -> Result<(), ProviderError> {
        self.request(REQUEST_SWITCH_CHAIN_ID, Some(vec![SwitchEthereumChainParams { chain_id }]))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_errors_display_code_and_message() {
        let err = RPCError { code: 4001, message: "User rejected".to_owned(), data: None };
        assert_eq!(err.to_string(), "error 4001: User rejected");
        assert!(err.is_user_rejection());
        assert_eq!(
            ProviderError::RPC(err).to_string(),
            "rpc error: error 4001: User rejected"
        );
    }

    #[test]
    fn rpc_errors_deserialize_from_wallet_json() {
        let err: RPCError =
            serde_json::from_str(r#"{"code": 4902, "message": "Unrecognized chain ID"}"#)
                .unwrap();
        assert_eq!(err.code, UNRECOGNIZED_CHAIN);
        assert!(!err.is_user_rejection());
        assert_eq!(err.data, None);
    }

    #[test]
    fn requests_serialize_like_eip1193() {
        let request = RequestMethod {
            method: REQUEST_SWITCH_CHAIN_ID.to_owned(),
            params: Some(vec![SwitchEthereumChainParams { chain_id: "0x4".to_owned() }]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "method": "wallet_switchEthereumChain",
                "params": [{"chainId": "0x4"}],
            })
        );
    }
}
