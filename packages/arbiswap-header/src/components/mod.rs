pub(crate) mod account_element;
pub(crate) mod connect_modal;
pub(crate) mod header;
pub(crate) mod loader;
pub(crate) mod menu;
pub(crate) mod network_card;
pub(crate) mod request_tokens;
pub(crate) mod settings;
pub(crate) mod version_switch;
pub(crate) mod web3_status;
