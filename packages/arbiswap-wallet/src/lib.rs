#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "yew")]
mod console;

pub mod generation;
pub mod provider;
pub use generation::{Generation, Ticket};
pub use provider::{Provider, ProviderError};

#[cfg(feature = "yew")]
pub mod yew;
