pub(crate) mod url;
pub(crate) mod wallet;
