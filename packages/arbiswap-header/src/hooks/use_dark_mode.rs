use crate::console::console_error;
use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "arbiswap:dark-mode";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// A stored choice wins over the system preference.
pub(crate) fn resolve_dark_mode(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => system_prefers_dark,
    }
}

fn stored_preference() -> Option<String> {
    window()?.local_storage().ok()??.get_item(STORAGE_KEY).ok()?
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn store_preference(dark: bool) {
    let storage = window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(storage) => {
            if let Err(err) = storage.set_item(STORAGE_KEY, &dark.to_string()) {
                console_error!("could not store dark mode preference: {:?}", err);
            }
        }
        None => console_error!("no local storage, dark mode preference not saved"),
    }
}

/// Returns the current preference and a callback flipping it.
#[hook]
pub(crate) fn use_dark_mode() -> (bool, Callback<()>) {
    let dark =
        use_state(|| resolve_dark_mode(stored_preference().as_deref(), system_prefers_dark()));

    let toggle = {
        let dark = dark.clone();
        Callback::from(move |_: ()| {
            let next = !*dark;
            store_preference(next);
            dark.set(next);
        })
    };

    (*dark, toggle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_overrides_system() {
        assert!(resolve_dark_mode(Some("true"), false));
        assert!(!resolve_dark_mode(Some("false"), true));
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert!(resolve_dark_mode(None, true));
        assert!(!resolve_dark_mode(None, false));
        assert!(resolve_dark_mode(Some("garbage"), true));
    }
}
