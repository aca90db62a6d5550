use crate::console::console_error;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

/// Whether a known viewport `width` is narrower than `breakpoint_px`.
pub(crate) fn is_narrower(width: Option<f64>, breakpoint_px: u32) -> bool {
    width.map_or(false, |width| width < f64::from(breakpoint_px))
}

fn current_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Inner width of the window, kept current on resize.
#[hook]
pub(crate) fn use_viewport_width() -> Option<f64> {
    let width = use_state(current_width);

    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| -> Box<dyn FnOnce()> {
                let Some(win) = window() else {
                    return Box::new(|| {});
                };
                let on_resize: Closure<dyn Fn()> = Closure::new(move || width.set(current_width()));
                if let Err(err) = win
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                {
                    console_error!("could not listen to resize: {:?}", err);
                    return Box::new(|| {});
                }
                Box::new(move || {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                })
            },
            (),
        );
    }

    *width
}
