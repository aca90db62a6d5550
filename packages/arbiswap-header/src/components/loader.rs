use yew::prelude::*;

#[function_component(Loader)]
pub(crate) fn loader() -> Html {
    html! {
      <span class="loader" role="status" aria-label="loading" style="display: inline-block; width: 16px; height: 16px; border: 2px solid currentColor; border-right-color: transparent; border-radius: 50%;" />
    }
}
