//! Filter Select Component
//!
//! Multi-select over the response field names.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Multi-select listing `keys` in received order. A change event replaces the
/// selection wholesale with whatever options are currently marked.
#[component]
pub fn FilterSelect(
    keys: Vec<String>,
    selected: ReadSignal<Vec<String>>,
    set_selected: WriteSignal<Vec<String>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        set_selected.set(selected_values(select));
    };

    view! {
        <div class="filter-select">
            <label class="input-label">"Multi Filter:"</label>
            <select multiple class="filter-list" on:change=on_change>
                {keys.into_iter().map(|key| {
                    let value = key.clone();
                    let is_selected = move || selected.get().contains(&value);
                    view! {
                        <option value=key.clone() prop:selected=is_selected>
                            {key.clone()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Options currently marked selected, in the order the DOM reports them
fn selected_values(select: &web_sys::HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}
