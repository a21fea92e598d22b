//! JSON Input Form Component
//!
//! Textarea for the raw request payload plus the submit button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Form for entering and submitting the JSON payload
#[component]
pub fn JsonInputForm(
    input_text: ReadSignal<String>,
    set_input_text: WriteSignal<String>,
    on_submit: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    view! {
        <form class="json-input-form" on:submit=submit>
            <label class="input-label">"Enter JSON:"</label>
            <textarea
                class="json-input"
                placeholder=r#"e.g. { "data": ["A", "1", "B"] }"#
                prop:value=move || input_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_input_text.set(area.value());
                }
            ></textarea>
            <button type="submit" class="submit-btn">"Process Data"</button>
        </form>
    }
}
