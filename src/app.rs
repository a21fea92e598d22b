//! BFHL Frontend App
//!
//! Single page: JSON input, submit, filterable response view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterSelect, JsonInputForm, ResponseView};
use crate::models::BfhlResponse;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (input_text, set_input_text) = signal(String::new());
    let (response, set_response) = signal::<Option<BfhlResponse>>(None);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Parse and validate locally, then POST. Error state is cleared up front;
    // the stored response survives local failures and is only replaced or
    // cleared when a request resolves, so a prior response can stay visible
    // alongside a new error. No guard against overlapping submissions: last
    // resolution wins.
    let submit = move || {
        set_error.set(None);
        let payload = match api::parse_payload(&input_text.get()) {
            Ok(payload) => payload,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match api::process_data(&payload).await {
                Ok(resp) => set_response.set(Some(resp)),
                Err(err) => {
                    web_sys::console::error_1(&format!("[SUBMIT] {}", err).into());
                    set_error.set(Some(err.to_string()));
                    set_response.set(None);
                }
            }
        });
    };

    view! {
        <div class="page">
            <h1 class="title">"BFHL Data Processor"</h1>

            <JsonInputForm
                input_text=input_text
                set_input_text=set_input_text
                on_submit=submit
            />

            {move || error.get().map(|msg| view! {
                <p class="error-banner">{msg}</p>
            })}

            {move || response.get().map(|resp| {
                let keys = resp.keys();
                view! {
                    <div class="response-panel">
                        <FilterSelect
                            keys=keys
                            selected=selected
                            set_selected=set_selected
                        />
                        <ResponseView response=resp selected=selected/>
                    </div>
                }
            })}
        </div>
    }
}
