//! Response View Component
//!
//! Renders the selected response fields, or a prompt when nothing is selected.

use leptos::prelude::*;

use crate::models::BfhlResponse;

/// Filtered view over a successful response
#[component]
pub fn ResponseView(
    response: BfhlResponse,
    selected: ReadSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="response-view">
            {move || {
                let fields = response.visible_fields(&selected.get());
                if fields.is_empty() {
                    view! {
                        <p class="placeholder">"Select filters to view response fields."</p>
                    }
                    .into_any()
                } else {
                    fields
                        .into_iter()
                        .map(|(key, value)| view! {
                            <div class="field-row">
                                <span class="field-name">{key}</span>
                                <pre class="field-value">{value.pretty()}</pre>
                            </div>
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
