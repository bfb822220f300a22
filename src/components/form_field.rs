//! Form Field Component
//!
//! Labeled text input bound to a pair of signals. Validation is plain
//! HTML `required`; nothing fires until the form submits.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] input_type: String,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <label class="form-field">
            <span class="field-label">{label}</span>
            <input
                type=input_type
                required=required
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </label>
    }
}
