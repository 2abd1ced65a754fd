use leptos::prelude::*;

use crate::utils::validation::FieldError;

/// Labelled text input that turns red and shows the help text while `error` is set.
#[component]
pub fn FormField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] error: Signal<Option<FieldError>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] max_length: Option<usize>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <label class="text-sm font-medium text-gray-700 mb-1">{label}" *"</label>
            <input
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                maxlength=max_length.map(|len| len.to_string())
                class=move || if error.get().is_some() {
                    "w-full px-3 py-2 border border-red-500 rounded-md focus:outline-none focus:ring-2 focus:ring-red-400"
                } else {
                    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500"
                }
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
            />
            {move || error.get().map(|err| view! {
                <p class="mt-1 text-xs text-red-600">{err.to_string()}</p>
            })}
        </div>
    }
}
