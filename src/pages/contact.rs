use leptos::prelude::*;
use leptos::server_fn::error::NoCustomError;

use crate::components::form_field::FormField;
use crate::settings::ContactDetails;
use crate::utils::validation::{ContactForm, Field, FormErrors};

#[server(GetContactDetails)]
pub async fn get_contact_details() -> Result<ContactDetails, ServerFnError> {
    use crate::settings::Settings;

    let settings = Settings::load_or_default("settings.yaml")
        .map_err(|e| ServerFnError::<NoCustomError>::ServerError(e.to_string()))?;

    Ok(settings.contact_details())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let details = Resource::new(|| (), |_| get_contact_details());

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (errors, set_errors) = create_signal(FormErrors::default());
    let (sent, set_sent) = create_signal(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: message.get(),
        };
        let result = form.validate();
        let valid = result.is_valid();
        set_errors(result);

        if valid {
            leptos::logging::log!("Contact message accepted from {}", form.email);
            set_name(String::new());
            set_email(String::new());
            set_message(String::new());
        }
        set_sent(valid);
    };

    view! {
        <div>
            <section class="min-h-[50vh] flex items-center justify-center bg-gradient-to-r from-purple-50 to-fuchsia-50">
                <h1 class="text-5xl md:text-6xl font-bold text-center bg-gradient-to-r from-purple-700 to-fuchsia-600 bg-clip-text text-transparent">
                    "Contact Us"
                </h1>
            </section>

            <section class="max-w-5xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="bg-white border border-gray-200 rounded-lg p-6">
                    <h2 class="text-2xl font-bold mb-4">"Get in touch"</h2>
                    <Suspense fallback=move || view! { <p class="text-gray-400">"Loading..."</p> }>
                        {move || Suspend::new(async move {
                            match details.await {
                                Ok(contact) => view! {
                                    <ul class="space-y-3 text-gray-700">
                                        <li><i class="fas fa-envelope text-purple-700 mr-2"></i>
                                            <a href=format!("mailto:{}", contact.email) class="hover:underline">{contact.email.clone()}</a>
                                        </li>
                                        <li><i class="fas fa-phone text-purple-700 mr-2"></i>{contact.phone}</li>
                                        <li><i class="fas fa-location-dot text-purple-700 mr-2"></i>{contact.address}</li>
                                        <li><i class="fas fa-clock text-purple-700 mr-2"></i>{contact.opening_hours}</li>
                                    </ul>
                                }.into_any(),
                                Err(err) => {
                                    leptos::logging::log!("Error fetching contact details: {:?}", err);
                                    view! { <p class="text-amber-600">"Contact details are unavailable right now."</p> }.into_any()
                                }
                            }
                        })}
                    </Suspense>
                </div>

                <form class="bg-white border border-gray-200 rounded-lg p-6 flex flex-col gap-4" on:submit=handle_submit novalidate>
                    <h2 class="text-2xl font-bold">"Send a message"</h2>
                    <FormField
                        label="Name"
                        value=name
                        set_value=set_name
                        error=Signal::derive(move || errors.get().get(Field::Name))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=email
                        set_value=set_email
                        error=Signal::derive(move || errors.get().get(Field::Email))
                    />
                    <div class="flex flex-col">
                        <label class="text-sm font-medium text-gray-700 mb-1">"Message"</label>
                        <textarea
                            rows="4"
                            class=move || if errors.get().has_error(Field::Message) {
                                "px-3 py-2 border border-red-500 rounded-md"
                            } else {
                                "px-3 py-2 border border-gray-300 rounded-md"
                            }
                            prop:value=message
                            on:input=move |ev| set_message(event_target_value(&ev))
                        ></textarea>
                        {move || errors.get().get(Field::Message).map(|err| view! {
                            <p class="mt-1 text-xs text-red-600">{err.to_string()}</p>
                        })}
                    </div>
                    <button type="submit" class="px-4 py-2 bg-purple-700 text-white rounded-md hover:bg-purple-800">
                        "Send"
                    </button>
                    <Show when=move || sent.get()>
                        <p class="text-sm text-emerald-600">"Thanks for reaching out! We'll get back to you soon."</p>
                    </Show>
                </form>
            </section>
        </div>
    }
}
