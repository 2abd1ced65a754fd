use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::data::cart::{BookingCart, BookingSummary};
use crate::pages::booking::REDIRECT_DELAY;
use crate::utils::date::DateDisplay;
use crate::utils::price::format_rupees;
use crate::utils::validation::{CheckoutForm, Field, FormErrors};

pub fn duration_label(hours: usize) -> String {
    format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<BookingCart>();
    let navigate = use_navigate();

    let (cardholder_name, set_cardholder_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (card_number, set_card_number) = create_signal(String::new());
    let (expiry, set_expiry) = create_signal(String::new());
    let (cvv, set_cvv) = create_signal(String::new());
    let (errors, set_errors) = create_signal(FormErrors::default());
    let (confirmed, set_confirmed) = create_signal(false);
    let pending_nav = RwSignal::new(None::<String>);

    // session storage only exists in the browser
    Effect::new(move |_| cart.restore());

    Effect::new(move |_| {
        if let Some(path) = pending_nav.get() {
            navigate(&path, Default::default());
        }
    });

    let back_path = move || {
        cart.summary()
            .map(|summary| summary.sport.booking_path())
            .unwrap_or_else(|| "/".to_string())
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if confirmed.get_untracked() {
            return;
        }

        let form = CheckoutForm {
            cardholder_name: cardholder_name.get(),
            email: email.get(),
            card_number: card_number.get(),
            expiry: expiry.get(),
            cvv: cvv.get(),
        };
        let result = form.validate();
        let valid = result.is_valid();
        set_errors(result);

        if !valid {
            return;
        }

        leptos::logging::log!("Checkout confirmed for {}", form.email);
        set_confirmed(true);
        set_timeout(
            move || {
                cart.clear();
                pending_nav.set(Some("/".to_string()));
            },
            REDIRECT_DELAY,
        );
    };

    view! {
        <div class="py-8 bg-gray-50 min-h-screen">
            <div class="max-w-3xl mx-auto px-4">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Complete Your Booking"</h1>
                    <p class="text-gray-500">"Please review your booking details and provide payment information"</p>
                </div>

                {move || match cart.summary() {
                    Some(summary) => view! { <BookingSummaryCard summary/> }.into_any(),
                    None => view! {
                        <div class="p-6 mb-8 rounded-lg border border-gray-200 bg-white">
                            <p class="mb-4 text-gray-600">"You haven't picked any slots yet."</p>
                            <A href="/" attr:class="text-purple-700 font-medium hover:underline">"Start a booking"</A>
                        </div>
                    }.into_any(),
                }}

                <form class="p-6 mb-8 rounded-lg border border-gray-200 bg-white" on:submit=handle_submit novalidate>
                    <h2 class="text-xl font-semibold mb-4">"Payment Information"</h2>
                    <div class="grid grid-cols-2 gap-6">
                        <div class="col-span-2">
                            <FormField
                                label="Cardholder Name"
                                value=cardholder_name
                                set_value=set_cardholder_name
                                error=Signal::derive(move || errors.get().get(Field::Name))
                            />
                        </div>
                        <div class="col-span-2">
                            <FormField
                                label="Email"
                                input_type="email"
                                value=email
                                set_value=set_email
                                error=Signal::derive(move || errors.get().get(Field::Email))
                            />
                        </div>
                        <div class="col-span-2">
                            <FormField
                                label="Card Number"
                                value=card_number
                                set_value=set_card_number
                                max_length=19
                                error=Signal::derive(move || errors.get().get(Field::CardNumber))
                            />
                        </div>
                        <FormField
                            label="Expiry Date (MM/YY)"
                            placeholder="MM/YY"
                            value=expiry
                            set_value=set_expiry
                            max_length=5
                            error=Signal::derive(move || errors.get().get(Field::Expiry))
                        />
                        <FormField
                            label="CVV"
                            value=cvv
                            set_value=set_cvv
                            max_length=3
                            error=Signal::derive(move || errors.get().get(Field::Cvv))
                        />
                    </div>

                    <div class="flex justify-between mt-8">
                        <A href=back_path attr:class="py-3 px-8 rounded-lg border border-purple-700 text-purple-700 font-medium">
                            "Back"
                        </A>
                        <button
                            type="submit"
                            class="py-3 px-8 rounded-lg bg-purple-700 text-white font-medium hover:bg-purple-800 disabled:opacity-50"
                            disabled=move || cart.summary().is_none()
                        >
                            "Confirm Booking"
                        </button>
                    </div>
                </form>

                <Show when=move || confirmed.get()>
                    <div class="fixed top-24 inset-x-0 flex justify-center z-30">
                        <div class="bg-green-600 text-white px-4 py-3 rounded-md shadow-lg">
                            "Booking confirmed! Thank you for your reservation."
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BookingSummaryCard(summary: BookingSummary) -> impl IntoView {
    let hours = summary.duration_hours();

    view! {
        <div class="p-6 mb-8 rounded-lg border border-gray-200 bg-white">
            <h2 class="text-xl font-semibold mb-4">"Booking Summary"</h2>
            <dl class="grid grid-cols-3 gap-y-3 mb-6">
                <dt class="text-sm text-gray-500">"Sport:"</dt>
                <dd class="col-span-2 font-medium">{summary.sport.name()}</dd>

                <dt class="text-sm text-gray-500">"Date:"</dt>
                <dd class="col-span-2 font-medium flex flex-col">
                    {summary.dates().into_iter().map(|date| view! { <DateDisplay date/> }).collect::<Vec<_>>()}
                </dd>

                <dt class="text-sm text-gray-500">"Time:"</dt>
                <dd class="col-span-2 font-medium">
                    <ul>
                        {summary.lines.iter().map(|line| view! {
                            <li class="flex justify-between">
                                <span>{format!("{} · {}", line.date.format("%d %b"), line.time)}</span>
                                <span class="text-gray-500">{format_rupees(line.price)}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </dd>

                <dt class="text-sm text-gray-500">"Duration:"</dt>
                <dd class="col-span-2 font-medium">{duration_label(hours)}</dd>
            </dl>

            <hr class="my-6 border-gray-200"/>

            <div class="flex justify-between">
                <span class="text-xl">"Total Amount:"</span>
                <span class="text-xl font-bold text-purple-700">{format_rupees(summary.total)}</span>
            </div>
        </div>
    }
}
