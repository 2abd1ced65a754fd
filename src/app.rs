use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    ParamSegment, StaticSegment,
};

use crate::components::layout::Layout;
use crate::data::cart::BookingCart;
use crate::pages::about::AboutPage;
use crate::pages::booking::BookingPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <Stylesheet id="leptos" href="/pkg/turfbook.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet"/>
                <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
                <MetaTags/>
            </head>
            <body class="font-sans text-gray-900">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BookingCart::new());

    view! {
        <Title text="TurfBook"/>
        <Router>
            <Layout>
                <FlatRoutes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=(StaticSegment("booking"), ParamSegment("sport")) view=BookingPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                </FlatRoutes>
            </Layout>
        </Router>
    }
}
