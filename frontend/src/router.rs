use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

// The mock build is published as a static demo under `/appnest/`.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Home,
    #[cfg(feature = "mock")]
    #[at("/appnest/")]
    Home,

    #[cfg(not(feature = "mock"))]
    #[at("/apps")]
    Apps,
    #[cfg(feature = "mock")]
    #[at("/appnest/apps")]
    Apps,

    #[cfg(not(feature = "mock"))]
    #[at("/about")]
    About,
    #[cfg(feature = "mock")]
    #[at("/appnest/about")]
    About,

    #[cfg(not(feature = "mock"))]
    #[at("/contact")]
    Contact,
    #[cfg(feature = "mock")]
    #[at("/appnest/contact")]
    Contact,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/appnest/404")]
    NotFound,
}

impl Route {
    /// Entries shown in the header navigation, in display order.
    pub const NAV: [(Route, &'static str); 4] = [
        (Route::Home, "Home"),
        (Route::Apps, "Apps"),
        (Route::About, "About"),
        (Route::Contact, "Contact"),
    ];
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Apps => html! { <pages::apps::AppsPage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-slate-50 dark:bg-slate-950" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <main class="flex-1 pt-16">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
