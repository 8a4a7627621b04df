use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="flex flex-col items-center justify-center gap-4 px-4 py-24 text-center">
            <span class="text-6xl" aria-hidden="true">{"🔍"}</span>
            <h2 class="text-3xl font-bold text-slate-900 dark:text-white">{"404 - Page Not Found"}</h2>
            <p class="text-slate-600 dark:text-slate-300">{"Sorry, the page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-indigo-600 hover:underline">{"Back to Home"}</Link<Route>>
        </section>
    }
}
