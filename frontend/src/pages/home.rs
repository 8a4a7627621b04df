use appnest_shared::PageState;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        app_card::AppCard,
        app_detail_modal::AppDetailModal,
        error_banner::ErrorBanner,
        loading_spinner::LoadingSpinner,
        stats_card::StatsCard,
    },
    hooks::{use_catalog, use_scroll_to_top},
    router::Route,
};

/// Headline figures: (icon, value, suffix, label).
const SITE_STATS: [(&str, &str, &str, &str); 4] = [
    ("📱", "15", "+", "Apps Built"),
    ("⬇️", "10K", "+", "Downloads"),
    ("⭐", "4.8", "", "Avg Rating"),
    ("🚀", "2", "+", "Years Experience"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let (catalog, retry) = use_catalog();
    let selected = use_state(|| None::<u32>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    // A reload that drops the app closes the modal.
    let selected_app = (*selected)
        .and_then(|id| catalog.ready().and_then(|catalog| catalog.app(id)))
        .cloned();

    let featured = match &catalog {
        PageState::Loading => html! {
            <LoadingSpinner title="Loading Apps..." subtitle="Fetching the latest mobile applications" />
        },
        PageState::Error(message) => html! {
            <ErrorBanner message={message.clone()} on_retry={retry.clone()} />
        },
        PageState::Ready(catalog) => html! {
            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                { for catalog.featured_apps().map(|app| html! {
                    <AppCard key={app.id} app={app.clone()} on_select={on_select.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="px-4 py-12">
            <section class="mx-auto max-w-4xl text-center">
                <h1 class="mb-6 text-4xl font-bold text-slate-900 dark:text-white md:text-6xl">
                    {"Mobile apps that "}
                    <span class="bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        {"solve real problems"}
                    </span>
                </h1>
                <p class="mx-auto mb-8 max-w-2xl text-xl leading-relaxed text-slate-600 dark:text-slate-300">
                    {"Cross-platform applications crafted with clean code and user-centered design."}
                </p>
                <div class="flex flex-col justify-center gap-4 sm:flex-row">
                    <Link<Route> to={Route::Apps} classes="rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 px-6 py-3 font-medium text-white">
                        {"View My Apps"}
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes="rounded-lg border border-slate-300 dark:border-slate-600 px-6 py-3 font-medium">
                        {"About Me"}
                    </Link<Route>>
                </div>
            </section>

            <section class="mx-auto mt-16 grid max-w-5xl grid-cols-2 gap-6 md:grid-cols-4">
                { for SITE_STATS.iter().map(|(icon, value, suffix, label)| html! {
                    <StatsCard icon={*icon} value={*value} suffix={*suffix} label={*label} />
                }) }
            </section>

            <section class="mx-auto mt-20 max-w-6xl">
                <h2 class="mb-8 text-3xl font-bold text-slate-900 dark:text-white">{"Featured Apps"}</h2>
                { featured }
            </section>

            if let Some(app) = selected_app {
                <AppDetailModal {app} {on_close} />
            }
        </div>
    }
}
