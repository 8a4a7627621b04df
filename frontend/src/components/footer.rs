use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

const GITHUB_PROFILE: &str = "https://github.com";
const CONTACT_EMAIL: &str = "mailto:hello@appnest.dev";

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="border-t border-slate-200 dark:border-slate-800 bg-white/60 dark:bg-slate-900/60">
            <div class="mx-auto grid max-w-7xl gap-8 px-4 py-10 sm:px-6 md:grid-cols-3 lg:px-8">
                <div class="space-y-2">
                    <p class="flex items-center gap-2 text-lg font-bold text-slate-900 dark:text-white">
                        <Icon name={IconName::Smartphone} class={classes!("text-indigo-600")} />
                        {"AppNest"}
                    </p>
                    <p class="text-sm text-slate-600 dark:text-slate-400">
                        {"Mobile apps built to solve real-world problems."}
                    </p>
                </div>
                <nav class="flex flex-col gap-1 text-sm" aria-label="Footer navigation">
                    { for Route::NAV.iter().map(|(target, label)| html! {
                        <Link<Route> to={target.clone()} classes="text-slate-600 dark:text-slate-400 hover:text-indigo-600">
                            { *label }
                        </Link<Route>>
                    }) }
                </nav>
                <div class="flex items-start gap-3 md:justify-end">
                    <a href={GITHUB_PROFILE} target="_blank" rel="noopener noreferrer" aria-label="GitHub"
                        class="rounded-full p-2 text-slate-600 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800">
                        <Icon name={IconName::Github} size={20} />
                    </a>
                    <a href={CONTACT_EMAIL} aria-label="Email"
                        class="rounded-full p-2 text-slate-600 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800">
                        <Icon name={IconName::Mail} size={20} />
                    </a>
                </div>
            </div>
            <p class="pb-6 text-center text-xs text-slate-500">
                { format!("© {} AppNest. All rights reserved.", year) }
            </p>
        </footer>
    }
}
