use appnest_shared::{
    filter_apps, AppFilter, CategorySelection, CategoryViewModel, FilteredApps, PageState,
    ALL_APPS_SLUG,
};
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};

use crate::{
    components::{
        animated_counter::AnimatedCounter,
        app_card::AppCard,
        app_detail_modal::AppDetailModal,
        error_banner::ErrorBanner,
        icons::{Icon, IconName},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_catalog, use_scroll_to_top},
    models::{AppViewModel, Catalog},
};

/// Chip list for the filter bar. The CMS may or may not carry the
/// `all-apps` entry itself; it is prepended when missing.
fn category_chips(categories: &[CategoryViewModel]) -> Vec<CategoryViewModel> {
    let mut chips = Vec::with_capacity(categories.len() + 1);
    if !categories.iter().any(|category| category.id == ALL_APPS_SLUG) {
        chips.push(CategoryViewModel {
            id: ALL_APPS_SLUG.to_string(),
            name: "All Apps".to_string(),
            icon: "📚".to_string(),
        });
    }
    chips.extend_from_slice(categories);
    chips
}

#[function_component(AppsPage)]
pub fn apps_page() -> Html {
    use_scroll_to_top();
    let (catalog, retry) = use_catalog();
    let search = use_state(String::new);
    let category = use_state(CategorySelection::default);
    let selected = use_state(|| None::<u32>);

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(target.value());
            }
        })
    };
    let on_category = {
        let category = category.clone();
        Callback::from(move |slug: String| category.set(CategorySelection::from_slug(&slug)))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let filtered = use_memo(
        (catalog.clone(), (*search).clone(), (*category).clone()),
        |(catalog, search, category)| {
            catalog.ready().map(|catalog: &Catalog| {
                let filter = AppFilter::new(search, category.clone());
                filter_apps(&catalog.apps, &filter)
            })
        },
    );

    let selected_app = (*selected)
        .and_then(|id| catalog.ready().and_then(|catalog| catalog.app(id)))
        .cloned();

    let body = match &catalog {
        PageState::Loading => html! {
            <div class="flex min-h-[60vh] items-center justify-center">
                <LoadingSpinner
                    size={SpinnerSize::Large}
                    title="Loading Apps..."
                    subtitle="Fetching the latest mobile applications"
                />
            </div>
        },
        PageState::Error(message) => html! {
            <div class="flex min-h-[60vh] items-center justify-center">
                <ErrorBanner message={message.clone()} on_retry={retry.clone()} />
            </div>
        },
        PageState::Ready(catalog) => {
            let chips = category_chips(&catalog.categories);
            html! {
                <>
                    <header class="mb-16 text-center">
                        <h1 class="mb-6 text-4xl font-bold text-slate-900 dark:text-white md:text-6xl">
                            {"My Mobile Apps 📱"}
                        </h1>
                        <p class="mx-auto max-w-3xl text-xl leading-relaxed text-slate-600 dark:text-slate-300">
                            {"A collection of mobile applications I've built to solve real-world problems and enhance user experiences."}
                        </p>
                        <p class="mt-4 text-sm text-slate-500 dark:text-slate-400">
                            {"Total Apps: "}
                            <AnimatedCounter value={catalog.apps.len().to_string()} />
                        </p>
                    </header>

                    <div class="mb-12 space-y-6">
                        <div class="relative mx-auto max-w-md">
                            <Icon name={IconName::Search} size={20} class={classes!("absolute", "left-3", "top-1/2", "-translate-y-1/2", "text-slate-400")} />
                            <input
                                type="text"
                                placeholder="Search apps..."
                                value={(*search).clone()}
                                oninput={on_search_input}
                                class="w-full rounded-lg bg-white/80 dark:bg-slate-800/80 py-3 pl-10 pr-4 shadow-lg transition-all duration-300 focus:shadow-xl focus:outline-none"
                            />
                        </div>
                        <div class="flex flex-wrap justify-center gap-3">
                            { for chips.into_iter().map(|chip| {
                                let active = category.slug() == chip.id;
                                let onclick = {
                                    let on_category = on_category.clone();
                                    let slug = chip.id.clone();
                                    Callback::from(move |_: MouseEvent| on_category.emit(slug.clone()))
                                };
                                html! {
                                    <button
                                        key={chip.id.clone()}
                                        type="button"
                                        aria-pressed={active.to_string()}
                                        class={classes!(
                                            "rounded-full", "px-4", "py-2", "text-sm", "font-medium",
                                            "transition-all", "duration-300",
                                            if active {
                                                "bg-gradient-to-r from-indigo-600 to-purple-600 text-white shadow-lg"
                                            } else {
                                                "bg-white/80 dark:bg-slate-800/80 text-slate-600 dark:text-slate-300 hover:bg-indigo-50 dark:hover:bg-indigo-900/50"
                                            }
                                        )}
                                        {onclick}
                                    >
                                        <span class="mr-2">{ &chip.icon }</span>
                                        { &chip.name }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    { render_results((*filtered).as_ref(), &on_select) }
                </>
            }
        },
    };

    html! {
        <div class="px-4 py-12">
            <div class="mx-auto max-w-6xl">
                { body }
            </div>
            if let Some(app) = selected_app {
                <AppDetailModal {app} {on_close} />
            }
        </div>
    }
}

fn render_results(filtered: Option<&FilteredApps>, on_select: &Callback<u32>) -> Html {
    let Some(filtered) = filtered else {
        return Html::default();
    };

    if filtered.is_empty() {
        return html! {
            <div class="py-16 text-center">
                <div class="mb-4 text-6xl">{"🔍"}</div>
                <h3 class="mb-2 text-2xl font-bold text-slate-900 dark:text-white">{"No apps found"}</h3>
                <p class="text-slate-600 dark:text-slate-300">{"Try adjusting your search or filter criteria"}</p>
            </div>
        };
    }

    let grid = |apps: &[AppViewModel]| {
        html! {
            <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                { for apps.iter().map(|app| html! {
                    <AppCard key={app.id} app={app.clone()} on_select={on_select.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <>
            if !filtered.featured.is_empty() {
                <section class="mb-16">
                    <div class="mb-8 flex items-center gap-3">
                        <h2 class="text-3xl font-bold text-slate-900 dark:text-white">
                            <Icon name={IconName::Sparkles} size={32} class={classes!("mr-2", "text-yellow-500")} />
                            {"Featured Apps"}
                        </h2>
                        <span class="rounded-full bg-gradient-to-r from-yellow-100 to-orange-100 dark:from-yellow-900 dark:to-orange-900 px-4 py-2 text-sm">
                            {"🏆 Best Apps"}
                        </span>
                    </div>
                    { grid(&filtered.featured) }
                </section>
            }
            if !filtered.other.is_empty() {
                <section>
                    <h2 class="mb-8 text-3xl font-bold text-slate-900 dark:text-white">{"📚 All Apps"}</h2>
                    { grid(&filtered.other) }
                </section>
            }
        </>
    }
}
