use appnest_shared::carousel::ScreenshotCarousel;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconButton, IconName},
    models::AppViewModel,
};

#[derive(Properties, PartialEq)]
pub struct AppDetailModalProps {
    pub app: AppViewModel,
    pub on_close: Callback<()>,
}

/// Full-screen detail view: screenshots, store links, features and the
/// technical facts of one app.
#[function_component(AppDetailModal)]
pub fn app_detail_modal(props: &AppDetailModalProps) -> Html {
    let app = &props.app;
    let carousel = use_state(|| ScreenshotCarousel::new(app.screenshots.len()));
    let liked = use_state(|| false);

    // A different app starts from its first screenshot and unliked.
    {
        let carousel = carousel.clone();
        let liked = liked.clone();
        use_effect_with((app.id, app.screenshots.len()), move |(_, len)| {
            carousel.set(ScreenshotCarousel::new(*len));
            liked.set(false);
            || ()
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let toggle_like = {
        let liked = liked.clone();
        Callback::from(move |_: MouseEvent| liked.set(!*liked))
    };

    // Apps without screenshots show their cover image instead.
    let current_screenshot = if carousel.is_empty() {
        app.image.clone()
    } else {
        app.screenshots
            .get(carousel.current())
            .cloned()
            .unwrap_or_else(|| app.image.clone())
    };

    let dots = app.screenshots.iter().enumerate().map(|(index, _)| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.set(carousel.select(index)))
        };
        let dot_class = if index == carousel.current() {
            "w-6 bg-white"
        } else {
            "w-2 bg-white/50"
        };
        html! {
            <button
                type="button"
                class={classes!("h-2", "rounded-full", "transition-all", dot_class)}
                aria-label={format!("Screenshot {}", index + 1)}
                {onclick}
            />
        }
    });

    let details = [
        ("Version:", app.version.clone()),
        ("Size:", app.size.clone()),
        ("Last Updated:", app.last_updated.clone()),
        ("Requirements:", app.requirements.clone()),
        ("Stage:", app.stage.clone()),
    ];

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4"
            role="dialog"
            aria-modal="true"
            aria-label={app.name.clone()}
            tabindex="-1"
            onclick={close.clone()}
            onkeydown={on_keydown}
        >
            <div
                class="relative max-h-[90vh] w-full max-w-4xl overflow-y-auto rounded-3xl bg-white dark:bg-slate-900 shadow-2xl"
                onclick={keep_open}
            >
                <div class={classes!("relative", "bg-gradient-to-br", app.gradient.classes(), "p-6", "text-white")}>
                    <IconButton
                        icon={IconName::X}
                        label="Close"
                        onclick={close}
                        class={classes!("absolute", "right-4", "top-4")}
                    />
                    <div class="flex items-center gap-3">
                        <h2 class="text-3xl font-bold">{ &app.name }</h2>
                        <button
                            type="button"
                            class="rounded-full p-2 hover:bg-white/20"
                            aria-pressed={(*liked).to_string()}
                            aria-label="Like"
                            onclick={toggle_like}
                        >
                            <Icon
                                name={IconName::Heart}
                                filled={*liked}
                                class={classes!(if *liked { "text-red-400" } else { "text-white" })}
                            />
                        </button>
                    </div>
                    <p class="mt-2 flex items-center gap-4 text-sm text-white/80">
                        <span class="flex items-center gap-1">
                            <Icon name={IconName::Download} size={16} />
                            { &app.stats.downloads }
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon name={IconName::Star} size={16} filled={true} />
                            { format!("{:.1}", app.stats.rating) }
                        </span>
                    </p>
                </div>

                <div class="grid gap-8 p-6 md:grid-cols-2">
                    <section class="space-y-4">
                        <div class="relative mx-auto h-96 w-52 overflow-hidden rounded-3xl bg-slate-900 shadow-xl">
                            <img src={current_screenshot} alt={app.name.clone()} class="h-full w-full object-cover" />
                            if carousel.len() > 1 {
                                <IconButton
                                    icon={IconName::ChevronLeft}
                                    label="Previous screenshot"
                                    onclick={prev}
                                    class={classes!("absolute", "left-2", "top-1/2", "-translate-y-1/2")}
                                />
                                <IconButton
                                    icon={IconName::ChevronRight}
                                    label="Next screenshot"
                                    onclick={next}
                                    class={classes!("absolute", "right-2", "top-1/2", "-translate-y-1/2")}
                                />
                                <div class="absolute bottom-3 left-0 right-0 flex justify-center gap-2">
                                    { for dots }
                                </div>
                            }
                        </div>
                        <div class="grid grid-cols-2 gap-3">
                            <StoreLink href={app.store_links.play_store_url.clone()} label="Play Store" />
                            <StoreLink href={app.store_links.app_store_url.clone()} label="App Store" />
                            <StoreLink href={app.apk_url.clone()} label="Download APK" icon={IconName::Download} />
                            <StoreLink href={app.github_url.clone()} label="Source Code" icon={IconName::Github} />
                        </div>
                    </section>

                    <section class="space-y-6 text-slate-700 dark:text-slate-300">
                        <div>
                            <h3 class="mb-2 text-lg font-semibold text-slate-900 dark:text-white">{"About"}</h3>
                            <p class="leading-relaxed">{ &app.long_description }</p>
                        </div>
                        if !app.features.is_empty() {
                            <div>
                                <h3 class="mb-2 text-lg font-semibold text-slate-900 dark:text-white">{"Key Features"}</h3>
                                <ul class="list-disc space-y-1 pl-5">
                                    { for app.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
                                </ul>
                            </div>
                        }
                        if !app.technologies.is_empty() {
                            <div>
                                <h3 class="mb-2 text-lg font-semibold text-slate-900 dark:text-white">{"Technologies Used"}</h3>
                                <ul class="flex flex-wrap gap-2">
                                    { for app.technologies.iter().map(|tech| html! {
                                        <li class="rounded-full bg-indigo-100 dark:bg-indigo-900/50 px-3 py-1 text-sm">{ tech }</li>
                                    }) }
                                </ul>
                            </div>
                        }
                        <dl class="grid grid-cols-2 gap-2 text-sm">
                            { for details.into_iter().map(|(label, value)| html! {
                                <>
                                    <dt class="font-medium text-slate-500 dark:text-slate-400">{ label }</dt>
                                    <dd>{ value }</dd>
                                </>
                            }) }
                        </dl>
                    </section>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StoreLinkProps {
    href: String,
    label: AttrValue,
    #[prop_or(IconName::ExternalLink)]
    icon: IconName,
}

#[function_component(StoreLink)]
fn store_link(props: &StoreLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center justify-center gap-2 rounded-xl border border-slate-200 dark:border-slate-700 px-3 py-2 text-sm font-medium hover:bg-slate-100 dark:hover:bg-slate-800"
        >
            <Icon name={props.icon} size={16} />
            <span>{ props.label.clone() }</span>
        </a>
    }
}
