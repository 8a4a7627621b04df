use yew::prelude::*;

use crate::{
    components::{
        animated_counter::AnimatedCounter,
        icons::{Icon, IconName},
    },
    models::AppViewModel,
};

/// Technology badges shown on a card; the modal lists them all.
const CARD_TECHNOLOGIES: usize = 3;

#[derive(Properties, PartialEq, Clone)]
pub struct AppCardProps {
    pub app: AppViewModel,
    /// Receives the app id.
    pub on_select: Callback<u32>,
}

#[function_component(AppCard)]
pub fn app_card(props: &AppCardProps) -> Html {
    let app = props.app.clone();

    let onclick = {
        let on_select = props.on_select.clone();
        let id = app.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };
    // Keep link clicks from also opening the detail modal.
    let stop_propagation = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <article
            class={classes!(
                "group", "relative", "cursor-pointer", "overflow-hidden", "rounded-2xl",
                "bg-white/80", "dark:bg-slate-800/80", "shadow-xl", "transition-all",
                "duration-300", "hover:-translate-y-2", "hover:shadow-2xl"
            )}
            {onclick}
        >
            <div class={classes!(
                "absolute", "inset-0", "bg-gradient-to-br", app.gradient.classes(),
                "opacity-0", "group-hover:opacity-10", "transition-opacity", "duration-500"
            )} />
            <div class="relative z-10 p-6 space-y-4">
                <div class="relative mx-auto w-32 h-56 rounded-2xl overflow-hidden shadow-lg">
                    <img src={app.image.clone()} alt={app.name.clone()} loading="lazy" class="h-full w-full object-cover" />
                </div>
                <h3 class="text-xl text-center font-semibold text-slate-900 dark:text-white">
                    { &app.name }
                    if app.featured {
                        <Icon name={IconName::Sparkles} size={16} class={classes!("ml-2", "text-yellow-500")} />
                    }
                </h3>
                <ul class="flex flex-wrap gap-2">
                    { for app.technologies.iter().take(CARD_TECHNOLOGIES).map(|tech| html! {
                        <li class="rounded-full border border-slate-300 dark:border-slate-600 px-2 py-0.5 text-xs">
                            { tech }
                        </li>
                    }) }
                </ul>
                <p class="text-sm leading-relaxed text-slate-600 dark:text-slate-300">{ &app.description }</p>
                <div class="flex items-center justify-between text-sm text-slate-500 dark:text-slate-400">
                    <span class="flex items-center gap-1">
                        <Icon name={IconName::Download} size={16} />
                        <AnimatedCounter value={app.stats.downloads.clone()} suffix="+" />
                    </span>
                    <span class="flex items-center gap-1">
                        <Icon name={IconName::Star} size={16} filled={true} class={classes!("text-yellow-400")} />
                        { format!("{:.1}", app.stats.rating) }
                    </span>
                </div>
                <div class="flex gap-2 pt-2">
                    <a
                        href={app.apk_url.clone()}
                        class="flex flex-1 items-center justify-center gap-2 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 px-3 py-2 text-sm font-medium text-white"
                        onclick={stop_propagation.clone()}
                    >
                        <Icon name={IconName::Download} size={16} />
                        {"Download APK"}
                    </a>
                    <a
                        href={app.github_url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source code"
                        class="flex items-center justify-center rounded-lg border border-slate-300 dark:border-slate-600 px-3 py-2"
                        onclick={stop_propagation}
                    >
                        <Icon name={IconName::Github} size={16} />
                    </a>
                </div>
            </div>
        </article>
    }
}
