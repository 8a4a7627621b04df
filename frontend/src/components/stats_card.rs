use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub icon: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div
            class="flex flex-col items-center gap-1 rounded-2xl bg-white/80 dark:bg-slate-800/80 p-6 shadow-lg"
            role="status"
        >
            <span class="text-3xl" aria-hidden="true">{ props.icon.clone() }</span>
            <strong class="text-3xl font-bold text-slate-900 dark:text-white">
                <AnimatedCounter value={props.value.clone()} suffix={props.suffix.clone()} />
            </strong>
            <span class="text-sm text-slate-600 dark:text-slate-300">{ props.label.clone() }</span>
        </div>
    }
}
