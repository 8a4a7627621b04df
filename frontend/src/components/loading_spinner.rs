use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 24,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Heading shown under the spinner, e.g. "Loading Apps...".
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6", "text-center")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-transparent",
                    "bg-[conic-gradient(#4f46e5,transparent)]",
                    "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
            />
            if let Some(title) = props.title.clone() {
                <h2 class="text-2xl font-bold text-slate-900 dark:text-white">{ title }</h2>
            }
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="text-slate-600 dark:text-slate-300">{ subtitle }</p>
            }
            <span class={classes!("sr-only")}>{ "Loading..." }</span>
        </div>
    }
}
