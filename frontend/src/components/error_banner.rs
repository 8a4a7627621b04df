use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Renders a "Try Again" button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    let wrapper_classes = classes!(
        "error-banner",
        "flex",
        "flex-col",
        "items-center",
        "gap-3",
        "rounded-2xl",
        "px-6",
        "py-8",
        "text-center",
        "shadow-xl",
        "bg-white/80",
        "dark:bg-slate-800/80",
        "w-full",
        "max-w-md",
        "mx-auto"
    );

    let retry_button = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! {
            <button
                type="button"
                class={classes!(
                    "mt-2",
                    "px-5",
                    "py-2",
                    "rounded-lg",
                    "font-medium",
                    "text-white",
                    "bg-gradient-to-r",
                    "from-indigo-600",
                    "to-purple-600",
                    "transition",
                    "duration-200",
                    "hover:from-indigo-700",
                    "hover:to-purple-700"
                )}
                {onclick}
            >
                {"Try Again"}
            </button>
        }
    });

    html! {
        <div class={wrapper_classes} role="alert" aria-live="assertive">
            <span class="text-6xl" aria-hidden="true">{"❌"}</span>
            <h2 class="text-2xl font-bold text-slate-900 dark:text-white">{"Error Loading Apps"}</h2>
            <p class="text-slate-600 dark:text-slate-300">{ props.message.clone() }</p>
            { retry_button.unwrap_or_default() }
        </div>
    }
}
