use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

const BRAND_NAME: &str = "AppNest";

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();

    // Navigating anywhere closes the mobile menu.
    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let nav_link = |target: &Route, label: &'static str, extra: &'static str| {
        let active = route.as_ref() == Some(target);
        html! {
            <Link<Route> to={target.clone()} classes={classes!(
                "rounded-lg", "px-3", "py-2", "text-sm", "font-medium",
                "transition-colors", "duration-200",
                if active {
                    "text-indigo-600 dark:text-indigo-400 bg-indigo-50 dark:bg-indigo-900/40"
                } else {
                    "text-slate-600 dark:text-slate-300 hover:text-indigo-600 hover:bg-slate-100 dark:hover:bg-slate-800"
                },
                extra
            )}>
                { label }
            </Link<Route>>
        }
    };

    let mobile_menu_classes = classes!(
        "md:hidden",
        "fixed",
        "inset-x-0",
        "top-16",
        "z-[90]",
        "flex",
        "flex-col",
        "gap-1",
        "p-4",
        "bg-white/95",
        "dark:bg-slate-900/95",
        "backdrop-blur",
        "shadow-lg",
        "transition-all",
        "duration-300",
        if *mobile_menu_open {
            "opacity-100 translate-y-0 pointer-events-auto"
        } else {
            "opacity-0 -translate-y-4 pointer-events-none"
        }
    );

    html! {
        <>
            <header class={classes!(
                "fixed", "top-0", "left-0", "right-0", "z-[100]", "h-16", "w-full",
                "bg-white/80", "dark:bg-slate-900/80", "backdrop-blur", "shadow-sm"
            )}>
                <div class="mx-auto flex h-full max-w-7xl items-center gap-4 px-4 sm:px-6 lg:px-8">
                    <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-xl font-bold text-slate-900 dark:text-white">
                        <Icon name={IconName::Smartphone} class={classes!("text-indigo-600")} />
                        { BRAND_NAME }
                    </Link<Route>>

                    <nav class="ml-auto hidden items-center gap-1 md:flex" aria-label="Main navigation">
                        { for Route::NAV.iter().map(|(target, label)| nav_link(target, *label, "")) }
                    </nav>

                    <button
                        type="button"
                        class="ml-auto inline-flex h-11 w-11 items-center justify-center rounded-lg md:hidden"
                        aria-label="Toggle menu"
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <Icon name={if *mobile_menu_open { IconName::X } else { IconName::Menu }} />
                    </button>
                </div>
            </header>

            <nav class={mobile_menu_classes} aria-label="Mobile navigation" onclick={close_mobile_menu}>
                { for Route::NAV.iter().map(|(target, label)| nav_link(target, *label, "block")) }
            </nav>
        </>
    }
}
