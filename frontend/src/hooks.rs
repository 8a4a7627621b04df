use appnest_shared::PageState;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{api, models::Catalog};

/// Loads the catalog on mount and hands back a retry callback.
///
/// Every retry re-enters [`PageState::Loading`] and issues a fresh fetch.
/// Nothing is cancelled: a response that lands after a newer attempt started
/// is dropped instead.
///
/// ```rust
/// #[function_component(AppsPage)]
/// fn apps_page() -> Html {
///     let (catalog, retry) = use_catalog();
///     match catalog {
///         PageState::Loading => html! { <LoadingSpinner /> },
///         PageState::Error(message) => html! { <ErrorBanner {message} on_retry={retry} /> },
///         PageState::Ready(catalog) => html! { { catalog.apps.len() } },
///     }
/// }
/// ```
#[hook]
pub fn use_catalog() -> (PageState<Catalog>, Callback<()>) {
    let state = use_state(PageState::<Catalog>::default);
    let attempt = use_state(|| 0u32);
    let latest_attempt = use_mut_ref(|| 0u32);

    {
        let state = state.clone();
        let latest_attempt = latest_attempt.clone();
        use_effect_with(*attempt, move |attempt| {
            let attempt = *attempt;
            *latest_attempt.borrow_mut() = attempt;
            state.set(PageState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = api::fetch_catalog().await;
                if *latest_attempt.borrow() != attempt {
                    web_sys::console::log_1(
                        &format!("Dropping catalog response from attempt {}", attempt).into(),
                    );
                    return;
                }
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("Failed to fetch catalog: {}", e).into());
                }
                state.set(PageState::from_result(result));
            });

            || ()
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: ()| attempt.set(attempt.wrapping_add(1)))
    };

    ((*state).clone(), retry)
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes. Call it inside top-level pages.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
