//! AppNest frontend: a Yew single-page portfolio that lists the apps served
//! by the backend, with search, category filtering and a detail view.

mod api;
mod components;
mod hooks;
mod models;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
