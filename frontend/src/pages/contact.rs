use appnest_shared::contact::{ContactFieldError, ContactForm};
use gloo_timers::callback::Timeout;
use web_sys::{console, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_scroll_to_top,
};

/// How long the confirmation stays up before the form clears.
const RESET_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn owns(self, error: ContactFieldError) -> bool {
        matches!(
            (self, error),
            (Field::Name, ContactFieldError::MissingName)
                | (Field::Email, ContactFieldError::InvalidEmail)
                | (Field::Message, ContactFieldError::MissingMessage)
        )
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<ContactFieldError>::new);
    let submitted = use_state(|| false);
    // Held so leaving the page drops (and cancels) a pending reset.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let update = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        move |value: String| {
            let mut next = (*form).clone();
            match field {
                Field::Name => next.name = value,
                Field::Email => next.email = value,
                Field::Message => next.message = value,
            }
            form.set(next);
            errors.set(errors.iter().copied().filter(|error| !field.owns(*error)).collect());
        }
    };

    let on_name = {
        let update = update(Field::Name);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                update(target.value());
            }
        })
    };
    let on_email = {
        let update = update(Field::Email);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                update(target.value());
            }
        })
    };
    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                update(target.value());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if !form.is_valid() {
                errors.set(form.validate());
                return;
            }

            // There is no mail backend; the message only goes to the console.
            console::log_1(
                &format!(
                    "Contact form submitted: name={:?} email={:?} message={:?}",
                    form.name, form.email, form.message
                )
                .into(),
            );
            errors.set(Vec::new());
            submitted.set(true);

            let form = form.clone();
            let submitted = submitted.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(RESET_AFTER_MS, move || {
                form.set(ContactForm::default());
                submitted.set(false);
            }));
        })
    };

    let error_for = |field: Field| {
        errors
            .iter()
            .find(|error| field.owns(**error))
            .map(|error| html! { <p class="mt-1 text-sm text-red-500">{ error.to_string() }</p> })
            .unwrap_or_default()
    };

    let input_class = "w-full rounded-lg border border-slate-200 dark:border-slate-700 bg-white/80 \
                       dark:bg-slate-800/80 px-4 py-3 focus:border-indigo-500 focus:outline-none";

    html! {
        <div class="px-4 py-12">
            <div class="mx-auto max-w-2xl">
                <header class="mb-12 text-center">
                    <h1 class="mb-4 text-4xl font-bold text-slate-900 dark:text-white md:text-5xl">
                        {"Get in Touch 💬"}
                    </h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300">
                        {"Have a project in mind or just want to say hi? Send a message."}
                    </p>
                </header>

                if *submitted {
                    <div class="rounded-2xl bg-green-50 dark:bg-green-900/30 p-8 text-center shadow-lg" role="status">
                        <div class="mb-4 text-5xl">{"✅"}</div>
                        <h2 class="mb-2 text-2xl font-bold text-slate-900 dark:text-white">{"Message Sent!"}</h2>
                        <p class="text-slate-600 dark:text-slate-300">{"Thanks for reaching out. I'll get back to you soon."}</p>
                    </div>
                } else {
                    <form class="space-y-6 rounded-2xl bg-white/80 dark:bg-slate-800/80 p-8 shadow-lg" onsubmit={on_submit} novalidate={true}>
                        <div>
                            <label for="contact-name" class="mb-2 block text-sm font-medium">{"Name"}</label>
                            <input id="contact-name" type="text" class={input_class} value={form.name.clone()} oninput={on_name} />
                            { error_for(Field::Name) }
                        </div>
                        <div>
                            <label for="contact-email" class="mb-2 block text-sm font-medium">{"Email"}</label>
                            <input id="contact-email" type="email" class={input_class} value={form.email.clone()} oninput={on_email} />
                            { error_for(Field::Email) }
                        </div>
                        <div>
                            <label for="contact-message" class="mb-2 block text-sm font-medium">{"Message"}</label>
                            <textarea id="contact-message" rows="5" class={input_class} value={form.message.clone()} oninput={on_message} />
                            { error_for(Field::Message) }
                        </div>
                        <button
                            type="submit"
                            class="flex w-full items-center justify-center gap-2 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 px-6 py-3 font-medium text-white"
                        >
                            <Icon name={IconName::Send} size={18} />
                            {"Send Message"}
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
