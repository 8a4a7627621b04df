use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_scroll_to_top,
    router::Route,
};

struct SkillGroup {
    category: &'static str,
    icon: &'static str,
    techs: &'static [&'static str],
}

struct Experience {
    title: &'static str,
    period: &'static str,
    description: &'static str,
}

const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Mobile Development",
        icon: "📱",
        techs: &["React Native", "Expo", "TypeScript", "JavaScript"],
    },
    SkillGroup {
        category: "Backend & Database",
        icon: "🗄️",
        techs: &["Firebase", "Node.js", "SQLite", "MongoDB"],
    },
    SkillGroup {
        category: "State Management",
        icon: "🧩",
        techs: &["Zustand", "Redux", "Context API", "AsyncStorage"],
    },
    SkillGroup {
        category: "Design & UI",
        icon: "🎨",
        techs: &["React Native Elements", "NativeBase", "Styled Components"],
    },
];

const EXPERIENCE: [Experience; 2] = [
    Experience {
        title: "Mobile App Developer",
        period: "2022 - Present",
        description: "Developing cross-platform mobile applications using React Native and modern \
                      development practices.",
    },
    Experience {
        title: "Freelance Developer",
        period: "2021 - 2022",
        description: "Built custom mobile solutions for small businesses and startups, focusing on \
                      user experience and performance.",
    },
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();

    html! {
        <div class="px-4 py-12">
            <div class="mx-auto max-w-4xl space-y-16">
                <header class="text-center">
                    <h1 class="mb-4 text-4xl font-bold text-slate-900 dark:text-white md:text-5xl">
                        {"About Me 👨‍💻"}
                    </h1>
                    <p class="mx-auto max-w-2xl text-lg text-slate-600 dark:text-slate-300">
                        {"A mobile developer with 2+ years of experience creating beautiful and functional \
                          cross-platform applications."}
                    </p>
                </header>

                <section class="rounded-2xl bg-white/80 dark:bg-slate-800/80 p-8 shadow-lg">
                    <h2 class="mb-6 text-2xl font-bold text-slate-900 dark:text-white">{"My Story"}</h2>
                    <div class="space-y-4 leading-relaxed text-slate-600 dark:text-slate-300">
                        <p>{"Started in mobile development with a simple goal: build apps that solve real problems."}</p>
                        <p>{"Every app combines clean code with user-centered design so it feels native on both iOS and Android."}</p>
                    </div>
                </section>

                <section>
                    <h2 class="mb-8 text-center text-2xl font-bold text-slate-900 dark:text-white">{"Skills & Technologies"}</h2>
                    <div class="grid gap-6 md:grid-cols-2">
                        { for SKILLS.iter().map(|group| html! {
                            <div class="rounded-2xl bg-white/80 dark:bg-slate-800/80 p-6 shadow-lg">
                                <h3 class="mb-4 flex items-center gap-2 text-lg font-semibold text-slate-900 dark:text-white">
                                    <span aria-hidden="true">{ group.icon }</span>
                                    { group.category }
                                </h3>
                                <ul class="flex flex-wrap gap-2">
                                    { for group.techs.iter().map(|tech| html! {
                                        <li class="rounded-full bg-indigo-100 dark:bg-indigo-900/50 px-3 py-1 text-sm">{ *tech }</li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </section>

                <section>
                    <h2 class="mb-8 text-center text-2xl font-bold text-slate-900 dark:text-white">{"Experience"}</h2>
                    <div class="space-y-6">
                        { for EXPERIENCE.iter().map(|item| html! {
                            <div class="rounded-2xl bg-white/80 dark:bg-slate-800/80 p-6 shadow-lg">
                                <div class="mb-2 flex flex-wrap items-center justify-between gap-2">
                                    <h3 class="text-lg font-semibold text-slate-900 dark:text-white">{ item.title }</h3>
                                    <span class="text-sm text-indigo-600 dark:text-indigo-400">{ item.period }</span>
                                </div>
                                <p class="text-slate-600 dark:text-slate-300">{ item.description }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="text-center">
                    <h2 class="mb-8 text-2xl font-bold text-slate-900 dark:text-white">{"Let's Connect! 🤝"}</h2>
                    <Link<Route> to={Route::Contact} classes="inline-flex items-center gap-2 rounded-lg bg-indigo-600 px-6 py-3 font-medium text-white hover:bg-indigo-700">
                        <Icon name={IconName::Mail} size={20} />
                        {"Get in Touch"}
                    </Link<Route>>
                </section>
            </div>
        </div>
    }
}
