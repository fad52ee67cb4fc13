use leptos::prelude::*;

use super::{icons::IconView, widgets::GlowingCard};
use crate::{
    content::{experiences, Experience, Icon},
    state::{Section, ViewSlices},
};

#[component]
pub fn ExperienceTimeline(slices: ViewSlices, on_select: Callback<u32>) -> impl IntoView {
    let selected = slices.selected_experience_id;

    view! {
        <section id=Section::Experience.id() class="py-20 px-6">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="text-white">"Career"</span>
                        " "
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            "Timeline"
                        </span>
                    </h2>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    <ol class="relative border-l border-gray-700 space-y-4">
                        {experiences()
                            .iter()
                            .map(|exp| {
                                let id = exp.id;
                                let is_selected = move || selected.get() == id;
                                view! {
                                    <li class="ml-4">
                                        <div class=move || {
                                            if is_selected() {
                                                "absolute w-3 h-3 rounded-full -left-1.5 mt-2 bg-cyan-400"
                                            } else {
                                                "absolute w-3 h-3 rounded-full -left-1.5 mt-2 bg-gray-600"
                                            }
                                        } />
                                        <button
                                            class=move || {
                                                if is_selected() {
                                                    "w-full text-left p-4 rounded-lg border border-cyan-500/50 bg-gray-900/80"
                                                } else {
                                                    "w-full text-left p-4 rounded-lg border border-gray-800 bg-gray-900/40 hover:border-gray-600"
                                                }
                                            }
                                            on:click=move |_| on_select.run(id)
                                        >
                                            <div class="text-xs text-gray-400">{exp.period}</div>
                                            <div class="font-bold">{exp.title}</div>
                                            <div class="text-sm text-cyan-300">{exp.organization}</div>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <div class="md:col-span-2">
                        {move || {
                            let exp = slices.selected_experience.get();
                            view! { <ExperienceDetail exp /> }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceDetail(exp: &'static Experience) -> impl IntoView {
    let list = |items: &'static [&'static str]| {
        items
            .iter()
            .map(|item| view! { <li>{*item}</li> })
            .collect_view()
    };
    view! {
        <GlowingCard class="h-full">
            <div class="flex flex-wrap items-start justify-between gap-2 mb-4">
                <div>
                    <h3 class="text-2xl font-bold">{exp.title}</h3>
                    <div class="text-cyan-300 flex items-center gap-2">
                        <IconView icon=Icon::Briefcase />
                        {exp.organization}
                    </div>
                    <div class="text-sm text-gray-400 flex items-center gap-2">
                        <IconView icon=Icon::MapPin />
                        {exp.location}
                    </div>
                </div>
                <div class="text-right">
                    <div class="font-bold">{exp.period}</div>
                    <span class="text-xs px-2 py-1 rounded-full bg-gray-800 border border-gray-700">
                        {exp.employment.label()}
                    </span>
                </div>
            </div>
            <h4 class="font-semibold mb-2">"Responsibilities"</h4>
            <ul class="list-disc list-inside text-sm text-gray-300 space-y-1 mb-4">
                {list(exp.responsibilities)}
            </ul>
            <h4 class="font-semibold mb-2">"Key Achievements"</h4>
            <ul class="list-disc list-inside text-sm text-gray-300 space-y-1 mb-4">
                {list(exp.achievements)}
            </ul>
            <div class="flex flex-wrap gap-2">
                {exp
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-1 text-xs bg-gray-800/50 rounded border border-gray-700">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </GlowingCard>
    }
}
