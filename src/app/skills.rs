use leptos::prelude::*;

use super::{icons::IconView, widgets::GlowingCard};
use crate::{
    content::{highlighted_skills, IconSource, Skill, STACK_CARDS},
    state::Section,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-6 relative">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-5xl md:text-6xl font-bold mb-6">
                        <span class="text-white">"MERN STACK"</span>
                        " "
                        <span class="bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "SKILLSET"
                        </span>
                    </h2>
                    <p class="text-gray-400 max-w-2xl mx-auto text-lg">
                        "Full spectrum of technologies for building modern web applications"
                    </p>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mb-12">
                    {STACK_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <GlowingCard class="h-full">
                                    <div class="text-4xl mb-4">{card.glyph}</div>
                                    <div class="text-xl font-bold mb-2">{card.name}</div>
                                    <div class="text-gray-400 text-sm mb-3">{card.description}</div>
                                    <div class=format!(
                                        "px-3 py-1 text-xs rounded-full bg-gradient-to-r {} bg-opacity-20 text-center",
                                        card.color,
                                    )>{card.level}</div>
                                </GlowingCard>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-6">
                    {highlighted_skills()
                        .iter()
                        .map(|skill| view! { <SkillBar skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <GlowingCard>
            <div class="flex items-center justify-between mb-3">
                <div class="flex items-center space-x-4">
                    <div
                        class="p-2 rounded-lg backdrop-blur-sm"
                        style=format!("background-color: {}20; color: {}", skill.color, skill.color)
                    >
                        <IconView icon=skill.icon() />
                    </div>
                    <div>
                        <div class="font-bold text-lg">{skill.name}</div>
                        <div class="text-sm text-gray-400 capitalize">{skill.category.as_str()}</div>
                    </div>
                </div>
                <div class="text-2xl font-bold" style=format!("color: {}", skill.color)>
                    {format!("{}%", skill.level)}
                </div>
            </div>
            <div class="relative h-3 bg-gray-800 rounded-full overflow-hidden">
                <div
                    class="h-full rounded-full relative"
                    style=format!(
                        "width: {}%; background: linear-gradient(90deg, {}, {}99)",
                        skill.level,
                        skill.color,
                        skill.color,
                    )
                />
            </div>
        </GlowingCard>
    }
}
