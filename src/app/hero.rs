use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use super::{
    icons::IconView,
    widgets::{GlowingCard, HolographicButton},
};
use crate::{
    content::{Icon, IconSource, MERN_BADGES, OWNER_NAME, STATS, TECH_STACK},
    scene::binary_line,
    state::{RoleRotation, Section, ROLE_ROTATION_MS},
};

const BINARY_LINE_LEN: usize = 40;
const GRID_CELLS: usize = 96;

#[component]
pub fn HeroSection(on_navigate: Callback<Section>) -> impl IntoView {
    let rotation = RwSignal::new(RoleRotation::new());
    let Pausable { pause, .. } = use_interval_fn(
        move || {
            rotation.update(|r| {
                r.advance();
            })
        },
        ROLE_ROTATION_MS,
    );
    on_cleanup(move || pause());

    let (first, last) = OWNER_NAME.split_once(' ').unwrap_or((OWNER_NAME, ""));

    view! {
        <section id=Section::Home.id() class="pt-40 pb-20 px-6 relative">
            <div class="absolute inset-0 overflow-hidden opacity-20">
                <div class="absolute inset-0 grid grid-cols-12 grid-rows-8 gap-1">
                    {(0..GRID_CELLS)
                        .map(|i| {
                            view! {
                                <div
                                    class="bg-gray-800/20 border border-gray-700/20 animate-grid-pulse"
                                    style=format!("animation-delay: {:.2}s", i as f64 * 0.02)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="container mx-auto relative z-10">
                <div class="max-w-6xl mx-auto">
                    <div class="inline-flex items-center px-6 py-3 rounded-full bg-gray-900/80 backdrop-blur-xl border border-cyan-500/30 mb-12">
                        <div class="w-4 h-4 mr-4 rounded-full bg-gradient-to-r from-cyan-500 to-green-500 animate-pulse" />
                        <span class="text-base font-medium bg-gradient-to-r from-cyan-300 to-green-300 bg-clip-text text-transparent">
                            "MERN Stack Expert • Available for Full Stack Projects"
                        </span>
                    </div>

                    <div class="mb-12">
                        <h1 class="text-6xl md:text-8xl font-bold mb-8 leading-tight uppercase">
                            <span class="block bg-gradient-to-r from-cyan-300 via-purple-300 to-pink-300 bg-clip-text text-transparent">
                                {first}
                            </span>
                            <span class="block bg-gradient-to-r from-white via-gray-300 to-gray-400 bg-clip-text text-transparent">
                                {last}
                            </span>
                            <div class="h-20 mt-4">
                                <span class="block text-3xl md:text-5xl normal-case bg-gradient-to-r from-green-400 to-cyan-400 bg-clip-text text-transparent animate-fade-in">
                                    {move || rotation.get().current()}
                                </span>
                            </div>
                        </h1>
                        <BinaryLine />
                        <p class="text-xl md:text-2xl text-gray-300 mb-12 max-w-3xl">
                            "I specialize in building "
                            <span class="text-cyan-300 font-bold">"scalable MERN applications"</span>
                            " with " <span class="text-purple-300">"modern frontend frameworks"</span>
                            ", " <span class="text-green-300">"robust backend architectures"</span>
                            ", and " <span class="text-pink-300">"real-time features"</span>
                            " to create " <span class="underline decoration-cyan-500">"exceptional digital experiences"</span>
                            "."
                        </p>
                    </div>

                    <div class="flex flex-col items-center gap-6 mb-16">
                        <div class="flex flex-wrap gap-4 justify-center">
                            <HolographicButton on_click=Callback::new(move |_: ()| {
                                on_navigate.run(Section::Projects)
                            })>
                                <span class="flex items-center space-x-2">
                                    <IconView icon=Icon::Rocket />
                                    <span>"View Projects"</span>
                                </span>
                            </HolographicButton>
                            <button
                                class="px-6 py-3 rounded-lg bg-gray-900/80 backdrop-blur-sm border border-gray-700 hover:border-green-500/50 flex items-center space-x-2"
                                on:click=move |_| on_navigate.run(Section::Contact)
                            >
                                <IconView icon=Icon::Terminal />
                                <span>"Start Project"</span>
                            </button>
                        </div>
                        <div class="flex justify-center space-x-4">
                            {MERN_BADGES
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <div class="px-4 py-2 rounded-lg bg-gray-900/50 border border-gray-700">
                                            <span class="text-sm">{tech}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <TechStackGrid />
                    <StatsDashboard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn BinaryLine() -> impl IntoView {
    view! {
        <div class="mb-8 font-mono text-xs md:text-sm text-green-400">
            <div class="flex space-x-1">
                {binary_line(BINARY_LINE_LEN, 0x5eed)
                    .into_iter()
                    .map(|bit| {
                        let (digit, class) = if bit { ("1", "opacity-100") } else { ("0", "opacity-30") };
                        view! { <span class=class>{digit}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TechStackGrid() -> impl IntoView {
    view! {
        <div class="relative py-12">
            <h3 class="text-center text-2xl font-bold mb-8">
                <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                    "Core Technology Stack"
                </span>
            </h3>
            <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-8 gap-4">
                {TECH_STACK
                    .iter()
                    .map(|tech| {
                        view! {
                            <div class="relative bg-gray-900/50 backdrop-blur-sm rounded-lg p-4 border border-gray-800 hover:border-cyan-500/50 hover:-translate-y-1 transition">
                                <div class="text-3xl mb-2">{tech.glyph}</div>
                                <div class="font-semibold text-sm">{tech.name}</div>
                                <div class="text-xs text-gray-400 mt-1">{tech.level}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StatsDashboard() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-6 mt-20">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <GlowingCard class="h-full">
                            <div class="flex items-start justify-between mb-4">
                                <div class=format!("p-3 rounded-xl bg-gradient-to-br {} bg-opacity-20", stat.color)>
                                    <IconView icon=stat.icon() />
                                </div>
                                <div class="text-xs px-2 py-1 rounded-full bg-gradient-to-r from-gray-800 to-gray-900">
                                    <span class="text-green-400">{stat.trend}</span>
                                </div>
                            </div>
                            <div class="text-4xl font-bold mb-2">{stat.value}</div>
                            <div class="text-sm text-gray-400">{stat.label}</div>
                        </GlowingCard>
                    }
                })
                .collect_view()}
        </div>
    }
}
