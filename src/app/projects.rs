use leptos::prelude::*;

use super::{
    icons::IconView,
    portfolio::scroll_to_anchor,
    widgets::{GlowingCard, HolographicButton},
};
use crate::{
    content::{
        featured_projects, projects, Icon, Project, ALL_PROJECTS_TECH_LIMIT, FEATURED_TECH_LIMIT,
    },
    state::Section,
};

const ALL_PROJECTS_ANCHOR: &str = "all-projects";

#[component]
pub fn FeaturedProjects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-6">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            "MERN Stack"
                        </span>
                        " "
                        <span class="text-white">"Projects"</span>
                    </h2>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Scalable full-stack applications built with MongoDB, Express, React, and Node.js"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-12">
                    {featured_projects()
                        .map(|project| view! { <FeaturedCard project /> })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <HolographicButton on_click=Callback::new(move |_: ()| {
                        scroll_to_anchor(ALL_PROJECTS_ANCHOR);
                    })>"View All MERN Projects"</HolographicButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(project: &'static Project) -> impl IntoView {
    let (techs, hidden) = project.tech_preview(FEATURED_TECH_LIMIT);
    view! {
        <div class="group cursor-pointer hover:-translate-y-2 transition-transform">
            <GlowingCard class="h-full">
                <div class=format!(
                    "h-48 rounded-xl bg-gradient-to-r {} mb-6 relative overflow-hidden",
                    project.image_color,
                )>
                    <div class="absolute inset-0 bg-black/20" />
                    <div class="absolute top-4 right-4">
                        <div class="px-3 py-1 rounded-full bg-black/50 backdrop-blur-sm text-xs">
                            "MERN Stack"
                        </div>
                    </div>
                    <div class="absolute bottom-4 left-4">
                        <div class="text-2xl font-bold">{project.banner_word()}</div>
                    </div>
                </div>
                <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                <p class="text-gray-400 mb-4 text-sm">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {techs
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs bg-gray-800/50 rounded-full border border-gray-700">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 text-xs text-gray-400">{format!("+{hidden}")}</span>
                            }
                        })}
                </div>
                <div class="flex justify-between items-center">
                    <div class="flex space-x-2">
                        <a href=project.github_url class="p-2 rounded-lg bg-gray-800 hover:bg-gray-700" aria-label="Source code">
                            <IconView icon=Icon::Github />
                        </a>
                        <a href=project.live_url class="p-2 rounded-lg bg-gray-800 hover:bg-gray-700" aria-label="Live demo">
                            <IconView icon=Icon::ExternalLink />
                        </a>
                    </div>
                    <IconView icon=Icon::ChevronRight class="text-gray-400 group-hover:text-cyan-400 transition-colors" />
                </div>
            </GlowingCard>
        </div>
    }
}

#[component]
pub fn AllProjects() -> impl IntoView {
    view! {
        <section id=ALL_PROJECTS_ANCHOR class="py-20 px-6 bg-gray-900/20">
            <div class="container mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        <span class="text-white">"All"</span>
                        " "
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects().iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    // no overflow badge here, extra technologies are just dropped
    let (techs, _) = project.tech_preview(ALL_PROJECTS_TECH_LIMIT);
    view! {
        <div class="hover:scale-[1.02] transition-transform">
            <GlowingCard class="h-full">
                <div class=format!(
                    "h-40 rounded-xl bg-gradient-to-r {} mb-6 relative overflow-hidden",
                    project.image_color,
                )>
                    <div class="absolute inset-0 bg-black/30" />
                    {project
                        .featured
                        .then(|| {
                            view! {
                                <div class="absolute top-4 right-4">
                                    <div class="px-3 py-1 rounded-full bg-black/50 backdrop-blur-sm text-xs">
                                        "⭐ Featured"
                                    </div>
                                </div>
                            }
                        })}
                </div>
                <h3 class="text-lg font-bold mb-2">{project.title}</h3>
                <p class="text-gray-400 mb-4 text-sm">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {techs
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
        </div>
    }
}
