use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::{icons::IconView, widgets::HolographicButton};
use crate::{
    content::{Icon, OWNER_NAME, RESUME_PATH},
    state::{progress_bar_width, scroll_progress, Section, ViewSlices},
};

fn current_scroll_progress() -> f64 {
    let win = window();
    let scroll_y = win.scroll_y().unwrap_or_default();
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    scroll_progress(scroll_y, scroll_height, viewport)
}

#[component]
pub fn Header(
    slices: ViewSlices,
    on_navigate: Callback<Section>,
    on_menu_navigate: Callback<Section>,
    on_menu_toggle: Callback<()>,
) -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_progress.set(current_scroll_progress());
    });

    let menu_open = slices.mobile_menu_open;
    let active = slices.active_section;

    view! {
        <header class="fixed top-0 w-full z-50 bg-gray-900/10 backdrop-blur-xl border-b border-gray-800/30">
            <div
                class="h-1 bg-gradient-to-r from-cyan-500 via-purple-500 to-pink-500"
                style:width=move || format!("{}%", progress_bar_width(progress.get()))
            />
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <Logo />
                    <nav class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavButton section active on_navigate /> })
                            .collect_view()}
                    </nav>
                    <button
                        class="md:hidden p-2 rounded-lg bg-gray-800/50"
                        on:click=move |_| on_menu_toggle.run(())
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <IconView icon /> }
                        }}
                    </button>
                    <div class="hidden md:flex items-center space-x-4">
                        <a
                            href=RESUME_PATH
                            download="resume.pdf"
                            class="px-4 py-2 rounded-lg bg-gray-800/50 hover:bg-gray-700/50 border border-gray-700 flex items-center space-x-2"
                        >
                            <IconView icon=Icon::Download />
                            <span>"Resume"</span>
                        </a>
                        <HolographicButton on_click=Callback::new(move |_: ()| {
                            on_navigate.run(Section::Contact)
                        })>
                            <span class="flex items-center space-x-2">
                                <IconView icon=Icon::Mail />
                                <span>"Hire Me"</span>
                            </span>
                        </HolographicButton>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 space-y-4 overflow-hidden">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="block w-full text-left px-4 py-3 rounded-lg bg-gray-800/50 hover:bg-gray-700/50"
                                        on:click=move |_| on_menu_navigate.run(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 group">
            <div class="relative animate-spin-slow">
                <div class="w-12 h-12 rounded-full bg-gradient-to-r from-cyan-500 to-purple-500 flex items-center justify-center">
                    <IconView icon=Icon::Terminal class="text-2xl" />
                </div>
            </div>
            <div>
                <div class="text-2xl font-bold uppercase bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                    {OWNER_NAME}
                </div>
                <div class="text-xs text-gray-400 flex items-center space-x-2">
                    <div class="flex items-center">
                        <div class="w-2 h-2 rounded-full bg-green-500 mr-1 animate-pulse" />
                        <span>"MERN STACK DEVELOPER"</span>
                    </div>
                    <span>"•"</span>
                    <span>"AVAILABLE"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NavButton(
    section: Section,
    active: Memo<Section>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    let is_active = move || active.get() == section;
    view! {
        <button on:click=move |_| on_navigate.run(section) class="relative group">
            <span class=move || {
                if is_active() {
                    "text-sm font-medium transition-all duration-300 text-cyan-300"
                } else {
                    "text-sm font-medium transition-all duration-300 text-gray-400 group-hover:text-white"
                }
            }>{section.label()}</span>
            <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gradient-to-r from-cyan-500 to-purple-500 group-hover:w-full transition-all duration-300" />
        </button>
    }
}
