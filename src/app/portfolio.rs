use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::{
    background::Background, contact::ContactSection, experience::ExperienceTimeline,
    footer::Footer, header::Header, hero::HeroSection, icons::IconView,
    projects::{AllProjects, FeaturedProjects},
    skills::SkillsSection,
};
use crate::{
    content::Icon,
    state::{PointerOffset, Section, ViewSlices, ViewState},
};

/// Scrolls the element with `id` into view. `false` when no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(el) => {
            el.scroll_into_view();
            true
        }
        None => false,
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    let on_navigate = Callback::new(move |section: Section| {
        let found = scroll_to_anchor(section.id());
        state.update(|s| {
            if !s.navigate(section, found) {
                log::debug!("no anchor for section {section}");
            }
        });
    });
    let on_menu_navigate = Callback::new(move |section: Section| {
        let found = scroll_to_anchor(section.id());
        state.update(|s| {
            s.navigate_from_menu(section, found);
        });
    });
    let on_menu_toggle = Callback::new(move |_: ()| state.update(|s| s.toggle_mobile_menu()));
    let on_select = Callback::new(move |id: u32| {
        state.update(|s| {
            if let Err(e) = s.select_experience(id) {
                log::debug!("ignoring selection: {e}");
            }
        });
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let win = window();
        let width = win
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let offset =
            PointerOffset::from_client(e.client_x() as f64, e.client_y() as f64, width, height);
        state.update(|s| s.set_pointer_offset(offset));
    });

    let slices = ViewSlices::new(state);

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gray-950 text-white overflow-x-hidden">
            <Background />
            <div
                class="fixed w-96 h-96 rounded-full pointer-events-none z-0 transition-transform duration-100 ease-out"
                style="background: radial-gradient(circle, rgba(99, 102, 241, 0.1) 0%, transparent 70%)"
                style:transform=move || slices.pointer.get().css_translate()
            />
            <div class="relative z-10">
                <Header slices on_navigate on_menu_navigate on_menu_toggle />
                <HeroSection on_navigate />
                <FeaturedProjects />
                <AllProjects />
                <SkillsSection />
                <ExperienceTimeline slices on_select />
                <ContactSection />
                <Footer />
            </div>
            <button
                class="fixed bottom-8 right-8 p-4 rounded-full bg-gradient-to-r from-cyan-600 to-purple-600 shadow-lg shadow-cyan-500/25 z-50 hover:scale-110 transition-transform"
                aria-label="Back to top"
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                <IconView icon=Icon::ChevronRight class="inline-block -rotate-90" />
            </button>
        </div>
    }
}
