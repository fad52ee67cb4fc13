use std::{fmt, str::FromStr};

use leptos::prelude::*;

use crate::{
    content::{experience_by_id, most_recent_experience, Experience, ROLES},
    error::ViewError,
};

/// Pointer movement is scaled to this many pixels either side of centre.
pub const POINTER_RANGE: f64 = 20.0;
/// Hero role text advances on this period.
pub const ROLE_ROTATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// Page anchor id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|sec| sec.id() == s)
            .ok_or_else(|| ViewError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Offset of a pointer at `(client_x, client_y)` relative to the centre
    /// of a `width` x `height` viewport.
    pub fn from_client(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        Self {
            x: (client_x / width - 0.5) * POINTER_RANGE,
            y: (client_y / height - 0.5) * POINTER_RANGE,
        }
    }

    pub fn css_translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Navigation and selection state for the portfolio page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active_section: Section,
    selected_experience: u32,
    mobile_menu_open: bool,
    pointer: PointerOffset,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_section: Section::Home,
            selected_experience: most_recent_experience().id,
            mobile_menu_open: false,
            pointer: PointerOffset::default(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Marks `section` active if its anchor is on the page. Returns whether
    /// anything changed hands; a missing anchor leaves the state untouched.
    pub fn navigate(&mut self, section: Section, anchor_present: bool) -> bool {
        if !anchor_present {
            return false;
        }
        self.active_section = section;
        true
    }

    /// Navigation from the mobile menu closes the menu whether or not the
    /// scroll target exists.
    pub fn navigate_from_menu(&mut self, section: Section, anchor_present: bool) -> bool {
        self.mobile_menu_open = false;
        self.navigate(section, anchor_present)
    }

    pub fn selected_experience_id(&self) -> u32 {
        self.selected_experience
    }

    pub fn selected_experience(&self) -> &'static Experience {
        experience_or_latest(self.selected_experience)
    }

    /// Selects a career entry. Unknown ids are rejected and the current
    /// selection is kept.
    pub fn select_experience(&mut self, id: u32) -> Result<(), ViewError> {
        if experience_by_id(id).is_none() {
            return Err(ViewError::UnknownExperience(id));
        }
        self.selected_experience = id;
        Ok(())
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn pointer_offset(&self) -> PointerOffset {
        self.pointer
    }

    pub fn set_pointer_offset(&mut self, offset: PointerOffset) {
        self.pointer = offset;
    }
}

fn experience_or_latest(id: u32) -> &'static Experience {
    experience_by_id(id).unwrap_or_else(most_recent_experience)
}

/// Per-field memos over the page's [`ViewState`].
///
/// Pointer moves rewrite the state many times a second. Renderers subscribe
/// to one of these instead of the whole signal so they only rerun when
/// their own field changes.
#[derive(Clone, Copy)]
pub struct ViewSlices {
    pub active_section: Memo<Section>,
    pub selected_experience_id: Memo<u32>,
    pub selected_experience: Memo<&'static Experience>,
    pub mobile_menu_open: Memo<bool>,
    pub pointer: Memo<PointerOffset>,
}

impl ViewSlices {
    pub fn new(state: RwSignal<ViewState>) -> Self {
        let selected_experience_id =
            Memo::new(move |_| state.with(|s| s.selected_experience_id()));
        Self {
            active_section: Memo::new(move |_| state.with(|s| s.active_section())),
            selected_experience_id,
            selected_experience: Memo::new(move |_| {
                experience_or_latest(selected_experience_id.get())
            }),
            mobile_menu_open: Memo::new(move |_| state.with(|s| s.mobile_menu_open())),
            pointer: Memo::new(move |_| state.with(|s| s.pointer_offset())),
        }
    }
}

/// Percentage of the page scrolled. Not guarded: when the document is no
/// taller than the viewport the divisor is zero and the result is NaN or
/// infinite.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total_scroll = scroll_height - viewport_height;
    scroll_y / total_scroll * 100.0
}

/// Width of the header progress bar, in percent, for a raw progress value.
pub fn progress_bar_width(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Index into [`ROLES`] for the hero's rotating title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleRotation {
    index: usize,
}

impl RoleRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        ROLES[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % ROLES.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::experiences;

    #[test]
    fn test_section_parse() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "about".parse::<Section>(),
            Err(ViewError::UnknownSection("about".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_section(), Section::Home);
        assert_eq!(state.selected_experience_id(), 1);
        assert!(!state.mobile_menu_open());
        assert_eq!(state.pointer_offset(), PointerOffset::default());
    }

    #[test]
    fn test_navigate_every_section() {
        let mut state = ViewState::new();
        for section in Section::ALL {
            assert!(state.navigate(section, true));
            assert_eq!(state.active_section(), section);
            assert!(state.is_active(section));
        }
    }

    #[test]
    fn test_projects_click() {
        let mut state = ViewState::new();
        let section = "projects".parse::<Section>().expect("valid id");
        assert!(state.navigate(section, true));
        assert_eq!(state.active_section().id(), "projects");
    }

    #[test]
    fn test_navigate_missing_anchor_is_noop() {
        let mut state = ViewState::new();
        state.navigate(Section::Skills, true);
        assert!(!state.navigate(Section::Contact, false));
        assert_eq!(state.active_section(), Section::Skills);
    }

    #[test]
    fn test_mobile_menu_navigation_closes_menu() {
        let mut state = ViewState::new();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open());
        assert!(state.navigate_from_menu(Section::Experience, true));
        assert_eq!(state.active_section(), Section::Experience);
        assert!(!state.mobile_menu_open());

        state.toggle_mobile_menu();
        assert!(!state.navigate_from_menu(Section::Home, false));
        assert_eq!(state.active_section(), Section::Experience);
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn test_toggle_twice() {
        let mut state = ViewState::new();
        state.toggle_mobile_menu();
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open());
        state.toggle_mobile_menu();
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn test_select_experience_matches_panel() {
        let mut state = ViewState::new();
        for exp in experiences() {
            state.select_experience(exp.id).expect("known id");
            assert_eq!(state.selected_experience(), exp);
        }
    }

    #[test]
    fn test_select_entry_two() {
        let mut state = ViewState::new();
        state.select_experience(2).expect("entry 2 exists");
        let panel = state.selected_experience();
        assert_eq!(panel.title, "Full Stack Developer");
        assert_eq!(panel.organization, "Digital Craft Studio");
        assert_eq!(panel.achievements.len(), 3);
        assert_eq!(panel.achievements[0], "Delivered 12 client projects on schedule");
    }

    #[test]
    fn test_select_unknown_experience_keeps_selection() {
        let mut state = ViewState::new();
        state.select_experience(3).expect("entry 3 exists");
        assert_eq!(
            state.select_experience(99),
            Err(ViewError::UnknownExperience(99))
        );
        assert_eq!(state.selected_experience_id(), 3);
        assert_eq!(state.selected_experience().id, 3);
    }

    #[test]
    fn test_role_rotation_wraps_in_order() {
        let mut rotation = RoleRotation::new();
        assert_eq!(rotation.current(), ROLES[0]);
        for i in 1..=ROLES.len() * 2 {
            let role = rotation.advance();
            assert_eq!(role, ROLES[i % ROLES.len()]);
            assert_eq!(rotation.index(), i % ROLES.len());
        }
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_scroll_progress_short_page() {
        assert!(scroll_progress(0.0, 800.0, 800.0).is_nan());
        assert!(scroll_progress(10.0, 800.0, 800.0).is_infinite());
        assert_eq!(progress_bar_width(f64::NAN), 0.0);
        assert_eq!(progress_bar_width(f64::INFINITY), 0.0);
        assert_eq!(progress_bar_width(140.0), 100.0);
        assert_eq!(progress_bar_width(42.5), 42.5);
    }

    #[test]
    fn test_pointer_moves_leave_experience_panel_alone() {
        use std::sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        };

        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::new());
        let slices = ViewSlices::new(state);
        let renders = Arc::new(AtomicUsize::new(0));
        let panel = Memo::new({
            let renders = Arc::clone(&renders);
            move |_| {
                renders.fetch_add(1, Ordering::Relaxed);
                slices.selected_experience.get().id
            }
        });

        assert_eq!(panel.get(), 1);
        for i in 0..10 {
            let offset = PointerOffset::from_client(i as f64 * 100.0, 300.0, 1000.0, 800.0);
            state.update(|s| s.set_pointer_offset(offset));
            assert_eq!(slices.pointer.get(), offset);
            assert_eq!(panel.get(), 1);
        }
        assert_eq!(renders.load(Ordering::Relaxed), 1);

        state.update(|s| s.toggle_mobile_menu());
        assert!(slices.mobile_menu_open.get());
        assert_eq!(panel.get(), 1);
        assert_eq!(renders.load(Ordering::Relaxed), 1);

        state.update(|s| s.select_experience(2).expect("entry 2 exists"));
        assert_eq!(panel.get(), 2);
        assert_eq!(slices.selected_experience.get().title, "Full Stack Developer");
        assert_eq!(renders.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_pointer_offset() {
        let centre = PointerOffset::from_client(500.0, 400.0, 1000.0, 800.0);
        assert_eq!(centre, PointerOffset { x: 0.0, y: 0.0 });
        let corner = PointerOffset::from_client(0.0, 800.0, 1000.0, 800.0);
        assert_eq!(corner, PointerOffset { x: -10.0, y: 10.0 });
        assert_eq!(corner.css_translate(), "translate(-10px, 10px)");

        let mut state = ViewState::new();
        state.set_pointer_offset(corner);
        assert_eq!(state.pointer_offset(), corner);
    }
}
