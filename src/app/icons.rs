use leptos::prelude::*;

use crate::content::Icon;

/// Brand marks come from the devicon font; everything else is a text glyph.
#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let font_class = icon.devicon_class().unwrap_or("not-italic leading-none");
    view! {
        <i class=format!("{font_class} {class}") aria-hidden="true">
            {icon.glyph()}
        </i>
    }
}

/// Icon-only link, labelled for screen readers.
#[component]
pub fn IconLink(
    icon: Icon,
    href: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=class
            aria-label=icon.label()
        >
            <IconView icon />
        </a>
    }
}
