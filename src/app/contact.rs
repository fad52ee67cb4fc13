use leptos::prelude::*;

use super::{
    icons::{IconLink, IconView},
    widgets::{GlowingCard, HolographicButton},
};
use crate::{
    content::{Icon, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL},
    state::Section,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-800/50 border border-gray-700 focus:border-cyan-500 focus:outline-none";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <GlowingCard>
                    <div class="grid md:grid-cols-2 gap-12">
                        <div>
                            <h2 class="text-3xl font-bold mb-6">
                                "Let's Build Your Next "
                                <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                                    "MERN Project"
                                </span>
                            </h2>
                            <p class="text-gray-400 mb-8">
                                "Looking for a skilled MERN stack developer? Let's discuss your project requirements."
                            </p>
                            <div class="space-y-6">
                                <ContactLine icon=Icon::Mail label="Email" value=CONTACT_EMAIL />
                                <ContactLine
                                    icon=Icon::Terminal
                                    label="Specialization"
                                    value="MERN Stack Development"
                                />
                            </div>
                            <div class="mt-8 flex space-x-4">
                                <IconLink
                                    icon=Icon::Github
                                    href=GITHUB_URL
                                    class="p-3 rounded-lg bg-gray-800 hover:bg-gray-700"
                                />
                                <IconLink
                                    icon=Icon::Linkedin
                                    href=LINKEDIN_URL
                                    class="p-3 rounded-lg bg-gray-800 hover:bg-gray-700"
                                />
                            </div>
                        </div>
                        <ContactForm />
                    </div>
                </GlowingCard>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(icon: Icon, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="p-3 rounded-full bg-gradient-to-r from-cyan-500/20 to-purple-500/20">
                <IconView icon class="text-cyan-400" />
            </div>
            <div>
                <div class="text-sm text-gray-400">{label}</div>
                <div class="font-semibold">{value}</div>
            </div>
        </div>
    }
}

/// Display-only form. Submitting does nothing.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                log::debug!("contact form has no submission handler");
            }
        >
            <div>
                <label for="contact_name" class="block text-sm font-medium mb-2">"Name"</label>
                <input id="contact_name" type="text" class=INPUT_CLASS placeholder="Your name" />
            </div>
            <div>
                <label for="contact_email" class="block text-sm font-medium mb-2">"Email"</label>
                <input id="contact_email" type="email" class=INPUT_CLASS placeholder="your@email.com" />
            </div>
            <div>
                <label for="contact_message" class="block text-sm font-medium mb-2">"Project Details"</label>
                <textarea
                    id="contact_message"
                    rows="4"
                    class=INPUT_CLASS
                    placeholder="Tell me about your MERN stack project..."
                />
            </div>
            <HolographicButton kind="submit">"Send Message"</HolographicButton>
        </form>
    }
}
