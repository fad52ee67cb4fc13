use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::icons::{IconLink, IconView};
use crate::content::{Icon, GITHUB_URL, LINKEDIN_URL, MAILTO_LINK, OWNER_NAME, OWNER_TITLE};

const SOCIAL_CLASS: &str = "text-gray-400 hover:text-white hover:-translate-y-0.5 transition text-2xl";

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="border-t border-gray-800/50 bg-gray-900/20 backdrop-blur-xl">
            <div class="container mx-auto px-6 py-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-6 md:mb-0">
                        <div class="flex items-center space-x-3 mb-4">
                            <div class="w-10 h-10 rounded-full bg-gradient-to-r from-cyan-500 to-purple-500 flex items-center justify-center">
                                <IconView icon=Icon::Terminal />
                            </div>
                            <div>
                                <div class="text-xl font-bold">{OWNER_NAME}</div>
                                <div class="text-sm text-gray-400">{OWNER_TITLE}</div>
                            </div>
                        </div>
                        <p class="text-gray-500 text-sm">
                            "Building robust web applications with MongoDB, Express, React, and Node.js"
                        </p>
                    </div>
                    <div class="flex space-x-6">
                        <IconLink icon=Icon::Github href=GITHUB_URL class=SOCIAL_CLASS />
                        <IconLink icon=Icon::Linkedin href=LINKEDIN_URL class=SOCIAL_CLASS />
                        <IconLink icon=Icon::Mail href=MAILTO_LINK class=SOCIAL_CLASS />
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-gray-800/50 text-center">
                    <div class="flex flex-col md:flex-row justify-between items-center text-gray-500 text-sm">
                        <p>{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                        <p class="mt-4 md:mt-0 flex items-center" title=env!("BUILD_TIME")>
                            "Made with "
                            <IconView icon=Icon::Heart class="mx-1 text-red-500" />
                            " using "
                            <span class="mx-1 text-cyan-400">"MERN"</span>
                            " Stack"
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
