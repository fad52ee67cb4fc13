use leptos::prelude::*;

#[component]
pub fn GlowingCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("relative {class}")>
            <div class="absolute -inset-0.5 bg-gradient-to-r from-cyan-500 to-purple-500 rounded-xl blur opacity-30 group-hover:opacity-50 transition duration-1000" />
            <div class="relative h-full bg-gray-900/80 backdrop-blur-xl rounded-xl p-6 border border-gray-800">
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn HolographicButton(
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(default = "button")] kind: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
            class="relative px-8 py-3 bg-gradient-to-r from-cyan-600 to-purple-600 rounded-lg font-semibold overflow-hidden group hover:scale-105 active:scale-95 transition-transform"
        >
            <span class="relative z-10">{children()}</span>
            <div class="absolute inset-0 bg-gradient-to-r from-cyan-500 to-purple-500 opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
        </button>
    }
}
