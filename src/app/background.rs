use leptos::prelude::*;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::scene::ScenePose;

/// Pixels per scene unit for the CSS-transformed meshes.
const SCENE_SCALE: f64 = 100.0;

/// Fixed decorative backdrop: a bobbing cube and a wireframe sphere on a
/// slowly auto-rotating stage.
#[component]
pub fn Background() -> impl IntoView {
    let (elapsed, set_elapsed) = signal(0.0_f64);
    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        set_elapsed.update(|t| *t += args.delta / 1000.0);
    });
    on_cleanup(move || pause());

    let pose = Memo::new(move |_| ScenePose::at(elapsed.get()));

    view! {
        <div class="fixed inset-0 overflow-hidden" aria-hidden="true">
            <div class="absolute inset-0 bg-gradient-to-br from-gray-900 via-black to-gray-950" />
            <div class="absolute inset-0 bg-stars" />
            <div class="absolute inset-0 [perspective:800px]">
                <div
                    class="absolute inset-0 [transform-style:preserve-3d]"
                    style:transform=move || pose.with(|p| p.orbit_css())
                >
                    <div
                        class="absolute top-1/2 left-3/4 w-16 h-16 border border-[#00ff88] bg-[#00ff88]/40 shadow-[0_0_30px_#00ff88] [transform-style:preserve-3d]"
                        style:transform=move || pose.with(|p| p.cube.css_transform(SCENE_SCALE))
                    />
                    <div
                        class="absolute top-1/2 left-1/2 -ml-32 w-64 h-64 rounded-full border border-dashed border-[#06b6d4]/30"
                        style:transform=move || pose.with(|p| p.sphere.css_transform(SCENE_SCALE))
                    />
                </div>
            </div>
            <div class="absolute inset-0 bg-gradient-to-t from-gray-900/50 via-transparent to-gray-900/50" />
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-cyan-500 to-transparent animate-scan-line" />
            </div>
        </div>
    }
}
