use annotation_core::render::NavigateFn;
use leptos::prelude::*;

use crate::utils::event_direction;

/// The previous/next button pair shown in the control bar.
#[component]
pub fn AnnotationActions(navigate: NavigateFn) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(direction) = event_direction(&ev) {
            navigate(direction);
        }
    };

    view! {
        <div class="vjs-annotations-control vjs-control">
            <button class="vjs-annotation-action" data-direction="previous" on:click=on_click.clone()>
                "«"
                <i class="vjs-speech-bubble"></i>
            </button>
            <button class="vjs-annotation-action" data-direction="next" on:click=on_click>
                <i class="vjs-speech-bubble"></i>
                "»"
            </button>
        </div>
    }
}
