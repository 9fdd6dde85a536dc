//! Deferred Blur
//!
//! Clears focus from a button once the current render pass is over.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;

/// Blur the button behind `target` on the next tick (fire-and-forget)
pub fn blur_next_tick(target: NodeRef<html::Button>) {
    if let Some(button) = target.get_untracked() {
        Timeout::new(0, move || {
            let _ = button.blur();
        })
        .forget();
    }
}
