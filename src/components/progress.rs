//! Progress Bar Component

use leptos::prelude::*;

use crate::models::ItemStatus;

/// Completed items render as success unless they failed
pub fn effective_status(percent: u8, status: ItemStatus) -> ItemStatus {
    if percent >= 100 && status != ItemStatus::Exception {
        ItemStatus::Success
    } else {
        status
    }
}

/// Line progress bar with status coloring
#[component]
pub fn ProgressBar(
    percent: u8,
    #[prop(optional)] status: ItemStatus,
    #[prop(default = 6)] stroke_width: u32,
    #[prop(default = 180)] width: u32,
) -> impl IntoView {
    let percent = percent.min(100);
    let status = effective_status(percent, status);
    let label = match status {
        ItemStatus::Success => "✓".to_string(),
        ItemStatus::Exception => "✗".to_string(),
        _ => format!("{}%", percent),
    };

    view! {
        <div class=format!("progress progress-{}", status.as_str()) style=format!("width: {}px", width)>
            <div class="progress-outer">
                <div class="progress-inner" style=format!("height: {}px", stroke_width)>
                    <div class="progress-bg" style=format!("width: {}%; height: {}px", percent, stroke_width)></div>
                </div>
            </div>
            <span class="progress-text">{label}</span>
        </div>
    }
}
