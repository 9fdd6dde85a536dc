//! Confirm Modal Component
//!
//! Blocking confirm/cancel dialog guarding destructive actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `subject` - Name of the thing being acted on; hidden when empty
/// * `on_ok` - Called when the user confirms
/// * `on_cancel` - Called when the user dismisses the dialog (button or mask)
#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] subject: Signal<String>,
    #[prop(into)] title: String,
    #[prop(into)] content: String,
    #[prop(into)] ok_text: String,
    #[prop(into)] cancel_text: String,
    #[prop(into)] on_ok: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-mask" on:click=move |_| on_cancel.run(())>
                <div class="modal modal-confirm" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-confirm-body">
                        <span class="modal-confirm-icon">"!"</span>
                        <span class="modal-confirm-title">{title.clone()}</span>
                        <div class="modal-confirm-content">{content.clone()}</div>
                        <Show when={move || subject.with(|s| !s.is_empty())}>
                            <div class="modal-confirm-subject">{move || subject.get()}</div>
                        </Show>
                    </div>
                    <div class="modal-confirm-btns">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            {cancel_text.clone()}
                        </button>
                        <button class="btn btn-primary" on:click=move |_| on_ok.run(())>
                            {ok_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
