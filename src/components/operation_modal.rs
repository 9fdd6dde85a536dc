//! Operation Modal Component
//!
//! Create/edit form for a list item, with a completion panel shown after
//! submit.

use leptos::prelude::*;

use crate::context::use_block_context;
use crate::form::ItemDraft;
use crate::models::{ItemFormValues, ListItem};

#[component]
pub fn OperationModal(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] current: Signal<Option<ListItem>>,
    #[prop(into)] done: Signal<bool>,
    #[prop(into)] on_done: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_submit: Callback<ItemFormValues>,
) -> impl IntoView {
    let ctx = use_block_context();
    let labels = StoredValue::new(ctx.labels());
    let owners = StoredValue::new(ctx.config().owners);

    let draft = RwSignal::new(ItemDraft::default());
    let (error, set_error) = signal::<Option<String>>(None);

    // Re-seed the form whenever the dialog opens
    Effect::new(move |_| {
        if visible.get() {
            draft.set(ItemDraft::from_current(current.get_untracked().as_ref()));
            set_error.set(None);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().to_values() {
            Ok(values) => {
                set_error.set(None);
                on_submit.run(values);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let title = move || {
        labels.with_value(|l| {
            if current.get().is_some() {
                l.modal_edit_title.clone()
            } else {
                l.modal_add_title.clone()
            }
        })
    };

    let form_view = move || {
        let l = labels.get_value();
        view! {
            <form class="operation-form" on:submit=submit>
                <label class="form-item">
                    <span class="form-label">{l.field_title.clone()}</span>
                    <input
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </label>
                <label class="form-item">
                    <span class="form-label">{l.start_time.clone()}</span>
                    <input
                        type="datetime-local"
                        prop:value=move || draft.get().start_time
                        on:input=move |ev| draft.update(|d| d.start_time = event_target_value(&ev))
                    />
                </label>
                <label class="form-item">
                    <span class="form-label">{l.owner.clone()}</span>
                    <select
                        prop:value=move || draft.get().owner
                        on:change=move |ev| draft.update(|d| d.owner = event_target_value(&ev))
                    >
                        <option value="">{l.select_owner.clone()}</option>
                        {owners.get_value().into_iter().map(|owner| view! {
                            <option value=owner.clone()>{owner.clone()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form-item">
                    <span class="form-label">{l.field_description.clone()}</span>
                    <textarea
                        rows="4"
                        prop:value=move || draft.get().sub_description
                        on:input=move |ev| draft.update(|d| d.sub_description = event_target_value(&ev))
                    ></textarea>
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="modal-footer">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        {l.cancel.clone()}
                    </button>
                    <button type="submit" class="btn btn-primary">{l.save.clone()}</button>
                </div>
            </form>
        }
    };

    let done_view = move || {
        let l = labels.get_value();
        view! {
            <div class="operation-result">
                <div class="result-icon">"✓"</div>
                <div class="result-title">{l.done_title.clone()}</div>
                <div class="result-description">{l.done_description.clone()}</div>
                <button class="btn btn-primary" on:click=move |_| on_done.run(())>
                    {l.done_ack.clone()}
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal-mask">
                <div class="modal operation-modal" role="dialog">
                    <div class="modal-header">
                        <span class="modal-title">
                            {move || if done.get() { String::new() } else { title() }}
                        </span>
                        <button
                            class="modal-close"
                            on:click=move |_| if done.get_untracked() { on_done.run(()) } else { on_cancel.run(()) }
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        {move || if done.get() { done_view().into_any() } else { form_view().into_any() }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
