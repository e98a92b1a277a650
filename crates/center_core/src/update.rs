use crate::{AppState, Effect, FilterState, Msg, SessionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshRequested => {
            // The Idle/Refreshing gate is the only re-entrancy guard; a
            // trigger while a sequence is in flight is dropped.
            if state.session() == SessionState::Refreshing {
                Vec::new()
            } else {
                state.begin_refresh();
                vec![Effect::StartRefresh]
            }
        }
        Msg::RefreshCompleted {
            messages,
            feeds,
            refreshed_at,
        } => {
            state.complete_refresh(messages, feeds, refreshed_at);
            Vec::new()
        }
        Msg::RefreshFailed { error } => {
            state.fail_refresh(error);
            Vec::new()
        }
        Msg::CategoryChanged { id, category } => {
            if state.apply_category(id, &category) {
                vec![Effect::SyncCategory { id, category }]
            } else {
                Vec::new()
            }
        }
        Msg::CategorySynced { id, error } => {
            // The optimistic change is kept either way; a sync failure only
            // surfaces in the banner.
            if let Some(error) = error {
                state.set_error(format!("Category sync failed for message {id}: {error}"));
            }
            Vec::new()
        }
        Msg::CategoryFilterSelected(selector) => {
            state.filter_mut().category = selector;
            Vec::new()
        }
        Msg::SourceFilterSelected(selector) => {
            state.filter_mut().source = selector;
            Vec::new()
        }
        Msg::ProjectFilterSelected(selector) => {
            state.filter_mut().project = selector;
            Vec::new()
        }
        Msg::FiltersCleared => {
            state.set_filter(FilterState::default());
            Vec::new()
        }
        Msg::TemplateInputChanged(text) => {
            state.set_template_input(text);
            Vec::new()
        }
        Msg::TemplateSubmitted => {
            let text = state.template_input().to_string();
            if state.templates_mut().create(&text) {
                state.clear_template_input();
                state.mark_dirty();
                vec![persist(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::TemplateDeleteRequested { index } => {
            if index < state.templates().len() {
                state.set_pending_delete(Some(index));
            }
            Vec::new()
        }
        Msg::TemplateDeleteConfirmed => match state.take_pending_delete() {
            Some(index) => {
                state.mark_dirty();
                if state.templates_mut().remove(index) {
                    vec![persist(&state)]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        },
        Msg::TemplateDeleteCancelled => {
            if state.pending_delete().is_some() {
                state.set_pending_delete(None);
            }
            Vec::new()
        }
        Msg::TemplateMoved { from, to } => {
            if state.templates_mut().reorder(from, to) {
                state.mark_dirty();
                vec![persist(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::TemplateCopyRequested { index } => match state.templates().get(index) {
            Some(entry) => vec![Effect::CopyToClipboard {
                text: entry.content.clone(),
            }],
            None => Vec::new(),
        },
        Msg::TemplatesRestored(snapshot) => {
            state.restore_templates(snapshot);
            Vec::new()
        }
        Msg::ClipboardFailed { error } => {
            state.set_error(format!("Clipboard copy failed: {error}"));
            Vec::new()
        }
        Msg::ErrorDismissed => {
            if state.error().is_some() {
                state.clear_error();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn persist(state: &AppState) -> Effect {
    Effect::PersistTemplates {
        snapshot: state.templates_snapshot(),
    }
}
