use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::ToastContext;
use crate::state::{Toast, ToastAction, ToastKind};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(CONFIG.ui.toast_duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast toast-success", "✅"),
        ToastKind::Info => ("toast toast-info", "ℹ️"),
        ToastKind::Error => ("toast toast-error", "⚠️"),
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div {class} role="status" {onclick}>
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{&props.toast.message}</span>
        </div>
    }
}

/// Renders the queued toasts; each one dismisses itself after a timeout
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let Some(queue) = use_context::<ToastContext>() else {
        return html! {};
    };

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toast-stack">
            { for queue.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}
