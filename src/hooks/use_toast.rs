// ============================================================================
// USE TOAST - notification queue shared through context
// ============================================================================

use yew::prelude::*;
use crate::state::{ToastAction, ToastKind, ToastQueue};

pub type ToastContext = UseReducerHandle<ToastQueue>;

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    html! {
        <ContextProvider<ToastContext> context={queue}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Push-side handle; a no-op outside a [`ToastProvider`]
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: Option<UseReducerDispatcher<ToastQueue>>,
}

impl Toaster {
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push { kind, message }),
            None => log::warn!("⚠️ Toast without provider: {}", message),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    let queue = use_context::<ToastContext>();
    Toaster {
        dispatcher: queue.map(|q| q.dispatcher()),
    }
}
