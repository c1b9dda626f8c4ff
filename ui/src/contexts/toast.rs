use std::collections::BTreeMap;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
    /// Insertion order, for display.
    seq: u64,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        toast_type: ToastType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            toast_type,
            duration: Some(5000),
            seq: 0,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastType::Error)
    }

    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(title, message, ToastType::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: BTreeMap<Uuid, Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Toasts oldest first.
    pub fn ordered(&self) -> Vec<Toast> {
        let mut toasts: Vec<_> = self.toasts.values().cloned().collect();
        toasts.sort_by_key(|toast| toast.seq);
        toasts
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_seq = self.next_seq;

        match action {
            ToastAction::Add(mut toast) => {
                toast.seq = next_seq;
                next_seq += 1;
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        Rc::new(ToastState { toasts, next_seq })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!("toast shown outside a ToastProvider");
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.add(Toast::error(title, message));
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.add(Toast::success(title, message));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}
