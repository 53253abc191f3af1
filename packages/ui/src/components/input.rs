use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

#[component]
pub fn Input(
    #[props(extends = GlobalAttributes, extends = input)] attributes: Vec<Attribute>,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onchange: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    rsx! {
        input {
            class: if invalid { "input input-invalid" } else { "input" },
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onchange: move |evt| {
                if let Some(handler) = onchange {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = onblur {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Textarea(
    #[props(extends = GlobalAttributes, extends = textarea)] attributes: Vec<Attribute>,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: if invalid { "input input-invalid" } else { "input" },
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Select(
    #[props(extends = GlobalAttributes, extends = select)] attributes: Vec<Attribute>,
    #[props(default)] invalid: bool,
    onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: if invalid { "input input-invalid" } else { "input" },
            onchange: move |evt| onchange.call(evt),
            ..attributes,
            {children}
        }
    }
}
