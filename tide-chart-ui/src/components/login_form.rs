//! Credential gate form.
//!
//! The gate is cosmetic (a static client-side check), so this component
//! only collects the fields; the actual check is the caller's handler.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoginFormProps {
    /// Called with (username, password) on submit.
    pub on_submit: EventHandler<(String, String)>,
}

#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let mut user = use_signal(String::new);
    let mut pass = use_signal(String::new);

    rsx! {
        div {
            style: "max-width: 280px; margin: 80px auto; display: flex; flex-direction: column; gap: 8px;",
            h3 { style: "margin: 0 0 8px 0;", "Tide Calendar" }
            input {
                style: "padding: 6px 8px;",
                placeholder: "Username",
                value: "{user}",
                oninput: move |evt| user.set(evt.value()),
            }
            input {
                style: "padding: 6px 8px;",
                r#type: "password",
                placeholder: "Password",
                value: "{pass}",
                oninput: move |evt| pass.set(evt.value()),
            }
            button {
                style: "padding: 6px 8px; cursor: pointer;",
                onclick: move |_| props.on_submit.call((user(), pass())),
                "Sign in"
            }
        }
    }
}
