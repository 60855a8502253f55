use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input,
};
use std::collections::HashMap;

/// Account creation. New accounts start as students.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        if password() != confirm() {
            let mut fe = HashMap::new();
            fe.insert("confirm".to_string(), "Passwords do not match".to_string());
            field_errors.set(fe);
            return;
        }

        loading.set(true);
        match server::api::sign_up(name(), email(), password()).await {
            Ok(result) if result.success => {
                if let Some(user) = result.data {
                    auth.set_user(user);
                }
                navigator().push(Route::Dashboard {});
            }
            Ok(result) => {
                error_msg.set(Some(
                    result
                        .message
                        .unwrap_or_else(|| "Could not create your account".to_string()),
                ));
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Start learning with TutorHub" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, "{err}" }
                    }

                    form { class: "form-stack", onsubmit: handle_register,
                        Input {
                            label: "Full name",
                            name: "name",
                            value: name(),
                            required: true,
                            error: field_errors.read().get("name").cloned(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            required: true,
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Input {
                            label: "Confirm password",
                            name: "confirm",
                            input_type: "password",
                            value: confirm(),
                            required: true,
                            error: field_errors.read().get("confirm").cloned(),
                            on_input: move |e: FormEvent| confirm.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-footer-text",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "auth-link", "Sign in" }
                    }
                }
            }
        }
    }
}
