use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Alert, AlertVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input,
};
use std::collections::HashMap;

/// Email/password sign-in. The auth service sets the session cookie; the
/// dashboard guard picks it up on the next navigation.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::sign_in(email(), password()).await {
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
                        .unwrap_or_else(|| "Invalid email or password".to_string()),
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
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back to TutorHub" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { variant: AlertVariant::Error, "{err}" }
                    }

                    form { class: "form-stack", onsubmit: handle_login,
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
                            value: password(),
                            required: true,
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-footer-text",
                        "New to TutorHub? "
                        Link { to: Route::Register {}, class: "auth-link", "Create an account" }
                    }
                }
            }
        }
    }
}
