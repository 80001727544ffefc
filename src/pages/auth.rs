//! Login and signup screen shown while no session exists.

use leptos::prelude::*;

use crate::app::use_app;
use crate::browser;
use crate::state::AuthForm;

#[component]
pub fn AuthPage() -> impl IntoView {
    let app = use_app();
    let form = Memo::new(move |_| app.snapshot.with(|s| s.view.auth_form));

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1 class="brand">"NutritionTrack"</h1>
                <p class="page-description">"Snap your meal. Know your nutrition."</p>
                {move || match form.get() {
                    AuthForm::Login => view! { <LoginForm /> }.into_any(),
                    AuthForm::Signup => view! { <SignupForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let app = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move || {
        let outcome = app
            .controller()
            .borrow_mut()
            .login(&email.get_untracked(), &password.get_untracked());
        match outcome {
            Ok(_) => {
                set_email.set(String::new());
                set_password.set(String::new());
            }
            Err(e) => browser::report(e),
        }
    };

    view! {
        <div class="auth-form">
            <h2>"Welcome back"</h2>
            <input
                type="email"
                class="input"
                placeholder="Email"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                class="input"
                placeholder="Password"
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button class="btn btn-primary" on:click=move |_| submit()>
                "Log In"
            </button>
            <p class="auth-switch">
                "Don't have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        app.controller().borrow_mut().show_signup();
                    }
                >
                    "Sign up"
                </a>
            </p>
        </div>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let app = use_app();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move || {
        let outcome = app.controller().borrow_mut().signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        match outcome {
            Ok(_) => {
                set_name.set(String::new());
                set_email.set(String::new());
                set_password.set(String::new());
            }
            Err(e) => browser::report(e),
        }
    };

    view! {
        <div class="auth-form">
            <h2>"Create an account"</h2>
            <input
                type="text"
                class="input"
                placeholder="Full name"
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                class="input"
                placeholder="Email"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                class="input"
                placeholder="Password (6+ characters)"
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button class="btn btn-primary" on:click=move |_| submit()>
                "Sign Up"
            </button>
            <p class="auth-switch">
                "Already have an account? "
                <a
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        app.controller().borrow_mut().show_login();
                    }
                >
                    "Log in"
                </a>
            </p>
        </div>
    }
}
