use super::components::snackbar;
use crate::{navigation::REGISTER_ROUTE, notification::Notification};
use maud::{html, Markup};

/// Parent page of the registration screen.
pub fn auth_home(registered: bool, notifications: &[Notification]) -> Markup {
    html! {
        div class="max-w-md mx-auto" {
            h1 class="text-4xl font-black mb-8 text-highlight" style="letter-spacing: -0.02em;" { "LOGIN" }

            div class="card-brutal-inset space-y-6" {
                @if registered {
                    div class="alert-brutal green" {
                        "YOUR ACCOUNT IS READY. SIGN IN WITH YOUR NEW CREDENTIALS."
                    }
                }

                // Register link
                div class="text-center" {
                    p class="text-sm text-muted font-bold" {
                        "DON'T HAVE AN ACCOUNT? "
                        a href=(REGISTER_ROUTE) class="text-highlight orange" {
                            "REGISTER HERE"
                        }
                    }
                }
            }
        }

        (snackbar(notifications))
    }
}
