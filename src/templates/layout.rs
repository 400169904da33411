use crate::navigation::REGISTER_ROUTE;
use maud::{html, Markup, DOCTYPE};

pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="dark" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Accounts" }

                // Tailwind CSS CDN
                script src="https://cdn.tailwindcss.com" {}

                // Form and snackbar styles (loaded after Tailwind to override)
                link rel="stylesheet" href="/static/css/auth.css";

                // HTMX
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body {
                (navbar())
                main class="content-container py-8" {
                    (content)
                }
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        nav class="bg-secondary" style="border-bottom: 3px solid var(--accent-border);" {
            div class="content-container py-4" {
                div class="flex items-center justify-between" {
                    a href="/auth" class="text-2xl font-black whitespace-nowrap text-highlight" style="letter-spacing: -0.02em; border-bottom: none;" {
                        "ACCOUNTS"
                    }

                    div class="flex items-center gap-3" {
                        a href="/auth" class="px-3 py-2 text-primary text-sm font-bold" {
                            "LOGIN"
                        }
                        a href=(REGISTER_ROUTE) class="btn-brutal-orange text-sm" style="padding: 0.5rem 1rem;" {
                            "REGISTER"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{form::RegistrationForm, templates};

    const STYLESHEET: &str = include_str!("../../static/css/auth.css");

    /// Classes not provided by Tailwind must come from the shipped stylesheet.
    #[test]
    fn test_custom_classes_are_styled() {
        let pages = [
            base("Register", templates::register(&RegistrationForm::new(), false, &[])),
            base("Login", templates::auth_home(true, &[])),
        ];
        for page in pages {
            let html = page.into_string();
            assert!(html.contains(r#"href="/static/css/auth.css""#));
            for class in [
                "content-container",
                "bg-secondary",
                "text-highlight",
                "btn-brutal-orange",
                "card-brutal-inset",
                "text-muted",
            ] {
                assert!(html.contains(class), "{} not rendered", class);
                assert!(STYLESHEET.contains(&format!(".{}", class)), "{} not styled", class);
            }
        }

        for class in [
            "input-brutal-box",
            "label-brutal",
            "btn-brutal-fill",
            "form-field",
            "field-feedback",
            "alert-brutal",
            "text-primary",
            "snackbar-bottom-end",
        ] {
            assert!(STYLESHEET.contains(&format!(".{}", class)), "{} not styled", class);
        }
    }
}
