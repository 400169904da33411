//! Route navigation for the auth pages.
//!
//! Navigation commands are resolved against the current route the way a
//! client-side router does it: `..` drops one route segment, `.` stays put,
//! and a leading `/` starts from the root.

use url::form_urlencoded;

/// Where the registration screen lives.
pub const REGISTER_ROUTE: &str = "/auth/register";

/// Live validation endpoint for the registration form.
pub const VALIDATE_ROUTE: &str = "/auth/register/validate";

/// Query parameter set after a successful registration.
pub const REGISTERED_PARAM: &str = "registered";
pub const REGISTERED_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl NavigationTarget {
    /// Resolve `command` relative to `current_route`.
    pub fn relative(current_route: &str, command: &str) -> Self {
        let mut segments: Vec<&str> = if command.starts_with('/') {
            Vec::new()
        } else {
            split_segments(current_route).collect()
        };

        for segment in split_segments(command) {
            match segment {
                "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }

        Self {
            path: format!("/{}", segments.join("/")),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Path plus url-encoded query string.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{}", self.path, query)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Router used by screens to change location.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}
