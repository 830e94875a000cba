//! Per-plugin state shared by every boundary call.

use std::sync::OnceLock;

/// The auth code the host issued to this plugin, plus values the host never
/// changes during a session and that are therefore cached.
#[derive(Debug, Default)]
pub struct HostContext {
    auth_code: i32,
    app_directory: OnceLock<String>,
}

impl HostContext {
    pub fn new(auth_code: i32) -> Self {
        Self {
            auth_code,
            app_directory: OnceLock::new(),
        }
    }

    pub fn auth_code(&self) -> i32 {
        self.auth_code
    }

    /// Returns the cached app directory, fetching it with `fetch` on first use.
    pub fn app_directory_or_init(&self, fetch: impl FnOnce() -> String) -> &str {
        self.app_directory.get_or_init(fetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_directory_fetched_once() {
        let context = HostContext::new(7);
        let mut calls = 0;
        assert_eq!(
            context.app_directory_or_init(|| {
                calls += 1;
                "C:/cq/app/demo/".into()
            }),
            "C:/cq/app/demo/"
        );
        assert_eq!(context.app_directory_or_init(|| unreachable!()), "C:/cq/app/demo/");
        assert_eq!(calls, 1);
        assert_eq!(context.auth_code(), 7);
    }
}
