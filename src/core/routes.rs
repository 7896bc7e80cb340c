//! Page paths and the rules that tie them to the auth gate.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const ADMIN: &str = "/admin";
pub const ADMIN_PIERCINGS: &str = "/admin/piercings";
pub const ADMIN_TATTOOS: &str = "/admin/tattoos";
pub const PIERCINGS: &str = "/piercings";
pub const TATTOOS: &str = "/tattoos";

/// Whether `path` is behind the admin gate (`/admin` and `/admin/*`).
pub fn is_protected(path: &str) -> bool {
    path == ADMIN || path.starts_with("/admin/")
}

/// Login URL that brings the user back to `from` afterwards.
pub fn login_redirect(from: &str) -> String {
    if is_protected(from) && from != ADMIN {
        format!("{}?next={}", LOGIN, from)
    } else {
        LOGIN.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_protected() {
        assert!(is_protected("/admin"));
        assert!(is_protected("/admin/piercings"));
        assert!(is_protected("/admin/tattoos"));
        assert!(!is_protected("/administrator"));
        assert!(!is_protected("/"));
        assert!(!is_protected("/login"));
        assert!(!is_protected("/tattoos"));
    }

    #[test]
    fn test_login_redirect() {
        assert_eq!(login_redirect("/admin"), "/login");
        assert_eq!(login_redirect("/admin/tattoos"), "/login?next=/admin/tattoos");
        assert_eq!(login_redirect("/piercings"), "/login");
    }
}
