//! Static credential gate.
//!
//! This is a visibility toggle, not a security boundary: the credentials
//! ship in the client and there is no session state. It only decides
//! whether the dashboard pipeline runs at all.

const USERNAME: &str = "danang";
const PASSWORD: &str = "lap-an-123";

/// Check the login form fields. Username is trimmed, password is not.
pub fn authenticate(user: &str, pass: &str) -> bool {
    user.trim() == USERNAME && pass == PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate() {
        assert!(authenticate("danang", "lap-an-123"));
        assert!(authenticate("  danang  ", "lap-an-123"));
        assert!(!authenticate("danang", "wrong"));
        assert!(!authenticate("", ""));
    }
}
