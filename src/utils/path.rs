//! `~/` expansion for the database and config paths given by the user.

use std::path::PathBuf;

/// `~/x` → `$HOME/x`; anything else, or no known home, is returned as is.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("/tmp/db.sqlite"), PathBuf::from("/tmp/db.sqlite"));
        assert_eq!(expand_tilde("db.sqlite"), PathBuf::from("db.sqlite"));
        assert_eq!(expand_tilde("a/~/b"), PathBuf::from("a/~/b"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.sqlite"), home.join("x.sqlite"));
        }
    }
}
