//! Normalization of filesystem paths supplied in configuration.

use ctutil_common::error::Result;

/// Collapses every run of `/` in `path` into a single `/` and drops a
/// trailing `/`, unless the whole path is `/`.
///
/// A leading `/` is kept and an empty path stays empty. Running it twice
/// gives the same result as running it once.
///
/// # Errors
///
/// Returns [`CtutilError::Allocation`](ctutil_common::error::CtutilError::Allocation)
/// if the rewritten path cannot be buffered. `path` is left untouched in
/// that case.
pub fn normalize_path(path: &mut String) -> Result<()> {
    if path.is_empty() {
        return Ok(());
    }

    let mut out = String::new();
    out.try_reserve_exact(path.len())?;
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        let _ = out.pop();
    }

    *path = out;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(input: &str) -> String {
        let mut s = input.to_owned();
        normalize_path(&mut s).expect("should normalize");
        s
    }

    #[test]
    fn collapses_runs_and_trailing_slash() {
        assert_eq!(normalized("/A///B//C/D/E/"), "/A/B/C/D/E");
    }

    #[test]
    fn leaves_clean_path_alone() {
        assert_eq!(normalized("/A"), "/A");
        assert_eq!(normalized("/var/lib/ctutil"), "/var/lib/ctutil");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalized(""), "");
    }

    #[test]
    fn slash_runs_reduce_to_root() {
        assert_eq!(normalized("/"), "/");
        assert_eq!(normalized("//"), "/");
        assert_eq!(normalized("/////"), "/");
    }

    #[test]
    fn relative_paths_keep_no_leading_slash() {
        assert_eq!(normalized("a//b/"), "a/b");
        assert_eq!(normalized("a"), "a");
    }

    #[test]
    fn dot_components_are_not_resolved() {
        assert_eq!(normalized("/a/./b/../c//"), "/a/./b/../c");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already normalized path changes nothing.
        #[test]
        fn normalize_is_idempotent(input in "[/a-c.]{0,24}") {
            let mut once = input.clone();
            normalize_path(&mut once).expect("should normalize");
            let mut twice = once.clone();
            normalize_path(&mut twice).expect("should normalize");
            prop_assert_eq!(once, twice);
        }

        /// No double slashes and no trailing slash except for the root.
        #[test]
        fn normalized_shape(input in "[/a-c]{0,24}") {
            let mut s = input.clone();
            normalize_path(&mut s).expect("should normalize");
            prop_assert!(!s.contains("//"), "{:?} -> {:?}", input, s);
            prop_assert!(s == "/" || !s.ends_with('/'), "{:?} -> {:?}", input, s);
            prop_assert_eq!(s.starts_with('/'), input.starts_with('/'));
        }
    }
}
