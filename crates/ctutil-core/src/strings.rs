//! Literal string substitution and membership tests.
//!
//! Used while processing configuration option lists, where tokens are
//! compared byte for byte and never interpreted as patterns.

use ctutil_common::error::Result;

/// Replaces every leftmost, non-overlapping occurrence of `needle` in
/// `subject` with `replacement`.
///
/// The scan resumes right after each replaced span, so an occurrence formed
/// by a replacement together with the text that follows it is not matched
/// again. When `needle` does not occur the result is a copy of `subject`.
///
/// `needle` must not be empty; an empty needle yields a copy of `subject`.
///
/// # Errors
///
/// Returns [`CtutilError::Allocation`](ctutil_common::error::CtutilError::Allocation)
/// if the output buffer cannot be reserved.
pub fn replace_all(needle: &str, replacement: &str, subject: &str) -> Result<String> {
    let mut out = String::new();
    if needle.is_empty() {
        out.try_reserve_exact(subject.len())?;
        out.push_str(subject);
        return Ok(out);
    }

    let hits = subject.matches(needle).count();
    let len = (subject.len() - hits * needle.len())
        .saturating_add(hits.saturating_mul(replacement.len()));
    out.try_reserve_exact(len)?;

    let mut rest = subject;
    while let Some(pos) = rest.find(needle) {
        out.push_str(&rest[..pos]);
        out.push_str(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Returns `true` if some element of `list` equals `candidate` exactly.
///
/// The comparison is case-sensitive and an empty element matches an empty
/// candidate. The scan stops at the first match.
pub fn contains_exact<S: AsRef<str>>(candidate: &str, list: &[S]) -> bool {
    list.iter().any(|item| item.as_ref() == candidate)
}

/// Returns `true` if `candidate` is one of the `sep`-delimited tokens of
/// `list`, such as a single option of `"rw,nosuid,nodev"`.
pub fn contains_in_list(candidate: &str, list: &str, sep: char) -> bool {
    list.split(sep).any(|token| token == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(needle: &str, replacement: &str, subject: &str) -> String {
        replace_all(needle, replacement, subject).expect("should replace")
    }

    #[test]
    fn replace_identity() {
        assert_eq!(replace("A", "A", "A"), "A");
    }

    #[test]
    fn replace_growing() {
        assert_eq!(replace("A", "AA", "A"), "AA");
        assert_eq!(replace("A", "AA", "BA"), "BAA");
        assert_eq!(replace("A", "AA", "BAB"), "BAAB");
    }

    #[test]
    fn replace_shrinking() {
        assert_eq!(replace("AA", "A", "AA"), "A");
        assert_eq!(replace("AA", "A", "BAA"), "BA");
        assert_eq!(replace("AA", "A", "BAAB"), "BAB");
    }

    #[test]
    fn replace_does_not_rescan_replacement() {
        assert_eq!(replace("\"A\"A", "\"A\"", "B\"A\"AB"), "B\"A\"B");
        assert_eq!(replace("AA", "A", "AAAA"), "AA");
        assert_eq!(replace("ab", "a", "aabb"), "aab");
    }

    #[test]
    fn replace_without_occurrence_copies_subject() {
        assert_eq!(replace("X", "Y", "ABC"), "ABC");
        assert_eq!(replace("X", "Y", ""), "");
    }

    #[test]
    fn replace_with_empty_replacement_deletes() {
        assert_eq!(replace(",", "", "rw,nosuid,nodev"), "rwnosuidnodev");
    }

    #[test]
    fn replace_multibyte() {
        assert_eq!(replace("ü", "ue", "grün/über"), "gruen/ueber");
    }

    #[test]
    fn contains_empty_string() {
        assert!(contains_exact("", &[""]));
        assert!(!contains_exact("A", &[""]));
        assert!(!contains_exact("AAA", &["", "3472", "jshH"]));
    }

    #[test]
    fn contains_any_position() {
        assert!(contains_exact("A", &["A"]));
        assert!(contains_exact("A", &["A", "B", "C"]));
        assert!(contains_exact("A", &["B", "A", "C"]));
        assert!(contains_exact("ABC", &["ASD", "ATR", "ABC"]));
        assert!(contains_exact(
            "GHJ",
            &["AZIU", "WRT567B", "879C", "GHJ", "IUZ89"]
        ));
        assert!(contains_exact(
            "XYZ",
            &["BERTA", "ARQWE(9", "C8Zhkd", "7U", "XYZ", "UOIZ9", "=)()"]
        ));
    }

    #[test]
    fn contains_is_case_sensitive_and_exact() {
        assert!(!contains_exact("a", &["A"]));
        assert!(!contains_exact("AB", &["ABC"]));
        assert!(!contains_exact::<&str>("A", &[]));
    }

    #[test]
    fn contains_accepts_owned_strings() {
        let list = vec![String::from("ro"), String::from("nosuid")];
        assert!(contains_exact("nosuid", &list));
    }

    #[test]
    fn contains_in_option_list() {
        assert!(contains_in_list("nosuid", "rw,nosuid,nodev", ','));
        assert!(contains_in_list("rw", "rw", ','));
        assert!(!contains_in_list("suid", "rw,nosuid,nodev", ','));
        assert!(!contains_in_list("ro", "", ','));
        assert!(contains_in_list("", "rw,,nodev", ','));
    }
}
