use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every secondary locale provides *at least* the keys present in
/// the primary (pl) `greensun-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a locale:
/// 1. Create `ui/i18n/<code>/greensun-ui.ftl`
/// 2. Copy all keys from `pl/greensun-ui.ftl`
/// 3. Register it below and in `LanguageCode`.
#[test]
fn all_locales_have_all_primary_keys() {
    const PL: &str = include_str!("../i18n/pl/greensun-ui.ftl");
    const EN: &str = include_str!("../i18n/en/greensun-ui.ftl");
    const FR: &str = include_str!("../i18n/fr/greensun-ui.ftl");

    let primary_keys = extract_keys(PL);
    assert!(!primary_keys.is_empty(), "Primary (pl) contains no keys.");
    assert_no_dup_keys(PL, "pl");

    let locales: &[(&str, &str)] = &[("en", EN), ("fr", FR)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = primary_keys.difference(&keys).collect();
        let extra: BTreeSet<&String> = keys.difference(&primary_keys).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to pl:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: pl is the reference; add keys there first.",
            failures.join("\n\n")
        );
    }
}

/// Every locale's gallery captions come in title/subtitle pairs for the
/// same five items.
#[test]
fn gallery_captions_are_paired() {
    for (locale, src) in [
        ("pl", include_str!("../i18n/pl/greensun-ui.ftl")),
        ("en", include_str!("../i18n/en/greensun-ui.ftl")),
        ("fr", include_str!("../i18n/fr/greensun-ui.ftl")),
    ] {
        let keys = extract_keys(src);
        for item in 1..=5 {
            for part in ["title", "subtitle"] {
                let key = format!("gallery-item-{item}-{part}");
                assert!(keys.contains(&key), "{locale} lacks {key}");
            }
        }
        assert!(!keys.contains("gallery-item-6-title"), "{locale} has a sixth item");
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            keys.insert(key.to_string());
        }
    }

    keys
}

fn message_key(line: &str) -> Option<&str> {
    // Indented lines are continuations or attributes.
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let (left, _right) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
