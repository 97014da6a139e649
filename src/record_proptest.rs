//! Property-based tests for template naming, classification and discovery.
//!
//! These tests use proptest to generate random names and template trees and
//! verify that invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use crate::classify::{classify, COMMUNITY_SUFFIX, GLOBAL_SUFFIX};
    use crate::discovery::discover;
    use crate::record::{template_name, TemplateRecord};
    use crate::snapshot::MemorySnapshot;
    use proptest::prelude::*;

    // ============================================================================
    // template_name property tests
    // ============================================================================

    proptest! {
        /// Property: the name of `<name>.gitignore` is `<name>`
        #[test]
        fn template_name_strips_extension_once(name in "[A-Za-z0-9_+.-]{1,16}") {
            let leaf = format!("{}.gitignore", name);
            prop_assert_eq!(template_name(&leaf), Some(name.as_str()));
        }

        /// Property: any other final extension is rejected
        #[test]
        fn template_name_rejects_other_extensions(
            name in "[A-Za-z0-9_-]{1,12}",
            ext in "[a-z]{1,10}",
        ) {
            prop_assume!(ext != "gitignore");
            let leaf = format!("{}.{}", name, ext);
            prop_assert_eq!(template_name(&leaf), None);
        }

        /// Property: a trailing suffix after `.gitignore` disqualifies the file
        #[test]
        fn template_name_rejects_suffixed_gitignore(
            name in "[A-Za-z0-9]{1,12}",
            suffix in "[a-z]{1,6}",
        ) {
            let leaf = format!("{}.gitignore.{}", name, suffix);
            prop_assert_eq!(template_name(&leaf), None);
        }
    }

    // ============================================================================
    // classify property tests
    // ============================================================================

    fn dir_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("/"),
            Just("/community/"),
            Just("/community/Python/"),
            Just("/Global/"),
            Just("/global/"),
            Just("/Other/"),
            Just("/nested/community/"),
        ]
    }

    proptest! {
        /// Property: labels follow the reserved prefixes of the path
        #[test]
        fn classify_label_follows_prefix(dir in dir_strategy(), name in "[A-Za-z0-9]{1,12}") {
            let path = format!("{}{}.gitignore", dir, name);
            let record = TemplateRecord::from_path(&path, "").unwrap();
            let classification = classify(&record);

            prop_assert_eq!(classification.is_community, dir.starts_with("/community/"));
            prop_assert_eq!(classification.is_global, dir.starts_with("/Global/"));
            prop_assert!(classification.label.starts_with(&name));

            let expected = match (classification.is_community, classification.is_global) {
                (true, _) => format!("{}{}", name, COMMUNITY_SUFFIX),
                (_, true) => format!("{}{}", name, GLOBAL_SUFFIX),
                _ => name.clone(),
            };
            prop_assert_eq!(classification.label, expected);
        }

        /// Property: classify is deterministic
        #[test]
        fn classify_is_deterministic(dir in dir_strategy(), name in "[A-Za-z0-9]{1,12}") {
            let path = format!("{}{}.gitignore", dir, name);
            let record = TemplateRecord::from_path(&path, "x\n").unwrap();
            prop_assert_eq!(classify(&record), classify(&record));
        }
    }

    // ============================================================================
    // discover property tests
    // ============================================================================

    /// A file somewhere in a small tree: (directory components, stem, is_template)
    fn file_strategy() -> impl Strategy<Value = (Vec<String>, String, bool)> {
        (
            prop::collection::vec("[a-z]{1,4}", 0..3),
            "[A-Z][a-z]{0,5}",
            any::<bool>(),
        )
    }

    fn file_path(dirs: &[String], stem: &str, is_template: bool) -> String {
        let ext = if is_template { "gitignore" } else { "txt" };
        let mut path = String::new();
        for dir in dirs {
            path.push('/');
            path.push_str(dir);
        }
        format!("{}/{}.{}", path, stem, ext)
    }

    proptest! {
        /// Property: discovery finds exactly the `.gitignore` files, at any depth
        #[test]
        fn discover_finds_exactly_templates(
            files in prop::collection::vec(file_strategy(), 0..20),
        ) {
            let mut snapshot = MemorySnapshot::new();
            let mut expected = BTreeSet::new();
            for (dirs, stem, is_template) in &files {
                let path = file_path(dirs, stem, *is_template);
                snapshot.add_file_string(&path, &path);
                if *is_template {
                    expected.insert(path);
                }
            }

            let records = discover(&snapshot, "/").unwrap();
            let found: Vec<String> = records.iter().map(|r| r.path.clone()).collect();
            let expected: Vec<String> = expected.into_iter().collect();
            prop_assert_eq!(found, expected);

            for record in &records {
                let leaf = format!("/{}.gitignore", record.name);
                prop_assert!(record.path.ends_with(&leaf));
                prop_assert_eq!(&record.content, &record.path);
            }
        }
    }
}
