use super::compare_version_release;

#[test]
fn version_ord() {
    let source = vec![
        ("1.2.3", true, "1.2.2"),
        ("1.2.3", false, "1.2.4"),
        ("1.2.3", false, "1.12.0"),
        ("1.10", true, "1.9"),
        ("2.0", true, "1.0"),
        ("1.0", false, "2.0"),
        // Numeric token always beats a text token
        ("5", true, "rc"),
        ("rc", false, "5"),
        // Longer sequence wins from either side
        ("1.1", true, "1"),
        ("1", false, "1.1"),
        // Dotted tail outranks a plain text tail
        ("1.alpha", true, "1alpha"),
        ("1alpha", false, "1.alpha"),
        // Case is normalized before comparison
        ("1.A", true, "1.a"),
        // Totality over empty input
        ("1", true, ""),
        ("", false, "1"),
        ("", true, ""),
    ];

    for e in source {
        println!("Comparing {} vs {}", e.0, e.2);
        assert_eq!(compare_version_release(e.0, e.2, false), e.1);
    }
}

#[test]
fn version_self_is_newer_enough() {
    // Equal versions stay "newer or equal" so the release walk decides
    for v in ["1.0", "0", "20220301+git1", "3.2.1.alt2", ""] {
        assert!(compare_version_release(v, v, false));
    }
}

#[test]
fn release_self_is_no_update() {
    for r in ["1", "alt1", "alt1.1", ""] {
        assert!(!compare_version_release(r, r, true));
    }
}

#[test]
fn release_ord() {
    let source = vec![
        ("alt2", true, "alt1"),
        ("alt1", false, "alt2"),
        ("alt1.2", true, "alt1.1"),
        ("2", true, "1"),
    ];

    for e in source {
        println!("Comparing {} vs {}", e.0, e.2);
        assert_eq!(compare_version_release(e.0, e.2, true), e.1);
    }
}
