//! Free functions backed by the process-wide matcher

use rebuzzle_match::{
    contains_fuzzy_match, fuzzy_match, global, normalize, similarity, validate_words,
};

#[test]
fn test_free_functions_delegate_to_global() {
    assert_eq!(normalize("  Hello, World!!  "), "hello world");
    assert_eq!(similarity("sunflower", "sunflower"), 100.0);
    assert_eq!(similarity("cat", "dog"), 0.0);
    assert!(fuzzy_match("sunfower", "sunflower"));
    assert!(contains_fuzzy_match("I love sunflowers today", "sunflower"));
    assert_eq!(validate_words("fox", "the quick fox"), vec![true]);

    // The global cache saw the calls above
    assert!(global().stats().normalize.len > 0);
}

#[test]
fn test_global_is_a_single_instance() {
    assert!(std::ptr::eq(global(), global()));
}
