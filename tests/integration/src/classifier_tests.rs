//! Classifier boundary and determinism checks at the integration level.

use pretty_assertions::assert_eq;
use router_classifier::{QueryClassifier, QueryComplexity, QueryIntent, QueryModality};

#[test]
fn test_profiles_are_reproducible_across_classifier_instances() {
    let queries = [
        ("hi", false, false),
        ("explain why the cache misses spike at noon", false, false),
        ("describe the scene", true, false),
        ("summarize this recording", false, true),
    ];

    for (query, images, audio) in queries {
        let first = QueryClassifier::new().analyze(query, images, audio);
        let second = QueryClassifier::new().analyze(query, images, audio);
        assert_eq!(first, second, "query: {query}");
    }
}

#[test]
fn test_short_queries_stay_simple() {
    // Anything under 40 characters estimates below the 10-token boundary
    let classifier = QueryClassifier::new();
    for query in ["quartz lamps glow", "granite weathers slowly", "k"] {
        assert!(query.len() < 40);
        let profile = classifier.analyze(query, false, false);
        assert_eq!(profile.complexity, QueryComplexity::Simple, "query: {query}");
    }
}

#[test]
fn test_long_queries_without_simple_markers_turn_complex() {
    let query = "turquoise lanterns flicker beside crumbling aqueducts ".repeat(9);
    let profile = QueryClassifier::new().analyze(&query, false, false);

    assert!(profile.estimated_input_tokens > 100);
    assert_eq!(profile.complexity, QueryComplexity::Complex);
    // complex always implies the reasoning flag
    assert!(profile.requires_reasoning);
}

#[test]
fn test_modality_flags_dominate_text_content() {
    let classifier = QueryClassifier::new();
    let profile = classifier.analyze("hi", true, true);
    assert_eq!(profile.modality, QueryModality::Multimodal);
    // complexity and intent still come from the text
    assert_eq!(profile.complexity, QueryComplexity::Simple);
    assert_eq!(profile.intent, QueryIntent::Conversational);
}

#[test]
fn test_intent_categories_cover_the_main_traffic_shapes() {
    let classifier = QueryClassifier::new();
    let cases = [
        ("refactor the session middleware and add a regression test", QueryIntent::Technical),
        ("brainstorm campaign slogans for a mountain resort", QueryIntent::Creative),
        ("evaluate the two proposals against our latency budget", QueryIntent::Analytical),
        ("hello there", QueryIntent::Conversational),
        ("how do tides form", QueryIntent::Informational),
    ];
    for (query, expected) in cases {
        let profile = classifier.analyze(query, false, false);
        assert_eq!(profile.intent, expected, "query: {query}");
    }
}
