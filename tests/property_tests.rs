//! Property-based tests using proptest

use codenamer::*;
use proptest::prelude::*;

/// Build an index holding the given adjective and noun pools.
fn pools_index(adjectives: &[String], nouns: &[String]) -> TagIndex {
    let mut index = TagIndex::new();
    for word in adjectives {
        index.insert(PosTag::Adjective, word.clone());
    }
    for word in nouns {
        index.insert(PosTag::Noun, word.clone());
    }
    index
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_batch_suggestions_are_pairwise_distinct(
        adjectives in prop::collection::vec("[a-z]{4,8}", 1..8),
        nouns in prop::collection::vec("[a-z]{4,8}", 1..8),
        count in 1usize..20,
        retry_factor in 1usize..5,
        seed in 0u64..1000
    ) {
        let index = pools_index(&adjectives, &nouns);
        let modifiers = ModifierSet::default();
        let config = NamerConfig::default()
            .with_retry_factor(retry_factor)
            .with_seed(seed);

        let batch = SuggestionEngine::new(&index, &modifiers, &config).suggestions(count);

        let mut sorted = batch.suggestions().to_vec();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), batch.len());
        prop_assert!(batch.len() <= count);
    }

    #[test]
    fn test_batch_generation_stays_within_budget(
        adjectives in prop::collection::vec("[a-z]{4,8}", 0..4),
        nouns in prop::collection::vec("[a-z]{4,8}", 0..4),
        count in 1usize..30,
        retry_factor in 1usize..5,
        seed in 0u64..1000
    ) {
        // Pools may be empty or tiny; generation must still terminate
        // inside the attempt budget and report any shortfall.
        let index = pools_index(&adjectives, &nouns);
        let modifiers = ModifierSet::default();
        let config = NamerConfig::default()
            .with_retry_factor(retry_factor)
            .with_seed(seed);

        let batch = SuggestionEngine::new(&index, &modifiers, &config).suggestions(count);

        prop_assert!(batch.attempts() <= count * retry_factor);
        let achievable = adjectives.len() * nouns.len();
        if batch.len() < count {
            prop_assert!(batch.exhausted());
            prop_assert!(batch.len() <= achievable);
        }
    }

    #[test]
    fn test_segment_count_matches_modifier_order(
        adjectives in prop::collection::vec("[a-z]{4,8}", 1..6),
        nouns in prop::collection::vec("[a-z]{4,8}", 1..6),
        verbs in prop::collection::vec("[a-z]{4,8}", 1..6),
        seed in 0u64..1000
    ) {
        let mut index = pools_index(&adjectives, &nouns);
        for word in &verbs {
            index.insert(PosTag::VerbGerund, word.clone());
        }
        let modifiers = ModifierSet::from_codes(&["VBG", "JJ", "NN"]).unwrap();
        let config = NamerConfig::default().with_seed(seed);

        let suggestion = SuggestionEngine::new(&index, &modifiers, &config)
            .suggest()
            .unwrap();
        let segments: Vec<&str> = suggestion.split('_').collect();

        prop_assert_eq!(segments.len(), modifiers.len());
        prop_assert!(verbs.iter().any(|w| w == segments[0]));
        prop_assert!(adjectives.iter().any(|w| w == segments[1]));
        prop_assert!(nouns.iter().any(|w| w == segments[2]));
    }

    #[test]
    fn test_normalizer_tokens_uphold_invariant(text in ".{0,200}") {
        let normalizer = Normalizer::new();
        let tokens = normalizer.tokens(&text);

        for token in &tokens {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_alphabetic() || c == '-'));
            prop_assert!(!token.chars().any(|c| c.is_uppercase()));
            prop_assert!(!token.starts_with('-'));
            prop_assert!(!token.ends_with('-'));
        }

        // No duplicates survive
        let mut sorted = tokens.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), tokens.len());
    }

    #[test]
    fn test_normalizer_is_idempotent(text in ".{0,200}") {
        let normalizer = Normalizer::new();
        let first = normalizer.tokens(&text);
        let second = normalizer.tokens(&first.join(" "));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_index_build_is_deterministic(
        words in prop::collection::vec("[a-zA-Z]{1,10}", 0..40)
    ) {
        let text = words.join(" ");
        let tagger = HeuristicTagger::new();
        let builder = TagIndexBuilder::new(&tagger);

        prop_assert_eq!(builder.build(&text), builder.build(&text));
    }

    #[test]
    fn test_envelope_json_round_trip(
        sources in prop::collection::vec("[a-z:/._-]{1,30}", 0..5),
        suggestions in prop::collection::vec("[a-z_]{1,20}", 0..10)
    ) {
        let envelope = ResultEnvelope::new(
            sources,
            vec!["JJ".to_string(), "NN".to_string()],
            suggestions,
        );

        let json = ResultWriter::new(OutputFormat::Json).write(&envelope).unwrap();
        let back: ResultEnvelope = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, envelope);
    }

    #[test]
    fn test_seeded_generation_is_reproducible(
        adjectives in prop::collection::vec("[a-z]{4,8}", 1..6),
        nouns in prop::collection::vec("[a-z]{4,8}", 1..6),
        count in 1usize..10,
        seed in 0u64..1000
    ) {
        let index = pools_index(&adjectives, &nouns);
        let modifiers = ModifierSet::default();
        let config = NamerConfig::default().with_seed(seed);

        let first = SuggestionEngine::new(&index, &modifiers, &config).suggestions(count);
        let second = SuggestionEngine::new(&index, &modifiers, &config).suggestions(count);

        prop_assert_eq!(first, second);
    }
}
