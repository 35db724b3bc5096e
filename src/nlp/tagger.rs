//! Part-of-speech tagging
//!
//! This module defines the tagging seam consumed by the index builder and a
//! built-in heuristic implementation. The heuristic tagger is intentionally
//! simple: function-word tables plus suffix rules cover enough of English to
//! fill the tag pools from real page text. Callers who need accurate tags
//! can plug in their own [`Tagger`].

use crate::types::{PosTag, TaggedWord};

/// Annotates a text blob with part-of-speech tags.
///
/// Implementations return one entry per recognized word, in text order.
/// Words whose grammatical category falls outside the recognized tag set
/// (pronouns, for example) are omitted.
pub trait Tagger {
    /// Tag every word in `text`, in order.
    fn tag(&self, text: &str) -> Vec<TaggedWord>;
}

/// A rule-based tagger with no external model.
///
/// Expects input that has already been cleaned (letters, hyphens, and
/// whitespace only); anything else still tags, just less accurately.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    /// Create a new heuristic tagger
    pub fn new() -> Self {
        Self
    }

    /// Classify one word, or `None` when its category is unrepresentable.
    fn classify(&self, word: &str) -> Option<PosTag> {
        let lower = word.to_lowercase();

        if let Some(tag) = function_word_tag(&lower) {
            return Some(tag);
        }
        if is_pronoun(&lower) {
            return None;
        }

        // Capitalized word (might be proper noun or sentence start)
        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
        {
            if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
                return Some(PosTag::ProperNounPlural);
            }
            return Some(PosTag::ProperNoun);
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return Some(PosTag::Adjective);
        }

        // Verb forms: gerund, irregular participle, regular past tense
        if lower.ends_with("ing") && lower.len() > 4 {
            return Some(PosTag::VerbGerund);
        }
        if is_irregular_participle(&lower) {
            return Some(PosTag::VerbPastParticiple);
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            return Some(PosTag::VerbPastTense);
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return Some(PosTag::Adverb);
        }

        // Common noun suffixes
        if lower.ends_with("tion")
            || lower.ends_with("ness")
            || lower.ends_with("ment")
            || lower.ends_with("ity")
            || lower.ends_with("er")
            || lower.ends_with("or")
        {
            return Some(PosTag::Noun);
        }

        // Remaining -y words lean adjective (angry, happy, tiny)
        if lower.ends_with('y') && lower.len() > 3 {
            return Some(PosTag::Adjective);
        }

        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
            return Some(PosTag::NounPlural);
        }

        // Default to noun (most content words are nouns)
        Some(PosTag::Noun)
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord> {
        text.split_whitespace()
            .filter_map(|word| {
                self.classify(word)
                    .map(|tag| TaggedWord::new(word, tag))
            })
            .collect()
    }
}

fn function_word_tag(lower: &str) -> Option<PosTag> {
    let tag = match lower {
        // Determiners
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
        | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
            PosTag::Determiner
        }
        // Coordinating conjunctions
        "and" | "or" | "but" | "nor" | "so" | "yet" => PosTag::Conjunction,
        // Prepositions and subordinating conjunctions
        "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
        | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
        | "during" | "without" | "before" | "under" | "around" | "among" | "if" | "because"
        | "while" | "though" | "although" | "when" | "unless" | "until" | "since" => {
            PosTag::Preposition
        }
        // Interjections
        "oh" | "ah" | "hey" | "wow" | "ouch" | "alas" | "hurrah" | "uh" | "um" | "er"
        | "hmm" | "yay" | "whoa" => PosTag::Interjection,
        // Auxiliaries and modals, base form
        "be" | "have" | "do" | "is" | "are" | "am" | "has" | "does" | "can" | "could"
        | "will" | "would" | "shall" | "should" | "may" | "might" | "must" => PosTag::Verb,
        // Auxiliaries, past tense
        "was" | "were" | "did" | "had" => PosTag::VerbPastTense,
        "been" => PosTag::VerbPastParticiple,
        "being" => PosTag::VerbGerund,
        "not" => PosTag::Adverb,
        _ => return None,
    };
    Some(tag)
}

/// Pronouns have no representable tag; the tagger drops them entirely.
fn is_pronoun(lower: &str) -> bool {
    matches!(
        lower,
        "i" | "you"
            | "he"
            | "she"
            | "it"
            | "we"
            | "they"
            | "me"
            | "him"
            | "us"
            | "them"
            | "who"
            | "whom"
            | "whose"
            | "which"
            | "what"
            | "myself"
            | "yourself"
            | "himself"
            | "herself"
            | "itself"
            | "ourselves"
            | "themselves"
    )
}

fn is_irregular_participle(lower: &str) -> bool {
    matches!(
        lower,
        "taken"
            | "given"
            | "broken"
            | "written"
            | "chosen"
            | "frozen"
            | "hidden"
            | "driven"
            | "fallen"
            | "forgotten"
            | "spoken"
            | "stolen"
            | "known"
            | "grown"
            | "thrown"
            | "shown"
            | "seen"
            | "done"
            | "gone"
            | "worn"
            | "torn"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(word: &str) -> Option<PosTag> {
        HeuristicTagger::new()
            .tag(word)
            .first()
            .map(|tagged| tagged.tag)
    }

    #[test]
    fn test_function_words() {
        assert_eq!(tag_of("the"), Some(PosTag::Determiner));
        assert_eq!(tag_of("and"), Some(PosTag::Conjunction));
        assert_eq!(tag_of("between"), Some(PosTag::Preposition));
        assert_eq!(tag_of("because"), Some(PosTag::Preposition));
        assert_eq!(tag_of("wow"), Some(PosTag::Interjection));
        assert_eq!(tag_of("should"), Some(PosTag::Verb));
        assert_eq!(tag_of("were"), Some(PosTag::VerbPastTense));
        assert_eq!(tag_of("been"), Some(PosTag::VerbPastParticiple));
        assert_eq!(tag_of("not"), Some(PosTag::Adverb));
    }

    #[test]
    fn test_function_words_case_insensitive() {
        assert_eq!(tag_of("The"), Some(PosTag::Determiner));
        assert_eq!(tag_of("AND"), Some(PosTag::Conjunction));
    }

    #[test]
    fn test_pronouns_dropped() {
        let tagger = HeuristicTagger::new();
        let tagged = tagger.tag("they saw him");

        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].text, "saw");
    }

    #[test]
    fn test_proper_nouns() {
        assert_eq!(tag_of("Paris"), Some(PosTag::ProperNoun));
        assert_eq!(tag_of("Andes"), Some(PosTag::ProperNounPlural));
        // All-caps words are not treated as proper nouns
        assert_ne!(tag_of("HTML"), Some(PosTag::ProperNoun));
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(tag_of("beautiful"), Some(PosTag::Adjective));
        assert_eq!(tag_of("dangerous"), Some(PosTag::Adjective));
        assert_eq!(tag_of("angry"), Some(PosTag::Adjective));
        assert_eq!(tag_of("running"), Some(PosTag::VerbGerund));
        assert_eq!(tag_of("jumped"), Some(PosTag::VerbPastTense));
        assert_eq!(tag_of("broken"), Some(PosTag::VerbPastParticiple));
        assert_eq!(tag_of("quickly"), Some(PosTag::Adverb));
        assert_eq!(tag_of("information"), Some(PosTag::Noun));
        assert_eq!(tag_of("dogs"), Some(PosTag::NounPlural));
    }

    #[test]
    fn test_short_words_avoid_suffix_rules() {
        // Too short for the -ing/-ed/-s rules; fall through to noun
        assert_eq!(tag_of("king"), Some(PosTag::Noun));
        assert_eq!(tag_of("bed"), Some(PosTag::Noun));
        assert_eq!(tag_of("gas"), Some(PosTag::Noun));
    }

    #[test]
    fn test_default_is_noun() {
        assert_eq!(tag_of("dog"), Some(PosTag::Noun));
        assert_eq!(tag_of("release"), Some(PosTag::Noun));
    }

    #[test]
    fn test_tag_preserves_order_and_surface() {
        let tagger = HeuristicTagger::new();
        let tagged = tagger.tag("The angry dog barked");

        let words: Vec<&str> = tagged.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["The", "angry", "dog", "barked"]);
        assert_eq!(tagged[0].tag, PosTag::Determiner);
        assert_eq!(tagged[1].tag, PosTag::Adjective);
        assert_eq!(tagged[2].tag, PosTag::Noun);
        assert_eq!(tagged[3].tag, PosTag::VerbPastTense);
    }

    #[test]
    fn test_empty_text() {
        let tagger = HeuristicTagger::new();
        assert!(tagger.tag("").is_empty());
        assert!(tagger.tag("   \n\t ").is_empty());
    }
}
