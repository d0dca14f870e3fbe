pub mod error;
pub mod features;
pub mod format;
pub mod influence;

use semantics_lexicon::Lexicon;
use semantics_parser::{guess_pos, tokenize};
use semantics_protocol::{AnalysisRecord, PosTag};
use tracing::debug;

pub use error::AnalyzeError;
pub use format::format_analysis;

/// Runs every extractor over one tokenization of a sentence.
///
/// Holds only a shared reference to the lexicon, so one lexicon can back
/// any number of analyzers on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Analyzer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Primary entry point: Text -> Analysis Record
    pub fn analyze(&self, sentence: &str) -> AnalysisRecord {
        let lexicon = self.lexicon;
        let tokens = tokenize(sentence);
        let tags: Vec<PosTag> = tokens.iter().map(|t| guess_pos(lexicon, &t.lemma)).collect();

        let verb = features::main_verb(&tags);
        let sentiment = features::sentiment(lexicon, &tokens);

        debug!(
            tokens = tokens.len(),
            verb_index = ?verb,
            sentiment = sentiment.score,
            "analyzed sentence"
        );

        AnalysisRecord {
            sentence: sentence.to_string(),
            sentence_type: features::sentence_type(&tokens),
            polarity: features::polarity(lexicon, &tokens),
            modality: features::modality(lexicon, &tokens),
            tense: features::tense(&tokens),
            temporal_cues: features::temporal_cues(lexicon, &tokens),
            quantifiers: features::quantifiers(lexicon, &tokens),
            main_predicate: verb.map(|i| tokens[i].text.to_string()),
            subject: features::subject(&tokens, &tags, verb),
            object: features::object(&tokens, &tags, verb),
            topics: features::topics(lexicon, &tokens),
            sentiment,
            word_influence: influence::word_influence(lexicon, &tokens, &tags),
        }
    }

    /// Like [`Analyzer::analyze`], for input that may not be text.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisRecord, AnalyzeError> {
        let sentence = std::str::from_utf8(bytes)?;
        Ok(self.analyze(sentence))
    }
}

pub fn analyze_sentence(lexicon: &Lexicon, sentence: &str) -> AnalysisRecord {
    Analyzer::new(lexicon).analyze(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use semantics_protocol::{
        InfluenceType, LexFlags, LexiconData, Polarity, SentenceType, SentimentLabel, Tense,
    };

    fn analyze(sentence: &str) -> AnalysisRecord {
        analyze_sentence(&Lexicon::english(), sentence)
    }

    #[test]
    fn test_subject_object_detection() {
        let analysis = analyze("Alice likes Bob.");
        assert_eq!(analysis.main_predicate.as_deref(), Some("likes"));
        assert_eq!(analysis.subject.as_deref(), Some("Alice"));
        assert_eq!(analysis.object.as_deref(), Some("Bob"));
        assert_eq!(analysis.sentence_type, SentenceType::Declarative);
        assert_eq!(analysis.tense, Tense::Present);
    }

    #[test]
    fn test_question_detection() {
        let analysis = analyze("Why did she leave?");
        assert_eq!(analysis.sentence_type, SentenceType::Interrogative);
        assert_eq!(analysis.main_predicate.as_deref(), Some("did"));
        // "Why" is a question word, not a noun
        assert_eq!(analysis.subject, None);
        assert_eq!(analysis.object.as_deref(), Some("she"));
    }

    #[test]
    fn test_negation_affects_polarity() {
        let analysis = analyze("The cat did not run.");
        assert_eq!(analysis.polarity, Polarity::Negative);

        let not = &analysis.word_influence[3];
        assert_eq!(not.token, "not");
        assert_eq!(not.influence_type, InfluenceType::Negation);
        assert_eq!(not.weight, 1.4);
    }

    #[test]
    fn test_sentiment_additivity() {
        let analysis = analyze("Good food and great friends.");
        assert_eq!(analysis.sentiment.score, 2);
        assert_eq!(analysis.sentiment.label, SentimentLabel::Positive);

        let analysis = analyze("A sad and awful day, but good.");
        assert_eq!(analysis.sentiment.score, -1);
        assert_eq!(analysis.sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_sentiment_counts_both_lists() {
        let mut data = semantics_lexicon::english::data();
        data.sentiment_positive.push("bittersweet".to_string());
        data.sentiment_negative.push("bittersweet".to_string());
        let lexicon = Lexicon::from_data(&data).unwrap();

        let analysis = analyze_sentence(&lexicon, "bittersweet");
        assert_eq!(analysis.sentiment.score, 0);
        assert_eq!(analysis.sentiment.label, SentimentLabel::Neutral);

        let analysis = analyze_sentence(&lexicon, "bittersweet and good");
        assert_eq!(analysis.sentiment.score, 1);
    }

    #[test]
    fn test_topic_dedup_order() {
        let analysis = analyze("dog dog cat");
        assert_eq!(analysis.topics, ["dog", "cat"]);
        assert_eq!(analysis.main_predicate, None);
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze("");
        assert_eq!(analysis.sentence, "");
        assert_eq!(analysis.sentence_type, SentenceType::Declarative);
        assert_eq!(analysis.polarity, Polarity::Affirmative);
        assert_eq!(analysis.tense, Tense::Present);
        assert!(analysis.modality.is_empty());
        assert!(analysis.temporal_cues.is_empty());
        assert!(analysis.quantifiers.is_empty());
        assert!(analysis.topics.is_empty());
        assert!(analysis.word_influence.is_empty());
        assert_eq!(analysis.main_predicate, None);
        assert_eq!(analysis.subject, None);
        assert_eq!(analysis.object, None);
        assert_eq!(analysis.sentiment.score, 0);
        assert_eq!(analysis.sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_punctuation_only() {
        let analysis = analyze("?!");
        assert_eq!(analysis.sentence_type, SentenceType::Interrogative);
        assert_eq!(analysis.word_influence.len(), 2);
        assert!(analysis.topics.is_empty());
    }

    #[test]
    fn test_letter_numbers_and_marks_are_not_topics() {
        let analysis = analyze("Ⅻ ा");
        assert!(analysis.topics.is_empty());
        assert_eq!(analysis.word_influence.len(), 2);
        for entry in &analysis.word_influence {
            assert_eq!(entry.pos_guess, PosTag::Punctuation);
            assert_eq!(entry.influence_type, InfluenceType::Background);
        }
    }

    #[test]
    fn test_information_separator_splits_words() {
        let analysis = analyze("a\u{1c}b");
        let tokens: Vec<&str> = analysis.word_influence.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, ["a", "b"]);
    }

    #[test]
    fn test_full_record() {
        let analysis = analyze("You must not eat all cookies tomorrow!");

        assert_eq!(analysis.sentence_type, SentenceType::Exclamatory);
        assert_eq!(analysis.polarity, Polarity::Negative);
        assert_eq!(analysis.modality, ["obligation"]);
        assert_eq!(analysis.tense, Tense::Present);
        assert_eq!(analysis.temporal_cues, ["tomorrow"]);
        assert_eq!(analysis.quantifiers, ["all"]);
        assert_eq!(analysis.topics, ["must", "not", "eat", "cookies", "tomorrow"]);

        let influence: Vec<InfluenceType> =
            analysis.word_influence.iter().map(|w| w.influence_type).collect();
        assert_eq!(
            influence,
            [
                InfluenceType::Background,
                InfluenceType::Modality,
                InfluenceType::Negation,
                InfluenceType::Content,
                InfluenceType::Quantifier,
                InfluenceType::Content,
                InfluenceType::Content,
                InfluenceType::Background,
            ]
        );
    }

    #[test]
    fn test_word_influence_entries() {
        let analysis = analyze("Alice likes Bob.");
        let entries = &analysis.word_influence;

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].token, "likes");
        assert_eq!(entries[1].lemma, "likes");
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].pos_guess, PosTag::Verb);
        assert_eq!(entries[3].pos_guess, PosTag::Punctuation);
        assert_eq!(entries[3].influence_type, InfluenceType::Background);
        assert_eq!(entries[3].weight, 0.2);
    }

    #[test]
    fn test_invalid_bytes() {
        let lexicon = Lexicon::english();
        let analyzer = Analyzer::new(&lexicon);

        let err = analyzer.analyze_bytes(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidInput(_)));

        let analysis = analyzer.analyze_bytes("Alice likes Bob.".as_bytes()).unwrap();
        assert_eq!(analysis, analyzer.analyze("Alice likes Bob."));
    }

    #[test]
    fn test_format_report() {
        let report = format_analysis(&analyze("Alice likes Bob."));
        let expected = "\
Semantic Analysis
==================
Sentence: Alice likes Bob.
Type: declarative
Polarity: affirmative
Modality: none
Tense: present
Temporal cues: none
Quantifiers: none
Predicate/Arguments:
  Main verb: likes
  Subject: Alice
  Object: Bob
Topics: alice, likes, bob
Sentiment: neutral (score 0)

Word influence:
  - Alice (noun): content (weight 1.0)
  - likes (verb): content (weight 1.0)
  - Bob (noun): content (weight 1.0)
  - . (punctuation): background (weight 0.2)";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_format_unknowns() {
        let report = format_analysis(&analyze("dog dog cat"));
        assert!(report.contains("  Main verb: unknown\n  Subject: unknown\n  Object: unknown"));
        assert!(report.contains("Topics: dog, cat"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&analyze("dog dog cat")).unwrap();

        let keys = [
            "\"sentence\"",
            "\"sentence_type\"",
            "\"polarity\"",
            "\"modality\"",
            "\"tense\"",
            "\"temporal_cues\"",
            "\"quantifiers\"",
            "\"main_predicate\"",
            "\"subject\"",
            "\"object\"",
            "\"topics\"",
            "\"sentiment\"",
            "\"word_influence\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(json.contains("\"main_predicate\":null"));
        assert!(json.contains("\"sentiment\":{\"score\":0,\"label\":\"neutral\"}"));
        assert!(json.contains("\"pos_guess\":\"noun\",\"influence_type\":\"content\",\"weight\":1.0"));
    }

    #[test]
    fn test_lexicon_shared_across_threads() {
        let lexicon = Lexicon::english();
        let expected = analyze_sentence(&lexicon, "They will never win.");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| analyze_sentence(&lexicon, "They will never win.")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_custom_lexicon() {
        let data = LexiconData {
            common_verbs: vec!["zorp".to_string()],
            negations: vec!["nein".to_string()],
            ..LexiconData::default()
        };
        let lexicon = Lexicon::from_data(&data).unwrap();
        let analysis = analyze_sentence(&lexicon, "Mork zorps nein Ork");

        assert_eq!(analysis.main_predicate.as_deref(), Some("zorps"));
        assert_eq!(analysis.subject.as_deref(), Some("Mork"));
        assert_eq!(analysis.object.as_deref(), Some("nein Ork"));
        assert_eq!(analysis.polarity, Polarity::Negative);
    }

    proptest! {
        #[test]
        fn test_deterministic(sentence in "\\PC{0,80}") {
            let lexicon = Lexicon::english();
            prop_assert_eq!(analyze_sentence(&lexicon, &sentence), analyze_sentence(&lexicon, &sentence));
        }

        #[test]
        fn test_one_influence_entry_per_token(sentence in "\\PC{0,80}") {
            let analysis = analyze(&sentence);
            let tokens = tokenize(&sentence);
            prop_assert_eq!(analysis.word_influence.len(), tokens.len());
            for (entry, token) in analysis.word_influence.iter().zip(&tokens) {
                prop_assert_eq!(entry.index, token.index);
                prop_assert_eq!(entry.token.as_str(), token.text);
            }
        }

        #[test]
        fn test_negation_iff_negative_polarity(words in prop::collection::vec("(not|never|cats|run|the|no|big|!)", 0..12)) {
            let lexicon = Lexicon::english();
            let sentence = words.join(" ");
            let analysis = analyze_sentence(&lexicon, &sentence);
            let has_negation = tokenize(&sentence)
                .iter()
                .any(|t| lexicon.is(&t.lemma, LexFlags::NEGATION));
            prop_assert_eq!(analysis.polarity == Polarity::Negative, has_negation);
        }

        #[test]
        fn test_topics_are_unique(sentence in "[a-z ]{0,80}") {
            let topics = analyze(&sentence).topics;
            let unique: std::collections::HashSet<&String> = topics.iter().collect();
            prop_assert_eq!(unique.len(), topics.len());
        }
    }
}
