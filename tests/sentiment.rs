use spec_validator::{Lexicon, SentimentScorer};

#[test]
fn promotional_language_scores_above_threshold() {
    let lexicon = Lexicon::new();
    let score = lexicon.analyze(
        "This solution is absolutely the best, most amazing, wonderful improvement imaginable.",
    );
    assert_eq!(score.tokens, 11);
    assert_eq!(score.score, 13);
    assert!(score.comparative > 0.5, "got {}", score.comparative);
    assert_eq!(
        score.positive,
        vec!["best", "amazing", "wonderful", "improvement"]
    );
    assert!(score.negative.is_empty());
}

#[test]
fn neutral_technical_text_scores_zero() {
    let lexicon = Lexicon::new();
    for text in [
        "The parser splits the input on newline characters.",
        "Each section maps a heading to its body text.",
        "Run the command with the document path as its only argument.",
    ] {
        assert_eq!(lexicon.score(text), 0.0, "{text}");
    }
}

#[test]
fn negation_flips_valence() {
    let score = Lexicon::new().analyze("This is not good.");
    assert_eq!(score.score, -3);
    assert_eq!(score.comparative, -0.75);
    assert_eq!(score.negative, vec!["good"]);
}

#[test]
fn negative_language_scores_below_zero() {
    let lexicon = Lexicon::new();
    assert!(lexicon.score("The old importer is a terrible, useless mess.") < 0.0);
}

#[test]
fn empty_text_scores_zero() {
    let score = Lexicon::new().analyze("  ... !!! ");
    assert_eq!(score.tokens, 0);
    assert_eq!(score.comparative, 0.0);
}

#[test]
fn overrides_extend_and_replace_words() {
    let lexicon = Lexicon::new().with_overrides([("SpecLang", 5), ("best", 0)]);
    assert_eq!(lexicon.weight("speclang"), Some(5));
    assert_eq!(lexicon.weight("best"), Some(0));
    assert_eq!(lexicon.score("SpecLang rocks"), 2.5);
    assert_eq!(lexicon.score("the best"), 0.0);
}

#[test]
fn closures_are_scorers() {
    let fixed = |_: &str| 0.25_f64;
    assert_eq!(fixed.score("anything"), 0.25);
}
