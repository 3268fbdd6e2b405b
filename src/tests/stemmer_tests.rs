use crate::{
    config::StemmerConfig,
    error::{BulStemError, DuplicateRuleError},
    rules::Rule,
    stemmer::Stemmer,
};

fn manual_config() -> StemmerConfig {
    StemmerConfig::new(0, 0, false)
}

#[test]
fn test_manual_rules() -> Result<(), BulStemError> {
    let stemmer = Stemmer::from_lines(["ой ==> о 10"], &manual_config())?;
    assert_eq!(stemmer.stem("порой"), "поро");
    Ok(())
}

#[test]
fn test_allow_duplicates() -> Result<(), BulStemError> {
    let config = StemmerConfig::new(0, 0, true);
    let stemmer = Stemmer::from_lines(["ой ==> о 10", "ой ==> о 30"], &config)?;
    assert_eq!(stemmer.stem("порой"), "поро");
    assert_eq!(stemmer.rules().len(), 1);
    Ok(())
}

#[test]
fn test_duplicates_last_rule_wins() -> Result<(), BulStemError> {
    let config = StemmerConfig::new(0, 0, true);
    let stemmer = Stemmer::from_lines(["ой ==> о 10", "ой ==> у 30"], &config)?;
    assert_eq!(stemmer.stem("порой"), "пору");

    let stemmer = Stemmer::from_lines(["ой ==> у 30", "ой ==> о 10"], &config)?;
    assert_eq!(stemmer.stem("порой"), "поро");
    Ok(())
}

#[test]
fn test_duplicates_error() {
    let result = Stemmer::from_lines(["ой ==> о 10", "ой ==> о 30"], &manual_config());
    assert_eq!(
        result.unwrap_err(),
        BulStemError::DuplicateRule(DuplicateRuleError {
            suffix: "ой".to_string(),
            replacement: "о".to_string(),
        })
    );
}

#[test]
fn test_duplicate_aborts_whole_construction() {
    let rules = vec![
        Rule::new("ата", "а", 5),
        Rule::new("ой", "о", 10),
        Rule::new("ой", "у", 10),
        Rule::new("ите", "и", 5),
    ];
    assert!(Stemmer::new(rules, 0, 0, false).is_err());
}

#[test]
fn test_no_stem_within_left_context() -> Result<(), BulStemError> {
    let rules = ["ката ==> к 40", "та ==> т 90"];
    let stemmer = Stemmer::from_lines(rules, &StemmerConfig::new(0, 10, false))?;
    assert_eq!(stemmer.stem("оставката"), "оставката");
    assert_eq!(stemmer.stem("ОСТАВКАТА"), "оставката");

    let stemmer = Stemmer::from_lines(rules, &StemmerConfig::new(0, 9, false))?;
    assert_eq!(stemmer.stem("оставката"), "оставката");

    let stemmer = Stemmer::from_lines(rules, &StemmerConfig::new(0, 8, false))?;
    assert_eq!(stemmer.stem("оставката"), "оставк");
    Ok(())
}

#[test]
fn test_longest_match_wins() -> Result<(), BulStemError> {
    let rules = ["а ==> я 500", "та ==> т 90", "ката ==> к 40"];
    let stemmer = Stemmer::from_lines(rules, &manual_config())?;
    assert_eq!(stemmer.stem("оставката"), "оставк");
    assert_eq!(stemmer.stem("жената"), "женат");
    assert_eq!(stemmer.stem("книга"), "книгя");
    Ok(())
}

#[test]
fn test_filtered_rule_falls_back_to_shorter_match() -> Result<(), BulStemError> {
    let rules = ["та ==> т 90", "ката ==> к 40"];
    let stemmer = Stemmer::from_lines(rules, &StemmerConfig::new(50, 0, false))?;
    assert_eq!(stemmer.stem("оставката"), "оставкат");

    let stemmer = Stemmer::from_lines(rules, &StemmerConfig::new(100, 0, false))?;
    assert_eq!(stemmer.stem("оставката"), "оставката");
    assert!(stemmer.rules().is_empty());
    Ok(())
}

#[test]
fn test_retained_prefix_keeps_first_vowel() -> Result<(), BulStemError> {
    let rules = ["тая ==> т 10", "ая ==> а 10", "ст ==> с 10"];
    let stemmer = Stemmer::from_lines(rules, &manual_config())?;
    // "ая" would consume the first vowel of "стая"
    assert_eq!(stemmer.stem("стая"), "стая");
    // consonant-only tokens are never touched
    assert_eq!(stemmer.stem("мст"), "мст");

    for token in ["стаая", "страя", "поставая"] {
        let lowered = token.to_lowercase();
        let first_vowel = Stemmer::first_vowel_position(&lowered);
        let prefix: String = lowered.chars().take(first_vowel + 1).collect();
        assert!(stemmer.stem(token).starts_with(&prefix), "{}", token);
    }
    Ok(())
}

#[test]
fn test_stem_is_deterministic() -> Result<(), BulStemError> {
    let rules = ["ой ==> о 10", "ите ==> и 20", "ата ==> а 30"];
    let stemmer = Stemmer::from_lines(rules, &manual_config())?;
    for token in ["порой", "книгите", "жената", "", "а", "Ъгъл"] {
        assert_eq!(stemmer.stem(token), stemmer.stem(token));
    }
    Ok(())
}

#[test]
fn test_tokens_without_rules_are_lowercased() -> Result<(), BulStemError> {
    let stemmer = Stemmer::from_lines(["ой ==> о 10"], &manual_config())?;
    assert_eq!(stemmer.stem("София"), "софия");
    assert_eq!(stemmer.stem("33-годишен"), "33-годишен");
    assert_eq!(stemmer.stem("(ТОРС)."), "(торс).");
    Ok(())
}

#[test]
fn test_empty_replacement_rules_are_ignored() -> Result<(), BulStemError> {
    let stemmer = Stemmer::new([Rule::new("ой", "", 10)], 0, 0, false)?;
    assert_eq!(stemmer.stem("порой"), "порой");

    let stemmer = Stemmer::new([Rule::new("ой", "", 10), Rule::new("ой", "о", 10)], 0, 0, false)?;
    assert_eq!(stemmer.stem("порой"), "поро");
    Ok(())
}
