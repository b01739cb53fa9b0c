use esg_pulse::{LabelMap, SentimentLabel};

fn bertweet_labels() -> LabelMap {
    LabelMap::new([
        (0, "NEG".to_string()),
        (1, "NEU".to_string()),
        (2, "POS".to_string()),
    ])
}

#[test]
fn native_names_normalize_case_insensitively() {
    let labels = LabelMap::default();
    for (raw, want) in [
        ("NEG", SentimentLabel::Negative),
        ("negative", SentimentLabel::Negative),
        ("Bearish", SentimentLabel::Negative),
        ("neu", SentimentLabel::Neutral),
        ("Neutral", SentimentLabel::Neutral),
        ("POS", SentimentLabel::Positive),
        ("positive", SentimentLabel::Positive),
        ("bullish", SentimentLabel::Positive),
    ] {
        assert_eq!(SentimentLabel::normalize(raw, &labels), Some(want), "{raw}");
    }
}

#[test]
fn generic_labels_resolve_through_id2label() {
    let labels = bertweet_labels();
    assert_eq!(
        SentimentLabel::normalize("LABEL_0", &labels),
        Some(SentimentLabel::Negative)
    );
    assert_eq!(
        SentimentLabel::normalize("label_2", &labels),
        Some(SentimentLabel::Positive)
    );
    assert_eq!(SentimentLabel::normalize("LABEL_7", &labels), None);
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!(SentimentLabel::normalize("joy", &bertweet_labels()), None);
    assert_eq!(SentimentLabel::normalize("", &LabelMap::default()), None);
}

#[test]
fn label_map_lists_names_in_index_order() {
    let labels = LabelMap::new([(2, "POS".to_string()), (0, "NEG".to_string())]);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.names().collect::<Vec<_>>(), vec!["NEG", "POS"]);
    assert_eq!(labels.resolve("LABEL_2"), "POS");
    assert_eq!(labels.resolve("something"), "something");
}

#[test]
fn labels_display_lowercase() {
    assert_eq!(SentimentLabel::Positive.to_string(), "positive");
    assert_eq!(format!("{:<8}|", SentimentLabel::Neutral), "neutral |");
}
