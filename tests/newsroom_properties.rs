// tests/newsroom_properties.rs
//
// Behavioural properties of the core, driven through the public library API.

use news_pulse::analyze::{KeywordExtractor, ReadingTimeEstimator};
use news_pulse::{Analyzer, NewArticle, Newsroom, Polarity, SentimentScorer};

fn sample_texts() -> Vec<String> {
    vec![
        String::new(),
        " ".into(),
        "word".into(),
        "good bad".into(),
        "!!! ??? ...".into(),
        "great great terrible".into(),
        vec!["lorem"; 1_234].join(" "),
        "Ünïcödé text with ümlauts and 数字 123".into(),
    ]
}

#[test]
fn reading_time_is_never_below_one() {
    let est = ReadingTimeEstimator::default();
    for t in sample_texts() {
        assert!(est.estimate(&t) >= 1, "text {t:?}");
    }
    assert_eq!(est.estimate(&sample_texts()[6]), 7);
}

#[test]
fn zero_score_always_labels_neutral() {
    let s = SentimentScorer::default();
    for t in sample_texts() {
        if s.score(&t) == 0 {
            assert_eq!(s.label(&t), Polarity::Neutral, "text {t:?}");
        }
    }
}

#[test]
fn reference_lexicon_examples() {
    let s = SentimentScorer::default();
    assert_eq!(s.score("This is a great breakthrough"), 4);
    assert_eq!(s.label("This is a great breakthrough"), Polarity::Positive);
    assert_eq!(s.score("total disaster and failure"), -4);
    assert_eq!(s.label("total disaster and failure"), Polarity::Negative);
}

#[test]
fn keyword_membership_not_order() {
    let kw = KeywordExtractor::default().extract("Several researchers reported several results");
    assert_eq!(kw.len(), 4);
    for w in ["several", "researchers", "reported", "results"] {
        assert!(kw.contains(w), "missing {w}");
    }
}

#[test]
fn ingested_title_tokens_are_searchable() {
    let room = Newsroom::default();
    let a = room
        .ingest_new(NewArticle::new("Orbital launch delayed", "Weather over the pad"))
        .unwrap();
    for token in ["orbital", "launch", "delayed", "Orbital"] {
        let hits = room.search(token, 10);
        assert!(hits.iter().any(|h| h.id == a.id), "token {token}");
    }
}

#[test]
fn empty_query_truncates_to_limit() {
    let room = Newsroom::default();
    for i in 0..7 {
        room.ingest_new(NewArticle::new(format!("doc {i}"), "body")).unwrap();
    }
    assert_eq!(room.search("", 5).len(), 5);
    assert_eq!(room.search("   ", 50).len(), 7);
}

#[test]
fn absent_term_matches_nothing() {
    let room = Newsroom::default();
    for i in 0..7 {
        room.ingest_new(NewArticle::new(format!("doc {i}"), "body")).unwrap();
    }
    assert!(room.search("zzz_nonexistent_term", 5).is_empty());
}

#[test]
fn partial_matches_are_excluded() {
    let room = Newsroom::default();
    room.ingest_new(NewArticle::new("alpha beta gamma", "")).unwrap();
    assert_eq!(room.search("alpha beta gamma", 5).len(), 1);
    assert!(room.search("alpha beta gamma delta", 5).is_empty());
}

#[test]
fn search_results_follow_ingestion_order() {
    let room = Newsroom::default();
    let ids: Vec<String> = ["first", "second", "third"]
        .iter()
        .map(|t| room.ingest_new(NewArticle::new(*t, "shared")).unwrap().id)
        .collect();
    let hits: Vec<String> = room.search("shared", 10).into_iter().map(|a| a.id).collect();
    assert_eq!(hits, ids);
}

#[test]
fn reindexing_is_idempotent() {
    let room = Newsroom::default();
    let a = room.ingest_new(NewArticle::new("idempotent", "body")).unwrap();
    let before = room.search("idempotent", 10);
    room.store().index().index(&a);
    room.store().index().index(&a);
    let after = room.search("idempotent", 10);
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].id, after[0].id);
    assert_eq!(room.store().index().len(), 1);
}

#[test]
fn custom_analyzer_settings_apply() {
    let analyzer = Analyzer::new(
        SentimentScorer::default(),
        KeywordExtractor::new(4),
        ReadingTimeEstimator::new(2),
    );
    let a = analyzer.analyze("The quick brown fox jumps gracefully");
    let kw: Vec<&str> = a.keywords.iter().map(String::as_str).collect();
    assert_eq!(kw.len(), 4);
    for w in ["quick", "brown", "jumps", "gracefully"] {
        assert!(kw.contains(&w));
    }
    assert_eq!(a.reading_time, 3);
}
