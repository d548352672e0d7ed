pub(crate) use super::*;
pub(crate) use crate::text::StopwordList;

fn sample_observations() -> Vec<Observation> {
    vec![
        Observation::new("d1", "Lincoln", "union"),
        Observation::new("d1", "Lincoln", "union"),
        Observation::new("d1", "Lincoln", "malice"),
        Observation::new("d2", "Grant", "union"),
        Observation::new("d2", "Grant", "army"),
    ]
}

#[test]
fn test_count_basic() {
    let table = TokenCounter::new().count(&sample_observations());

    assert_eq!(table.count("Lincoln", "union"), 2);
    assert_eq!(table.count("Lincoln", "malice"), 1);
    assert_eq!(table.count("Grant", "union"), 1);
    assert_eq!(table.count("Grant", "malice"), 0);
    assert_eq!(table.group_total("Lincoln"), 3);
    assert_eq!(table.group_total("Grant"), 2);
    assert_eq!(table.term_total("union"), 3);
    assert_eq!(table.total_count(), 5);
}

#[test]
fn test_count_empty_input() {
    let table = TokenCounter::new().count(&[]);

    assert!(table.is_empty());
    assert_eq!(table.n_groups(), 0);
    assert_eq!(table.n_terms(), 0);
    assert_eq!(table.total_count(), 0);
}

#[test]
fn test_absent_lookups_are_zero() {
    let table = TokenCounter::new().count(&sample_observations());

    assert_eq!(table.count("Sherman", "union"), 0);
    assert_eq!(table.group_total("Sherman"), 0);
    assert_eq!(table.term_total("navy"), 0);
    assert_eq!(table.document_frequency("navy"), 0);
    assert_eq!(table.group_frequency("navy"), 0);
    assert_eq!(table.first_seen_rank("navy"), None);
}

#[test]
fn test_document_frequency_counts_distinct_documents() {
    // One speaker, two documents: document and group frequency diverge.
    let table = TokenCounter::new().count(&[
        Observation::new("doc-1", "Lincoln", "union"),
        Observation::new("doc-1", "Lincoln", "union"),
        Observation::new("doc-2", "Lincoln", "union"),
    ]);

    assert_eq!(table.document_frequency("union"), 2);
    assert_eq!(table.group_frequency("union"), 1);
}

#[test]
fn test_group_frequency_counts_groups_not_occurrences() {
    let table = TokenCounter::new().count(&sample_observations());

    // "union" occurs three times but in only two groups.
    assert_eq!(table.group_frequency("union"), 2);
    assert_eq!(table.group_frequency("malice"), 1);
}

#[test]
fn test_stopword_observation_skipped_entirely() {
    let counter = TokenCounter::new().with_stopwords(StopwordList::english());
    let table = counter.count(&[
        Observation::new("d1", "Lincoln", "the"),
        Observation::new("d1", "Lincoln", "union"),
    ]);

    assert_eq!(table.count("Lincoln", "the"), 0);
    assert_eq!(table.term_total("the"), 0);
    assert_eq!(table.group_total("Lincoln"), 1);
    assert_eq!(table.total_count(), 1);
}

#[test]
fn test_group_with_only_stopwords_is_absent() {
    let counter = TokenCounter::new().with_stopwords(StopwordList::english());
    let table = counter.count(&[
        Observation::new("d1", "Lincoln", "the"),
        Observation::new("d2", "Grant", "army"),
    ]);

    assert_eq!(table.n_groups(), 1);
    assert_eq!(table.groups(), vec!["Grant"]);
}

#[test]
fn test_closure_predicate() {
    let counter = TokenCounter::new().with_stopwords(|term: &str| term.len() < 4);
    let table = counter.count(&[
        Observation::new("d1", "Lincoln", "war"),
        Observation::new("d1", "Lincoln", "union"),
    ]);

    assert_eq!(table.count("Lincoln", "war"), 0);
    assert_eq!(table.count("Lincoln", "union"), 1);
}

#[test]
fn test_first_seen_ranks_follow_observation_order() {
    let table = TokenCounter::new().count(&sample_observations());

    assert_eq!(table.first_seen_rank("union"), Some(0));
    assert_eq!(table.first_seen_rank("malice"), Some(1));
    assert_eq!(table.first_seen_rank("army"), Some(2));
}

#[test]
fn test_groups_and_terms_sorted() {
    let table = TokenCounter::new().count(&sample_observations());

    assert_eq!(table.groups(), vec!["Grant", "Lincoln"]);
    assert_eq!(table.terms(), vec!["army", "malice", "union"]);
}

#[test]
fn test_restrict_to_keeps_all_groups() {
    let table = TokenCounter::new().count(&sample_observations());
    let vocabulary = Vocabulary::from_terms(vec!["malice".to_string()]);
    let restricted = table.restrict_to(&vocabulary);

    // Grant has no "malice" but stays in the table with total zero.
    assert_eq!(restricted.n_groups(), 2);
    assert_eq!(restricted.group_total("Grant"), 0);
    assert_eq!(restricted.group_total("Lincoln"), 1);
    assert_eq!(restricted.n_terms(), 1);
    assert_eq!(restricted.total_count(), 1);
}

#[test]
fn test_restrict_to_carries_marginals_for_kept_terms() {
    let table = TokenCounter::new().count(&sample_observations());
    let vocabulary = Vocabulary::from_terms(vec!["union".to_string()]);
    let restricted = table.restrict_to(&vocabulary);

    assert_eq!(restricted.term_total("union"), 3);
    assert_eq!(restricted.document_frequency("union"), 2);
    assert_eq!(restricted.group_frequency("union"), 2);
    assert_eq!(restricted.first_seen_rank("union"), Some(0));
    assert_eq!(restricted.term_total("malice"), 0);
    assert_eq!(restricted.first_seen_rank("malice"), None);
}

#[test]
fn test_restrict_to_ignores_vocabulary_terms_absent_from_table() {
    let table = TokenCounter::new().count(&sample_observations());
    let vocabulary =
        Vocabulary::from_terms(vec!["union".to_string(), "navy".to_string()]);
    let restricted = table.restrict_to(&vocabulary);

    assert_eq!(restricted.n_terms(), 1);
    assert_eq!(restricted.term_total("navy"), 0);
}
