//! Property-based tests using proptest.
//!
//! These tests verify order-invariance of counting, the top-K contract of
//! vocabulary selection, and the numerical invariants of correspondence
//! analysis over randomized tables.

use discurso::prelude::*;
use proptest::prelude::*;

const GROUPS: &[&str] = &["Adams", "Hayes", "Polk", "Taft"];
const TERMS: &[&str] = &["army", "bank", "creed", "duty", "earth", "faith"];

// Strategy for generating observation streams over a small alphabet
fn observation_strategy() -> impl Strategy<Value = Vec<Observation>> {
    proptest::collection::vec((0..GROUPS.len(), 0..TERMS.len()), 0..80).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (g, t))| Observation::new(format!("d{}", i % 7), GROUPS[g], TERMS[t]))
            .collect()
    })
}

// Strategy pairing an observation stream with a shuffled copy of itself
fn shuffled_pair_strategy() -> impl Strategy<Value = (Vec<Observation>, Vec<Observation>)> {
    observation_strategy().prop_flat_map(|observations| {
        let original = observations.clone();
        (Just(original), Just(observations).prop_shuffle())
    })
}

// Strategy for strictly positive contingency tables (no degenerate rows)
fn contingency_strategy() -> impl Strategy<Value = ContingencyTable> {
    (2usize..5, 2usize..5).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(1u32..30, rows * cols).prop_map(move |data| {
            let counts =
                Matrix::from_vec(rows, cols, data.into_iter().map(f64::from).collect())
                    .expect("data length matches shape");
            ContingencyTable::from_counts(
                counts,
                (0..rows).map(|i| format!("g{i}")).collect(),
                (0..cols).map(|j| format!("t{j}")).collect(),
            )
            .expect("labels align with shape")
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn counting_data_is_permutation_invariant(
        (original, shuffled) in shuffled_pair_strategy()
    ) {
        let counter = TokenCounter::new();
        let a = counter.count(&original);
        let b = counter.count(&shuffled);

        prop_assert_eq!(a.groups(), b.groups());
        prop_assert_eq!(a.terms(), b.terms());
        prop_assert_eq!(a.total_count(), b.total_count());
        for group in a.groups() {
            prop_assert_eq!(a.group_total(group), b.group_total(group));
            for term in a.terms() {
                prop_assert_eq!(a.count(group, term), b.count(group, term));
            }
        }
        for term in a.terms() {
            prop_assert_eq!(a.term_total(term), b.term_total(term));
            prop_assert_eq!(a.document_frequency(term), b.document_frequency(term));
            prop_assert_eq!(a.group_frequency(term), b.group_frequency(term));
        }
    }

    #[test]
    fn tfidf_depends_only_on_counting_data(
        (original, shuffled) in shuffled_pair_strategy()
    ) {
        let counter = TokenCounter::new();
        let engine = TfIdfEngine::new();
        let a = engine.compute(&counter.count(&original));
        let b = engine.compute(&counter.count(&shuffled));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn vocabulary_respects_cap_and_membership(
        observations in observation_strategy(),
        k in 1usize..8
    ) {
        let table = TokenCounter::new().count(&observations);
        let vocabulary = VocabularySelector::new().with_max_terms(k).select(&table);

        prop_assert!(vocabulary.len() <= k);
        prop_assert!(vocabulary.len() <= table.n_terms());
        for term in vocabulary.iter() {
            prop_assert!(table.term_total(term) > 0);
        }
    }

    #[test]
    fn vocabulary_keeps_the_heaviest_terms(
        observations in observation_strategy(),
        k in 1usize..8
    ) {
        let table = TokenCounter::new().count(&observations);
        let vocabulary = VocabularySelector::new().with_max_terms(k).select(&table);

        // Every kept term outweighs every dropped term, with the
        // first-seen rank as the only tiebreak.
        for kept in vocabulary.iter() {
            for term in table.terms() {
                if vocabulary.contains(term) {
                    continue;
                }
                let kept_total = table.term_total(kept);
                let dropped_total = table.term_total(term);
                prop_assert!(
                    kept_total > dropped_total
                        || (kept_total == dropped_total
                            && table.first_seen_rank(kept) < table.first_seen_rank(term))
                );
            }
        }
    }

    #[test]
    fn tfidf_rows_are_well_formed(observations in observation_strategy()) {
        let table = TokenCounter::new().count(&observations);
        let rows = TfIdfEngine::new().with_top_terms(3).compute(&table);

        for group in table.groups() {
            let group_rows: Vec<&TfIdfRow> =
                rows.iter().filter(|r| r.group_key == group).collect();
            prop_assert!(group_rows.len() <= 3);
            for pair in group_rows.windows(2) {
                prop_assert!(pair[0].tf_idf >= pair[1].tf_idf);
            }
        }
        for row in &rows {
            prop_assert!(row.tf > 0.0 && row.tf <= 1.0);
            prop_assert!(row.idf >= 0.0);
            prop_assert!(row.tf_idf.is_finite());
        }
    }

    #[test]
    fn inertia_matches_chi_square_on_random_tables(dense in contingency_strategy()) {
        let chi = chi_square_independence(&dense).expect("positive tables are non-degenerate");
        let result = CorrespondenceAnalyzer::new()
            .with_dimensions(4)
            .analyze(&dense)
            .expect("positive tables analyze");

        let expected = chi.statistic / dense.total_mass();
        prop_assert!((result.total_inertia() - expected).abs() < 1e-9);

        let explained_sum: f64 = result.explained_inertia().iter().sum();
        prop_assert!(explained_sum <= 1.0 + 1e-9);
        for fraction in result.explained_inertia() {
            prop_assert!(*fraction >= 0.0);
        }
    }

    #[test]
    fn coordinates_align_with_labels(dense in contingency_strategy()) {
        let result = CorrespondenceAnalyzer::new()
            .analyze(&dense)
            .expect("positive tables analyze");

        prop_assert_eq!(result.row_coordinates().n_rows(), result.row_labels().len());
        prop_assert_eq!(
            result.column_coordinates().n_rows(),
            result.column_labels().len()
        );
        prop_assert_eq!(result.row_coordinates().n_cols(), result.dimensions());
        prop_assert_eq!(result.singular_values().len(), result.dimensions());
        prop_assert_eq!(result.eigenvalues().len(), result.dimensions());

        let rank_cap = result.row_labels().len().min(result.column_labels().len()) - 1;
        prop_assert!(result.dimensions() <= rank_cap.min(2));
    }
}
