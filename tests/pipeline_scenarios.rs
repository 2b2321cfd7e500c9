//! End-to-end scenarios through the public library API.

mod common;

use common::{write_fixture, COUNTIES_CSV, STATES_CSV};
use pretty_assertions::assert_eq;
use resilmap::core::{Granularity, IndicatorField};
use resilmap::sources::{CsvIndicatorSource, IndicatorSource};
use resilmap::testkit::{region, CollectionBuilder};
use resilmap::{assert_score_eq, breakdown, run_pipeline, score, ResilienceError, WeightSet};

fn ranked_names(result: &resilmap::PipelineResult) -> Vec<String> {
    result.ranking.iter().map(|r| r.name().to_string()).collect()
}

#[test]
fn test_default_weights_score_utah() {
    let utah = region("Utah", 0.8, 0.2, 0.3);
    let value = score(&utah.name, &utah.indicators, &WeightSet::default()).unwrap();
    assert_eq!(value, 0.77);
}

#[test]
fn test_breakdown_sums_to_score() {
    let utah = region("Utah", 0.8, 0.2, 0.3);
    let parts = breakdown(&utah.name, &utah.indicators, &WeightSet::default()).unwrap();
    assert_score_eq!(parts.income + parts.unemployment + parts.cost, parts.total, 1e-3);
    assert_score_eq!(parts.contribution(IndicatorField::Income), 0.32);
}

#[test]
fn test_equal_scores_rank_alphabetically() {
    let (_dir, path) = write_fixture("counties.csv", COUNTIES_CSV);
    let collection = CsvIndicatorSource::new(&path, Granularity::County)
        .load()
        .unwrap();
    let result = run_pipeline(&collection, &WeightSet::default());

    assert_eq!(result.ranking.position_of("Adams").unwrap(), 2);
    assert_eq!(result.ranking.position_of("Baker").unwrap(), 3);
    assert_eq!(ranked_names(&result), vec!["Clark", "Adams", "Baker", "Essex"]);
}

#[test]
fn test_failed_region_is_excluded_and_reported() {
    let (_dir, path) = write_fixture("counties.csv", COUNTIES_CSV);
    let collection = CsvIndicatorSource::new(&path, Granularity::County)
        .load()
        .unwrap();
    let result = run_pipeline(&collection, &WeightSet::default());

    let ranks: Vec<usize> = result.ranking.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].region, "Dodge");
    assert_eq!(result.failures[0].field, IndicatorField::Income);
    assert_eq!(result.total_regions(), 5);

    let err = result.ranking.position_of("Dodge").unwrap_err();
    assert!(matches!(err, ResilienceError::NotFound { .. }));
}

#[test]
fn test_literal_nan_cell_fails_only_that_region() {
    let (_dir, path) = write_fixture(
        "states.csv",
        "State,Income_Norm,Unemployment_Norm,Cost_Norm\n\
         Utah,0.8,0.2,0.3\n\
         Ohio,0.5,0.5,0.5\n\
         Maine,0.4,NaN,0.6\n\
         Iowa,0.6,0.4,0.5\n\
         Texas,0.7,0.3,0.4\n",
    );
    let collection = CsvIndicatorSource::new(&path, Granularity::State)
        .load()
        .unwrap();
    let result = run_pipeline(&collection, &WeightSet::default());

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].region, "Maine");
    assert_eq!(result.failures[0].field, IndicatorField::Unemployment);
    assert_eq!(ranked_names(&result), vec!["Utah", "Texas", "Iowa", "Ohio"]);
    let ranks: Vec<usize> = result.ranking.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert_score_eq!(result.ranking.get("Texas").unwrap().score(), 0.67);
    assert!(result.ranking.iter().all(|r| r.score().is_finite()));
}

#[test]
fn test_infinite_cell_is_a_failure_even_with_zero_weight() {
    let (_dir, path) = write_fixture(
        "states.csv",
        "State,Income_Norm,Unemployment_Norm,Cost_Norm\n\
         Utah,0.8,0.2,0.3\n\
         Ohio,0.5,inf,0.5\n\
         Iowa,0.6,0.4,0.5\n",
    );
    let collection = CsvIndicatorSource::new(&path, Granularity::State)
        .load()
        .unwrap();
    let result = run_pipeline(&collection, &WeightSet::normalize(1.0, 0.0, 0.0));

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].region, "Ohio");
    assert_eq!(result.failures[0].field, IndicatorField::Unemployment);
    assert_eq!(ranked_names(&result), vec!["Utah", "Iowa"]);
    assert!(result.ranking.get("Ohio").is_err());
}

#[test]
fn test_weight_change_reorders_states() {
    let (_dir, path) = write_fixture("states.csv", STATES_CSV);
    let collection = CsvIndicatorSource::new(&path, Granularity::State)
        .load()
        .unwrap();

    let balanced = run_pipeline(&collection, &WeightSet::default());
    assert_eq!(balanced.ranking.top(1)[0].name(), "Utah");

    let income_only = run_pipeline(&collection, &WeightSet::normalize(1.0, 0.0, 0.0));
    assert_eq!(income_only.ranking.top(1)[0].name(), "California");
    assert_eq!(income_only.ranking.bottom(1)[0].name(), "Mississippi");

    // The input collection is untouched by either run
    assert_eq!(collection.len(), 5);
    assert_eq!(balanced, run_pipeline(&collection, &WeightSet::default()));
}

#[test]
fn test_zero_weights_fall_back_to_income() {
    let collection = CollectionBuilder::states()
        .region("Low", 0.2, 0.0, 0.0)
        .region("High", 0.9, 1.0, 1.0)
        .build();
    let weights = WeightSet::normalize(0.0, 0.0, 0.0);
    assert!(weights.is_default_fallback());

    let result = run_pipeline(&collection, &weights);
    assert_eq!(result.ranking.get("High").unwrap().score(), 0.9);
    assert_eq!(result.ranking.get("Low").unwrap().score(), 0.2);
}

#[test]
fn test_insights_follow_indicators() {
    let (_dir, path) = write_fixture("states.csv", STATES_CSV);
    let collection = CsvIndicatorSource::new(&path, Granularity::State)
        .load()
        .unwrap();
    let result = run_pipeline(&collection, &WeightSet::default());

    assert_eq!(
        result.ranking.get("Ohio").unwrap().insight,
        "balanced factors across income, unemployment, and cost."
    );
    assert_eq!(
        result.ranking.get("Mississippi").unwrap().insight,
        "low income levels, high unemployment, and affordable cost of living."
    );
    assert_eq!(
        result.ranking.get("California").unwrap().insight,
        "strong income levels and high cost of living."
    );
}

#[test]
fn test_raw_table_is_normalized_on_load() {
    let (_dir, path) = write_fixture(
        "raw.csv",
        "State,Median_Income,Unemployment_Rate,Cost_Index\n\
         Alpha,50000,3.0,90\n\
         Beta,100000,6.0,110\n",
    );
    let collection = CsvIndicatorSource::raw(&path, Granularity::State)
        .load()
        .unwrap();

    let beta = collection.get("Beta").unwrap();
    assert_eq!(beta.indicators.income, Some(1.0));
    assert_eq!(beta.indicators.unemployment, Some(1.0));

    let result = run_pipeline(&collection, &WeightSet::default());
    assert_eq!(result.ranking.get("Alpha").unwrap().score(), 0.6);
    assert_eq!(result.ranking.get("Beta").unwrap().score(), 0.4);
}
