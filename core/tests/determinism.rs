//! Two generators, same seed, same config.
//! They must produce identical tables.

use covid_core::{config::DatasetConfig, dataset};

fn config_with_seed(seed: u64) -> DatasetConfig {
    DatasetConfig { seed, ..DatasetConfig::default() }
}

#[test]
fn same_seed_produces_identical_tables() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let table_a = dataset::generate(&config_with_seed(SEED)).expect("table a");
    let table_b = dataset::generate(&config_with_seed(SEED)).expect("table b");

    assert_eq!(table_a.len(), table_b.len());
    for (i, (a, b)) in table_a.rows().iter().zip(table_b.rows()).enumerate() {
        assert_eq!(a, b, "Tables diverged at row {i}");
    }
}

#[test]
fn default_seed_is_stable_between_runs() {
    let a = dataset::generate(&DatasetConfig::default()).unwrap();
    let b = dataset::generate(&DatasetConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_produce_different_tables() {
    let table_a = dataset::generate(&config_with_seed(42)).unwrap();
    let table_b = dataset::generate(&config_with_seed(99)).unwrap();

    let any_different = table_a
        .rows()
        .iter()
        .zip(table_b.rows())
        .any(|(a, b)| a.new_cases != b.new_cases);
    assert!(any_different, "Different seeds produced identical tables — seed is not being used");
}

#[test]
fn extending_the_date_range_keeps_the_shared_prefix_for_one_entity() {
    // Streams are per column, so with a single entity a longer run only
    // appends rows.
    let short = DatasetConfig {
        day_count: 20,
        entities: vec!["India".into()],
        ..DatasetConfig::default()
    };
    let long = DatasetConfig { day_count: 40, ..short.clone() };

    let a = dataset::generate(&short).unwrap();
    let b = dataset::generate(&long).unwrap();
    assert_eq!(a.rows(), &b.rows()[..20]);
}
