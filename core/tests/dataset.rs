//! Dataset generation tests: shape, bounds, accumulation modes.

use covid_core::{
    config::{Accumulation, Bounds, DatasetConfig},
    dataset::{self, Record},
    error::ReportError,
};

fn cumulative_columns(r: &Record) -> [u64; 4] {
    [r.total_cases, r.total_deaths, r.total_vaccinations, r.people_vaccinated]
}

#[test]
fn default_config_generates_two_hundred_rows() {
    let table = dataset::generate(&DatasetConfig::default()).unwrap();
    assert_eq!(table.len(), 200);
    assert_eq!(table.entities(), vec!["India", "USA"]);
}

#[test]
fn row_count_is_days_times_entities() {
    for days in [1usize, 2, 7, 31] {
        for labels in [vec!["A"], vec!["A", "B"], vec!["A", "B", "C"]] {
            let config = DatasetConfig {
                day_count: days,
                entities: labels.iter().map(|s| s.to_string()).collect(),
                ..DatasetConfig::default()
            };
            let table = dataset::generate(&config).unwrap();
            assert_eq!(
                table.len(),
                days * labels.len(),
                "days={days} entities={labels:?}"
            );
        }
    }
}

#[test]
fn entity_blocks_are_contiguous_with_consecutive_dates() {
    let config = DatasetConfig { day_count: 5, ..DatasetConfig::default() };
    let table = dataset::generate(&config).unwrap();
    let rows = table.rows();

    assert!(rows[..5].iter().all(|r| r.entity == "India"));
    assert!(rows[5..].iter().all(|r| r.entity == "USA"));
    for block in rows.chunks(5) {
        assert_eq!(block[0].date, config.start_date);
        assert!(block.windows(2).all(|w| w[1].date == w[0].date.succ_opt().unwrap()));
    }
}

#[test]
fn daily_counts_respect_bounds() {
    let config = DatasetConfig::default();
    let table = dataset::generate(&config).unwrap();

    for r in table.rows() {
        assert!((1_000..10_000).contains(&r.new_cases), "new_cases {}", r.new_cases);
        assert!((10..500).contains(&r.new_deaths), "new_deaths {}", r.new_deaths);
    }
}

#[test]
fn concatenated_totals_never_decrease_across_whole_table() {
    let table = dataset::generate(&DatasetConfig::default()).unwrap();

    for pair in table.rows().windows(2) {
        let (a, b) = (cumulative_columns(&pair[0]), cumulative_columns(&pair[1]));
        for col in 0..4 {
            assert!(b[col] > a[col], "column {col} decreased: {} -> {}", a[col], b[col]);
        }
    }
}

#[test]
fn concatenated_totals_carry_over_into_second_entity() {
    let table = dataset::generate(&DatasetConfig::default()).unwrap();
    let rows = table.rows();
    let last_india = &rows[99];
    let first_usa = &rows[100];

    // The second block continues from the first block's final total.
    assert!(first_usa.total_cases >= last_india.total_cases + 1_000);
    assert!(first_usa.total_cases < last_india.total_cases + 10_000);
}

#[test]
fn per_entity_totals_restart_at_each_block() {
    let config = DatasetConfig {
        accumulation: Accumulation::PerEntity,
        ..DatasetConfig::default()
    };
    let table = dataset::generate(&config).unwrap();

    for block in table.rows().chunks(config.day_count) {
        let first = &block[0];
        assert!((1_000..10_000).contains(&first.total_cases));
        assert!((10..500).contains(&first.total_deaths));
        assert!((5_000..20_000).contains(&first.total_vaccinations));
        assert!((2_000..10_000).contains(&first.people_vaccinated));

        for pair in block.windows(2) {
            let (a, b) = (cumulative_columns(&pair[0]), cumulative_columns(&pair[1]));
            assert!((0..4).all(|c| b[c] > a[c]));
        }
    }
}

#[test]
fn accumulation_mode_does_not_change_daily_draws() {
    let concatenated = dataset::generate(&DatasetConfig::default()).unwrap();
    let per_entity = dataset::generate(&DatasetConfig {
        accumulation: Accumulation::PerEntity,
        ..DatasetConfig::default()
    })
    .unwrap();

    for (a, b) in concatenated.rows().iter().zip(per_entity.rows()) {
        assert_eq!(a.new_cases, b.new_cases);
        assert_eq!(a.new_deaths, b.new_deaths);
    }
    // First block is identical in both modes.
    assert_eq!(concatenated.rows()[..100], per_entity.rows()[..100]);
}

#[test]
fn empty_bounds_are_rejected() {
    let mut config = DatasetConfig::default();
    config.bounds.new_deaths = Bounds::new(500, 500);

    let err = dataset::generate(&config).unwrap_err();
    assert!(
        matches!(err, ReportError::InvalidBounds { field: "new_deaths", low: 500, high: 500 }),
        "unexpected error: {err}"
    );
}

#[test]
fn inverted_bounds_are_rejected() {
    let mut config = DatasetConfig::default();
    config.bounds.vaccination_increments = Bounds::new(20_000, 5_000);
    assert!(matches!(
        dataset::generate(&config),
        Err(ReportError::InvalidBounds { field: "vaccination_increments", .. })
    ));
}

#[test]
fn degenerate_configs_are_rejected() {
    let zero_days = DatasetConfig { day_count: 0, ..DatasetConfig::default() };
    assert!(matches!(dataset::generate(&zero_days), Err(ReportError::InvalidConfig(_))));

    let no_entities = DatasetConfig { entities: vec![], ..DatasetConfig::default() };
    assert!(matches!(dataset::generate(&no_entities), Err(ReportError::InvalidConfig(_))));

    let duplicates = DatasetConfig {
        entities: vec!["India".into(), "India".into()],
        ..DatasetConfig::default()
    };
    assert!(matches!(dataset::generate(&duplicates), Err(ReportError::InvalidConfig(_))));
}

#[test]
fn date_range_past_calendar_end_is_rejected() {
    let config = DatasetConfig {
        start_date: chrono::NaiveDate::MAX,
        day_count: 2,
        ..DatasetConfig::default()
    };
    assert!(matches!(dataset::generate(&config), Err(ReportError::InvalidConfig(_))));
}
