//! Library-level tests over catalog fixtures and generated files

use bigdecimal::BigDecimal;
use chrono::Utc;
use std::str::FromStr;
use tempfile::TempDir;
use wine_catalog::{interpret, interpret_file, CatalogError, RecordError, WineRecord};

mod common;

struct Expected {
    origin_country: &'static str,
    vineyard: &'static str,
    winery: &'static str,
    wine_type: &'static str,
    vintage: &'static str,
    rating: f64,
    unit_price: &'static str,
}

const CHILE: Expected = Expected {
    origin_country: "Chile",
    vineyard: "Valle Central",
    winery: "Baron De Rothschild",
    wine_type: "Chardonnay",
    vintage: "2019",
    rating: 94.0,
    unit_price: "1290",
};

const GERMANY: Expected = Expected {
    origin_country: "Germany",
    vineyard: "Ihringer Winklerberg",
    winery: "Dr. Heger",
    wine_type: "Pinot Noir",
    vintage: "2014",
    rating: 95.0,
    unit_price: "2390",
};

fn assert_record(expected: &Expected, actual: &WineRecord) {
    assert_eq!(expected.origin_country, actual.origin_country);
    assert_eq!(expected.vineyard, actual.vineyard);
    assert_eq!(expected.winery, actual.winery);
    assert_eq!(expected.wine_type, actual.wine_type);
    assert_eq!(expected.vintage, actual.vintage);
    assert_eq!(expected.rating, actual.rating);
    assert_eq!(
        BigDecimal::from_str(expected.unit_price).unwrap(),
        actual.unit_price
    );
}

#[test]
fn test_data_without_column_name() {
    let now = Utc::now();
    let wines = interpret_file(common::testdata("data_without_column_name"), now).unwrap();

    assert_eq!(wines.len(), 2);
    assert_record(&CHILE, &wines[0]);
    assert_record(&GERMANY, &wines[1]);
    assert!(wines.iter().all(|w| w.entry_time == now));
}

#[test]
fn test_data_with_column_name() {
    let now = Utc::now();
    let wines = interpret_file(common::testdata("data_with_column_name"), now).unwrap();

    assert_eq!(wines.len(), 1);
    assert_record(&CHILE, &wines[0]);
    assert_eq!(wines[0].entry_time, now);
}

#[test]
fn test_crlf_and_padding() {
    let wines = interpret_file(
        common::testdata("data_crlf_padded"),
        common::fixed_entry_time(),
    )
    .unwrap();

    assert_eq!(wines.len(), 1);
    assert_eq!(wines[0].origin_country, "Chile");
    assert_eq!(wines[0].rating, 90.0);
    assert_eq!(wines[0].unit_price, BigDecimal::from(1290));
}

#[test]
fn test_header_permutations_yield_identical_records() {
    let columns = [
        ("Country of Origin", "Chile"),
        ("Vineyard", "Valle Central"),
        ("Winery", "Baron De Rothschild"),
        ("Wine Type", "Chardonnay"),
        ("Vintage", "2019"),
        ("Rating", "Robinson: 18"),
        ("Price", "1290.00"),
    ];
    let entry_time = common::fixed_entry_time();

    let mut baseline: Option<Vec<WineRecord>> = None;
    for rotation in 0..columns.len() {
        let mut order = columns.to_vec();
        order.rotate_left(rotation);
        if rotation % 2 == 1 {
            order.reverse();
        }

        let header: Vec<&str> = order.iter().map(|(label, _)| *label).collect();
        let row: Vec<&str> = order.iter().map(|(_, value)| *value).collect();
        let lines = [header.join(","), row.join(","), row.join(",")];

        let records = interpret(&lines, entry_time).unwrap();
        assert_eq!(records.len(), lines.len() - 1);

        match &baseline {
            Some(expected) => assert_eq!(expected, &records),
            None => baseline = Some(records),
        }
    }

    let baseline = baseline.unwrap();
    assert_eq!(baseline[0].rating, 90.0);
    assert_eq!(baseline[0].winery, "Baron De Rothschild");
}

#[test]
fn test_positional_count_matches_lines() {
    let line = "Italy,Barolo,Giacomo Conterno,Nebbiolo,2016,Parker: 100,850.50";
    let lines = vec![line; 25];
    let records = interpret(&lines, Utc::now()).unwrap();
    assert_eq!(records.len(), 25);
}

#[test]
fn test_six_tokens_abort_without_records() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = common::create_test_csv(
        dir.path(),
        "short.csv",
        "Chile,Valle Central,Baron De Rothschild,Chardonnay,2019,Parker: 94,1290.00\n\
         Germany,Ihringer Winklerberg,Dr. Heger,Pinot Noir,2014,Robinson: 19\n",
    )?;

    let err = interpret_file(&path, Utc::now()).unwrap_err();
    let source = err.record_error().expect("record error");
    assert!(source.is_missing_data());
    assert!(matches!(err, CatalogError::Record { line: 2, .. }));
    Ok(())
}

#[test]
fn test_unknown_rating_scale() {
    let lines = ["Chile,Valle Central,Baron,Chardonnay,2019,Unknown: 50,1290.00"];
    let err = interpret(&lines, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Record {
            source: RecordError::InvalidRatingScale(_),
            ..
        }
    ));
    assert!(err.to_string().contains("invalid rating scale"));
}

#[test]
fn test_price_with_currency_symbol() {
    let lines = ["Chile,Valle Central,Baron,Chardonnay,2019,Parker: 90,$12"];
    let err = interpret(&lines, Utc::now()).unwrap_err();
    assert!(err.record_error().unwrap().is_parse_failure());
}

#[test]
fn test_price_with_digit_separators() {
    for price in ["1_290.00", "1_000"] {
        let line = format!("Chile,Valle Central,Baron,Chardonnay,2019,Parker: 94,{}", price);
        let err = interpret(&[line], Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Record {
                line: 1,
                source: RecordError::InvalidPrice { .. }
            }
        ));
    }
}

#[test]
fn test_non_finite_rating_aborts() {
    for rating in ["Parker: NaN", "Robinson: -infinity"] {
        let line = format!("Chile,Valle Central,Baron,Chardonnay,2019,{},1290.00", rating);
        let err = interpret(&[line], Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Record {
                line: 1,
                source: RecordError::NonFiniteRating { .. }
            }
        ));
    }
}

#[test]
fn test_empty_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = common::create_test_csv(dir.path(), "empty.csv", "")?;
    assert!(interpret_file(&path, Utc::now())?.is_empty());
    Ok(())
}

#[test]
fn test_missing_file() {
    let err = interpret_file("no/such/catalog.csv", Utc::now()).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_positional_row_equal_to_label_is_read_as_header() {
    // The first-line heuristic treats any canonical label as a header.
    let lines = [
        "Chile,Vineyard,Baron,Chardonnay,2019,Parker: 94,1290.00",
        "Chile,Valle Central,Baron,Chardonnay,2019,Parker: 94,1290.00",
    ];
    let err = interpret(&lines, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Record {
            line: 2,
            source: RecordError::MissingColumn { column: "Country of Origin" }
        }
    ));
}
