use dist_lens_core::{
    load_samples, summarize, write_random_values, DistLensError, Histogram, MersenneTwister,
    Precision, DEFAULT_BINS,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn load_preserves_count_and_order() {
    let tmp = write_fixture("1.0\n2.0\n2.0\n3.0\n");
    let samples = load_samples(tmp.path()).unwrap();
    assert_eq!(samples, vec![1.0, 2.0, 2.0, 3.0]);
}

#[test]
fn load_trims_whitespace_and_skips_blank_lines() {
    let tmp = write_fixture("  1.5  \n\n   \n-2.25\n");
    let samples = load_samples(tmp.path()).unwrap();
    assert_eq!(samples, vec![1.5, -2.25]);
}

#[test]
fn malformed_line_aborts_with_line_number() {
    let tmp = write_fixture("1.0\nabc\n3.0\n");
    let err = load_samples(tmp.path()).unwrap_err();
    match err {
        DistLensError::Parse { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "abc");
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = load_samples(std::path::Path::new("no-such-file.txt")).unwrap_err();
    assert!(matches!(err, DistLensError::Io(_)));
}

#[test]
fn summary_matches_worked_example() {
    let tmp = write_fixture("1.0\n2.0\n2.0\n3.0\n");
    let samples = load_samples(tmp.path()).unwrap();
    let summary = summarize(&samples).unwrap();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 3.0);
    for &v in &samples {
        assert!(summary.min <= v && v <= summary.max);
    }
    assert!(samples.contains(&summary.min));
    assert!(samples.contains(&summary.max));
}

#[test]
fn empty_file_yields_empty_set_and_summary_error() {
    let tmp = write_fixture("");
    let samples = load_samples(tmp.path()).unwrap();
    assert!(samples.is_empty());
    assert!(matches!(
        summarize(&samples),
        Err(DistLensError::EmptySampleSet)
    ));
    assert!(matches!(
        Histogram::build(&samples, DEFAULT_BINS),
        Err(DistLensError::EmptySampleSet)
    ));
}

#[test]
fn histogram_counts_sum_to_n() {
    let tmp = write_fixture("1.0\n2.0\n2.0\n3.0\n");
    let samples = load_samples(tmp.path()).unwrap();
    let hist = Histogram::build(&samples, DEFAULT_BINS).unwrap();
    let total: u64 = hist.bins.iter().map(|b| b.count).sum();
    assert_eq!(total, 4);
    assert_eq!(hist.total, 4);
    assert_eq!(hist.bins.len(), DEFAULT_BINS);
}

#[test]
fn generator_appends_parseable_lines() {
    let tmp = write_fixture("0.5\n");
    let mut rng = MersenneTwister::with_seed(7);
    write_random_values(tmp.path(), 50, 99.0, Precision::Double, &mut rng).unwrap();
    let samples = load_samples(tmp.path()).unwrap();
    // appended after the existing line, nothing overwritten
    assert_eq!(samples.len(), 51);
    assert_eq!(samples[0], 0.5);
    for &v in &samples[1..] {
        assert!((0.0..=99.0).contains(&v));
    }
}

#[test]
fn generator_int_precision_stays_in_range() {
    let tmp = write_fixture("");
    let mut rng = MersenneTwister::with_seed(7);
    write_random_values(tmp.path(), 200, 99.0, Precision::Int, &mut rng).unwrap();
    let samples = load_samples(tmp.path()).unwrap();
    assert_eq!(samples.len(), 200);
    for &v in &samples {
        assert_eq!(v, v.trunc());
        assert!((0.0..=99.0).contains(&v));
    }
}

#[test]
fn generator_is_deterministic_per_seed() {
    let a_file = write_fixture("");
    let b_file = write_fixture("");
    let mut a = MersenneTwister::with_seed(123);
    let mut b = MersenneTwister::with_seed(123);
    write_random_values(a_file.path(), 100, 10.0, Precision::Double, &mut a).unwrap();
    write_random_values(b_file.path(), 100, 10.0, Precision::Double, &mut b).unwrap();
    assert_eq!(
        load_samples(a_file.path()).unwrap(),
        load_samples(b_file.path()).unwrap()
    );
}

#[test]
fn generator_zero_count_writes_nothing() {
    let tmp = write_fixture("");
    let mut rng = MersenneTwister::default();
    write_random_values(tmp.path(), 0, 99.0, Precision::Int, &mut rng).unwrap();
    assert!(load_samples(tmp.path()).unwrap().is_empty());
}
