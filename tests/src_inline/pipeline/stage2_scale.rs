use super::*;
use crate::model::{IndexDomain, Scheme};

#[test]
fn test_scale_micros_to_millis() {
    assert_eq!(scale_samples(&[2000.0, 4000.0], 1000.0), vec![2.0, 4.0]);
}

#[test]
fn test_scale_elementwise_and_length() {
    let samples: Vec<f64> = (0..100).map(|i| (i * 37 % 101) as f64 * 12.5).collect();
    for divisor in [1000.0, 1024.0, 3.0] {
        let scaled = scale_samples(&samples, divisor);
        assert_eq!(scaled.len(), samples.len());
        for (i, v) in scaled.iter().enumerate() {
            assert_eq!(*v, samples[i] / divisor);
        }
    }
}

#[test]
fn test_scale_preserves_scheme_and_domain() {
    let domain = IndexDomain::disclosed(100);
    let series = MeasurementSeries::new(
        Scheme::CsdJwt,
        domain,
        (1..=10).map(|i| i as f64 * 1024.0).collect(),
    )
    .unwrap();

    let scaled = scale(&series, Unit::Size);
    assert_eq!(scaled.scheme, Scheme::CsdJwt);
    assert_eq!(scaled.domain, domain);
    assert_eq!(scaled.unit, Unit::Size);
    assert_eq!(scaled.values, (1..=10).map(|i| i as f64).collect::<Vec<_>>());
}

#[test]
fn test_scale_keeps_order_of_unsorted_samples() {
    let series =
        MeasurementSeries::new(Scheme::SdJwt, IndexDomain::new(1, 1, 3), vec![3000.0, 1000.0, 2000.0])
            .unwrap();
    let scaled = run_stage2(&[series], Unit::Latency);
    assert_eq!(scaled.len(), 1);
    assert_eq!(scaled[0].values, vec![3.0, 1.0, 2.0]);
}
