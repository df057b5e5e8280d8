use brevet::{BrevetDistance, ControlTimeCalculator};
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use proptest::prelude::*;

const CALC: ControlTimeCalculator = ControlTimeCalculator::ACP;

fn arb_brevet() -> impl Strategy<Value = BrevetDistance> {
    prop::sample::select(BrevetDistance::ALL.to_vec())
}

fn arb_start() -> impl Strategy<Value = DateTime<FixedOffset>> {
    // 2000-01-01 .. 2040-01-01, offsets from UTC-12 to UTC+14 in quarter hours
    (946_684_800i64..2_208_988_800i64, -48i32..=56i32).prop_map(|(secs, quarters)| {
        let offset = FixedOffset::east_opt(quarters * 900).unwrap();
        offset.timestamp_opt(secs, 0).unwrap()
    })
}

/// A brevet together with a control distance inside its allowed range.
fn arb_control() -> impl Strategy<Value = (BrevetDistance, f64)> {
    arb_brevet().prop_flat_map(|b| (Just(b), 0.0..=b.max_control().value()))
}

proptest! {
    #[test]
    fn start_control_opens_at_start(brevet in arb_brevet(), start in arb_start()) {
        prop_assert_eq!(CALC.open_time(0.0, brevet, &start), Ok(start));
        prop_assert_eq!(CALC.close_time(0.0, brevet, &start), Ok(start + Duration::hours(1)));
    }

    #[test]
    fn open_never_after_close((brevet, km) in arb_control(), start in arb_start()) {
        let window = CALC.control_window(km, brevet, &start).unwrap();
        prop_assert!(window.open <= window.close, "{} at {} km: {}", brevet, km, window);
    }

    #[test]
    fn times_are_monotonic_in_distance(
        (brevet, a) in arb_control(),
        fraction in 0.0f64..=1.0,
        start in arb_start(),
    ) {
        let max = brevet.max_control().value();
        let b = (a + (max - a) * fraction).min(max);
        let (near, far) = (a.min(b), a.max(b));
        prop_assert!(CALC.open_time(near, brevet, &start)? <= CALC.open_time(far, brevet, &start)?);
        prop_assert!(CALC.close_time(near, brevet, &start)? <= CALC.close_time(far, brevet, &start)?);
    }

    #[test]
    fn overage_keeps_open_time_constant(brevet in arb_brevet(), extra in 0.0f64..=0.2, start in arb_start()) {
        let nominal = CALC.open_time(brevet.km(), brevet, &start)?;
        let longer = CALC.open_time(brevet.km() * (1.0 + extra), brevet, &start)?;
        prop_assert_eq!(nominal, longer);
    }

    #[test]
    fn results_keep_the_start_offset((brevet, km) in arb_control(), start in arb_start()) {
        let open = CALC.open_time(km, brevet, &start)?;
        let close = CALC.close_time(km, brevet, &start)?;
        prop_assert_eq!(open.offset(), start.offset());
        prop_assert_eq!(close.offset(), start.offset());
    }

    #[test]
    fn results_are_whole_minutes_after_start((brevet, km) in arb_control(), start in arb_start()) {
        let open = CALC.open_time(km, brevet, &start)?;
        prop_assert_eq!((open - start).num_seconds() % 60, 0);
    }

    #[test]
    fn beyond_overage_is_rejected(brevet in arb_brevet(), extra in 1.0f64..500.0) {
        let km = brevet.max_control().value() + extra;
        let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2021, 2, 20, 14, 0, 0).unwrap();
        prop_assert!(CALC.open_time(km, brevet, &start).is_err());
        prop_assert!(CALC.open_time(-extra, brevet, &start).is_err());
    }
}

#[test]
fn open_time_is_continuous_at_band_edges() {
    let start = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2021, 2, 20, 14, 0, 0)
        .unwrap();
    for edge in [200.0, 400.0, 600.0, 1000.0] {
        let at = CALC.open_time(edge, BrevetDistance::Km1000, &start).unwrap();
        let below = CALC.open_time(edge - 1e-6, BrevetDistance::Km1000, &start).unwrap();
        let above = CALC.open_time(edge + 1e-6, BrevetDistance::Km1000, &start).unwrap();
        assert!(at - below <= Duration::minutes(1), "jump below {edge}");
        assert!(above - at <= Duration::minutes(1), "jump above {edge}");
    }
}
