use brevet::{BrevetDistance, ControlTimeCalculator};
use chrono::{FixedOffset, TimeZone};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
    let start = pacific.with_ymd_and_hms(2021, 2, 20, 14, 0, 0).unwrap();
    let calc = ControlTimeCalculator::ACP;

    for km in [0.0, 60.0, 150.0, 200.0, 350.0, 600.0, 890.0, 1000.0, 1050.0] {
        match calc.control_window(km, BrevetDistance::Km1000, &start) {
            Ok(window) => println!("{km:>7.1} km  {window}"),
            Err(err) => println!("{km:>7.1} km  {err}"),
        }
    }
}
