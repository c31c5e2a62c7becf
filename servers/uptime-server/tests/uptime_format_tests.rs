//! Rendering properties of the duration string

use proptest::prelude::*;
use uptime_server::Uptime;

fn format(secs: f64) -> String {
    Uptime::from_secs_f64(secs).unwrap().to_string()
}

#[test]
fn test_documented_examples() {
    assert_eq!(format(0.0), "0:00:00");
    assert_eq!(format(3661.0), "1:01:01");
    assert!(format(90000.5).starts_with("25:00:00.5"));
}

proptest! {
    // Covers roughly 30 years of uptime at centisecond resolution
    #[test]
    fn roundtrip_centiseconds(centis in 0u64..100_000_000_000) {
        let secs = centis as f64 / 100.0;
        let uptime = Uptime::from_secs_f64(secs).unwrap();
        let parsed: Uptime = uptime.to_string().parse().unwrap();

        prop_assert_eq!(parsed, uptime);
        prop_assert!((parsed.as_secs_f64() - secs).abs() <= 0.5e-6 * secs.max(1.0));
    }

    #[test]
    fn roundtrip_micros(micros in any::<u64>()) {
        let uptime = Uptime::from_micros(micros);
        let parsed: Uptime = uptime.to_string().parse().unwrap();
        prop_assert_eq!(parsed, uptime);
    }

    #[test]
    fn minutes_and_seconds_stay_two_digits(secs in 0u64..10_000_000) {
        let rendered = Uptime::from_secs(secs).to_string();
        let fields: Vec<&str> = rendered.split(':').collect();

        prop_assert_eq!(fields.len(), 3);
        prop_assert_eq!(fields[1].len(), 2);
        prop_assert_eq!(fields[2].len(), 2);
        prop_assert_eq!(fields[0].parse::<u64>().unwrap(), secs / 3600);
    }
}
