//! Golden-value integration tests against published almanac dates.
//!
//! New year days, leap months and solar-term instants are checked through
//! the public API only, in China Standard Time.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nongli::chinese::{
    self, Ganzhi, Jieqi, NO_RUN, Riqi, Shihou, Tiangan, check_riqi, date_to_riqi, riqi_to_date,
    shihou_to_dati, sui_to_sanfu, sui_to_toufu, uday_to_ganzhi,
};
use nongli::{Dati, Date, Domain, Error, Zone, uday_to_date};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::new(y, m, d).unwrap()
}

/// First day of the first month, with the year's leap month.
#[test]
fn new_year_and_leap_month() {
    let data = [
        (1900, (1900, 1, 31), 8),
        (1949, (1949, 1, 29), 7),
        (1978, (1978, 2, 7), NO_RUN),
        (2000, (2000, 2, 5), NO_RUN),
        (2020, (2020, 1, 25), 4),
        (2021, (2021, 2, 12), NO_RUN),
        (2022, (2022, 2, 1), NO_RUN),
        (2023, (2023, 1, 22), 2),
        (2024, (2024, 2, 10), NO_RUN),
        (2025, (2025, 1, 29), 6),
        (2026, (2026, 2, 17), NO_RUN),
        (2050, (2050, 1, 23), 3),
        (2100, (2100, 2, 9), NO_RUN),
        (2199, (2199, 1, 27), 6),
    ];
    for (nian, (y, m, d), run) in data {
        let first = Riqi::new(nian, 2, 1);
        assert_eq!(Ok(date(y, m, d)), riqi_to_date(first), "{nian}");
        assert_eq!(Ok(first), date_to_riqi(date(y, m, d)));
        assert_eq!(Ok(run), chinese::nian_to_run(nian));
        if nian == chinese::NIAN_MIN {
            continue;
        }
        // the day before belongs to the last month of the previous year
        let eve = date_to_riqi(date(y, m, d) + -1).unwrap();
        assert_eq!(nian - 1, eve.nian);
        assert!(eve.ryue >= 24, "{eve:?}");
    }
}

#[test]
fn mid_autumn_and_national_day() {
    assert_eq!(Ok(Riqi::new(2024, 16, 29)), date_to_riqi(date(2024, 10, 1)));
    assert_eq!(Ok(date(2024, 9, 17)), riqi_to_date(Riqi::new(2024, 16, 15)));
    assert!(check_riqi(Riqi::new(2024, 16, 29)));
}

/// Solar-term instants, China Standard Time.
#[test]
fn solar_term_instants() {
    let data = [
        ((2024, Jieqi::Dongzhi), (2023, 12, 22, 11, 27, 19)),
        ((2024, Jieqi::Chunfen), (2024, 3, 20, 11, 6, 23)),
        ((2024, Jieqi::Qingming), (2024, 4, 4, 15, 2, 18)),
        ((2024, Jieqi::Xiazhi), (2024, 6, 21, 4, 50, 53)),
        ((2025, Jieqi::Dongzhi), (2024, 12, 21, 17, 20, 24)),
        ((2025, Jieqi::Lichun), (2025, 2, 3, 22, 10, 26)),
        ((1900, Jieqi::Dongzhi), (1899, 12, 22, 8, 56, 19)),
        ((2199, Jieqi::Daxue), (2199, 12, 7, 10, 19, 13)),
    ];
    for ((sui, jie), (y, mo, d, h, mi, s)) in data {
        let expected = Dati::from_fields(y, mo, d, h, mi, s, Zone::CHINA).unwrap();
        let actual = shihou_to_dati(Shihou::new(sui, jie), Zone::CHINA);
        assert_eq!(Ok(expected), actual, "{sui} {jie:?}");
    }
}

#[test]
fn dog_days() {
    let data = [
        (2023, (2023, 7, 11), (2023, 8, 10)),
        (2024, (2024, 7, 15), (2024, 8, 14)),
        (2025, (2025, 7, 20), (2025, 8, 9)),
        (2026, (2026, 7, 15), (2026, 8, 14)),
    ];
    for (sui, toufu, sanfu) in data {
        let (toufu_day, sanfu_day) = (sui_to_toufu(sui).unwrap(), sui_to_sanfu(sui).unwrap());
        assert_eq!(date(toufu.0, toufu.1, toufu.2), uday_to_date(toufu_day));
        assert_eq!(date(sanfu.0, sanfu.1, sanfu.2), uday_to_date(sanfu_day));
        assert_eq!(Tiangan::Geng, uday_to_ganzhi(toufu_day).tiangan());
    }
}

#[test]
fn sexagenary_days() {
    // 1949-10-01 was jiazi
    assert_eq!(Ganzhi::JiaZi, uday_to_ganzhi(date(1949, 10, 1).uday()));
    assert_eq!(Ganzhi::JiaZi, uday_to_ganzhi(date(1949, 10, 1).uday() + 60));
}

struct CountEvents(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for CountEvents {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn out_of_range_is_reported_and_logged() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(CountEvents(count.clone()));
    let result = tracing::subscriber::with_default(subscriber, || {
        date_to_riqi(date(2300, 1, 1))
    });
    assert!(matches!(
        result,
        Err(Error::OutOfRange {
            domain: Domain::Uday,
            ..
        })
    ));
    assert_eq!(1, count.load(Ordering::Relaxed));
}
