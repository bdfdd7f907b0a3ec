// src/analysis/period.rs
use crate::data::TimeSeriesRecord;

/// Position where the "halves" are cut. This is a fixed index into the
/// record slice, not a calendar boundary; with the seven mock months it
/// splits Jan-Mar from Abr-Jul.
pub const PERIOD_SPLIT_INDEX: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    FirstHalf,
    SecondHalf,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::All, Period::FirstHalf, Period::SecondHalf];

    pub fn label(self) -> &'static str {
        match self {
            Period::All => "Últimos 12 meses",
            Period::FirstHalf => "1º Semestre",
            Period::SecondHalf => "2º Semestre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Sales,
    Revenue,
    Profit,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Sales, Metric::Revenue, Metric::Profit];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Sales => "Vendas",
            Metric::Revenue => "Receita",
            Metric::Profit => "Lucro",
        }
    }

    pub fn value(self, record: &TimeSeriesRecord) -> f64 {
        match self {
            Metric::Sales => record.sales,
            Metric::Revenue => record.revenue,
            Metric::Profit => record.profit,
        }
    }
}

/// Positional slice of `records` for `period`. Short inputs never panic:
/// `FirstHalf` returns what exists and `SecondHalf` comes back empty.
pub fn filter_by_period(records: &[TimeSeriesRecord], period: Period) -> &[TimeSeriesRecord] {
    let split = PERIOD_SPLIT_INDEX.min(records.len());
    match period {
        Period::All => records,
        Period::FirstHalf => &records[..split],
        Period::SecondHalf => &records[split..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TIME_SERIES;

    #[test]
    fn all_returns_everything() {
        let filtered = filter_by_period(&TIME_SERIES, Period::All);
        assert_eq!(filtered.len(), 7);
        assert_eq!(filtered, &TIME_SERIES[..]);
    }

    #[test]
    fn first_half_is_first_three() {
        let filtered = filter_by_period(&TIME_SERIES, Period::FirstHalf);
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered, &TIME_SERIES[0..3]);
        assert_eq!(filtered[2].label, "Mar");
    }

    #[test]
    fn second_half_is_the_rest() {
        let filtered = filter_by_period(&TIME_SERIES, Period::SecondHalf);
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered, &TIME_SERIES[3..]);
        assert_eq!(filtered[0].label, "Abr");
    }

    #[test]
    fn short_datasets_do_not_panic() {
        let short = &TIME_SERIES[..2];
        assert_eq!(filter_by_period(short, Period::FirstHalf), short);
        assert!(filter_by_period(short, Period::SecondHalf).is_empty());

        let exact = &TIME_SERIES[..3];
        assert!(filter_by_period(exact, Period::SecondHalf).is_empty());

        assert!(filter_by_period(&[], Period::All).is_empty());
        assert!(filter_by_period(&[], Period::FirstHalf).is_empty());
    }

    #[test]
    fn metric_selects_field() {
        let jan = &TIME_SERIES[0];
        assert_eq!(Metric::Sales.value(jan), 4000.0);
        assert_eq!(Metric::Revenue.value(jan), 2400.0);
        assert_eq!(Metric::Profit.value(jan), 1400.0);
    }
}
