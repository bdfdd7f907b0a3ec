// src/data/mod.rs
//! Fixed mock datasets behind every panel. Nothing here changes at runtime.

pub mod records;

pub use records::{
    CategoryShare, NavEntry, RadarScore, ScatterPoint, SummaryCard, TimeSeriesRecord, Trend,
};

pub static TIME_SERIES: [TimeSeriesRecord; 7] = [
    TimeSeriesRecord::new("Jan", 4000.0, 2400.0, 1400.0, 1200.0),
    TimeSeriesRecord::new("Fev", 3200.0, 2100.0, 1100.0, 1300.0),
    TimeSeriesRecord::new("Mar", 5000.0, 3800.0, 2500.0, 1600.0),
    TimeSeriesRecord::new("Abr", 4700.0, 3900.0, 2100.0, 1700.0),
    TimeSeriesRecord::new("Mai", 5900.0, 4800.0, 3000.0, 2000.0),
    TimeSeriesRecord::new("Jun", 6300.0, 4200.0, 2800.0, 2200.0),
    TimeSeriesRecord::new("Jul", 7200.0, 5100.0, 3300.0, 2400.0),
];

pub static CATEGORY_SHARES: [CategoryShare; 4] = [
    CategoryShare { label: "Produto A", value: 400.0 },
    CategoryShare { label: "Produto B", value: 300.0 },
    CategoryShare { label: "Produto C", value: 300.0 },
    CategoryShare { label: "Produto D", value: 200.0 },
];

pub static RADAR_SCORES: [RadarScore; 5] = [
    RadarScore { axis: "Marketing", score: 120.0, max: 150.0 },
    RadarScore { axis: "Vendas", score: 98.0, max: 150.0 },
    RadarScore { axis: "Operações", score: 86.0, max: 150.0 },
    RadarScore { axis: "RH", score: 99.0, max: 150.0 },
    RadarScore { axis: "Financeiro", score: 85.0, max: 150.0 },
];

pub static SCATTER_POINTS: [ScatterPoint; 6] = [
    ScatterPoint { x: 100.0, y: 200.0 },
    ScatterPoint { x: 120.0, y: 100.0 },
    ScatterPoint { x: 170.0, y: 300.0 },
    ScatterPoint { x: 140.0, y: 250.0 },
    ScatterPoint { x: 150.0, y: 400.0 },
    ScatterPoint { x: 110.0, y: 280.0 },
];

pub static SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard { title: "Receita", value: "R$1.200.000", delta: "+8.2%", trend: Trend::Up },
    SummaryCard { title: "Lucro Projetado", value: "R$8.500.000", delta: "+3.1%", trend: Trend::Up },
    SummaryCard { title: "Clientes Ativos", value: "4.500", delta: "+1.8%", trend: Trend::Up },
    SummaryCard { title: "Lucro Líquido", value: "R$312.000", delta: "-0.8%", trend: Trend::Down },
];

pub static NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { key: "insights", icon: "🏠", label: "Insights" },
    NavEntry { key: "correlations", icon: "▦", label: "Correlações" },
    NavEntry { key: "ranking", icon: "📊", label: "Ranking" },
    NavEntry { key: "models", icon: "◔", label: "Modelos" },
    NavEntry { key: "settings", icon: "⚙", label: "Parâmetros" },
];

pub const OWNER_NAME: &str = "André Pimentel Santos";
pub const OWNER_ROLE: &str = "Painel Executivo";
pub const PROFILE_NAME: &str = "André Silva";
pub const PROFILE_ROLE: &str = "Analista de Dados";
pub const PROFILE_HANDLE: &str = "@andrepimentelsantos01";
pub const PROFILE_URL: &str = "https://linkedin.com/in/andrepimentelsantos01";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_expected_shape() {
        assert_eq!(TIME_SERIES.len(), 7);
        assert_eq!(TIME_SERIES[0].label, "Jan");
        assert_eq!(TIME_SERIES[6].label, "Jul");
        assert_eq!(CATEGORY_SHARES.len(), 4);
        assert_eq!(RADAR_SCORES.len(), 5);
        assert_eq!(SCATTER_POINTS.len(), 6);
        assert_eq!(SUMMARY_CARDS.len(), 4);
        assert_eq!(NAV_ENTRIES.len(), 5);
    }

    #[test]
    fn radar_scores_never_exceed_their_max() {
        assert!(RADAR_SCORES.iter().all(|s| s.score <= s.max && s.max > 0.0));
    }

    #[test]
    fn nav_keys_are_unique() {
        for (i, a) in NAV_ENTRIES.iter().enumerate() {
            assert!(NAV_ENTRIES[i + 1..].iter().all(|b| b.key != a.key));
        }
    }
}
