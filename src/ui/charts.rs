// src/ui/charts.rs
use eframe::egui::{self, Align2, Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoint, PlotUi, Points, Polygon, Text,
};

use crate::analysis::geometry::{axis_angle, polar, radar_ring, wedge_outline};
use crate::analysis::{pie_slices, radar_polygon, Metric};
use crate::data::{TimeSeriesRecord, CATEGORY_SHARES, RADAR_SCORES, SCATTER_POINTS};
use crate::state::DashboardState;
use crate::utils::matches_query;
use super::theme::{Palette, CYAN, PRIMARY, PURPLE, SHARE_COLORS, VIOLET};

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Trend,
    Comparison,
    CumulativeProfit,
    ProductShare,
    AreaPerformance,
    Correlation,
    Combined,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Trend,
        ChartKind::Comparison,
        ChartKind::CumulativeProfit,
        ChartKind::ProductShare,
        ChartKind::AreaPerformance,
        ChartKind::Correlation,
        ChartKind::Combined,
    ];

    pub fn title(self, metric: Metric) -> String {
        match self {
            ChartKind::Trend => format!("Tendência — {}", metric.label()),
            ChartKind::Comparison => "Comparativo".to_string(),
            ChartKind::CumulativeProfit => "Lucro Acumulado".to_string(),
            ChartKind::ProductShare => "Participação por Produto".to_string(),
            ChartKind::AreaPerformance => "Desempenho por Área".to_string(),
            ChartKind::Correlation => "Correlação".to_string(),
            ChartKind::Combined => "Visão Geral Combinada".to_string(),
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ChartKind::Trend => "Últimos 12 meses",
            ChartKind::Comparison => "Vendas vs Receita",
            ChartKind::CumulativeProfit => "Acumulado no período",
            ChartKind::ProductShare => "Quota de mercado",
            ChartKind::AreaPerformance => "KPI por setor",
            ChartKind::Correlation => "Comparação de métricas",
            ChartKind::Combined => "Visão consolidada",
        }
    }

    fn height(self) -> f32 {
        match self {
            ChartKind::AreaPerformance | ChartKind::Correlation => 260.0,
            ChartKind::Combined => 300.0,
            _ => 220.0,
        }
    }

    /// Spans the whole row instead of taking one grid cell.
    pub fn full_width(self) -> bool {
        self == ChartKind::Combined
    }
}

/// Panels left after applying the search box, in display order.
pub fn visible_charts(query: &str, metric: Metric) -> Vec<ChartKind> {
    ChartKind::ALL
        .into_iter()
        .filter(|kind| matches_query(&kind.title(metric), query) || matches_query(kind.subtitle(), query))
        .collect()
}

/// Month label for plot x coordinate `x`, if it lands on a record.
pub fn label_at(records: &[TimeSeriesRecord], x: f64) -> Option<&'static str> {
    let index = x.round();
    if index < 0.0 {
        return None;
    }
    records.get(index as usize).map(|r| r.label)
}

pub fn show_chart_grid(ui: &mut egui::Ui, state: &DashboardState, palette: &Palette) {
    let charts = visible_charts(&state.query, state.metric);
    if charts.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Nenhum gráfico encontrado para \"{}\"", state.query.trim()))
                    .color(palette.subtle_text),
            );
        });
        return;
    }

    let (wide, cells): (Vec<ChartKind>, Vec<ChartKind>) =
        charts.into_iter().partition(|kind| kind.full_width());

    for row in cells.chunks(GRID_COLUMNS) {
        ui.columns(GRID_COLUMNS, |columns| {
            for (column, kind) in columns.iter_mut().zip(row) {
                chart_panel(column, *kind, state, palette);
            }
        });
        ui.add_space(16.0);
    }

    for kind in wide {
        chart_panel(ui, kind, state, palette);
        ui.add_space(16.0);
    }
}

fn chart_panel(ui: &mut egui::Ui, kind: ChartKind, state: &DashboardState, palette: &Palette) {
    egui::Frame::none()
        .fill(palette.card_bg)
        .stroke(Stroke::new(1.0, palette.border))
        .rounding(12.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(kind.title(state.metric)).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(kind.subtitle()).small().color(palette.subtle_text));
                });
            });
            ui.add_space(8.0);

            let records = state.filtered();
            match kind {
                ChartKind::Trend => trend_chart(ui, records, state.metric, palette),
                ChartKind::Comparison => comparison_chart(ui, records, palette),
                ChartKind::CumulativeProfit => profit_area_chart(ui, records, palette),
                ChartKind::ProductShare => share_chart(ui, palette),
                ChartKind::AreaPerformance => radar_chart(ui, palette),
                ChartKind::Correlation => scatter_chart(ui),
                ChartKind::Combined => combined_chart(ui, records, palette),
            }
        });
}

fn cartesian_plot(id: &str, height: f32) -> Plot {
    Plot::new(id)
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .legend(Legend::default())
}

/// Hover text "Mês · Série: valor" for plots indexed by record position.
fn month_plot(id: &str, height: f32, records: &'static [TimeSeriesRecord]) -> Plot {
    cartesian_plot(id, height)
        .include_y(0.0)
        .show_axes([false, true])
        .label_formatter(move |name, value| {
            let month = label_at(records, value.x).unwrap_or("");
            if name.is_empty() {
                format!("{}\n{:.0}", month, value.y)
            } else {
                format!("{}\n{}: {:.0}", month, name, value.y)
            }
        })
}

fn series(records: &[TimeSeriesRecord], value: impl Fn(&TimeSeriesRecord) -> f64) -> Vec<[f64; 2]> {
    records.iter()
        .enumerate()
        .map(|(i, record)| [i as f64, value(record)])
        .collect()
}

fn month_labels(plot_ui: &mut PlotUi, records: &[TimeSeriesRecord], palette: &Palette) {
    for (i, record) in records.iter().enumerate() {
        plot_ui.text(
            Text::new(PlotPoint::new(i as f64, 0.0), RichText::new(record.label).small())
                .anchor(Align2::CENTER_TOP)
                .color(palette.subtle_text),
        );
    }
}

fn trend_chart(ui: &mut egui::Ui, records: &'static [TimeSeriesRecord], metric: Metric, palette: &Palette) {
    month_plot("trend_plot", ChartKind::Trend.height(), records).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(series(records, |r| metric.value(r)))
                .name(metric.label())
                .color(PRIMARY)
                .width(2.0),
        );
        plot_ui.line(
            Line::new(series(records, |r| r.users))
                .name("Usuários")
                .color(PURPLE)
                .width(1.0)
                .style(LineStyle::dashed_loose()),
        );
        month_labels(plot_ui, records, palette);
    });
}

fn grouped_bars(records: &[TimeSeriesRecord], offset: f64, width: f64, color: Color32,
                value: impl Fn(&TimeSeriesRecord) -> f64) -> Vec<Bar> {
    records.iter()
        .enumerate()
        .map(|(i, record)| {
            Bar::new(i as f64 + offset, value(record))
                .name(record.label)
                .width(width)
                .fill(color)
        })
        .collect()
}

fn comparison_chart(ui: &mut egui::Ui, records: &'static [TimeSeriesRecord], palette: &Palette) {
    month_plot("comparison_plot", ChartKind::Comparison.height(), records).show(ui, |plot_ui| {
        plot_ui.bar_chart(
            BarChart::new(grouped_bars(records, -0.18, 0.34, CYAN, |r| r.sales))
                .name("Vendas")
                .color(CYAN),
        );
        plot_ui.bar_chart(
            BarChart::new(grouped_bars(records, 0.18, 0.34, VIOLET, |r| r.revenue))
                .name("Receita")
                .color(VIOLET),
        );
        month_labels(plot_ui, records, palette);
    });
}

fn profit_area_chart(ui: &mut egui::Ui, records: &'static [TimeSeriesRecord], palette: &Palette) {
    month_plot("profit_area_plot", ChartKind::CumulativeProfit.height(), records).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(series(records, |r| r.profit))
                .name("Lucro")
                .color(PURPLE)
                .fill(0.0),
        );
        month_labels(plot_ui, records, palette);
    });
}

fn combined_chart(ui: &mut egui::Ui, records: &'static [TimeSeriesRecord], palette: &Palette) {
    month_plot("combined_plot", ChartKind::Combined.height(), records).show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(series(records, |r| r.profit))
                .name("Lucro")
                .color(PURPLE)
                .fill(0.0),
        );
        plot_ui.bar_chart(
            BarChart::new(grouped_bars(records, 0.0, 0.25, CYAN, |r| r.sales))
                .name("Vendas")
                .color(CYAN),
        );
        plot_ui.line(
            Line::new(series(records, |r| r.revenue))
                .name("Receita")
                .color(PRIMARY)
                .width(2.0),
        );
        month_labels(plot_ui, records, palette);
    });
}

fn polar_plot(id: &str, height: f32) -> Plot {
    cartesian_plot(id, height)
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_x(false)
        .show_y(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.3)
        .include_y(1.3)
}

fn share_chart(ui: &mut egui::Ui, palette: &Palette) {
    const INNER: f64 = 0.48;
    const OUTER: f64 = 1.0;

    let slices = pie_slices(&CATEGORY_SHARES);
    polar_plot("share_plot", ChartKind::ProductShare.height()).show(ui, |plot_ui| {
        for (i, (slice, share)) in slices.iter().zip(CATEGORY_SHARES.iter()).enumerate() {
            let color = SHARE_COLORS[i % SHARE_COLORS.len()];
            plot_ui.polygon(
                Polygon::new(wedge_outline(slice, INNER, OUTER, 32))
                    .name(share.label)
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, palette.card_bg)),
            );

            let [x, y] = polar(slice.mid_angle(), OUTER + 0.2);
            plot_ui.text(
                Text::new(PlotPoint::new(x, y), format!("{:.0}", share.value))
                    .color(palette.subtle_text),
            );
        }
    });
}

fn radar_chart(ui: &mut egui::Ui, palette: &Palette) {
    let axes = RADAR_SCORES.len();
    polar_plot("radar_plot", ChartKind::AreaPerformance.height()).show(ui, |plot_ui| {
        for step in 1..=4 {
            let mut ring = radar_ring(axes, step as f64 / 4.0);
            if let Some(first) = ring.first().copied() {
                ring.push(first);
            }
            plot_ui.line(Line::new(ring).color(palette.grid).width(1.0));
        }

        for (i, score) in RADAR_SCORES.iter().enumerate() {
            let angle = axis_angle(i, axes);
            plot_ui.line(Line::new(vec![[0.0, 0.0], polar(angle, 1.0)]).color(palette.grid).width(1.0));

            let [x, y] = polar(angle, 1.18);
            plot_ui.text(
                Text::new(PlotPoint::new(x, y), RichText::new(score.axis).small())
                    .color(palette.subtle_text),
            );
        }

        plot_ui.polygon(
            Polygon::new(radar_polygon(&RADAR_SCORES))
                .name("A")
                .fill_color(PRIMARY.gamma_multiply(0.45))
                .stroke(Stroke::new(1.5, PRIMARY)),
        );
    });
}

fn scatter_chart(ui: &mut egui::Ui) {
    let points: Vec<[f64; 2]> = SCATTER_POINTS.iter().map(|p| [p.x, p.y]).collect();
    cartesian_plot("scatter_plot", ChartKind::Correlation.height())
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("Correlação")
                    .color(CYAN)
                    .radius(4.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Period;
    use crate::data::TIME_SERIES;

    #[test]
    fn empty_query_shows_every_panel() {
        assert_eq!(visible_charts("", Metric::Sales), ChartKind::ALL.to_vec());
    }

    #[test]
    fn query_filters_by_title_and_subtitle() {
        assert_eq!(
            visible_charts("lucro", Metric::Sales),
            vec![ChartKind::CumulativeProfit]
        );
        // Trend title follows the metric
        assert_eq!(
            visible_charts("lucro", Metric::Profit),
            vec![ChartKind::Trend, ChartKind::CumulativeProfit]
        );
        assert_eq!(visible_charts("KPI", Metric::Sales), vec![ChartKind::AreaPerformance]);
        assert!(visible_charts("inexistente", Metric::Sales).is_empty());
    }

    #[test]
    fn only_combined_spans_full_width() {
        let wide: Vec<_> = ChartKind::ALL.into_iter().filter(|k| k.full_width()).collect();
        assert_eq!(wide, vec![ChartKind::Combined]);
    }

    #[test]
    fn trend_title_names_metric() {
        assert_eq!(ChartKind::Trend.title(Metric::Revenue), "Tendência — Receita");
    }

    #[test]
    fn label_lookup_uses_filtered_positions() {
        let second = crate::analysis::filter_by_period(&TIME_SERIES, Period::SecondHalf);
        assert_eq!(label_at(second, 0.0), Some("Abr"));
        assert_eq!(label_at(second, 2.6), Some("Jul"));
        assert_eq!(label_at(second, 4.0), None);
        assert_eq!(label_at(second, -1.0), None);
    }
}
