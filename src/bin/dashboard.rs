// src/bin/dashboard.rs

use std::sync::Arc;

use anyhow::Context;
use chrono::{Days, NaiveDate};
use eframe::egui;
use egui::{Color32, Frame, RichText};
use egui_extras::DatePickerButton;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tech_trends::{
    PlotSeriesSet, PriceLoader, PriceTable, Selection, Stock, default_selection,
    default_universe, history_start, project_available,
};

struct DashboardApp {
    // Loaded once before the window opens, read-only from here on.
    table: Arc<PriceTable>,
    universe: Vec<Stock>,

    // UI state for the control surface
    picked: Vec<String>, // ticker toggles, in the order the user clicked them
    start_date: NaiveDate,
    end_date: NaiveDate,

    // The figure currently on screen. Only replaced on a successful submit.
    chart: PlotSeriesSet,
    chart_title: String,
    status: Option<String>,
}

impl DashboardApp {
    fn new(table: Arc<PriceTable>, universe: Vec<Stock>) -> Self {
        let start_date = table.min_date().unwrap_or_else(history_start);
        let end_date = table.max_date().unwrap_or_else(history_start);

        // Before any submit the chart shows the unfiltered full history
        // of every ticker in the universe.
        let all: Vec<String> = universe.iter().map(|s| s.ticker.clone()).collect();
        let (chart, _) = project_available(&table, &all, start_date, end_date);

        Self {
            table,
            universe,
            picked: default_selection(),
            start_date,
            end_date,
            chart,
            chart_title: "Full history, all tickers".to_string(),
            status: None,
        }
    }

    /// The submit action: read the controls, project, swap the figure.
    /// If nothing could be projected the old figure stays put.
    fn on_submit(&mut self) {
        let selection =
            Selection::new(self.picked.clone(), self.start_date, self.end_date);
        let (set, missing) =
            project_available(&self.table, &selection.tickers, selection.start, selection.end);

        if set.is_empty() && !selection.tickers.is_empty() {
            // Every requested ticker failed lookup; keep the old chart.
            self.status = Some(format!(
                "no data for any selected ticker ({})",
                missing.join(", ")
            ));
            return;
        }

        self.status = if missing.is_empty() {
            None
        } else {
            Some(format!("skipped unknown ticker(s): {}", missing.join(", ")))
        };
        self.chart_title = format!(
            "{} prices from {} to {}",
            if selection.tickers.is_empty() {
                "No".to_string()
            } else {
                selection.tickers.join(", ")
            },
            selection.start,
            selection.end
        );
        self.chart = set;
    }

    fn ticker_picker(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Select ticker(s)").strong().color(Color32::GRAY));
        ui.horizontal_wrapped(|ui| {
            for stock in &self.universe {
                let was_picked = self.picked.iter().any(|t| t == &stock.ticker);
                let mut picked = was_picked;
                ui.toggle_value(&mut picked, &stock.ticker)
                    .on_hover_text(&stock.company_name);
                if picked != was_picked {
                    if picked {
                        // Click order is series order in the chart.
                        self.picked.push(stock.ticker.clone());
                    } else {
                        self.picked.retain(|t| t != &stock.ticker);
                    }
                }
            }
        });
    }

    fn date_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Select dates").strong().color(Color32::GRAY));
        ui.horizontal(|ui| {
            ui.add(DatePickerButton::new(&mut self.start_date).id_source("start-date"));
            ui.label("to");
            ui.add(DatePickerButton::new(&mut self.end_date).id_source("end-date"));
        });

        // The range controls are bounded by what the table actually holds.
        if let (Some(min), Some(max)) = (self.table.min_date(), self.table.max_date()) {
            self.start_date = self.start_date.clamp(min, max);
            self.end_date = self.end_date.clamp(min, max);
        }
    }

    fn chart_panel(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(&self.chart_title).strong());
        Frame::dark_canvas(ui.style()).show(ui, |ui| {
            Plot::new("line-chart")
                .height(ui.available_height())
                .width(ui.available_width())
                .legend(Legend::default())
                .x_axis_label("Date")
                .y_axis_label("Stock Price")
                .x_axis_formatter(|mark, _max_chars, _range| {
                    x_to_date(mark.value)
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default()
                })
                .label_formatter(|name, value| {
                    let date = x_to_date(value.x)
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default();
                    if name.is_empty() {
                        format!("{date}\n$ {:.2}", value.y)
                    } else {
                        format!("{name}\n{date}\n$ {:.2}", value.y)
                    }
                })
                .show(ui, |plot_ui| {
                    for series in self.chart.iter() {
                        // One Line per run of finite points; the line breaks
                        // where the column has a NAN gap, like the source
                        // dataframe's missing values would.
                        for segment in finite_segments(series.points()) {
                            plot_ui.line(
                                Line::new(PlotPoints::from(segment)).name(&series.ticker),
                            );
                        }
                    }
                });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tech Giants Stock Price Trends");
            });
            ui.separator();

            self.ticker_picker(ui);
            ui.add_space(6.0);
            self.date_controls(ui);
            ui.add_space(6.0);

            if ui.button(RichText::new("Submit").size(16.0)).clicked() {
                self.on_submit();
            }
            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status);
            }
            ui.separator();

            self.chart_panel(ui);
        });
    }
}

/// Days since the Unix epoch, the chart's x unit.
fn date_to_x(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    let days = x.round() as i64;
    if days >= 0 {
        NaiveDate::default().checked_add_days(Days::new(days as u64))
    } else {
        NaiveDate::default().checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Splits a point stream into runs of finite prices.
fn finite_segments(
    points: impl Iterator<Item = (NaiveDate, f64)>,
) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (date, price) in points {
        if price.is_finite() {
            current.push([date_to_x(date), price]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let universe = default_universe();
    let loader = PriceLoader::new().context("building http client")?;
    log::info!(
        "downloading daily history for {} tickers since {}",
        universe.len(),
        history_start()
    );
    let table = loader
        .fetch(&universe, history_start())
        .context("downloading price history")?;
    log::info!(
        "price table loaded: {} trading dates, {} columns",
        table.len(),
        table.tickers().len()
    );

    let app = DashboardApp::new(Arc::new(table), universe);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Tech Giants Stock Price Trends"),
        ..Default::default()
    };

    eframe::run_native(
        "Tech Giants Stock Price Trends",
        native_options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
