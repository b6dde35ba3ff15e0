use anyhow::{Context, Result};
use eframe::egui;
use egui_datatable::{
    cell_text, setup_styles, Column, DataTable, Record, TableConfig, TableEvent, TableTheme,
};
use serde_json::json;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

struct DemoApp {
    data: Vec<Record>,
    columns: Vec<Column>,
    table: DataTable,
    status: String,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        setup_styles(&cc.egui_ctx);

        let config = TableConfig {
            sort_enabled: true,
            theme: TableTheme::Striped,
            ..Default::default()
        };

        Ok(Self {
            data: sample_records(27)?,
            columns: sample_columns(),
            table: DataTable::new(config)?,
            status: "Click a row".to_string(),
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Rows per page:");
                for size in [5, 10, 25] {
                    let selected = self.table.config().rows_per_page == size;
                    if ui.selectable_label(selected, size.to_string()).clicked() && !selected {
                        if let Err(err) = self.table.set_rows_per_page(size) {
                            log::error!("rejected rows_per_page: {err}");
                        }
                    }
                }

                ui.separator();

                // shrink past the current page to demonstrate the
                // snap-back-to-page-1 policy
                if ui.button("Drop half").clicked() {
                    let keep = self.data.len() / 2;
                    self.data.truncate(keep);
                    self.status = format!("Dataset shrunk to {keep} rows");
                }
                if ui.button("Reload").clicked() {
                    match sample_records(27) {
                        Ok(data) => {
                            self.data = data;
                            self.status = "Dataset reloaded".to_string();
                        }
                        Err(err) => log::error!("reload failed: {err}"),
                    }
                }

                let mut loading = self.table.config().loading;
                if ui.checkbox(&mut loading, "Loading").changed() {
                    self.table.set_loading(loading);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(event) = self.table.show(ui, &self.data, &self.columns) {
                match event {
                    TableEvent::RowClicked { record, row_index } => {
                        let name = record.get("name").map(cell_text).unwrap_or_default();
                        self.status = format!("Clicked {name} (row {row_index} on this page)");
                    }
                    TableEvent::RowDoubleClicked { record, .. } => {
                        self.status = format!("Opened {}", serde_json::Value::Object(record.clone()));
                    }
                    TableEvent::PageChanged(page) => {
                        self.status = format!("Page {page}");
                    }
                    TableEvent::SortToggled(sorted) => {
                        self.status = if sorted {
                            "Sorted (descending over record text)".to_string()
                        } else {
                            "Original order".to_string()
                        };
                    }
                }
            }
        });
    }
}

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Id").emphasized(),
        Column::new("name", "Name"),
        Column::new("price", "Price").with_formatter(|value, _, _| {
            let price = value.and_then(|v| v.as_f64()).unwrap_or(0.0);
            format!("${price:.2}").into()
        }),
        Column::new("internal_code", "Code").hidden(),
        Column::new("", "Summary").with_formatter(|_, record, row| {
            let name = record.get("name").map(cell_text).unwrap_or_default();
            format!("{name} @ row {row}").into()
        }),
    ]
}

fn sample_records(count: usize) -> Result<Vec<Record>> {
    (1..=count)
        .map(|i| {
            let value = json!({
                "id": i,
                "name": format!("Item {i:02}"),
                "price": i as f64 * 1.25,
                "internal_code": format!("X-{i:04}"),
            });
            value
                .as_object()
                .cloned()
                .context("sample record must be a JSON object")
        })
        .collect()
}

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("egui-datatable demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui-datatable demo",
        options,
        Box::new(|cc| Box::new(DemoApp::new(cc).expect("failed to build demo app"))),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
