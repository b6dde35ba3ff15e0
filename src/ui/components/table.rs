use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::models::{descending_order, Column, HeaderAlign, Record};
use crate::pager::Pager;
use crate::ui::components::{PaginationControls, PaginationEvent};
use eframe::egui;
use std::cell::Cell;

/// Interaction reported back to the host. At most one per frame.
#[derive(Debug)]
pub enum TableEvent<'a> {
    /// `row_index` is the row's position within the current page.
    RowClicked { record: &'a Record, row_index: usize },
    RowDoubleClicked { record: &'a Record, row_index: usize },
    /// The active page changed; carries the new 1-based page.
    PageChanged(usize),
    /// The whole-dataset sort toggle flipped; carries the new flag.
    SortToggled(bool),
}

/// Paginated data-table widget. The host owns the dataset and passes it
/// in on every frame; the widget owns the pagination and sort state and
/// re-derives everything else from the data it is given.
pub struct DataTable {
    config: TableConfig,
    pager: Pager,
    pagination: PaginationControls,
    sorted: bool,
}

impl DataTable {
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pager = Pager::new(config.rows_per_page, config.max_visible_page_links)?;
        Ok(Self {
            config,
            pager,
            pagination: PaginationControls::new(),
            sorted: false,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn sorted(&self) -> bool {
        self.sorted
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    pub fn set_sort_enabled(&mut self, enabled: bool) {
        self.config.sort_enabled = enabled;
        if !enabled {
            self.sorted = false;
        }
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), ConfigError> {
        self.pager.set_rows_per_page(rows_per_page)?;
        self.config.rows_per_page = rows_per_page;
        log::debug!("rows_per_page changed to {rows_per_page}");
        Ok(())
    }

    pub fn set_max_visible_page_links(&mut self, max_links: usize) -> Result<(), ConfigError> {
        self.pager.set_max_visible_page_links(max_links)?;
        self.config.max_visible_page_links = max_links;
        Ok(())
    }

    pub fn show<'a>(
        &mut self,
        ui: &mut egui::Ui,
        data: &'a [Record],
        columns: &[Column],
    ) -> Option<TableEvent<'a>> {
        self.pager.sync_dataset_len(data.len());

        let visible: Vec<&Column> = columns.iter().filter(|c| !c.hidden).collect();
        let order = (self.config.sort_enabled && self.sorted).then(|| descending_order(data));

        let sort_clicked = Cell::new(false);
        // (dataset index, row index within page)
        let clicked = Cell::new(None::<(usize, usize)>);
        let double_clicked = Cell::new(None::<(usize, usize)>);

        let show_body = !data.is_empty() && !self.config.loading;

        {
            use egui_extras::{Column as TableColumn, TableBuilder};

            let table = TableBuilder::new(ui)
                .striped(self.config.theme.striped())
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(
                    TableColumn::initial(120.0).at_least(80.0).clip(true),
                    visible.len().max(1),
                );

            table
                .header(22.0, |mut header| {
                    for column in &visible {
                        header.col(|ui| {
                            ui.with_layout(header_layout(column.header_align), |ui| {
                                self.show_header_cell(ui, column, &sort_clicked);
                            });
                        });
                    }
                })
                .body(|mut body| {
                    if !show_body {
                        return;
                    }
                    for (page_row, position) in self.pager.row_window().enumerate() {
                        let dataset_index = match &order {
                            Some(order) => order[position],
                            None => position,
                        };
                        let record = &data[dataset_index];
                        body.row(18.0, |mut row| {
                            for column in &visible {
                                row.col(|ui| {
                                    let rect = ui.available_rect_before_wrap();
                                    let response = ui.interact(
                                        rect,
                                        ui.id().with((dataset_index, &column.key)),
                                        egui::Sense::click(),
                                    );
                                    if response.double_clicked() {
                                        double_clicked.set(Some((dataset_index, page_row)));
                                    } else if response.clicked() {
                                        clicked.set(Some((dataset_index, page_row)));
                                    }

                                    let mut content = column.cell_content(record, page_row);
                                    if column.emphasized && column.formatter.is_none() {
                                        let text = content.text().to_owned();
                                        content = egui::RichText::new(text).strong().into();
                                    }
                                    ui.label(content);
                                });
                            }
                        });
                    }
                });
        }

        if self.config.loading {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.add(egui::Spinner::new().color(self.config.loader_theme.color()));
                ui.add_space(24.0);
            });
        } else if data.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(self.config.empty_message_text());
                ui.add_space(24.0);
            });
        }

        // the pagination strip only exists once there is more than one page
        let pagination_event = if self.pager.total_pages() > 1 && !self.config.loading {
            ui.separator();
            self.pagination.show(ui, &self.pager, &self.config)
        } else {
            None
        };

        let mut event = None;

        if sort_clicked.get() {
            self.sorted = !self.sorted;
            log::debug!("sort toggled: {}", self.sorted);
            event = Some(TableEvent::SortToggled(self.sorted));
        }

        if event.is_none() {
            if let Some((dataset_index, row_index)) = double_clicked.get() {
                event = Some(TableEvent::RowDoubleClicked {
                    record: &data[dataset_index],
                    row_index,
                });
            } else if let Some((dataset_index, row_index)) = clicked.get() {
                event = Some(TableEvent::RowClicked {
                    record: &data[dataset_index],
                    row_index,
                });
            }
        }

        if let Some(pagination_event) = pagination_event {
            match pagination_event {
                PaginationEvent::FullPrevious => self.pager.first(),
                PaginationEvent::Previous => self.pager.previous(),
                PaginationEvent::PageSelected(page) => self.pager.go_to(page),
                PaginationEvent::Next => self.pager.next(),
                PaginationEvent::FullNext => self.pager.last(),
            }
            if event.is_none() {
                event = Some(TableEvent::PageChanged(self.pager.current_page()));
            }
        }

        event
    }

    fn show_header_cell(&self, ui: &mut egui::Ui, column: &Column, sort_clicked: &Cell<bool>) {
        let header = if self.config.sort_enabled {
            let indicator = if self.sorted { " ▲" } else { " ▼" };
            format!("{}{}", column.header, indicator)
        } else {
            column.header.clone()
        };
        let mut text = egui::RichText::new(header).strong();
        if let Some(color) = self.config.theme.header_color() {
            text = text.color(color);
        }
        if self.config.sort_enabled {
            if ui.button(text).clicked() {
                sort_clicked.set(true);
            }
        } else {
            ui.label(text);
        }
    }
}

fn header_layout(align: HeaderAlign) -> egui::Layout {
    match align {
        HeaderAlign::Left => egui::Layout::left_to_right(egui::Align::Center),
        HeaderAlign::Center => egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
        HeaderAlign::Right => egui::Layout::right_to_left(egui::Align::Center),
    }
}
