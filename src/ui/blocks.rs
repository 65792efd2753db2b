use eframe::egui::{self, Color32, RichText, Stroke, Ui};
use egui_extras::{Column, TableBuilder};

use crate::content::model::{Block, ImageRef, Metric, NoticeLevel, TableSpec};
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Block painter
// ---------------------------------------------------------------------------

/// Paint a sequence of content blocks into `ui`.
pub fn paint(ui: &mut Ui, state: &mut AppState, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading(text) => {
                ui.add_space(4.0);
                ui.heading(text);
                ui.add_space(4.0);
            }
            Block::SubHeading(text) => {
                ui.add_space(6.0);
                ui.label(RichText::new(text).size(16.0).strong());
            }
            Block::Paragraph(text) => {
                ui.label(text);
            }
            Block::BulletList(items) => {
                for item in items {
                    ui.horizontal_wrapped(|ui: &mut Ui| {
                        ui.label("•");
                        ui.label(item);
                    });
                }
            }
            Block::Metrics(metrics) => {
                ui.columns(metrics.len(), |cols| {
                    for (col, m) in cols.iter_mut().zip(metrics) {
                        metric_card(col, m);
                    }
                });
            }
            Block::Table(spec) => table(ui, spec),
            Block::BarChart(spec) => plot::bar_chart(ui, spec),
            Block::GroupedBarChart(spec) => plot::grouped_bar_chart(ui, spec),
            Block::Image(img) => image(ui, state, img),
            Block::Notice(level, text) => notice(ui, *level, text),
            Block::Columns(columns) => {
                ui.columns(columns.len(), |cols| {
                    for (col, col_blocks) in cols.iter_mut().zip(columns) {
                        paint(col, state, col_blocks);
                    }
                });
            }
            Block::Tabs(spec) => {
                let selected = state.selected_tab(&spec.id, spec.tabs.len());
                ui.horizontal(|ui: &mut Ui| {
                    for (i, tab) in spec.tabs.iter().enumerate() {
                        if ui.selectable_label(selected == i, &tab.title).clicked() {
                            state.select_tab(&spec.id, i);
                        }
                    }
                });
                ui.separator();
                if let Some(tab) = spec.tabs.get(selected) {
                    paint(ui, state, &tab.blocks);
                }
            }
            Block::Separator => {
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);
            }
        }
        ui.add_space(4.0);
    }
}

// ---------------------------------------------------------------------------
// Individual widgets
// ---------------------------------------------------------------------------

fn metric_card(ui: &mut Ui, m: &Metric) {
    let accent = ui.visuals().hyperlink_color;
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(&m.label).strong());
                ui.label(RichText::new(&m.value).size(26.0).strong().color(accent));
                ui.label(RichText::new(&m.caption).weak().small());
            });
        });
}

fn table(ui: &mut Ui, spec: &TableSpec) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(70.0), spec.headers.len())
        .header(20.0, |mut header| {
            for title in &spec.headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in &spec.rows {
                body.row(18.0, |mut table_row| {
                    for cell in row {
                        table_row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

/// Paint an image resource, or the mandatory warning when it is absent.
/// A missing file never aborts the rest of the section.
fn image(ui: &mut Ui, state: &mut AppState, img: &ImageRef) {
    match state.images.get(&img.file) {
        Ok(bytes) => {
            let widget = egui::Image::from_bytes(
                format!("bytes://{}", img.file),
                egui::load::Bytes::Shared(bytes.clone()),
            )
            .max_width(ui.available_width())
            .max_height(420.0);
            ui.add(widget);
            ui.label(RichText::new(&img.caption).weak().small());
        }
        Err(err) => {
            let text = format!(
                "{err}. Place '{}' next to the executable to show this plot.",
                img.file
            );
            notice(ui, NoticeLevel::Warning, &text);
        }
    }
}

/// Fill and border for a notice. The accent is semantic; the fill is the
/// accent faded far enough to keep default text legible on either theme.
fn notice_colors(level: NoticeLevel, dark_mode: bool) -> (Color32, Color32) {
    let accent = match level {
        NoticeLevel::Info => Color32::from_rgb(0x1f, 0x77, 0xb4),
        NoticeLevel::Success => Color32::from_rgb(0x2e, 0xa0, 0x43),
        NoticeLevel::Warning => Color32::from_rgb(0xd2, 0x99, 0x22),
    };
    let fill = accent.gamma_multiply(if dark_mode { 0.25 } else { 0.12 });
    (fill, accent)
}

fn notice(ui: &mut Ui, level: NoticeLevel, text: &str) {
    let (fill, accent) = notice_colors(level, ui.visuals().dark_mode);
    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(Stroke::new(1.0, accent))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_fills_follow_the_theme() {
        for level in [NoticeLevel::Info, NoticeLevel::Success, NoticeLevel::Warning] {
            let (dark_fill, dark_accent) = notice_colors(level, true);
            let (light_fill, light_accent) = notice_colors(level, false);
            // Same semantic accent, different background strength per theme.
            assert_eq!(dark_accent, light_accent);
            assert_ne!(dark_fill, light_fill);
            assert_ne!(dark_fill, dark_accent);
        }
    }

    #[test]
    fn notice_accents_are_distinct_per_level() {
        let (_, info) = notice_colors(NoticeLevel::Info, true);
        let (_, success) = notice_colors(NoticeLevel::Success, true);
        let (_, warning) = notice_colors(NoticeLevel::Warning, true);
        assert_ne!(info, success);
        assert_ne!(success, warning);
        assert_ne!(info, warning);
    }
}
