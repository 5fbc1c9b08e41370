//! Chart Viewer Widget
//! Draws the anomaly chart with egui_plot. Year labels are painted by hand
//! below the plot frame so they can be rotated.

use crate::charts::{ChartData, LinePattern};
use egui::epaint::TextShape;
use egui::{vec2, Align2, FontId, Pos2, RichText, Shape, Vec2};
use egui_plot::{
    Corner, GridMark, HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints,
    PlotTransform, Points,
};

/// Space reserved under the plot frame for rotated year labels and the axis label
const X_LABEL_MARGIN: f32 = 70.0;
const TICK_FONT_SIZE: f32 = 12.0;
const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 3.5;

/// Central panel content: title, plot and the rotated x axis.
pub struct ChartViewer {
    chart: ChartData,
}

impl ChartViewer {
    pub fn new(chart: ChartData) -> Self {
        Self { chart }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let chart = &self.chart;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(chart.title).size(18.0).strong());
        });
        ui.add_space(6.0);

        let plot_height = (ui.available_height() - X_LABEL_MARGIN).max(100.0);
        let y_marks = Self::grid_marks(&chart.y_ticks);
        let x_marks = Self::grid_marks(&chart.x_ticks);

        let response = Plot::new("anomaly_chart")
            .height(plot_height)
            .legend(Legend::default().position(Corner::LeftTop))
            .show_grid(chart.show_grid)
            .show_axes([false, true])
            .y_axis_label(chart.y_label)
            .x_grid_spacer(move |_input| x_marks.clone())
            .y_grid_spacer(move |_input| y_marks.clone())
            .y_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
            .include_y(chart.baseline.value)
            .show(ui, |plot_ui| {
                for series in &chart.series {
                    let points: Vec<[f64; 2]> = series.points.clone();

                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .name(series.label)
                            .color(series.color)
                            .width(LINE_WIDTH)
                            .style(Self::line_style(series.pattern)),
                    );

                    if series.markers {
                        // Same name as the line so the legend shows one entry
                        plot_ui.points(
                            Points::new(PlotPoints::from(points))
                                .name(series.label)
                                .color(series.color)
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(MARKER_RADIUS),
                        );
                    }
                }

                plot_ui.hline(
                    HLine::new(chart.baseline.value)
                        .name(chart.baseline.label)
                        .color(chart.baseline.color)
                        .width(1.0)
                        .style(Self::line_style(chart.baseline.pattern)),
                );
            });

        Self::draw_x_axis(ui, &response.transform, chart);
        ui.add_space(X_LABEL_MARGIN);
    }

    /// Fixed grid marks. A single large step size keeps every mark labelled
    /// regardless of zoom.
    fn grid_marks(ticks: &[f64]) -> Vec<GridMark> {
        let span = match (ticks.first(), ticks.last()) {
            (Some(first), Some(last)) if last > first => last - first,
            _ => 1.0,
        };

        ticks
            .iter()
            .map(|&value| GridMark {
                value,
                step_size: span,
            })
            .collect()
    }

    fn line_style(pattern: LinePattern) -> LineStyle {
        match pattern {
            LinePattern::Solid => LineStyle::Solid,
            LinePattern::Dashed => LineStyle::dashed_loose(),
        }
    }

    /// Paint rotated year labels under the plot frame, then the axis title.
    fn draw_x_axis(ui: &egui::Ui, transform: &PlotTransform, chart: &ChartData) {
        let painter = ui.painter();
        let frame = *transform.frame();
        let bounds = transform.bounds();
        let (x_min, x_max) = (bounds.min()[0], bounds.max()[0]);
        let text_color = ui.visuals().text_color();

        let angle = -chart.x_label_rotation_deg.to_radians();
        let top = frame.bottom() + 4.0;
        let mut lowest = frame.bottom();

        for &year in chart.x_ticks.iter().filter(|&&x| x >= x_min && x <= x_max) {
            let tick = transform.position_from_point(&PlotPoint::new(year, bounds.min()[1]));
            let galley = painter.layout_no_wrap(
                year.to_string(),
                FontId::proportional(TICK_FONT_SIZE),
                text_color,
            );

            let (origin, height) = Self::rotated_label_origin(tick.x, top, galley.size(), angle);
            lowest = lowest.max(top + height);

            painter.add(Shape::Text(
                TextShape::new(origin, galley, text_color).with_angle(angle),
            ));
        }

        painter.text(
            Pos2::new(frame.center().x, lowest + 4.0),
            Align2::CENTER_TOP,
            chart.x_label,
            FontId::proportional(14.0),
            text_color,
        );
    }

    /// Galley origin for a label of `size` rotated by `angle` so that its
    /// bounding box is centred on `tick_x` and hangs from `top`.
    /// Also returns the bounding box height.
    fn rotated_label_origin(tick_x: f32, top: f32, size: Vec2, angle: f32) -> (Pos2, f32) {
        let (sin, cos) = (angle.sin(), angle.cos());
        let box_height = size.x * sin.abs() + size.y * cos.abs();
        let center = Pos2::new(tick_x, top + box_height / 2.0);

        // Text rotates around its origin, so undo the rotated half-size
        let half = size / 2.0;
        let offset = vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos);
        (center - offset, box_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotated_center(origin: Pos2, size: Vec2, angle: f32) -> Pos2 {
        let (sin, cos) = (angle.sin(), angle.cos());
        let half = size / 2.0;
        origin + vec2(half.x * cos - half.y * sin, half.x * sin + half.y * cos)
    }

    #[test]
    fn unrotated_label_is_centred_under_tick() {
        let (origin, height) =
            ChartViewer::rotated_label_origin(100.0, 50.0, vec2(40.0, 12.0), 0.0);
        assert!((origin.x - 80.0).abs() < 1e-4);
        assert!((origin.y - 50.0).abs() < 1e-4);
        assert!((height - 12.0).abs() < 1e-4);
    }

    #[test]
    fn rotated_label_is_centred_on_tick() {
        let size = vec2(40.0, 12.0);
        let angle = -45f32.to_radians();
        let (origin, height) = ChartViewer::rotated_label_origin(100.0, 50.0, size, angle);

        let center = rotated_center(origin, size, angle);
        assert!((center.x - 100.0).abs() < 1e-3);
        assert!((center.y - (50.0 + height / 2.0)).abs() < 1e-3);
        assert!((height - 52.0 * std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-3);
    }
}
