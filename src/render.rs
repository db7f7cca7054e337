//! egui_plot rendering of a [`PlotSpec`].
//!
//! This is the external-collaborator edge of the reactive cell: it consumes a
//! finished plot specification and draws it. No derivation logic lives here.

use chrono::Local;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, Points};

use crate::config::FeatureFlags;
use crate::spec::{DrawMode, PlotSpec, XAxisKind};

/// Draw the spec into the given Ui.
///
/// `apply_bounds` forces the spec's fixed axis ranges onto the view; the app
/// sets it when the spec changes so the user can still pan/zoom afterwards.
pub(crate) fn draw_plot(
    ui: &mut egui::Ui,
    spec: &PlotSpec,
    features: &FeatureFlags,
    apply_bounds: bool,
) {
    let mut plot = Plot::new("dashboard_plot")
        .allow_scroll(false)
        .allow_zoom(true)
        .allow_boxed_zoom(true)
        .show_grid(features.grid)
        .show_axes(egui::Vec2b::new(
            features.x_tick_labels,
            features.y_tick_labels,
        ))
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone());

    if features.legend {
        plot = plot.legend(Legend::default());
    }

    if spec.x_axis == XAxisKind::DateTime {
        plot = plot.x_axis_formatter(|x, _range| {
            let secs = x.value as i64;
            let dt_utc = chrono::DateTime::from_timestamp(secs, 0)
                .unwrap_or_else(|| chrono::DateTime::from_timestamp(0, 0).unwrap());
            dt_utc.with_timezone(&Local).format("%Y-%m-%d").to_string()
        });
    }

    plot.show(ui, |plot_ui| {
        if apply_bounds {
            if let Some([xmin, xmax]) = spec.x_range {
                plot_ui.set_plot_bounds_x(xmin..=xmax);
            }
            if let Some([ymin, ymax]) = spec.y_range {
                plot_ui.set_plot_bounds_y(ymin..=ymax);
            }
        }

        for s in &spec.series {
            let color = Color32::from_rgb(s.look.color[0], s.look.color[1], s.look.color[2]);
            let width = s.look.width.max(0.1);
            match s.look.mode {
                DrawMode::Lines => {
                    plot_ui.line(Line::new(&s.name, s.points.clone()).color(color).width(width));
                }
                DrawMode::Markers => {
                    plot_ui.points(
                        Points::new(&s.name, s.points.clone())
                            .radius(width.max(1.0) + 0.5)
                            .color(color),
                    );
                }
                DrawMode::LinesMarkers => {
                    plot_ui.line(Line::new(&s.name, s.points.clone()).color(color).width(width));
                    plot_ui.points(
                        Points::new("", s.points.clone())
                            .radius(width.max(1.0) + 0.5)
                            .color(color),
                    );
                }
            }
        }
    });
}
