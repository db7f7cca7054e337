//! The dashboard application: context object and egui event loop.
//!
//! [`DashboardApp`] owns everything the reactive cell needs — the dataset,
//! the dashboard definition, the control state, the event channel, and the
//! last computed plot specification. The entry point constructs it explicitly
//! and hands it to eframe; nothing lives in module-level globals.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::DashboardConfig;
use crate::controls::{ControlKind, ControlState, ControlValue};
use crate::derive::{derive_plot, Dashboard};
use crate::events::{channel_controls, ControlEvent, ControlSink};
use crate::render::draw_plot;
use crate::spec::PlotSpec;
use crate::Dataset;

/// One dashboard session: dataset + definition + control state + last spec.
pub struct DashboardApp {
    dashboard: Dashboard,
    dataset: Dataset,
    config: DashboardConfig,
    state: ControlState,
    spec: PlotSpec,
    sink: ControlSink,
    rx: Receiver<ControlEvent>,
    /// Re-apply the spec's fixed axis ranges on the next draw.
    pending_bounds: bool,
    recomputes: u64,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard, dataset: Dataset, config: DashboardConfig) -> Self {
        let (sink, rx) = channel_controls();
        let state = dashboard.initial_state();
        let spec = derive_plot(&dashboard, &dataset, &state);
        Self {
            dashboard,
            dataset,
            config,
            state,
            spec,
            sink,
            rx,
            pending_bounds: true,
            recomputes: 1,
        }
    }

    /// The sink controls post their value-changed events into.
    pub fn sink(&self) -> ControlSink {
        self.sink.clone()
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn spec(&self) -> &PlotSpec {
        &self.spec
    }

    /// Number of derivation calls made so far (one per drained batch).
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// The single event handler: drain pending control events, apply them to
    /// the state, and recompute the plot spec once if anything was applied.
    ///
    /// Returns `true` if the spec was recomputed.
    pub fn handle_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            // Events for controls this dashboard never declared are dropped.
            if let Some(def) = self.dashboard.control(&event.id) {
                self.state.apply(def, event.value);
                changed = true;
            }
        }
        if changed {
            self.spec = derive_plot(&self.dashboard, &self.dataset, &self.state);
            self.recomputes += 1;
            self.pending_bounds = true;
        }
        changed
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for def in &self.dashboard.controls {
                match &def.kind {
                    ControlKind::Slider {
                        min,
                        max,
                        step,
                        default,
                    } => {
                        let mut v = self.state.scalar(&def.id).unwrap_or(*default);
                        let resp = ui.add(
                            egui::Slider::new(&mut v, *min..=*max)
                                .step_by(*step)
                                .text(&def.label),
                        );
                        if resp.changed() {
                            self.sink.send(ControlEvent {
                                id: def.id.clone(),
                                value: ControlValue::Scalar(v),
                            });
                        }
                    }
                    ControlKind::Checkbox { .. } => {
                        let mut on = self.state.flag(&def.id);
                        if ui.checkbox(&mut on, &def.label).changed() {
                            self.sink.send(ControlEvent {
                                id: def.id.clone(),
                                value: ControlValue::Flag(on),
                            });
                        }
                    }
                    ControlKind::Dropdown { choices, default } => {
                        let current = self
                            .state
                            .choice(&def.id)
                            .unwrap_or(default.as_str())
                            .to_string();
                        egui::ComboBox::from_label(&def.label)
                            .selected_text(current.clone())
                            .show_ui(ui, |ui| {
                                for choice in choices {
                                    if ui
                                        .selectable_label(*choice == current, choice)
                                        .clicked()
                                    {
                                        self.sink.send(ControlEvent {
                                            id: def.id.clone(),
                                            value: ControlValue::Choice(choice.clone()),
                                        });
                                    }
                                }
                            });
                    }
                }
                ui.separator();
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One drained batch → at most one recompute, before anything draws.
        self.handle_events();

        if self.config.features.controls_panel {
            egui::TopBottomPanel::top("controls").show(ctx, |ui| {
                if let Some(headline) = &self.config.headline {
                    ui.heading(headline);
                }
                if let Some(sub) = &self.config.subheadline {
                    ui.label(sub);
                }
                self.render_controls(ui);
            });
        }

        let apply_bounds = self.pending_bounds;
        self.pending_bounds = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.spec.title.is_empty() {
                ui.strong(&self.spec.title);
            }
            draw_plot(ui, &self.spec, &self.config.features, apply_bounds);
        });
    }
}

/// Construct the app and run the native event loop.
pub fn run_dashboard(
    dashboard: Dashboard,
    dataset: Dataset,
    config: DashboardConfig,
) -> eframe::Result<()> {
    let native_options = config.native_options.clone().unwrap_or_else(|| {
        let mut o = eframe::NativeOptions::default();
        o.viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]);
        o
    });
    let window_title = config.window_title.clone();
    let app = DashboardApp::new(dashboard, dataset, config);
    eframe::run_native(
        &window_title,
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
