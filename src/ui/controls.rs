//! Seitenpanel mit den Parametern des aktiven Modus und den Canvas-Einstellungen.

use crate::app::{AppIntent, AppState, CenterTarget};
use transform_lab_engine::{
    center_label, CanvasSettings, Enlargement, Point, Reflection, ReflectionAxis, Rotation,
    RotationDirection, TransformSettings, TransformSpec, Translation,
};

/// Rendert das Steuerungs-Panel und gibt erzeugte Events zurück.
pub fn render_controls_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let session = &state.session;
    let range = f64::from(session.canvas.range);

    egui::SidePanel::left("controls_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(session.mode.title());
                ui.separator();

                match session.active_spec() {
                    TransformSpec::Translation(t) => {
                        translation_controls(ui, t, range, &mut events);
                    }
                    TransformSpec::Reflection(r) => {
                        reflection_controls(ui, r, range, &mut events);
                    }
                    TransformSpec::Rotation(r) => {
                        rotation_controls(
                            ui,
                            r,
                            session.is_picking(CenterTarget::Rotation),
                            &mut events,
                        );
                    }
                    TransformSpec::Enlargement(e) => {
                        enlargement_controls(
                            ui,
                            e,
                            session.is_picking(CenterTarget::Enlargement),
                            &mut events,
                        );
                    }
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Reset Values").clicked() {
                        events.push(AppIntent::ResetValuesRequested);
                    }
                    if ui.button("Clear Canvas").clicked() {
                        events.push(AppIntent::ClearCanvasRequested);
                    }
                });

                ui.separator();
                ui.label(egui::RichText::new("Canvas").strong());
                canvas_controls(ui, session.canvas, &mut events);
            });
        });

    events
}

fn translation_controls(
    ui: &mut egui::Ui,
    mut t: Translation,
    range: f64,
    events: &mut Vec<AppIntent>,
) {
    let max_move = range + TransformSettings::TRANSLATION_MARGIN;
    let mut changed = false;
    changed |= ui
        .add(
            egui::Slider::new(&mut t.dx, -max_move..=max_move)
                .step_by(1.0)
                .text("X Move"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut t.dy, -max_move..=max_move)
                .step_by(1.0)
                .text("Y Move"),
        )
        .changed();

    if changed {
        events.push(AppIntent::TransformParamsChanged {
            spec: TransformSpec::Translation(t),
        });
    }
}

fn reflection_controls(
    ui: &mut egui::Ui,
    mut r: Reflection,
    range: f64,
    events: &mut Vec<AppIntent>,
) {
    let mut changed = false;
    let custom_label = Reflection {
        axis: ReflectionAxis::Custom,
        ..r
    }
    .line_label();

    ui.horizontal(|ui| {
        ui.label("Axis:");
        for (axis, label) in [
            (ReflectionAxis::X, "X-Axis".to_string()),
            (ReflectionAxis::Y, "Y-Axis".to_string()),
            (ReflectionAxis::Custom, custom_label),
        ] {
            if ui.selectable_label(r.axis == axis, label).clicked() && r.axis != axis {
                r.axis = axis;
                changed = true;
            }
        }
    });

    if r.axis == ReflectionAxis::Custom {
        changed |= ui
            .add(
                egui::Slider::new(&mut r.m, -range..=range)
                    .step_by(1.0)
                    .text("Slope (m)"),
            )
            .changed();
        changed |= ui
            .add(
                egui::Slider::new(&mut r.c, -range..=range)
                    .step_by(1.0)
                    .text("Intercept (c)"),
            )
            .changed();
    }

    if changed {
        events.push(AppIntent::TransformParamsChanged {
            spec: TransformSpec::Reflection(r),
        });
    }
}

fn rotation_controls(
    ui: &mut egui::Ui,
    mut r: Rotation,
    picking: bool,
    events: &mut Vec<AppIntent>,
) {
    let mut changed = ui
        .add(
            egui::Slider::new(&mut r.angle, 0.0..=TransformSettings::ANGLE_MAX)
                .step_by(1.0)
                .suffix("°")
                .text("Angle"),
        )
        .changed();

    ui.horizontal(|ui| {
        ui.label("Direction:");
        for direction in [RotationDirection::Anticlockwise, RotationDirection::Clockwise] {
            if ui
                .selectable_label(r.direction == direction, direction.as_str())
                .clicked()
                && r.direction != direction
            {
                r.direction = direction;
                changed = true;
            }
        }
    });

    center_pick_row(ui, CenterTarget::Rotation, r.center, picking, events);

    if changed {
        events.push(AppIntent::TransformParamsChanged {
            spec: TransformSpec::Rotation(r),
        });
    }
}

fn enlargement_controls(
    ui: &mut egui::Ui,
    mut e: Enlargement,
    picking: bool,
    events: &mut Vec<AppIntent>,
) {
    if ui
        .add(
            egui::Slider::new(&mut e.scale, 0.0..=TransformSettings::SCALE_MAX)
                .step_by(0.1)
                .text("Scale Factor"),
        )
        .changed()
    {
        events.push(AppIntent::TransformParamsChanged {
            spec: TransformSpec::Enlargement(e),
        });
    }

    center_pick_row(ui, CenterTarget::Enlargement, e.center, picking, events);
}

/// Button zum Scharfschalten der Zentrumswahl plus aktuelles Zentrum.
fn center_pick_row(
    ui: &mut egui::Ui,
    target: CenterTarget,
    center: Option<Point>,
    picking: bool,
    events: &mut Vec<AppIntent>,
) {
    let idle_label = match target {
        CenterTarget::Rotation => "Set Rotation Center",
        CenterTarget::Enlargement => "Set Enlargement Center",
    };
    let label = if picking { "Click on Canvas..." } else { idle_label };

    ui.horizontal(|ui| {
        ui.label("Center:");
        if ui.add(egui::Button::new(label).selected(picking)).clicked() {
            events.push(AppIntent::CenterPickToggled { target });
        }
        ui.monospace(center_label(center));
    });
}

fn canvas_controls(ui: &mut egui::Ui, mut canvas: CanvasSettings, events: &mut Vec<AppIntent>) {
    let mut changed = false;
    changed |= ui
        .add(
            egui::Slider::new(
                &mut canvas.range,
                CanvasSettings::RANGE_MIN..=CanvasSettings::RANGE_MAX,
            )
            .text("Grid Range"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(
                &mut canvas.zoom,
                CanvasSettings::ZOOM_MIN..=CanvasSettings::ZOOM_MAX,
            )
            .step_by(f64::from(CanvasSettings::ZOOM_STEP))
            .suffix(" px")
            .text("Zoom Level"),
        )
        .changed();

    if changed {
        events.push(AppIntent::CanvasSettingsChanged { canvas });
    }
}
