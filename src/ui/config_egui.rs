use crate::audio::{AudioCommand, AudioSet, AudioSettings};
use crate::galaxy::GalaxyUpdateSet;
use crate::prelude::*;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use std::ops::RangeInclusive;

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_visuals_system)
            .add_systems(
                Update,
                ui_system
                    .before(GalaxyUpdateSet)
                    .after(AudioSet::Input)
                    .before(AudioSet::Apply),
            );
    }
}

fn configure_visuals_system(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_corner_radius: 0.0.into(),
        ..Default::default()
    });
}

/// A slider edit is finished when the drag ends, or when it changed while no
/// pointer is held on it (keyboard, typed value). Pressing the slider moves the
/// value a frame before egui reports a drag, so that frame must not count.
fn committed(response: &egui::Response) -> bool {
    edit_finished(
        response.drag_stopped(),
        response.changed(),
        response.is_pointer_button_down_on(),
    )
}

fn edit_finished(drag_stopped: bool, changed: bool, pointer_down: bool) -> bool {
    drag_stopped || (changed && !pointer_down)
}

fn param_slider<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    value: &mut N,
    range: RangeInclusive<N>,
    step: f64,
    label: &str,
) -> bool {
    let response = ui.add(egui::Slider::new(value, range).step_by(step).text(label));
    committed(&response)
}

fn color_picker(ui: &mut egui::Ui, color: &mut Color, label: &str) -> bool {
    let srgba = color.to_srgba();
    let mut rgb = [srgba.red, srgba.green, srgba.blue].map(|c| (c * 255.0).round() as u8);

    let changed = ui
        .horizontal(|ui| {
            let changed = ui.color_edit_button_srgb(&mut rgb).changed();
            ui.label(label);
            changed
        })
        .inner;

    if changed {
        *color = Color::srgb_u8(rgb[0], rgb[1], rgb[2]);
    }
    changed
}

fn galaxy_params_ui(
    draft: &mut GalaxyParameters,
    commits: &mut EventWriter<ParamCommitted>,
    ui: &mut egui::Ui,
) {
    let minval = GalaxyParameters::MIN;
    let maxval = GalaxyParameters::MAX;

    if param_slider(ui, &mut draft.count, minval.count..=maxval.count, 100.0, "count") {
        commits.write(ParamCommitted(ParamChange::Count(draft.count)));
    }
    if param_slider(ui, &mut draft.size, minval.size..=maxval.size, 0.0001, "size") {
        commits.write(ParamCommitted(ParamChange::Size(draft.size)));
    }
    if param_slider(ui, &mut draft.radius, minval.radius..=maxval.radius, 0.01, "radius") {
        commits.write(ParamCommitted(ParamChange::Radius(draft.radius)));
    }
    if param_slider(
        ui,
        &mut draft.branches,
        minval.branches..=maxval.branches,
        1.0,
        "branches",
    ) {
        commits.write(ParamCommitted(ParamChange::Branches(draft.branches)));
    }
    if param_slider(
        ui,
        &mut draft.randomness,
        minval.randomness..=maxval.randomness,
        0.001,
        "randomness",
    ) {
        commits.write(ParamCommitted(ParamChange::Randomness(draft.randomness)));
    }
    if param_slider(
        ui,
        &mut draft.randomness_power,
        minval.randomness_power..=maxval.randomness_power,
        0.001,
        "randomnessPower",
    ) {
        commits.write(ParamCommitted(ParamChange::RandomnessPower(
            draft.randomness_power,
        )));
    }
    if param_slider(ui, &mut draft.spin, minval.spin..=maxval.spin, 0.001, "spin") {
        commits.write(ParamCommitted(ParamChange::Spin(draft.spin)));
    }
    // colors commit on every pick
    if color_picker(ui, &mut draft.inside_color, "insideColor") {
        commits.write(ParamCommitted(ParamChange::InsideColor(draft.inside_color)));
    }
    if color_picker(ui, &mut draft.outside_color, "outsideColor") {
        commits.write(ParamCommitted(ParamChange::OutsideColor(draft.outside_color)));
    }
}

fn audio_ui(
    settings: &AudioSettings,
    volume: &mut Option<f32>,
    audio: &mut EventWriter<AudioCommand>,
    ui: &mut egui::Ui,
) {
    let volume = volume.get_or_insert(settings.volume);
    if param_slider(ui, volume, 0.0..=1.0, 0.01, "volume") {
        audio.write(AudioCommand::SetVolume(*volume));
    }
    ui.horizontal(|ui| {
        if ui.button("Play Audio").clicked() {
            audio.write(AudioCommand::Play);
        }
        if ui.button("Stop Audio").clicked() {
            audio.write(AudioCommand::Stop);
        }
    });
}

fn ui_system(
    mut contexts: EguiContexts,
    mut galaxy_config_ui: ResMut<GalaxyConfigUi>,
    galaxy_config: Res<GalaxyConfig>,
    audio_settings: Res<AudioSettings>,
    mut commits: EventWriter<ParamCommitted>,
    mut audio: EventWriter<AudioCommand>,
    mut volume_draft: Local<Option<f32>>,
) {
    let ctx = contexts.ctx_mut();
    let galaxy_config_ui = &mut *galaxy_config_ui;

    egui::SidePanel::right("galaxy_panel")
        .default_width(260.0)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Galaxy Parameters")
                .default_open(false)
                .show(ui, |ui| {
                    galaxy_params_ui(&mut galaxy_config_ui.draft, &mut commits, ui);
                    if let Some(rejection) = &galaxy_config_ui.rejection {
                        ui.colored_label(egui::Color32::LIGHT_RED, rejection.as_str());
                    }
                });
            ui.separator();
            egui::CollapsingHeader::new("Audio Controls").show(ui, |ui| {
                audio_ui(&audio_settings, &mut *volume_draft, &mut audio, ui);
            });
            ui.separator();
            ui.label(format!(
                "Galaxy #{}: {} points",
                galaxy_config.generation, galaxy_config.params.count
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_drag_commit_once_on_release() {
        // frames of one drag: press moves the value, drag, release
        let frames = [(false, true, true), (false, true, true), (true, false, false)];
        let commits = frames
            .iter()
            .filter(|(stopped, changed, down)| edit_finished(*stopped, *changed, *down))
            .count();
        assert_eq!(commits, 1);
        assert!(edit_finished(true, false, false));
    }

    #[test]
    fn keyboard_edit_commits_immediately() {
        assert!(edit_finished(false, true, false));
        assert!(!edit_finished(false, false, false));
    }
}
