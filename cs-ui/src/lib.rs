use bevy::app::Plugin;
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts, EguiPlugin, EguiPrimaryContextPass,
    egui::{self},
};
use cs_model::{Channel, Creeper, SequencerState};
use cs_render::{ActiveCreeper, CreeperCommand};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut bevy::app::App) {
        app.add_plugins(EguiPlugin::default())
            .add_systems(EguiPrimaryContextPass, creeper_panel);
    }
}

fn creeper_panel(
    mut contexts: EguiContexts,
    creeper: Option<Res<ActiveCreeper>>,
    mut commands: EventWriter<CreeperCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Creeper")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Animate").clicked() {
                    commands.write(CreeperCommand::ToggleAnimate);
                }
                if ui.button("Trigger").clicked() {
                    commands.write(CreeperCommand::Trigger);
                }
                if ui.button("Reset").clicked() {
                    commands.write(CreeperCommand::Reset);
                }
            });
            ui.label("Space: animate | T: trigger | R: reset");

            let Some(creeper) = &creeper else {
                return;
            };
            ui.separator();
            for line in status_lines(&creeper.0) {
                ui.label(line);
            }
        });
}

pub fn status_lines(creeper: &Creeper) -> Vec<String> {
    let mut lines: Vec<String> = Channel::ALL
        .iter()
        .map(|channel| {
            let state = creeper.animation().channel(*channel);
            format!(
                "{}: {} (phase {:.2})",
                channel.label(),
                if state.active { "on" } else { "off" },
                state.phase
            )
        })
        .collect();

    let sequencer = creeper.sequencer();
    lines.push(match sequencer.state() {
        SequencerState::Rest => "fuse: idle".to_string(),
        SequencerState::Triggered(n) => format!("fuse: {}/{}", n, sequencer.threshold()),
        SequencerState::Pending { fuse, .. } => {
            format!("fuse: lit, {:.0} ms left", fuse.remaining().as_secs_f32() * 1000.0)
        }
        SequencerState::Exploded => format!("exploded ({} bursts)", creeper.explosions().len()),
    });
    lines
}
