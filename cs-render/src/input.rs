use bevy::prelude::*;

use crate::creeper::CreeperCommand;

pub fn creeper_hotkeys(keys: Res<ButtonInput<KeyCode>>, mut writer: EventWriter<CreeperCommand>) {
    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::Enter) {
        writer.write(CreeperCommand::ToggleAnimate);
    }
    if keys.just_pressed(KeyCode::KeyT) {
        writer.write(CreeperCommand::Trigger);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        writer.write(CreeperCommand::Reset);
    }
}
