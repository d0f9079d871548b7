//! Core plugin: shared resources and global settings.

use crate::common::tunables::{ProjectileTemplate, Tunables};
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ProjectileTemplate::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    app.add_systems(Startup, report_bad_tunables);
}

/// Runs at startup so overrides made after the plugin is added are checked too.
fn report_bad_tunables(tunables: Res<Tunables>) {
    for problem in tunables.problems() {
        problem.report();
    }
}
