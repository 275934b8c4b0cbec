use super::{BevyGalaxyScene, CurrentGalaxy, GalaxyUpdateSet};
use crate::prelude::*;
use bevy::prelude::*;

pub struct SpawnPointsPlugin;

impl Plugin for SpawnPointsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CurrentGalaxy::default())
            .add_systems(Startup, spawn_initial_galaxy)
            .add_systems(
                Update,
                (apply_param_commits, rotate_galaxy)
                    .chain()
                    .in_set(GalaxyUpdateSet),
            )
            .add_systems(Last, teardown_on_exit);
    }
}

fn spawn_initial_galaxy(
    mut galaxy_config: ResMut<GalaxyConfig>,
    mut galaxy_config_ui: ResMut<GalaxyConfigUi>,
    mut current: ResMut<CurrentGalaxy>,
    mut scene: BevyGalaxyScene,
) {
    galaxy_config_ui.draft = galaxy_config.params.clone();
    let spawned = current
        .0
        .regenerate(&galaxy_config.params, &mut scene)
        .map(|drawable| drawable.entity());
    match spawned {
        Ok(entity) => {
            debug!("Galaxy spawned as {}", entity);
            galaxy_config.generation = current.0.generation();
        }
        Err(err) => error!("Initial galaxy not generated: {}", err),
    }
}

/// Folds this frame's commits into a candidate parameter set and swaps the
/// galaxy once. A rejected candidate leaves the old galaxy and config alone.
fn apply_param_commits(
    mut commits: EventReader<ParamCommitted>,
    mut galaxy_config: ResMut<GalaxyConfig>,
    mut galaxy_config_ui: ResMut<GalaxyConfigUi>,
    mut current: ResMut<CurrentGalaxy>,
    mut scene: BevyGalaxyScene,
) {
    let mut candidate = galaxy_config.params.clone();
    let mut changed = false;
    for ParamCommitted(change) in commits.read() {
        debug!("Committed {} = {:?}", change.name().as_str(), change);
        changed |= candidate.apply(*change);
    }
    if !changed {
        return;
    }

    let regenerated = current
        .0
        .regenerate(&candidate, &mut scene)
        .map(|drawable| drawable.entity());
    match regenerated {
        Ok(entity) => {
            debug!("Galaxy replaced by {}", entity);
            galaxy_config.params = candidate;
            galaxy_config.generation = current.0.generation();
            galaxy_config_ui.rejection = None;
        }
        Err(err) => {
            warn!("Galaxy regeneration rejected: {}", err);
            galaxy_config_ui.draft = galaxy_config.params.clone();
            galaxy_config_ui.rejection = Some(err.to_string());
        }
    }
}

fn rotate_galaxy(time: Res<Time>, current: Res<CurrentGalaxy>, mut scene: BevyGalaxyScene) {
    current.0.tick(&mut scene, time.elapsed_secs());
}

fn teardown_on_exit(
    mut exit: EventReader<AppExit>,
    mut current: ResMut<CurrentGalaxy>,
    mut scene: BevyGalaxyScene,
) {
    if exit.read().next().is_some() {
        current.0.teardown(&mut scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::{GalaxyPlugin, GalaxyPoints};
    use bevy::time::TimeUpdateStrategy;
    use spiral_galaxy::{GalaxyParameters, ParamChange, SpinDirection, rotation_at};
    use std::time::Duration;

    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .add_plugins(GalaxyPlugin)
            .insert_resource(GalaxyConfig {
                params: GalaxyParameters {
                    count: 300,
                    ..default()
                },
                generation: 0,
            });
        app.update();
        app
    }

    fn galaxy_entities(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<GalaxyPoints>>()
            .iter(app.world())
            .count()
    }

    fn commit(app: &mut App, change: ParamChange) {
        app.world_mut().send_event(ParamCommitted(change));
        app.update();
    }

    #[test]
    fn startup_attaches_one_galaxy() {
        let mut app = headless_app();
        assert_eq!(galaxy_entities(&mut app), 1);
        assert_eq!(app.world().resource::<GalaxyConfig>().generation, 1);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 1);
    }

    #[test]
    fn commit_replaces_galaxy_and_assets() {
        let mut app = headless_app();
        commit(&mut app, ParamChange::Branches(6));
        commit(&mut app, ParamChange::Spin(-1.0));

        assert_eq!(galaxy_entities(&mut app), 1);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 1);
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 1);

        let config = app.world().resource::<GalaxyConfig>();
        assert_eq!(config.params.branches, 6);
        assert_eq!(config.generation, 3);
    }

    #[test]
    fn rejected_commit_keeps_galaxy_and_resets_draft() {
        let mut app = headless_app();
        app.world_mut().resource_mut::<GalaxyConfigUi>().draft.count = 0;
        commit(&mut app, ParamChange::Count(0));

        assert_eq!(galaxy_entities(&mut app), 1);
        let config = app.world().resource::<GalaxyConfig>();
        assert_eq!(config.params.count, 300);
        assert_eq!(config.generation, 1);

        let ui = app.world().resource::<GalaxyConfigUi>();
        assert_eq!(ui.draft.count, 300);
        assert!(ui.rejection.is_some());
    }

    #[test]
    fn unchanged_commit_does_not_regenerate() {
        let mut app = headless_app();
        commit(&mut app, ParamChange::Count(300));
        assert_eq!(app.world().resource::<GalaxyConfig>().generation, 1);
    }

    #[test]
    fn rotation_follows_elapsed_time() {
        let mut app = headless_app();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));
        commit(&mut app, ParamChange::Spin(-2.0));
        for _ in 0..4 {
            app.update();
        }

        let elapsed = app.world().resource::<Time>().elapsed_secs();
        assert!(elapsed > 0.0);
        let rotation = app
            .world_mut()
            .query_filtered::<&Transform, With<GalaxyPoints>>()
            .single(app.world())
            .unwrap()
            .rotation;
        assert!(
            rotation.abs_diff_eq(rotation_at(SpinDirection::Reverse, elapsed), 1e-5),
            "{:?} at {}s",
            rotation,
            elapsed
        );
        assert!(!rotation.abs_diff_eq(rotation_at(SpinDirection::Reverse, 0.0), 1e-5));
    }

    #[test]
    fn exit_tears_galaxy_down() {
        let mut app = headless_app();
        app.world_mut().send_event(AppExit::Success);
        app.update();

        assert_eq!(galaxy_entities(&mut app), 0);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 0);
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 0);
        assert!(app.world().resource::<CurrentGalaxy>().0.current().is_none());
    }
}
