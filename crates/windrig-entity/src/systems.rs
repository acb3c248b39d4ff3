//! Systems running the wind effect over a world.

use hecs::{Entity, World};
use tracing::{debug, warn};
use windrig_audio::{
    draw_wind_lines, ChannelSink, ChannelState, DebugAnchors, DebugDraw, Ear,
    WindEffectController,
};
use windrig_core::{Error, Result};

use crate::components::{Transform, WindRig};

/// Hard-pan the channels of every rig. Call once after spawning rigs.
///
/// Rigs whose channel entities are missing are skipped and returned.
pub fn init_wind_rigs(world: &World, controller: &WindEffectController) -> Vec<(Entity, Error)> {
    let mut failures = Vec::new();
    for (entity, rig) in rigs(world) {
        if let Err(err) = init_rig(world, controller, &rig) {
            warn!(?entity, %err, "skipping wind rig init");
            failures.push((entity, err));
        }
    }
    failures
}

/// Run one tick of the wind effect for every rig in `world`.
///
/// Rigs with dangling source or channel references are skipped, logged, and
/// returned; the remaining rigs still update.
pub fn update_wind_rigs(world: &World, controller: &WindEffectController) -> Vec<(Entity, Error)> {
    let mut failures = Vec::new();
    let mut updated = 0usize;
    for (entity, rig) in rigs(world) {
        match update_rig(world, controller, entity, &rig) {
            Ok(()) => updated += 1,
            Err(err) => {
                warn!(?entity, %err, "skipping wind rig update");
                failures.push((entity, err));
            }
        }
    }
    debug!(updated, failed = failures.len(), "wind rigs updated");
    failures
}

/// Draw debug lines for every complete rig, anchored at the rig, source, and
/// channel entity transforms. Channels without a transform use the rig's.
///
/// Nothing is drawn in release builds.
pub fn wind_rig_debug_lines(
    world: &World,
    controller: &WindEffectController,
    draw: &mut impl DebugDraw,
) {
    for (entity, rig) in rigs(world) {
        let (Ok(listener), Ok(source)) = (transform(world, entity), transform(world, rig.source)) else {
            continue;
        };
        let ear_position =
            |ear: Entity| transform(world, ear).map_or(listener.position, |t| t.position);
        let anchors = DebugAnchors {
            listener: listener.position,
            source: source.position,
            left_ear: ear_position(rig.left),
            right_ear: ear_position(rig.right),
        };
        let effect = controller.compute(&listener.listener(), &source.wind_source());
        draw_wind_lines(&effect, &anchors, draw);
    }
}

fn init_rig(world: &World, controller: &WindEffectController, rig: &WindRig) -> Result<()> {
    check_channels(world, rig)?;
    let mut left = *channel_mut(world, rig.left, Ear::Left)?;
    let mut right = *channel_mut(world, rig.right, Ear::Right)?;
    controller.init(&mut left, &mut right);
    *channel_mut(world, rig.left, Ear::Left)? = left;
    *channel_mut(world, rig.right, Ear::Right)? = right;
    Ok(())
}

fn update_rig(
    world: &World,
    controller: &WindEffectController,
    entity: Entity,
    rig: &WindRig,
) -> Result<()> {
    let listener = transform(world, entity)?.listener();
    let source = transform(world, rig.source)
        .map_err(|_| Error::NotFound(format!("wind source {:?}", rig.source)))?
        .wind_source();
    check_channels(world, rig)?;

    let effect = controller.compute(&listener, &source);
    channel_mut(world, rig.left, Ear::Left)?.apply(&effect.left);
    channel_mut(world, rig.right, Ear::Right)?.apply(&effect.right);
    Ok(())
}

fn rigs(world: &World) -> Vec<(Entity, WindRig)> {
    world
        .query::<&WindRig>()
        .iter()
        .map(|(entity, rig)| (entity, *rig))
        .collect()
}

fn transform(world: &World, entity: Entity) -> Result<Transform> {
    world
        .get::<&Transform>(entity)
        .map(|t| *t)
        .map_err(|_| Error::NotFound(format!("transform of {entity:?}")))
}

/// Both channels must exist, and be distinct, before either is written.
fn check_channels(world: &World, rig: &WindRig) -> Result<()> {
    if rig.left == rig.right {
        return Err(Error::InvalidData(format!(
            "left and right channel share entity {:?}",
            rig.left
        )));
    }
    for (channel, ear) in [(rig.left, Ear::Left), (rig.right, Ear::Right)] {
        if world.get::<&ChannelState>(channel).is_err() {
            return Err(Error::NotFound(format!("{ear:?} channel {channel:?}")));
        }
    }
    Ok(())
}

fn channel_mut(world: &World, channel: Entity, ear: Ear) -> Result<hecs::RefMut<'_, ChannelState>> {
    world
        .get::<&mut ChannelState>(channel)
        .map_err(|_| Error::NotFound(format!("{ear:?} channel {channel:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec3;
    use windrig_audio::DebugLineBuffer;

    struct Spawned {
        rig: Entity,
        left: Entity,
        right: Entity,
    }

    fn spawn_rig(world: &mut World, yaw_degrees: f32, source_position: Vec3) -> Spawned {
        let source = world.spawn((Transform::from_position(source_position),));
        let left = world.spawn((ChannelState::default(),));
        let right = world.spawn((ChannelState::default(),));
        let rig = world.spawn((
            Transform::from_position_yaw(Vec3::ZERO, yaw_degrees),
            WindRig { source, left, right },
        ));
        Spawned { rig, left, right }
    }

    fn channel(world: &World, entity: Entity) -> ChannelState {
        *world.get::<&ChannelState>(entity).unwrap()
    }

    #[test]
    fn init_pans_channels() {
        let mut world = World::new();
        let spawned = spawn_rig(&mut world, 0.0, Vec3::Z);
        let failures = init_wind_rigs(&world, &WindEffectController::default());

        assert!(failures.is_empty());
        assert_eq!(channel(&world, spawned.left).pan, -1.0);
        assert_eq!(channel(&world, spawned.right).pan, 1.0);
    }

    #[test]
    fn update_writes_channel_components() {
        let mut world = World::new();
        let spawned = spawn_rig(&mut world, 0.0, Vec3::new(5.0, 0.0, 0.0));
        let failures = update_wind_rigs(&world, &WindEffectController::default());

        assert!(failures.is_empty());
        assert_abs_diff_eq!(channel(&world, spawned.right).volume, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(channel(&world, spawned.left).volume, 0.3, epsilon = 1e-5);
    }

    #[test]
    fn rotation_is_read_from_transform() {
        let mut world = World::new();
        // Source ahead, head turned so the right ear faces it
        let spawned = spawn_rig(&mut world, -90.0, Vec3::new(0.0, 0.0, 5.0));
        update_wind_rigs(&world, &WindEffectController::default());

        assert_abs_diff_eq!(channel(&world, spawned.right).volume, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(channel(&world, spawned.left).pitch, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn missing_source_is_reported_and_others_still_update() {
        let mut world = World::new();
        let broken = spawn_rig(&mut world, 0.0, Vec3::Z);
        let healthy = spawn_rig(&mut world, 0.0, Vec3::new(5.0, 0.0, 0.0));
        let source = world.get::<&WindRig>(broken.rig).unwrap().source;
        world.despawn(source).unwrap();

        let failures = update_wind_rigs(&world, &WindEffectController::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, broken.rig);
        assert!(matches!(failures[0].1, Error::NotFound(_)));
        assert_eq!(channel(&world, broken.left), ChannelState::default());
        assert_abs_diff_eq!(channel(&world, healthy.right).volume, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn missing_channel_leaves_other_channel_untouched() {
        let mut world = World::new();
        let spawned = spawn_rig(&mut world, 0.0, Vec3::new(5.0, 0.0, 0.0));
        world.despawn(spawned.right).unwrap();

        let failures = update_wind_rigs(&world, &WindEffectController::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(channel(&world, spawned.left), ChannelState::default());
    }

    #[test]
    fn shared_channel_is_rejected() {
        let mut world = World::new();
        let source = world.spawn((Transform::from_position(Vec3::X),));
        let shared = world.spawn((ChannelState::default(),));
        let rig = world.spawn((
            Transform::default(),
            WindRig {
                source,
                left: shared,
                right: shared,
            },
        ));
        let controller = WindEffectController::default();

        let init_failures = init_wind_rigs(&world, &controller);
        assert_eq!(init_failures.len(), 1);
        assert_eq!(init_failures[0].0, rig);
        assert!(matches!(init_failures[0].1, Error::InvalidData(_)));

        let update_failures = update_wind_rigs(&world, &controller);
        assert_eq!(update_failures.len(), 1);
        assert!(matches!(update_failures[0].1, Error::InvalidData(_)));
        assert_eq!(channel(&world, shared), ChannelState::default());
    }

    #[test]
    fn debug_lines_per_rig() {
        let mut world = World::new();
        spawn_rig(&mut world, 0.0, Vec3::Z);
        spawn_rig(&mut world, 90.0, Vec3::X);

        let mut buffer = DebugLineBuffer::new();
        wind_rig_debug_lines(&world, &WindEffectController::default(), &mut buffer);
        let expected = if cfg!(debug_assertions) { 6 } else { 0 };
        assert_eq!(buffer.lines().len(), expected);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_builds_draw_nothing() {
        let mut world = World::new();
        spawn_rig(&mut world, 0.0, Vec3::Z);

        let mut buffer = DebugLineBuffer::new();
        wind_rig_debug_lines(&world, &WindEffectController::default(), &mut buffer);
        assert!(buffer.is_empty());
    }
}
