//! WindRig headless demo
//!
//! Spins a listener in place next to a wind source and logs how the left and
//! right channels respond. With `--sound`, the same parameters drive two
//! looping kira sounds so the effect can be heard.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p windrig-demo -- [OPTIONS]
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod args;
mod playback;

use std::thread;
use std::time::Duration;

use glam::{Quat, Vec3};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use windrig_audio::{ChannelSink, ChannelState, DebugLineBuffer, WindEffectController};
use windrig_entity::{
    init_wind_rigs, update_wind_rigs, wind_rig_debug_lines, Entity, Transform, WindRig, World,
};

use crate::args::DemoArgs;
use crate::playback::Playback;

const EAR_OFFSET: f32 = 0.1;

fn main() -> anyhow::Result<()> {
    let args = match DemoArgs::parse(std::env::args().skip(1))? {
        Some(args) => args,
        None => {
            args::print_help();
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        ticks = args.ticks,
        step = args.step_degrees,
        source = ?args.source,
        "WindRig demo starting..."
    );

    let controller = WindEffectController::default();
    info!(config = ?controller.config(), "wind effect ranges");
    let mut debug_lines = DebugLineBuffer::new();
    let mut world = World::new();
    let rig = spawn_rig(&mut world, args.source);

    for (entity, err) in init_wind_rigs(&world, &controller) {
        warn!(?entity, %err, "wind rig init failed");
    }

    let mut playback = match &args.sound {
        Some(path) => Some(Playback::start(path, Duration::from_millis(args.tween_ms))?),
        None => None,
    };
    if let Some(playback) = playback.as_mut() {
        controller.init(&mut playback.left, &mut playback.right);
    }

    for tick in 0..args.ticks {
        #[allow(clippy::cast_precision_loss)]
        let yaw = (tick as f32 * args.step_degrees).rem_euclid(360.0);
        world.get::<&mut Transform>(rig.listener)?.rotation = Quat::from_rotation_y(yaw.to_radians());

        let failures = update_wind_rigs(&world, &controller);
        if !failures.is_empty() {
            anyhow::bail!("{} wind rig(s) failed to update", failures.len());
        }

        let (left, right) = channels(&world, &rig)?;
        info!(
            tick,
            yaw,
            left_volume = left.volume,
            left_pitch = left.pitch,
            left_doppler = left.doppler_level,
            right_volume = right.volume,
            right_pitch = right.pitch,
            right_doppler = right.doppler_level,
            "tick"
        );

        if args.debug_lines {
            wind_rig_debug_lines(&world, &controller, &mut debug_lines);
            for line in debug_lines.drain() {
                debug!(start = ?line.start, end = ?line.end, color = ?line.color, "debug line");
            }
        }

        if let Some(playback) = playback.as_mut() {
            playback.left.apply(&left);
            playback.right.apply(&right);
            thread::sleep(Duration::from_millis(args.tick_ms));
        }
    }

    info!("WindRig demo finished");
    Ok(())
}

/// Entities making up the demo rig.
struct DemoRig {
    listener: Entity,
    left: Entity,
    right: Entity,
}

fn spawn_rig(world: &mut World, source_position: Vec3) -> DemoRig {
    let source = world.spawn((Transform::from_position(source_position),));
    let left = world.spawn((
        Transform::from_position(Vec3::new(-EAR_OFFSET, 0.0, 0.0)),
        ChannelState::default(),
    ));
    let right = world.spawn((
        Transform::from_position(Vec3::new(EAR_OFFSET, 0.0, 0.0)),
        ChannelState::default(),
    ));
    let listener = world.spawn((Transform::default(), WindRig { source, left, right }));
    DemoRig {
        listener,
        left,
        right,
    }
}

fn channels(world: &World, rig: &DemoRig) -> anyhow::Result<(ChannelState, ChannelState)> {
    let left = *world.get::<&ChannelState>(rig.left)?;
    let right = *world.get::<&ChannelState>(rig.right)?;
    Ok((left, right))
}
