//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use glam::Vec3;

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoArgs {
    /// Number of ticks to run.
    pub ticks: u32,
    /// Heading change per tick in degrees.
    pub step_degrees: f32,
    /// Wind source position.
    pub source: Vec3,
    /// Sound file to play through both channels.
    pub sound: Option<PathBuf>,
    /// Tick duration when playing audio.
    pub tick_ms: u64,
    /// Tween applied to audio parameter changes.
    pub tween_ms: u64,
    /// Log debug lines every tick.
    pub debug_lines: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            ticks: 72,
            step_degrees: 5.0,
            source: Vec3::new(0.0, 0.0, 10.0),
            sound: None,
            tick_ms: 16,
            tween_ms: 16,
            debug_lines: false,
        }
    }
}

impl DemoArgs {
    /// Parse arguments. Returns `None` when help was requested.
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Option<Self>> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("missing value for {arg}"))
            };
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "-n" | "--ticks" => {
                    parsed.ticks = value()?.parse().context("invalid --ticks")?;
                }
                "--step" => {
                    parsed.step_degrees = value()?.parse().context("invalid --step")?;
                }
                "--source" => parsed.source = parse_vec3(&value()?)?,
                "--sound" => parsed.sound = Some(PathBuf::from(value()?)),
                "--tick-ms" => {
                    parsed.tick_ms = value()?.parse().context("invalid --tick-ms")?;
                }
                "--tween-ms" => {
                    parsed.tween_ms = value()?.parse().context("invalid --tween-ms")?;
                }
                "--debug-lines" => parsed.debug_lines = true,
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(Some(parsed))
    }
}

/// Parse `X,Y,Z`.
fn parse_vec3(s: &str) -> anyhow::Result<Vec3> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid vector: {s}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => bail!("expected X,Y,Z, got {s}"),
    }
}

pub fn print_help() {
    eprintln!(
        "WindRig headless demo

USAGE:
    cargo run -p windrig-demo -- [OPTIONS]

OPTIONS:
    -n, --ticks <N>         Number of ticks to run (default: 72)
    --step <DEG>            Heading change per tick in degrees (default: 5)
    --source <X,Y,Z>        Wind source position (default: 0,0,10)
    --sound <PATH>          Play a sound file through both channels
    --tick-ms <MS>          Tick duration while playing audio (default: 16)
    --tween-ms <MS>         Audio parameter tween duration (default: 16)
    --debug-lines           Log debug lines at debug level
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
