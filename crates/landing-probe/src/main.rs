use anyhow::{anyhow, Context};
use glam::Vec2;
use instant::Instant;
use landing_core::{
    Compositor, FrameScheduler, InputCache, ManualClock, ParameterBundle, SectionConfig,
    TextScramble, Viewport, DEFAULT_FRAME_BUDGET,
};
use std::time::Duration;

const ENV_PREFIX: &str = "LANDING_";
const FRAME_DT: Duration = Duration::from_micros(16_667);
const DEFAULT_VIEWPORT: Viewport = Viewport::new(1920.0, 1080.0);
// simulated native scroll speed
const SCROLL_PX_PER_FRAME: f32 = 12.0;
const LOG_EVERY: u64 = 15;
const HEADLINE_FROM: &str = "INITIALIZING";
const HEADLINE_TO: &str = "AI THAT WORKS FOR YOU";

fn env_key(option: &str) -> String {
    format!("{ENV_PREFIX}{}", option.to_uppercase().replace('-', "_"))
}

fn parse_viewport(raw: &str) -> anyhow::Result<Viewport> {
    let (w, h) = raw
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got `{raw}`"))?;
    let w: f32 = w.trim().parse().context("viewport width")?;
    let h: f32 = h.trim().parse().context("viewport height")?;
    Ok(Viewport::new(w, h))
}

fn log_bundle(frame: u64, scroll: f32, b: &ParameterBundle) {
    log::info!(
        "[probe] f={frame:4} scroll={scroll:7.1} p={:.3} rot=({:6.2},{:6.2}) mask={:7.1} dim={:.2} video=({:.3}x @{:.3})",
        b.outer_progress,
        b.rotate_x,
        b.rotate_y,
        b.mask_diameter_px,
        b.overlay_opacity,
        b.video_playback_scale,
        b.video_progress
    );
}

fn sweep(config: &SectionConfig, viewport: Viewport) -> anyhow::Result<()> {
    let section = config
        .compile()
        .map_err(|e| anyhow!("section configuration rejected: {e}"))?;
    let mut compositor = Compositor::new(section);
    let mut input = InputCache::new(viewport, 0.0);
    let mut scheduler = FrameScheduler::new(ManualClock::new());
    let end = config.scroll_length_px + 0.2 * viewport.height;
    let started = Instant::now();

    scheduler.start();
    let mut native_scroll = 0.0f32;
    while scheduler.clock_mut().fire() {
        let Some(tick) = scheduler.tick(FRAME_DT) else {
            break;
        };
        native_scroll = (native_scroll + SCROLL_PX_PER_FRAME).min(end);
        input.set_scroll_offset(native_scroll);
        // pointer orbits the viewport centre
        let t = tick.index as f32 * 0.05;
        let centre = Vec2::new(viewport.width, viewport.height) * 0.5;
        let p = centre + Vec2::new(t.cos(), t.sin()) * centre * 0.8;
        input.set_pointer(p.x, p.y);

        let bundle = compositor.frame(tick.dt_sec, &input);
        if tick.index % LOG_EVERY == 0 {
            log_bundle(tick.index, compositor.smooth_scroll().current(), &bundle);
        }
        if native_scroll >= end && compositor.smooth_scroll().is_settled() {
            log_bundle(tick.index, compositor.smooth_scroll().current(), &bundle);
            scheduler.stop();
        }
    }
    log::info!(
        "[probe] sweep finished: {} frames in {:.2?}",
        scheduler.frames(),
        started.elapsed()
    );
    Ok(())
}

fn scramble_headline(seed: u64) {
    let mut scramble = TextScramble::new(seed);
    scramble.set_text(HEADLINE_FROM, HEADLINE_TO, DEFAULT_FRAME_BUDGET);
    let mut frame = 0u32;
    loop {
        let f = scramble.step();
        if frame % 10 == 0 || f.done {
            log::info!("[scramble] {frame:3} {}", f.text);
        }
        if f.done {
            break;
        }
        frame += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = SectionConfig::default();
    let applied = config.apply_overrides(|key| std::env::var(env_key(key)).ok());
    if applied > 0 {
        log::info!("[probe] {applied} option(s) overridden from environment");
    }
    let viewport = match std::env::var(env_key("viewport")) {
        Ok(raw) => parse_viewport(&raw)?,
        Err(_) => DEFAULT_VIEWPORT,
    };
    log::info!(
        "[probe] viewport {}x{} scroll length {}",
        viewport.width,
        viewport.height,
        config.scroll_length_px
    );

    sweep(&config, viewport)?;
    scramble_headline(0x5eed);
    Ok(())
}
