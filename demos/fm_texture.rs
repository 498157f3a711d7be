//! Renders an evolving FM texture to `out/fm_texture.wav`.
//!
//! A slow sine wobbles the period of a 110 Hz carrier, a half-hertz tremolo
//! breathes over the top, and a quiet seeded noise bed sits underneath.
//!
//! Run with `cargo run --example fm_texture`.

use anyhow::Result;
use ditty::effects::Tremolo;
use ditty::envelopes::LinearRamp;
use ditty::noise::WhiteNoise;
use ditty::oscillators::Sine;
use ditty::{DEFAULT_SAMPLE_RATE, Wave, transcode, units};

fn main() -> Result<()> {
    let rate = DEFAULT_SAMPLE_RATE;
    let len = units::seconds(rate, 4.0);

    // Carrier period wobbling two percent around 110 Hz, five times a second.
    let base = units::period(rate, 110.0);
    let wobble = Sine::new(units::period(rate, 5.0))
        .render(len)
        .mul(base * 0.02)
        .add(base);
    let voice = Sine::new(&wobble).render(len);

    let shimmer = Tremolo::new(units::cycles_per_sample(rate, 0.5), 0.7)?;
    let bed = WhiteNoise::seeded(11).render(len).mul(0.02);

    let texture = voice
        .mul(&shimmer)
        .mul(&LinearRamp::new(0.8, 0.0))
        .add(&bed);
    transcode::write_wav(&texture, "out/fm_texture.wav")?;
    println!(
        "wrote out/fm_texture.wav ({:.2}s)",
        texture.len() as f64 / rate as f64
    );
    Ok(())
}
