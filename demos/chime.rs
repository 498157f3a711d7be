//! Renders a bell-like chime to `out/chime.wav`.
//!
//! Three partials get a fast-attack Bezier envelope and land a beat apart
//! on a shared buffer; a feedback echo rings the result out.
//!
//! Run with `cargo run --example chime`.

use anyhow::Result;
use ditty::effects::Echo;
use ditty::envelopes::Bezier;
use ditty::oscillators::Sine;
use ditty::{Block, DEFAULT_SAMPLE_RATE, Wave, transcode, units};

fn main() -> Result<()> {
    let rate = DEFAULT_SAMPLE_RATE;
    let note_len = units::seconds(rate, 0.9);
    let strike = Bezier::new(vec![(0.0, 0.0), (0.05, 1.0), (0.4, 0.25), (1.0, 0.0)])?;

    let mut chime = Block::default();
    for (i, freq) in [523.25, 659.26, 783.99].into_iter().enumerate() {
        let tone = Sine::new(units::period(rate, freq))
            .render(note_len)
            .mul(&strike)
            .mul(0.3);
        chime.mount(&tone, i * units::beat(rate, 180.0));
    }

    let rung = chime.add(&Echo::new(units::seconds(rate, 0.25), 0.45)?);
    transcode::write_wav(&rung, "out/chime.wav")?;
    println!("wrote out/chime.wav ({:.2}s)", rung.len() as f64 / rate as f64);
    Ok(())
}
