//! butter waveform command

use butter_adapter::runtime::{LoopSlot, WaveformTicker};
use butter_domain::Waveform;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::context::Context;
use crate::render::waveform_row;

#[derive(Debug, Args)]
pub struct WaveformCommand {
    /// Frames to draw (0 = until Ctrl-C)
    #[arg(short, long, default_value_t = 10)]
    pub frames: usize,

    /// Override the number of bars
    #[arg(short, long)]
    pub bars: Option<usize>,
}

impl WaveformCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let timing = &ctx.config.timing;
        let ticker = WaveformTicker::new(
            Waveform::new(self.bars.unwrap_or(timing.waveform_bars)),
            timing.waveform_interval(),
        );

        let mut slot = LoopSlot::new();
        let token = slot.claim();
        let on_interrupt = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });

        let limit = (self.frames > 0).then_some(self.frames);
        let mut rng = StdRng::from_entropy();
        let json = ctx.json;

        ticker
            .run(&mut rng, limit, &token, |heights| {
                if json {
                    let rounded: Vec<f64> =
                        heights.iter().map(|h| (h * 10.0).round() / 10.0).collect();
                    println!("{}", serde_json::json!(rounded));
                } else {
                    println!("{}", waveform_row(&heights));
                }
            })
            .await;

        slot.stop();
        Ok(())
    }
}
