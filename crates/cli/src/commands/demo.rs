//! butter demo command

use butter_adapter::runtime::Scheduler;
use butter_adapter::sampling::demo_sample;
use butter_domain::{
    demo_timeline, Accent, CancelToken, DemoOutcome, DemoSession, PlaybackOutcome,
};
use clap::Args;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::ButterError;
use tracing::info;

use crate::context::Context;
use crate::render::DemoRenderer;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Accent slug (see `butter accents`); prompts when omitted
    #[arg(short, long)]
    pub accent: Option<String>,

    /// Skip the processing delay and typing animation
    #[arg(long)]
    pub instant: bool,
}

impl DemoCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let selection = match &self.accent {
            Some(slug) => Some(slug.clone()),
            None if ctx.json => None,
            None => pick_accent()?,
        };

        let token = CancelToken::new();
        let on_interrupt = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_interrupt.cancel();
            }
        });

        let mut session = DemoSession::new();
        let outcome = play_demo(
            ctx,
            &mut session,
            selection.as_deref(),
            self.instant,
            &token,
        )
        .await?;

        match outcome {
            Some(outcome) if ctx.json => println!("{}", outcome_json(&outcome)),
            Some(_) => {}
            None => println!("{}", style("Demo cancelled").yellow()),
        }
        Ok(())
    }
}

/// Interactive accent picker
fn pick_accent() -> anyhow::Result<Option<String>> {
    let names: Vec<&str> = Accent::all().iter().map(|a| a.display_name()).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an accent")
        .items(&names)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| Accent::all()[i].slug().to_string()))
}

/// Run one demo through the session
///
/// Returns `None` if the run was cancelled; the session is left idle either
/// way.
pub async fn play_demo(
    ctx: &Context,
    session: &mut DemoSession,
    selection: Option<&str>,
    instant: bool,
    token: &CancelToken,
) -> shared::Result<Option<DemoOutcome>> {
    let accent = session.begin(selection)?;
    info!(accent = accent.slug(), "demo started");

    let sample = demo_sample(&mut StdRng::from_entropy());
    let outcome = DemoOutcome::fabricate(accent, &sample);

    let mut timeline = demo_timeline(&outcome, &sample, ctx.config.timing.typing_interval());
    if instant {
        timeline = timeline.instant();
    }

    let quiet = ctx.json;
    let mut renderer = DemoRenderer::new();
    let result = Scheduler::new()
        .run(timeline, token, |frame| {
            if !quiet {
                renderer.render(frame);
            }
        })
        .await;
    renderer.finish()?;

    match result {
        PlaybackOutcome::Completed { .. } => {
            session.finish(outcome.clone()).map_err(ButterError::from)?;
            info!(
                accent = accent.slug(),
                confidence = outcome.confidence,
                processing_time_ms = outcome.processing_time_ms,
                "demo finished"
            );
            Ok(Some(outcome))
        }
        PlaybackOutcome::Cancelled { .. } => {
            session.abort();
            Ok(None)
        }
    }
}

pub fn outcome_json(outcome: &DemoOutcome) -> serde_json::Value {
    serde_json::json!({
        "accent": outcome.accent.display_name(),
        "slug": outcome.accent.slug(),
        "confidence": format!("{:.1}%", outcome.confidence),
        "processingTime": format!("{}ms", outcome.processing_time_ms),
        "conversation": {
            "user": outcome.conversation.user,
            "userNote": outcome.conversation.user_note,
            "ai": outcome.conversation.ai,
            "aiNote": outcome.conversation.ai_note,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use butter_domain::DemoSample;

    fn quiet_ctx() -> Context {
        Context {
            json: true,
            ..Context::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_demo_completes() {
        let mut session = DemoSession::new();
        let outcome = play_demo(
            &quiet_ctx(),
            &mut session,
            Some("geordie"),
            false,
            &CancelToken::new(),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(outcome.accent, Accent::Geordie);
        assert!(!session.is_processing());
        assert_eq!(session.runs_completed(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_demo_cancelled_leaves_session_idle() {
        let token = CancelToken::new();
        token.cancel();
        let mut session = DemoSession::new();

        let outcome = play_demo(&quiet_ctx(), &mut session, Some("scouse"), true, &token)
            .await
            .unwrap();

        assert!(outcome.is_none());
        assert!(!session.is_processing());
        assert_eq!(session.runs_completed(), 0);
    }

    #[tokio::test]
    async fn test_play_demo_without_selection() {
        let mut session = DemoSession::new();
        let err = play_demo(&quiet_ctx(), &mut session, None, true, &CancelToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Demo error: Please select an accent first");
    }

    #[tokio::test]
    async fn test_play_demo_unknown_accent() {
        let mut session = DemoSession::new();
        let err = play_demo(&quiet_ctx(), &mut session, Some("martian"), true, &CancelToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ButterError::UnknownAccent { .. }));
    }

    #[test]
    fn test_outcome_json() {
        let outcome = DemoOutcome::fabricate(Accent::Scottish, &DemoSample::new(0.0, 0.5, 0.5));
        let json = outcome_json(&outcome);
        assert_eq!(json["accent"], "Scottish");
        assert_eq!(json["confidence"], "97.0%");
        assert_eq!(json["processingTime"], "100ms");
    }
}
