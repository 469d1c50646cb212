//! Interactive REPL mode
//!
//! A terminal walk-through of the landing page. All page state lives in one
//! SiteSession owned by the REPL.

use std::io::{self, Write};
use std::time::Duration;

use butter_adapter::runtime::{LoopSlot, Scheduler, WaveformTicker};
use butter_domain::service::animation::{accuracy_timeline, HOME_ACCURACY_BARS};
use butter_domain::{
    Accent, CancelToken, HeroButton, Navigation, Section, SectionAnimation, SiteSession, Waveform,
};
use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::ButterError;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::demo::play_demo;
use crate::commands::estimate::{parse_line, render};
use crate::context::Context;
use crate::render::{waveform_row, AccuracyRenderer};

/// Frames drawn when the demo section's waveform starts
const REPL_WAVEFORM_FRAMES: usize = 5;

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    RunDemo(Option<String>),
    Animate(Duration, SectionAnimation),
}

/// Interactive CLI over one visitor session
pub struct InteractiveCli {
    ctx: Context,
    session: SiteSession,
    waveform: LoopSlot,
}

impl InteractiveCli {
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            session: SiteSession::new(),
            waveform: LoopSlot::new(),
        }
    }

    pub fn session(&self) -> &SiteSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", style("Butter Labs - AI that understands every accent").bold());
        println!("Type /help for commands, /quit to exit");
        println!();

        if let Action::Animate(delay, animation) = self.landing() {
            self.animate(delay, animation).await?;
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("[{}] > ", self.session.navigation.current().id());
            io::stdout().flush()?;

            let Some(input) = lines.next_line().await? else {
                break;
            };
            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            let action = match self.handle_command(input) {
                Ok(action) => action,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            };

            match action {
                Action::Quit => break,
                Action::Continue => {}
                Action::RunDemo(selection) => self.run_demo(selection.as_deref()).await,
                Action::Animate(delay, animation) => self.animate(delay, animation).await?,
            }
        }

        self.waveform.stop();
        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<Action> {
        if !input.starts_with('/') {
            return self.handle_text(input);
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(Action::Quit);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /section <id>   - Show a section ({})", section_ids());
                println!("  /try            - Hero button: try the demo");
                println!("  /learn          - Hero button: learn more");
                println!("  /menu           - Toggle the mobile menu");
                println!("  /accents        - List demo accents");
                println!("  /demo <accent>  - Run the recognition demo");
                println!("  /estimate A S C - ROI for agents, salary, calls");
                println!("  /status         - Show current status");
                println!("  /quit           - Exit");
            }
            "/section" | "/go" => {
                let Some(id) = parts.get(1) else {
                    println!("Current section: {}", self.session.navigation.current());
                    return Ok(Action::Continue);
                };
                let navigation = self
                    .session
                    .navigation
                    .navigate_to(id)
                    .map_err(ButterError::from)?;
                return Ok(self.after_navigation(navigation));
            }
            "/try" => {
                let navigation = self.session.navigation.press(HeroButton::TryDemo);
                return Ok(self.after_navigation(navigation));
            }
            "/learn" => {
                let navigation = self.session.navigation.press(HeroButton::LearnMore);
                return Ok(self.after_navigation(navigation));
            }
            "/menu" => {
                self.session.navigation.toggle_menu();
                if self.session.navigation.is_menu_open() {
                    for section in Section::all() {
                        let marker = if self.session.navigation.is_link_active(*section) {
                            "*"
                        } else {
                            " "
                        };
                        println!("  {} {:<14} {}", marker, section.id(), section.title());
                    }
                } else {
                    println!("Menu closed");
                }
            }
            "/accents" => {
                for accent in Accent::all() {
                    println!("  {:<16} {}", accent.slug(), accent.display_name());
                }
            }
            "/demo" => {
                self.session.navigation.click_outside();
                return Ok(Action::RunDemo(parts.get(1).map(|s| s.to_string())));
            }
            "/estimate" => {
                let rest = parts[1..].join(" ");
                println!("{}", render(&self.ctx, &parse_line(&rest))?);
            }
            "/status" => {
                let nav = &self.session.navigation;
                println!("Status:");
                println!("  Section: {}", nav.current());
                println!("  Menu: {}", if nav.is_menu_open() { "open" } else { "closed" });
                println!("  Demo runs: {}", self.session.demo.runs_completed());
                if let Some(last) = self.session.demo.last_outcome() {
                    println!(
                        "  Last demo: {} ({:.1}%)",
                        last.accent.display_name(),
                        last.confidence
                    );
                }
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(Action::Continue)
    }

    /// Bare text is estimator input on the ROI section
    fn handle_text(&mut self, input: &str) -> anyhow::Result<Action> {
        if self.session.navigation.current() == Section::Roi {
            println!("{}", render(&self.ctx, &parse_line(input))?);
        } else {
            println!("Go to the ROI section (/section roi) to enter estimator figures");
        }
        Ok(Action::Continue)
    }

    /// Page load: home with the accuracy bars filling
    fn landing(&mut self) -> Action {
        let navigation = self.session.navigation.land();
        self.after_navigation(navigation)
    }

    fn after_navigation(&mut self, navigation: Navigation) -> Action {
        println!("{}", style(format!("── {} ──", navigation.section.title())).bold());
        if navigation.section != Section::Demo {
            self.waveform.stop();
        }
        match navigation.animation {
            Some((delay, animation)) => Action::Animate(delay, animation),
            None => Action::Continue,
        }
    }

    async fn run_demo(&mut self, selection: Option<&str>) {
        let token = CancelToken::new();
        match play_demo(&self.ctx, &mut self.session.demo, selection, false, &token).await {
            Ok(Some(_)) => println!(),
            Ok(None) => println!("{}", style("Demo cancelled").yellow()),
            Err(e) => println!("Error: {}", e),
        }
    }

    async fn animate(
        &mut self,
        delay: Duration,
        animation: SectionAnimation,
    ) -> anyhow::Result<()> {
        tokio::time::sleep(delay).await;

        match animation {
            SectionAnimation::AccuracyBars => {
                let mut renderer = AccuracyRenderer::new(&HOME_ACCURACY_BARS);
                Scheduler::new()
                    .run(accuracy_timeline(&HOME_ACCURACY_BARS), &CancelToken::new(), |fill| {
                        renderer.render(fill)
                    })
                    .await;
                renderer.finish()?;
            }
            SectionAnimation::Waveform => {
                let timing = &self.ctx.config.timing;
                let ticker = WaveformTicker::new(
                    Waveform::new(timing.waveform_bars),
                    timing.waveform_interval(),
                );
                let token = self.waveform.claim();
                let mut rng = StdRng::from_entropy();
                ticker
                    .run(&mut rng, Some(REPL_WAVEFORM_FRAMES), &token, |heights| {
                        println!("  {}", waveform_row(&heights))
                    })
                    .await;
                self.waveform.release(&token);
            }
        }
        Ok(())
    }
}

impl Default for InteractiveCli {
    fn default() -> Self {
        Self::new(Context::default())
    }
}

fn section_ids() -> String {
    Section::all()
        .iter()
        .map(|s| s.id())
        .collect::<Vec<_>>()
        .join(", ")
}
