//! butter estimate command

use butter_adapter::runtime::debounce;
use butter_domain::{EstimateInputs, Estimator, InputAdjustment, SanitizedInputs};
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::context::Context;
use crate::format::NumberFormat;
use crate::report::{render_text, EstimateReport};

#[derive(Debug, Args)]
pub struct EstimateCommand {
    /// Number of customer-service agents
    #[arg(short, long, default_value = "50", allow_hyphen_values = true)]
    pub agents: String,

    /// Average yearly salary per agent
    #[arg(short, long, default_value = "35000", allow_hyphen_values = true)]
    pub salary: String,

    /// Calls handled per month
    #[arg(short, long, default_value = "10000", allow_hyphen_values = true)]
    pub calls: String,

    /// Read "agents salary calls" lines from stdin and re-estimate as they settle
    #[arg(long)]
    pub watch: bool,
}

impl EstimateCommand {
    pub async fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        if self.watch {
            return self.watch_stdin(ctx).await;
        }

        let sanitized = EstimateInputs::parse(&self.agents, &self.salary, &self.calls);
        println!("{}", render(ctx, &sanitized)?);
        Ok(())
    }

    async fn watch_stdin(&self, ctx: &Context) -> anyhow::Result<()> {
        let (tx, rx) = mpsc::channel(64);
        let reader = tokio::spawn(forward_lines(BufReader::new(tokio::io::stdin()), tx));

        let mut settled = debounce(rx, ctx.config.timing.debounce());
        while let Some(line) = settled.recv().await {
            let sanitized = parse_line(&line);
            println!("{}", render(ctx, &sanitized)?);
        }

        reader.await??;
        Ok(())
    }
}

/// Send each non-blank line of `reader` to `tx` until end of input
///
/// Lines that are not valid UTF-8 are skipped with a warning. Read errors end
/// the stream and are returned.
pub async fn forward_lines<R>(mut reader: R, tx: mpsc::Sender<String>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(err) => {
                warn!(error = %err, "skipping input line that is not valid UTF-8");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        if tx.send(line.to_string()).await.is_err() {
            return Ok(());
        }
    }
}

/// Split "agents salary calls"; missing values count as non-numeric
pub fn parse_line(line: &str) -> SanitizedInputs {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let agents = parts.next().unwrap_or("");
    let salary = parts.next().unwrap_or("");
    let calls = parts.next().unwrap_or("");
    EstimateInputs::parse(agents, salary, calls)
}

/// Estimate and format according to the context
pub fn render(ctx: &Context, sanitized: &SanitizedInputs) -> anyhow::Result<String> {
    for (field, adjustment) in sanitized.adjusted() {
        match adjustment {
            InputAdjustment::Clamped { from } => debug!(
                field = field.name(),
                from,
                used = sanitized.inputs.get(*field),
                "input clamped"
            ),
            _ => debug!(
                field = field.name(),
                used = sanitized.inputs.get(*field),
                "input defaulted"
            ),
        }
    }

    let estimator = Estimator::with_model(ctx.config.cost_model());
    let result = estimator.estimate(&sanitized.inputs);

    if ctx.json {
        Ok(serde_json::to_string_pretty(&EstimateReport::new(sanitized, &result))?)
    } else {
        let fmt = NumberFormat::new(&ctx.config.presentation);
        Ok(render_text(&fmt, sanitized, &result))
    }
}
