use std::io::{self, Write};
use chrono::{DateTime, Local};
use clap::Args;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use reqwest::{Client, StatusCode};
use scr_core::RiskReport;

use crate::duration::HumanDuration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/analyze_risks";

pub const TITLE: &str = "📊 Supply Chain Risk Dashboard";
pub const FETCHING_MESSAGE: &str = "Fetching real-time risk reports...";
pub const NO_RISKS_MESSAGE: &str = "✅ No major risks detected.";
pub const FETCH_FAILED_MESSAGE: &str = "❌ Failed to fetch risk reports. Check API server.";

#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Report service endpoint
    #[arg(long, env = "SCR_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Refresh periodically with the given interval (e.g. 30s, 5m, 1h15m). Renders once if unset.
    #[arg(long)]
    pub interval: Option<HumanDuration>,
}

/// Outcome of one call to the report service.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Unavailable(String),
    Empty,
    Reports(Vec<RiskReport>),
}

pub async fn fetch_state(client: &Client, api_url: &str) -> DashboardState {
    let response = match client.get(api_url).send().await {
        Ok(response) => response,
        Err(e) => return DashboardState::Unavailable(e.to_string()),
    };

    if response.status() != StatusCode::OK {
        return DashboardState::Unavailable(format!("HTTP {}", response.status()));
    }

    match response.json::<Vec<RiskReport>>().await {
        Ok(reports) if reports.is_empty() => DashboardState::Empty,
        Ok(reports) => DashboardState::Reports(reports),
        Err(e) => DashboardState::Unavailable(format!("Invalid response: {}", e)),
    }
}

/// Formats like the service's JSON numbers, keeping one decimal for whole scores.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}

pub fn render<W: Write>(out: &mut W, state: &DashboardState, fetched_at: DateTime<Local>) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(TITLE),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        Print(FETCHING_MESSAGE),
        Print("\n"),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("Fetched at {}\n\n", fetched_at.format("%Y-%m-%d %H:%M:%S"))),
        ResetColor
    )?;

    match state {
        DashboardState::Unavailable(reason) => {
            queue!(
                out,
                SetForegroundColor(Color::Red),
                Print(FETCH_FAILED_MESSAGE),
                ResetColor,
                Print("\n"),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("({})\n", reason)),
                ResetColor
            )?;
        }
        DashboardState::Empty => {
            queue!(
                out,
                SetForegroundColor(Color::Green),
                Print(NO_RISKS_MESSAGE),
                ResetColor,
                Print("\n")
            )?;
        }
        DashboardState::Reports(reports) => {
            for report in reports {
                render_report(out, report)?;
            }
        }
    }

    out.flush()
}

fn render_report<W: Write>(out: &mut W, report: &RiskReport) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("🔴 {}\n", report.title)),
        SetAttribute(Attribute::Reset),
        Print(format!("Source: {}\n", report.source)),
        Print(format!("Risk Score: {} / 10\n", format_score(report.risk_score))),
        Print(format!("Summary: {}\n", report.summary)),
        Print("---\n")
    )
}

pub async fn run(args: DashboardArgs) -> anyhow::Result<()> {
    scr_core::error::parse_url(&args.api_url)?;
    let client = Client::new();
    let mut stdout = io::stdout();

    loop {
        if args.interval.is_some() {
            queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        tracing::debug!("Requesting {}", args.api_url);
        let state = fetch_state(&client, &args.api_url).await;
        render(&mut stdout, &state, Local::now())?;

        match args.interval {
            Some(interval) => {
                tracing::debug!("Waiting {} before next refresh", interval);
                tokio::time::sleep(interval.0).await;
            }
            None => return Ok(()),
        }
    }
}
