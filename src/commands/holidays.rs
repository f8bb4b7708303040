use anyhow::{Context, Result};
use calport_core::calport_config::CalportConfig;
use calport_core::ics::{self, DecodeOptions};
use owo_colors::OwoColorize;

pub async fn run(url: Option<&str>) -> Result<()> {
    let config = CalportConfig::load()?;

    let url = match url.or(config.holiday_feed_url.as_deref()) {
        Some(u) => u.to_string(),
        None => anyhow::bail!(
            "No holiday feed configured.\n\n\
            Set one in {}:\n  \
            holiday_feed_url = \"https://...\"\n\n\
            or pass --url",
            CalportConfig::config_path()?.display()
        ),
    };

    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Could not fetch {url}"))?;

    if !response.status().is_success() {
        anyhow::bail!("Feed request failed with status {}", response.status());
    }

    let body = response.text().await.context("Could not read feed body")?;
    tracing::debug!(bytes = body.len(), "fetched holiday feed");

    let options = DecodeOptions {
        default_color: config.holiday_color.clone(),
        mark_as_holiday: true,
    };

    let mut holidays = ics::decode_calendar(&body, &options);
    holidays.sort_by_key(|e| e.start_date);

    let today = chrono::Local::now().date_naive();
    holidays.retain(|e| e.end_date >= today);

    if holidays.is_empty() {
        println!("{}", "No upcoming holidays in feed".dimmed());
        return Ok(());
    }

    for event in &holidays {
        println!("  {}  {}", event.start_date.format("%Y-%m-%d").to_string().bold(), event.title);
    }

    Ok(())
}
