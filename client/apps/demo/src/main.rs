//! Demo CLI Entry Point
//!
//! Exercises the data-access layer end to end against a running backend:
//! sign in, show the session profile, list recent kudos, then sign out.
//! Uses `anyhow` for startup errors; layer-level failures stay in their
//! own `ApiError` / `AuthFailure` shapes.

use std::env;

use kudos::repository::KudosFilter;
use kudos::{ApiConfig, Container};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo=info,kudos=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting demo session");

    let container = Container::client(config);

    let email = env::var("DEMO_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = env::var("DEMO_PASSWORD").unwrap_or_else(|_| "demo-password".to_string());

    match container.login.execute(&email, &password).await {
        Ok(session) => {
            tracing::info!(user = %session.user.name, "Signed in");
        }
        Err(failure) => {
            // Expected outcome, not a crash: report and stop
            tracing::warn!(reason = %failure.message, "Sign-in rejected");
            return Ok(());
        }
    }

    if let Some(user) = container.current_user.execute().await {
        println!(
            "Signed in as {} <{}> (admin: {})",
            user.name,
            user.email,
            user.is_admin()
        );
    }

    let page = container
        .list_kudos
        .execute(1, 10, &KudosFilter::default())
        .await?;
    println!(
        "Recent kudos ({} of {} total):",
        page.data.len(),
        page.pagination.total
    );
    for kudos in &page.data {
        let sender = kudos
            .sender
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("Anonymous");
        println!("  [{}] {}: {}", kudos.created_at, sender, kudos.message);
    }

    let summary = container.logout.execute().await;
    println!("{}", summary.message);

    Ok(())
}
