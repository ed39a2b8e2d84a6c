//! Firebase connectivity check.
//!
//! Reads the web-app settings from the environment, then counts the
//! `commissions` collection and prints a few sample documents.

use std::env;
use std::process::ExitCode;

use commercial_dashboard::provider::{self, FirestoreClient};
use commercial_dashboard::FirebaseSettings;
use dashboard_common::FirebaseConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod probe;

use probe::{ProbeError, Survey, COLLECTION, SAMPLE_LIMIT};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Firebase configuration:");
    for (name, present) in FirebaseConfig::presence(|name| env::var(name).ok()) {
        println!("  {} {}", if present { "[x]" } else { "[ ]" }, name);
    }

    match run().await {
        Ok(survey) => {
            print_survey(&survey);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Connectivity check failed: {}", e);
            eprintln!("Hint: {}", e.hint());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<Survey, ProbeError> {
    let client = FirebaseConfig::from_env()?;
    tracing::info!("Checking Firebase project {}", client.project_id);

    let mut settings = FirebaseSettings::from_client_config(client);
    if let Ok(host) = env::var("FIRESTORE_EMULATOR_HOST") {
        tracing::info!("Using Firestore emulator at {}", host);
        settings.firestore_base_url = format!("http://{}", host);
    }

    let http_client = provider::http_client(settings.request_timeout())?;
    let store = FirestoreClient::new(
        http_client,
        &settings.firestore_base_url,
        &settings.project_id,
        &settings.api_key,
    );

    Ok(probe::survey(&store, COLLECTION, SAMPLE_LIMIT).await?)
}

fn print_survey(survey: &Survey) {
    println!();
    println!("Connected. {} documents in '{}'.", survey.count, survey.collection);

    for document in &survey.samples {
        let fields = serde_json::to_string_pretty(&document.to_json())
            .unwrap_or_else(|_| "{}".to_string());
        println!();
        println!("- {}", document.id());
        println!("{}", fields);
    }
}
