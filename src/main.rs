use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use booking_cart::commands::{decode_line, Command, HELP};
use booking_cart::config::AppConfig;
use booking_cart::errors::AppError;
use booking_cart::models::{format_currency, Catalog, StatusMessage, SubmissionState};
use booking_cart::services::booking::RelaySettings;
use booking_cart::services::mail::emailjs::EmailJsRelay;
use booking_cart::state::BookingPage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!("loading service catalog from {path}");
            Catalog::from_file(path)?
        }
        None => Catalog::default(),
    };

    let relay = EmailJsRelay::new(
        config.emailjs_api_url.clone(),
        config.emailjs_public_key.clone(),
        config.emailjs_access_token.clone(),
    );
    if !relay.is_configured() {
        tracing::warn!("EMAILJS_PUBLIC_KEY is not set; booking requests will fail to send");
    }

    let mut page = BookingPage::new(
        catalog,
        Arc::new(relay),
        RelaySettings::from_config(&config),
    );

    print_services(&page);
    println!("{}\n", page.view());
    println!("{HELP}");

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<Result<(), AppError>>();
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    loop {
        tokio::select! {
            read = stdin.read_until(b'\n', &mut buf) => {
                match read {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read input line");
                        buf.clear();
                        continue;
                    }
                }
                let line = decode_line(&buf);
                buf.clear();
                if line.trim().is_empty() {
                    continue;
                }

                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => println!("{HELP}"),
                    Command::Services => print_services(&page),
                    Command::Cart => println!("{}", page.view()),
                    Command::Status => print_status(page.status()),
                    Command::Add(id) => {
                        if let Err(e) = page.on_add(&id) {
                            println!("{e}");
                            continue;
                        }
                        println!("{}", page.view());
                    }
                    Command::Remove(id) => {
                        page.on_remove(&id);
                        println!("{}", page.view());
                    }
                    Command::Book(fields) => match page.begin_booking(fields) {
                        Ok(pending) => {
                            print_status(page.status());
                            let tx = outcome_tx.clone();
                            tokio::spawn(async move {
                                let _ = tx.send(pending.dispatch().await);
                            });
                        }
                        Err(AppError::BookingInProgress) => {
                            println!("{}", AppError::BookingInProgress);
                        }
                        Err(_) => print_status(page.status()),
                    },
                    Command::Subscribe { name, email } => {
                        if let Some(thanks) = page.on_subscribe(&name, &email) {
                            println!("{thanks}");
                        }
                    }
                }
            }
            Some(outcome) = outcome_rx.recv() => report_outcome(&mut page, outcome),
        }
    }

    if page.submission_state() == SubmissionState::Sending {
        println!("waiting for the booking to finish sending...");
        if let Some(outcome) = outcome_rx.recv().await {
            report_outcome(&mut page, outcome);
        }
    }

    Ok(())
}

fn report_outcome(page: &mut BookingPage, outcome: Result<(), AppError>) {
    let _ = page.finish_booking(outcome);
    print_status(page.status());
    println!("{}", page.view());
}

fn print_services(page: &BookingPage) {
    let view = page.view();
    for service in page.catalog().iter() {
        let control = match view.toggle(&service.id) {
            Some(t) if t.remove_visible => "[remove]",
            _ => "[add]",
        };
        println!(
            "  {:<8} {:<24} {:>12}  {control}",
            service.id,
            service.name,
            format_currency(service.unit_price)
        );
    }
}

fn print_status(status: Option<&StatusMessage>) {
    if let Some(status) = status {
        println!("({}) {}", status.tone.color(), status.text);
    }
}
