use anyhow::Result;
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::client::HttpClient;
use crate::api::telegram::{self, ProfileLookup};
use crate::api::types::ProfileSnapshot;
use crate::changelog::detector::detect_changes;
use crate::changelog::entry::ChangeKind;
use crate::changelog::store::{ChangeLogStore, StoreError};
use crate::config::settings::Settings;
use crate::dialogs::index::latest_messages;
use crate::dialogs::summary::build_summary;
use crate::utils::format;

pub async fn handle_watch(settings: &Settings) -> Result<()> {
    let username: String = Input::new()
        .with_prompt("Target username (without @)")
        .interact_text()?;
    let username = username.trim().trim_start_matches('@').to_string();

    let http = HttpClient::new()?;

    let pb = spinner("Fetching profile...");
    let lookup = telegram::fetch_profile(&http.client, settings, &username).await;
    pb.finish_and_clear();

    let snapshot = match lookup? {
        ProfileLookup::Found(snapshot) => snapshot,
        ProfileLookup::NotFound => {
            println!("{}", format::error(&format!("No account found for @{}", username)));
            return Ok(());
        }
    };

    record_changes(settings, &snapshot)?;
    show_summary(&snapshot);

    let pb = spinner("Fetching dialogs...");
    let fetched = telegram::fetch_dialogs(&http.client, settings, settings.dialog_limit).await;
    pb.finish_and_clear();
    let (dialogs, messages) = fetched?;

    let index = latest_messages(&messages);
    let rows = build_summary(&dialogs, &index);

    println!();
    println!("{}", style("Private Chats / Groups").bold().cyan());
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.kind_label.to_string(),
                r.unread.to_string(),
                r.excerpt.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        format::render_table(&["Name", "Type", "Unread", "Last Message"], &table_rows)
    );

    Ok(())
}

/// Diffs the snapshot against the persisted log and appends whatever
/// transitions fired. A corrupt log is reported and reinitialized rather
/// than crashing the run.
fn record_changes(settings: &Settings, snapshot: &ProfileSnapshot) -> Result<()> {
    let store = ChangeLogStore::new(settings.log_file_path()?);

    let log = match store.load() {
        Ok(log) => log,
        Err(err @ StoreError::Corrupt { .. }) => {
            tracing::warn!(error = %err, "change log unreadable, starting fresh");
            println!(
                "{}",
                format::warn(&format!(
                    "Change log at {} is unreadable; starting a fresh one",
                    store.path().display()
                ))
            );
            store.reinitialize()?;
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    for entry in detect_changes(snapshot, &log) {
        let label = match entry.kind {
            ChangeKind::Bio => "Bio changed",
            ChangeKind::Photo => "Profile photo appeared",
        };
        println!("{}", format::success(&format!("{}: {:?} -> {:?}", label, entry.old, entry.new)));
        store.append(entry)?;
    }

    Ok(())
}

fn show_summary(snapshot: &ProfileSnapshot) {
    println!();
    println!("{}", style("────────────── Info Summary ──────────────").bold().cyan());
    println!("ID: {}", style(snapshot.id).green());
    println!("Name: {}", style(snapshot.display_name()).green());
    println!(
        "Username: {}",
        style(format!("@{}", snapshot.username.as_deref().unwrap_or(""))).green()
    );
    println!(
        "Bio: {}",
        style(snapshot.bio.as_deref().unwrap_or("None")).green()
    );
    println!(
        "Profile photo: {}",
        style(if snapshot.has_photo { "yes" } else { "no" }).green()
    );
    println!(
        "Last seen: {}",
        style(snapshot.last_seen.as_deref().unwrap_or("Unknown")).green()
    );
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_message(msg);
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
