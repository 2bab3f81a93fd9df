use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    info,
    management::{ChangeEvent, ModalController, ResourceManager},
    remote::RemoteCollection,
    success,
    types::Record,
    warning,
};

/// Positional id plus the shared `--yes` confirmation skip, used by every
/// `delete` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DeleteOpts {
    /// Id of the record to delete
    pub id: u64,

    /// Skip the confirmation prompt
    #[clap(long)]
    pub yes: bool,
}

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Loads a manager's collection with a progress spinner. Returns `false`
/// after printing a warning if the fetch failed; the manager's previous
/// state (an empty collection on first use) is left untouched.
pub(crate) async fn fetch_collection<R, C>(
    manager: &mut ResourceManager<R, C>,
    what: &str,
) -> bool
where
    R: Record,
    C: RemoteCollection<R>,
{
    let pb = spinner(format!("Fetching {}...", what));

    match manager.load().await {
        Ok(_) => {
            pb.finish_and_clear();
            true
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to load {}: {}", what, e);
            false
        }
    }
}

/// Drives one add workflow: open the add dialog, fill the draft from the
/// command line, commit, and dismiss on success. On failure the dialog stays
/// open with the draft intact and the warning tells the user what happened.
pub(crate) async fn run_add<R, C, F>(
    manager: &mut ResourceManager<R, C>,
    modal: &mut ModalController<R>,
    fill: F,
    what: &str,
) -> bool
where
    R: Record + Default,
    C: RemoteCollection<R>,
    F: FnOnce(&mut R),
{
    modal.open_add();
    if let Some(draft) = modal.draft_mut() {
        fill(draft);
    }
    modal.settle();

    let draft = match modal.draft() {
        Some(d) => d.clone(),
        None => return false,
    };

    // success output renders off the manager's change event, not the return
    // value
    let label = draft.label();
    let what_owned = what.to_string();
    manager.subscribe(move |event| {
        if let ChangeEvent::Added { id } = event {
            success!("Created {} \"{}\" with id {}", what_owned, label, id);
        }
    });

    match manager.submit_add(draft).await {
        Ok(_) => {
            modal.dismiss().await;
            true
        }
        Err(e) => {
            warning!("Failed to create {}: {}", what, e);
            false
        }
    }
}

/// Drives one edit workflow against an already-loaded manager. The draft is
/// a copy of the target record with the command-line overrides applied on
/// top, so unspecified fields keep their current values.
pub(crate) async fn run_edit<R, C, F>(
    manager: &mut ResourceManager<R, C>,
    modal: &mut ModalController<R>,
    id: u64,
    apply: F,
    what: &str,
) -> bool
where
    R: Record,
    C: RemoteCollection<R>,
    F: FnOnce(&mut R),
{
    let record = match manager.get(id) {
        Some(r) => r.clone(),
        None => {
            warning!("No {} with id {}", what, id);
            return false;
        }
    };

    modal.open_edit(&record);
    if let Some(draft) = modal.draft_mut() {
        apply(draft);
    }
    modal.settle();

    let draft = match modal.draft() {
        Some(d) => d.clone(),
        None => return false,
    };

    let what_owned = what.to_string();
    manager.subscribe(move |event| {
        if let ChangeEvent::Updated { id } = event {
            success!("Updated {} {}", what_owned, id);
        }
    });

    match manager.submit_edit(id, draft).await {
        Ok(_) => {
            modal.dismiss().await;
            true
        }
        Err(e) => {
            warning!("Failed to update {}: {}", what, e);
            false
        }
    }
}

/// Drives one delete workflow against an already-loaded manager, going
/// through the confirmation dialog unless `--yes` was given.
pub(crate) async fn run_delete<R, C>(
    manager: &mut ResourceManager<R, C>,
    modal: &mut ModalController<R>,
    id: u64,
    assume_yes: bool,
    what: &str,
) -> bool
where
    R: Record,
    C: RemoteCollection<R>,
{
    let label = match manager.get(id) {
        Some(r) => r.label(),
        None => {
            warning!("No {} with id {}", what, id);
            return false;
        }
    };

    modal.open_delete(id);
    modal.settle();

    if !assume_yes && !confirm(&format!("Delete {} \"{}\"? [y/N] ", what, label)) {
        modal.cancel();
        info!("Aborted.");
        return false;
    }

    let label_owned = label.clone();
    let what_owned = what.to_string();
    manager.subscribe(move |event| {
        if let ChangeEvent::Removed { .. } = event {
            success!("Deleted {} \"{}\"", what_owned, label_owned);
        }
    });

    match manager.submit_delete(id).await {
        Ok(()) => {
            modal.dismiss().await;
            true
        }
        Err(e) => {
            warning!("Failed to delete {}: {}", what, e);
            false
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
