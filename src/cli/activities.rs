use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Activity, DatedTableRow, Record},
    utils,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct ActivityFields {
    /// Activity title (required for add)
    #[clap(long)]
    pub title: Option<String>,

    /// What the activity involved (required for add)
    #[clap(long)]
    pub description: Option<String>,

    /// Date or period of the activity
    #[clap(long)]
    pub date: Option<String>,

    #[clap(long)]
    pub image_url: Option<String>,
}

impl ActivityFields {
    fn apply(self, draft: &mut Activity) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
    }
}

pub async fn list_activities() {
    let mut manager = ResourceManager::new(CollectionClient::<Activity>::new());
    if !resource::fetch_collection(&mut manager, "activities").await {
        return;
    }

    if manager.is_empty() {
        info!("No activities yet.");
        return;
    }

    let mut rows: Vec<DatedTableRow> = manager
        .records()
        .iter()
        .map(|a| DatedTableRow {
            id: a.id().unwrap_or_default(),
            name: a.title.clone(),
            date: a.date.clone(),
        })
        .collect();
    utils::sort_newest_first(&mut rows, |row| row.date.as_str());

    println!("{}", Table::new(rows));
}

pub async fn add_activity(fields: ActivityFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Activity>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "activity").await;
}

pub async fn edit_activity(id: u64, fields: ActivityFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Activity>::new());
    if !resource::fetch_collection(&mut manager, "activities").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "activity")
        .await;
}

pub async fn delete_activity(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Activity>::new());
    if !resource::fetch_collection(&mut manager, "activities").await {
        return;
    }

    let mut modal: ModalController<Activity> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "activity").await;
}
