use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Award, DatedTableRow, Record},
    utils,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct AwardFields {
    /// Award name (required for add)
    #[clap(long)]
    pub name: Option<String>,

    /// What the award was for (required for add)
    #[clap(long)]
    pub description: Option<String>,

    /// Date received
    #[clap(long)]
    pub date: Option<String>,

    #[clap(long)]
    pub image_url: Option<String>,
}

impl AwardFields {
    fn apply(self, draft: &mut Award) {
        if let Some(name) = self.name {
            draft.name = name;
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

pub async fn list_awards() {
    let mut manager = ResourceManager::new(CollectionClient::<Award>::new());
    if !resource::fetch_collection(&mut manager, "awards").await {
        return;
    }

    if manager.is_empty() {
        info!("No awards yet.");
        return;
    }

    let mut rows: Vec<DatedTableRow> = manager
        .records()
        .iter()
        .map(|a| DatedTableRow {
            id: a.id().unwrap_or_default(),
            name: a.name.clone(),
            date: a.date.clone(),
        })
        .collect();
    utils::sort_newest_first(&mut rows, |row| row.date.as_str());

    println!("{}", Table::new(rows));
}

pub async fn add_award(fields: AwardFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Award>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "award").await;
}

pub async fn edit_award(id: u64, fields: AwardFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Award>::new());
    if !resource::fetch_collection(&mut manager, "awards").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "award").await;
}

pub async fn delete_award(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Award>::new());
    if !resource::fetch_collection(&mut manager, "awards").await {
        return;
    }

    let mut modal: ModalController<Award> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "award").await;
}
