use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Certification, DatedTableRow, Record},
    utils,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct CertificationFields {
    /// Certification name (required for add)
    #[clap(long)]
    pub name: Option<String>,

    /// What the certification covers (required for add)
    #[clap(long)]
    pub description: Option<String>,

    /// Date obtained, e.g. 2023/12/15
    #[clap(long)]
    pub date: Option<String>,

    /// Badge or certificate image URL
    #[clap(long)]
    pub image_url: Option<String>,
}

impl CertificationFields {
    fn apply(self, draft: &mut Certification) {
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

pub async fn list_certifications() {
    let mut manager = ResourceManager::new(CollectionClient::<Certification>::new());
    if !resource::fetch_collection(&mut manager, "certifications").await {
        return;
    }

    if manager.is_empty() {
        info!("No certifications yet.");
        return;
    }

    let mut rows: Vec<DatedTableRow> = manager
        .records()
        .iter()
        .map(|c| DatedTableRow {
            id: c.id().unwrap_or_default(),
            name: c.name.clone(),
            date: c.date.clone(),
        })
        .collect();
    utils::sort_newest_first(&mut rows, |row| row.date.as_str());

    println!("{}", Table::new(rows));
}

pub async fn add_certification(fields: CertificationFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Certification>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "certification")
        .await;
}

pub async fn edit_certification(id: u64, fields: CertificationFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Certification>::new());
    if !resource::fetch_collection(&mut manager, "certifications").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "certification")
        .await;
}

pub async fn delete_certification(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Certification>::new());
    if !resource::fetch_collection(&mut manager, "certifications").await {
        return;
    }

    let mut modal: ModalController<Certification> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "certification").await;
}
