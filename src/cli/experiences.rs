use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Experience, ExperienceTableRow, Record},
    utils,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct ExperienceFields {
    /// Company name (required for add)
    #[clap(long)]
    pub company: Option<String>,

    /// Position held (required for add)
    #[clap(long)]
    pub position: Option<String>,

    /// Company logo URL
    #[clap(long)]
    pub logo_url: Option<String>,

    #[clap(long)]
    pub start_date: Option<String>,

    #[clap(long)]
    pub end_date: Option<String>,

    #[clap(long)]
    pub location: Option<String>,

    #[clap(long)]
    pub description: Option<String>,

    /// Comma-separated skills used in the role
    #[clap(long)]
    pub skills: Option<String>,
}

impl ExperienceFields {
    fn apply(self, draft: &mut Experience) {
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(position) = self.position {
            draft.position = position;
        }
        if let Some(logo_url) = self.logo_url {
            draft.logo_url = logo_url;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = end_date;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(skills) = self.skills {
            draft.skills = skills;
        }
    }
}

pub async fn list_experiences() {
    let mut manager = ResourceManager::new(CollectionClient::<Experience>::new());
    if !resource::fetch_collection(&mut manager, "experiences").await {
        return;
    }

    if manager.is_empty() {
        info!("No experiences yet.");
        return;
    }

    // newest first for display; the collection keeps the server's order
    let mut rows: Vec<(String, ExperienceTableRow)> = manager
        .records()
        .iter()
        .map(|e| {
            (
                e.start_date.clone(),
                ExperienceTableRow {
                    id: e.id().unwrap_or_default(),
                    company: e.company.clone(),
                    position: e.position.clone(),
                    period: utils::format_period(&e.start_date, &e.end_date),
                },
            )
        })
        .collect();
    utils::sort_newest_first(&mut rows, |(start, _)| start.as_str());

    let rows: Vec<ExperienceTableRow> = rows.into_iter().map(|(_, row)| row).collect();
    println!("{}", Table::new(rows));
}

pub async fn add_experience(fields: ExperienceFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Experience>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "experience").await;
}

pub async fn edit_experience(id: u64, fields: ExperienceFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Experience>::new());
    if !resource::fetch_collection(&mut manager, "experiences").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "experience")
        .await;
}

pub async fn delete_experience(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Experience>::new());
    if !resource::fetch_collection(&mut manager, "experiences").await {
        return;
    }

    let mut modal: ModalController<Experience> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "experience").await;
}
