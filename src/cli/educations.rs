use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Education, EducationTableRow, Record},
    utils,
};

/// Field overrides shared by `educations add` and `educations edit`.
/// Anything not given stays at its current (or empty) value.
#[derive(Parser, Debug, Clone, Default)]
pub struct EducationFields {
    /// School name (required for add)
    #[clap(long)]
    pub school: Option<String>,

    /// Degree or program
    #[clap(long)]
    pub degree: Option<String>,

    /// Level, e.g. bachelor or master
    #[clap(long)]
    pub level: Option<String>,

    /// Start date, e.g. 2019/9
    #[clap(long)]
    pub start_date: Option<String>,

    /// End date, blank while ongoing
    #[clap(long)]
    pub end_date: Option<String>,

    #[clap(long)]
    pub city: Option<String>,

    #[clap(long)]
    pub district: Option<String>,

    #[clap(long)]
    pub gpa: Option<String>,
}

impl EducationFields {
    fn apply(self, draft: &mut Education) {
        if let Some(school) = self.school {
            draft.school = school;
        }
        if let Some(degree) = self.degree {
            draft.degree = degree;
        }
        if let Some(level) = self.level {
            draft.level = level;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = end_date;
        }
        if let Some(city) = self.city {
            draft.city = city;
        }
        if let Some(district) = self.district {
            draft.district = district;
        }
        if let Some(gpa) = self.gpa {
            draft.gpa = gpa;
        }
    }
}

pub async fn list_educations() {
    let mut manager = ResourceManager::new(CollectionClient::<Education>::new());
    if !resource::fetch_collection(&mut manager, "educations").await {
        return;
    }

    if manager.is_empty() {
        info!("No educations yet.");
        return;
    }

    let rows: Vec<EducationTableRow> = manager
        .records()
        .iter()
        .map(|e| EducationTableRow {
            id: e.id().unwrap_or_default(),
            school: e.school.clone(),
            degree: e.degree.clone(),
            period: utils::format_period(&e.start_date, &e.end_date),
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn add_education(fields: EducationFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Education>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "education").await;
}

pub async fn edit_education(id: u64, fields: EducationFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Education>::new());
    if !resource::fetch_collection(&mut manager, "educations").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "education")
        .await;
}

pub async fn delete_education(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Education>::new());
    if !resource::fetch_collection(&mut manager, "educations").await {
        return;
    }

    let mut modal: ModalController<Education> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "education").await;
}
