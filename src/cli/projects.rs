use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Project, ProjectTableRow, Record},
    utils,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct ProjectFields {
    /// Project name (required for add)
    #[clap(long)]
    pub name: Option<String>,

    /// Project description (required for add)
    #[clap(long)]
    pub description: Option<String>,

    /// Technology tag to add; can be repeated. Duplicates and blanks are
    /// dropped.
    #[clap(long = "tech")]
    pub tech: Vec<String>,

    /// Technology tag to remove; can be repeated
    #[clap(long = "remove-tech")]
    pub remove_tech: Vec<String>,

    /// Cover image URL
    #[clap(long)]
    pub image_url: Option<String>,

    /// Project period, e.g. 2022/9-2023/5
    #[clap(long)]
    pub year: Option<String>,

    /// Link to the live project or repository
    #[clap(long)]
    pub project_url: Option<String>,
}

impl ProjectFields {
    fn apply(self, draft: &mut Project) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        for tag in &self.tech {
            draft.technologies = utils::add_tag(&draft.technologies, tag);
        }
        for tag in &self.remove_tech {
            draft.technologies = utils::remove_tag(&draft.technologies, tag);
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
        if let Some(year) = self.year {
            draft.year = year;
        }
        if let Some(project_url) = self.project_url {
            draft.project_url = project_url;
        }
    }
}

pub async fn list_projects() {
    let mut manager = ResourceManager::new(CollectionClient::<Project>::new());
    if !resource::fetch_collection(&mut manager, "projects").await {
        return;
    }

    if manager.is_empty() {
        info!("No projects yet.");
        return;
    }

    let rows: Vec<ProjectTableRow> = manager
        .records()
        .iter()
        .map(|p| ProjectTableRow {
            id: p.id().unwrap_or_default(),
            name: p.name.clone(),
            year: p.year.clone(),
            technologies: p.technologies.join(", "),
        })
        .collect();

    println!("{}", Table::new(rows));
}

pub async fn add_project(fields: ProjectFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Project>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "project").await;
}

pub async fn edit_project(id: u64, fields: ProjectFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Project>::new());
    if !resource::fetch_collection(&mut manager, "projects").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "project").await;
}

pub async fn delete_project(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Project>::new());
    if !resource::fetch_collection(&mut manager, "projects").await {
        return;
    }

    let mut modal: ModalController<Project> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "project").await;
}
