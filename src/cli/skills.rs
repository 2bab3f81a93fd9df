use clap::Parser;
use tabled::Table;

use crate::{
    cli::resource,
    info,
    management::{ModalController, ResourceManager},
    remote::CollectionClient,
    types::{Category, Record, Skill, SkillTableRow},
    warning,
};

#[derive(Parser, Debug, Clone, Default)]
pub struct SkillFields {
    /// Skill name (required for add)
    #[clap(long)]
    pub name: Option<String>,

    #[clap(long)]
    pub description: Option<String>,

    /// Id of the category the skill belongs to
    #[clap(long)]
    pub category: Option<u64>,
}

impl SkillFields {
    fn apply(self, draft: &mut Skill) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(category) = self.category {
            draft.category_id = Some(category);
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
pub struct CategoryFields {
    /// Category name (required for add)
    #[clap(long)]
    pub name: Option<String>,
}

impl CategoryFields {
    fn apply(self, draft: &mut Category) {
        if let Some(name) = self.name {
            draft.name = name;
        }
    }
}

/// Lists skills grouped under their categories, the way the site renders
/// them.
pub async fn list_skills() {
    let mut manager = ResourceManager::new(CollectionClient::<Category>::new());
    if !resource::fetch_collection(&mut manager, "skill categories").await {
        return;
    }

    if manager.is_empty() {
        info!("No skill categories yet.");
        return;
    }

    let rows: Vec<SkillTableRow> = manager
        .records()
        .iter()
        .flat_map(|category| {
            category.skills.iter().map(|skill| SkillTableRow {
                category: category.name.clone(),
                id: skill.id().unwrap_or_default(),
                name: skill.name.clone(),
                description: skill.description.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        info!(
            "No skills yet. Categories: {}",
            category_names(manager.records())
        );
        return;
    }

    println!("{}", Table::new(rows));
}

fn category_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The backend stores every skill under a category, so `--category` is
/// mandatory on both add and edit.
pub async fn add_skill(fields: SkillFields) {
    if fields.category.is_none() {
        warning!("--category is required when adding a skill");
        return;
    }

    let mut manager = ResourceManager::new(CollectionClient::<Skill>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "skill").await;
}

pub async fn edit_skill(id: u64, fields: SkillFields) {
    if fields.category.is_none() {
        warning!("--category is required when editing a skill");
        return;
    }

    let mut manager = ResourceManager::new(CollectionClient::<Skill>::new());
    if !resource::fetch_collection(&mut manager, "skills").await {
        return;
    }

    let mut modal = ModalController::new();
    resource::run_edit(&mut manager, &mut modal, id, |draft| fields.apply(draft), "skill").await;
}

pub async fn delete_skill(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Skill>::new());
    if !resource::fetch_collection(&mut manager, "skills").await {
        return;
    }

    let mut modal: ModalController<Skill> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "skill").await;
}

pub async fn add_category(fields: CategoryFields) {
    let mut manager = ResourceManager::new(CollectionClient::<Category>::new());
    let mut modal = ModalController::new();
    resource::run_add(&mut manager, &mut modal, |draft| fields.apply(draft), "category").await;
}

/// Deleting a category cascades to its skills server-side, so the prompt
/// goes through the same confirmation dialog as any other delete.
pub async fn delete_category(id: u64, yes: bool) {
    let mut manager = ResourceManager::new(CollectionClient::<Category>::new());
    if !resource::fetch_collection(&mut manager, "skill categories").await {
        return;
    }

    let mut modal: ModalController<Category> = ModalController::new();
    resource::run_delete(&mut manager, &mut modal, id, yes, "category").await;
}
