//! # CLI Module
//!
//! This module provides the command-line interface layer for foliocli, a
//! client for managing the content of a personal portfolio site through its
//! REST backend. It is the presentation side of the application: every
//! command renders manager state and drives the shared add/edit/delete
//! workflow, while the `management` and `remote` layers own the actual
//! semantics.
//!
//! ## Command Categories
//!
//! Each content area of the site gets the same four verbs:
//!
//! - `list` (the default) - fetch the collection and render it as a table
//! - `add` - compose a draft from flags and create it on the backend
//! - `edit <id>` - copy the existing record, apply flag overrides, commit
//! - `delete <id>` - confirm (unless `--yes`) and remove the record
//!
//! The introduction text is a single document and only supports `show` and
//! `set`. Skills additionally expose category management, because the site
//! groups skills under categories.
//!
//! ## Data Flow
//!
//! 1. **Fetch**: a command builds a [`ResourceManager`] over the matching
//!    [`CollectionClient`] and loads the collection with a spinner.
//! 2. **Workflow**: mutations run through a [`ModalController`], mirroring
//!    the dialog flow of the site's admin UI: open, fill the draft, commit,
//!    dismiss on success.
//! 3. **Feedback**: successes go through `success!`, failures through
//!    `warning!` with the error's message; a failed mutation never touches
//!    the collection, so the user can rerun the command as-is.
//!
//! [`ResourceManager`]: crate::management::ResourceManager
//! [`ModalController`]: crate::management::ModalController
//! [`CollectionClient`]: crate::remote::CollectionClient

mod activities;
mod awards;
mod certifications;
mod educations;
mod experiences;
mod introduction;
mod projects;
mod resource;
mod site;
mod skills;

pub use activities::ActivityFields;
pub use activities::add_activity;
pub use activities::delete_activity;
pub use activities::edit_activity;
pub use activities::list_activities;
pub use awards::AwardFields;
pub use awards::add_award;
pub use awards::delete_award;
pub use awards::edit_award;
pub use awards::list_awards;
pub use certifications::CertificationFields;
pub use certifications::add_certification;
pub use certifications::delete_certification;
pub use certifications::edit_certification;
pub use certifications::list_certifications;
pub use educations::EducationFields;
pub use educations::add_education;
pub use educations::delete_education;
pub use educations::edit_education;
pub use educations::list_educations;
pub use experiences::ExperienceFields;
pub use experiences::add_experience;
pub use experiences::delete_experience;
pub use experiences::edit_experience;
pub use experiences::list_experiences;
pub use introduction::set_introduction;
pub use introduction::show_introduction;
pub use projects::ProjectFields;
pub use projects::add_project;
pub use projects::delete_project;
pub use projects::edit_project;
pub use projects::list_projects;
pub use resource::DeleteOpts;
pub use site::site;
pub use skills::CategoryFields;
pub use skills::SkillFields;
pub use skills::add_category;
pub use skills::add_skill;
pub use skills::delete_category;
pub use skills::delete_skill;
pub use skills::edit_skill;
pub use skills::list_skills;
