use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use foliocli::{
    cli::{
        self, ActivityFields, AwardFields, CategoryFields, CertificationFields, DeleteOpts,
        EducationFields, ExperienceFields, ProjectFields, SkillFields,
    },
    config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage education entries
    Educations(EducationsOptions),

    /// Manage work experiences
    Experiences(ExperiencesOptions),

    /// Manage showcased projects
    Projects(ProjectsOptions),

    /// Manage skills and their categories
    Skills(SkillsOptions),

    /// Manage certifications
    Certifications(CertificationsOptions),

    /// Manage awards
    Awards(AwardsOptions),

    /// Manage extracurricular activities
    Activities(ActivitiesOptions),

    /// Show or replace the introduction text
    Intro(IntroOptions),

    /// Open the public site in a browser
    Site,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct EducationsOptions {
    #[command(subcommand)]
    pub command: Option<EducationsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum EducationsSubcommand {
    /// Add an education entry
    Add(EducationFields),

    /// Edit an education entry
    Edit(EducationEditOpts),

    /// Delete an education entry
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct EducationEditOpts {
    /// Id of the entry to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: EducationFields,
}

#[derive(Parser, Debug, Clone)]
pub struct ExperiencesOptions {
    #[command(subcommand)]
    pub command: Option<ExperiencesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExperiencesSubcommand {
    /// Add a work experience
    Add(ExperienceFields),

    /// Edit a work experience
    Edit(ExperienceEditOpts),

    /// Delete a work experience
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ExperienceEditOpts {
    /// Id of the experience to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: ExperienceFields,
}

#[derive(Parser, Debug, Clone)]
pub struct ProjectsOptions {
    #[command(subcommand)]
    pub command: Option<ProjectsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProjectsSubcommand {
    /// Add a project
    Add(ProjectFields),

    /// Edit a project
    Edit(ProjectEditOpts),

    /// Delete a project
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ProjectEditOpts {
    /// Id of the project to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: ProjectFields,
}

#[derive(Parser, Debug, Clone)]
pub struct SkillsOptions {
    #[command(subcommand)]
    pub command: Option<SkillsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SkillsSubcommand {
    /// Add a skill to a category
    Add(SkillFields),

    /// Edit a skill
    Edit(SkillEditOpts),

    /// Delete a skill
    Delete(DeleteOpts),

    /// Manage skill categories
    Categories(CategoriesOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct SkillEditOpts {
    /// Id of the skill to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: SkillFields,
}

#[derive(Parser, Debug, Clone)]
pub struct CategoriesOptions {
    #[command(subcommand)]
    pub command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategoriesSubcommand {
    /// Add a skill category
    Add(CategoryFields),

    /// Delete a category and the skills under it
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct CertificationsOptions {
    #[command(subcommand)]
    pub command: Option<CertificationsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CertificationsSubcommand {
    /// Add a certification
    Add(CertificationFields),

    /// Edit a certification
    Edit(CertificationEditOpts),

    /// Delete a certification
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct CertificationEditOpts {
    /// Id of the certification to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: CertificationFields,
}

#[derive(Parser, Debug, Clone)]
pub struct AwardsOptions {
    #[command(subcommand)]
    pub command: Option<AwardsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AwardsSubcommand {
    /// Add an award
    Add(AwardFields),

    /// Edit an award
    Edit(AwardEditOpts),

    /// Delete an award
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct AwardEditOpts {
    /// Id of the award to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: AwardFields,
}

#[derive(Parser, Debug, Clone)]
pub struct ActivitiesOptions {
    #[command(subcommand)]
    pub command: Option<ActivitiesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ActivitiesSubcommand {
    /// Add an activity
    Add(ActivityFields),

    /// Edit an activity
    Edit(ActivityEditOpts),

    /// Delete an activity
    Delete(DeleteOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ActivityEditOpts {
    /// Id of the activity to edit
    pub id: u64,

    #[clap(flatten)]
    pub fields: ActivityFields,
}

#[derive(Parser, Debug, Clone)]
pub struct IntroOptions {
    #[command(subcommand)]
    pub command: Option<IntroSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum IntroSubcommand {
    /// Replace the introduction text
    Set(IntroSetOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct IntroSetOpts {
    /// The new introduction text
    #[clap(long)]
    pub content: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Educations(opt) => match opt.command {
            Some(EducationsSubcommand::Add(fields)) => cli::add_education(fields).await,
            Some(EducationsSubcommand::Edit(o)) => cli::edit_education(o.id, o.fields).await,
            Some(EducationsSubcommand::Delete(o)) => cli::delete_education(o.id, o.yes).await,
            None => cli::list_educations().await,
        },

        Command::Experiences(opt) => match opt.command {
            Some(ExperiencesSubcommand::Add(fields)) => cli::add_experience(fields).await,
            Some(ExperiencesSubcommand::Edit(o)) => cli::edit_experience(o.id, o.fields).await,
            Some(ExperiencesSubcommand::Delete(o)) => cli::delete_experience(o.id, o.yes).await,
            None => cli::list_experiences().await,
        },

        Command::Projects(opt) => match opt.command {
            Some(ProjectsSubcommand::Add(fields)) => cli::add_project(fields).await,
            Some(ProjectsSubcommand::Edit(o)) => cli::edit_project(o.id, o.fields).await,
            Some(ProjectsSubcommand::Delete(o)) => cli::delete_project(o.id, o.yes).await,
            None => cli::list_projects().await,
        },

        Command::Skills(opt) => match opt.command {
            Some(SkillsSubcommand::Add(fields)) => cli::add_skill(fields).await,
            Some(SkillsSubcommand::Edit(o)) => cli::edit_skill(o.id, o.fields).await,
            Some(SkillsSubcommand::Delete(o)) => cli::delete_skill(o.id, o.yes).await,
            Some(SkillsSubcommand::Categories(c)) => match c.command {
                CategoriesSubcommand::Add(fields) => cli::add_category(fields).await,
                CategoriesSubcommand::Delete(o) => cli::delete_category(o.id, o.yes).await,
            },
            None => cli::list_skills().await,
        },

        Command::Certifications(opt) => match opt.command {
            Some(CertificationsSubcommand::Add(fields)) => cli::add_certification(fields).await,
            Some(CertificationsSubcommand::Edit(o)) => {
                cli::edit_certification(o.id, o.fields).await
            }
            Some(CertificationsSubcommand::Delete(o)) => {
                cli::delete_certification(o.id, o.yes).await
            }
            None => cli::list_certifications().await,
        },

        Command::Awards(opt) => match opt.command {
            Some(AwardsSubcommand::Add(fields)) => cli::add_award(fields).await,
            Some(AwardsSubcommand::Edit(o)) => cli::edit_award(o.id, o.fields).await,
            Some(AwardsSubcommand::Delete(o)) => cli::delete_award(o.id, o.yes).await,
            None => cli::list_awards().await,
        },

        Command::Activities(opt) => match opt.command {
            Some(ActivitiesSubcommand::Add(fields)) => cli::add_activity(fields).await,
            Some(ActivitiesSubcommand::Edit(o)) => cli::edit_activity(o.id, o.fields).await,
            Some(ActivitiesSubcommand::Delete(o)) => cli::delete_activity(o.id, o.yes).await,
            None => cli::list_activities().await,
        },

        Command::Intro(opt) => match opt.command {
            Some(IntroSubcommand::Set(o)) => cli::set_introduction(o.content).await,
            None => cli::show_introduction().await,
        },

        Command::Site => cli::site(),

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
