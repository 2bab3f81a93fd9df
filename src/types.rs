use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tabled::Tabled;

/// One entity kind managed through the portfolio REST API.
///
/// Every collection record carries a server-assigned id (absent only on
/// drafts that have not been created yet) and a fixed set of scalar fields.
/// The trait is the single seam the generic manager, client, and modal
/// workflow are built against.
pub trait Record: Clone + Send + Serialize + DeserializeOwned {
    /// Path segment of the REST collection, e.g. `educations` for
    /// `/api/educations`.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<u64>;

    /// Short human-readable identity used in CLI messages.
    fn label(&self) -> String;

    /// First required field that is empty, if any. Presence checks only.
    fn missing_required(&self) -> Option<&'static str> {
        None
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub school: String,
    pub degree: String,
    pub level: String,
    pub start_date: String,
    pub end_date: String,
    pub city: String,
    pub district: String,
    pub gpa: String,
}

impl Record for Education {
    const COLLECTION: &'static str = "educations";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.school.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.school) {
            return Some("school");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub company: String,
    pub position: String,
    pub logo_url: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
    pub skills: String,
}

impl Record for Experience {
    const COLLECTION: &'static str = "experiences";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.position, self.company)
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.company) {
            return Some("company");
        }
        if blank(&self.position) {
            return Some("position");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub year: String,
    pub project_url: String,
}

impl Record for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.name) {
            return Some("name");
        }
        if blank(&self.description) {
            return Some("description");
        }
        None
    }
}

/// A skill inside a category. The category link travels as `categoryId` on
/// create/update bodies; listings nest skills under their category instead,
/// so the field is absent there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl Record for Skill {
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.name) {
            return Some("name");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub skills: Vec<Skill>,
}

impl Record for Category {
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.name) {
            return Some("name");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
}

impl Record for Certification {
    const COLLECTION: &'static str = "certifications";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.name) {
            return Some("name");
        }
        if blank(&self.description) {
            return Some("description");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
}

impl Record for Award {
    const COLLECTION: &'static str = "awards";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.name) {
            return Some("name");
        }
        if blank(&self.description) {
            return Some("description");
        }
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
}

impl Record for Activity {
    const COLLECTION: &'static str = "activities";

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn missing_required(&self) -> Option<&'static str> {
        if blank(&self.title) {
            return Some("title");
        }
        if blank(&self.description) {
            return Some("description");
        }
        None
    }
}

/// The single introduction/biography text. Not a collection: the backend
/// exposes only GET and PUT for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Introduction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub content: String,
}

#[derive(Tabled)]
pub struct EducationTableRow {
    pub id: u64,
    pub school: String,
    pub degree: String,
    pub period: String,
}

#[derive(Tabled)]
pub struct ExperienceTableRow {
    pub id: u64,
    pub company: String,
    pub position: String,
    pub period: String,
}

#[derive(Tabled)]
pub struct ProjectTableRow {
    pub id: u64,
    pub name: String,
    pub year: String,
    pub technologies: String,
}

#[derive(Tabled)]
pub struct SkillTableRow {
    pub category: String,
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Shared row shape for the dated collections (certifications, awards,
/// activities).
#[derive(Tabled)]
pub struct DatedTableRow {
    pub id: u64,
    pub name: String,
    pub date: String,
}
