use foliocli::types::{Activity, Category, Education, Project, Record, Skill};
use serde_json::json;

#[test]
fn test_drafts_serialize_without_an_id() {
    let draft = Project {
        name: "Portfolio".to_string(),
        description: "the site itself".to_string(),
        technologies: vec!["Rust".to_string(), "React".to_string()],
        year: "2024".to_string(),
        ..Project::default()
    };

    let body = serde_json::to_value(&draft).unwrap();
    assert!(body.get("id").is_none());
    assert_eq!(body["name"], "Portfolio");
    // wire names are camelCase
    assert!(body.get("imageUrl").is_some());
    assert!(body.get("projectUrl").is_some());
    assert_eq!(body["technologies"], json!(["Rust", "React"]));
}

#[test]
fn test_records_deserialize_from_backend_payloads() {
    let payload = json!({
        "id": 3,
        "school": "Feng Chia University",
        "degree": "Information Engineering",
        "startDate": "2019/9",
        "endDate": "2023/6",
        "city": "Taichung"
    });

    let education: Education = serde_json::from_value(payload).unwrap();
    assert_eq!(education.id(), Some(3));
    assert_eq!(education.start_date, "2019/9");
    // fields the payload omits come back empty rather than failing
    assert_eq!(education.district, "");
    assert_eq!(education.gpa, "");
}

#[test]
fn test_skill_category_link_is_optional_on_the_wire() {
    // category listings nest skills without a categoryId
    let nested: Skill = serde_json::from_value(json!({
        "id": 9,
        "name": "Rust",
        "description": "systems work"
    }))
    .unwrap();
    assert_eq!(nested.category_id, None);

    // mutation bodies carry it
    let draft = Skill {
        name: "Rust".to_string(),
        category_id: Some(2),
        ..Skill::default()
    };
    let body = serde_json::to_value(&draft).unwrap();
    assert_eq!(body["categoryId"], 2);
}

#[test]
fn test_category_listing_nests_skills() {
    let payload = json!([
        {
            "id": 1,
            "name": "Backend",
            "skills": [
                { "id": 9, "name": "Rust", "description": "" },
                { "id": 10, "name": "Spring Boot", "description": "" }
            ]
        },
        { "id": 2, "name": "Frontend", "skills": [] }
    ]);

    let categories: Vec<Category> = serde_json::from_value(payload).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].skills.len(), 2);
    assert_eq!(categories[0].skills[1].name, "Spring Boot");
    assert!(categories[1].skills.is_empty());
}

#[test]
fn test_missing_required_reports_the_first_empty_field() {
    let mut activity = Activity::default();
    assert_eq!(activity.missing_required(), Some("title"));

    activity.title = "Volunteering".to_string();
    assert_eq!(activity.missing_required(), Some("description"));

    activity.description = "Taught a weekend coding class".to_string();
    assert_eq!(activity.missing_required(), None);

    // whitespace does not count as presence
    activity.title = "   ".to_string();
    assert_eq!(activity.missing_required(), Some("title"));
}
