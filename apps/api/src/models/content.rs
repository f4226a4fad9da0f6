//! Document types for the portfolio content collections.
//!
//! The store is schemaless and the admin client submits whatever its forms
//! hold, so every documented field is optional and unrecognized fields are
//! carried through the flattened map instead of being dropped. Serialization
//! skips absent fields so a create inserts exactly what the client sent.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Landing banner. Typically a singleton; the client renders the first
/// document only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerIntro {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Platform name, e.g. "GitHub".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

/// Typically a singleton; the client renders the first document only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programming_journey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalQualification {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    /// Display range, e.g. "2019 - 2023".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form text as entered in the admin form, not a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_skill_create_payload_round_trips() {
        let skill: Skill =
            serde_json::from_value(json!({ "name": "Go", "logo": "https://x/go.png" })).unwrap();
        assert_eq!(skill.name.as_deref(), Some("Go"));
        assert_eq!(skill.logo.as_deref(), Some("https://x/go.png"));
        assert!(skill.id.is_none());

        let back = serde_json::to_value(&skill).unwrap();
        assert_eq!(back, json!({ "name": "Go", "logo": "https://x/go.png" }));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let skill: Skill = serde_json::from_value(json!({
            "name": "Rust",
            "proficiency": "expert",
            "yearsUsed": 3
        }))
        .unwrap();
        assert_eq!(skill.extra.get_str("proficiency").unwrap(), "expert");

        let back = serde_json::to_value(&skill).unwrap();
        assert_eq!(back["proficiency"], "expert");
        assert_eq!(back["yearsUsed"], 3);
    }

    #[test]
    fn test_absent_fields_are_not_serialized_as_null() {
        let banner: BannerIntro =
            serde_json::from_value(json!({ "designation": "Engineer" })).unwrap();
        let back = serde_json::to_value(&banner).unwrap();
        let map = back.as_object().unwrap();
        assert_eq!(map.len(), 1, "only submitted fields should be stored");
        assert!(!map.contains_key("_id"));
        assert!(!map.contains_key("image"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let edu: EducationalQualification = serde_json::from_value(json!({
            "instituteName": "MIT",
            "degree": "BSc",
            "yearRange": "2019 - 2023",
            "achievements": ["Dean's list"]
        }))
        .unwrap();
        assert_eq!(edu.institute_name.as_deref(), Some("MIT"));
        assert_eq!(edu.year_range.as_deref(), Some("2019 - 2023"));
        assert_eq!(edu.achievements.as_deref(), Some(&["Dean's list".to_string()][..]));

        let back = serde_json::to_value(&edu).unwrap();
        assert!(back.get("instituteName").is_some());
        assert!(back.get("institute_name").is_none());
    }

    #[test]
    fn test_project_fields_map_from_admin_form() {
        let project: Project = serde_json::from_value(json!({
            "projectName": "Portfolio",
            "techStack": "React, Express, MongoDB",
            "liveLink": "https://example.com",
            "githubLink": "https://github.com/x/portfolio",
            "challenges": "Deployment",
            "improvements": "Tests"
        }))
        .unwrap();
        assert_eq!(project.project_name.as_deref(), Some("Portfolio"));
        assert_eq!(project.tech_stack.as_deref(), Some("React, Express, MongoDB"));
        assert!(project.extra.is_empty());
    }

    #[test]
    fn test_stored_object_id_round_trips_through_bson() {
        let oid = ObjectId::new();
        let doc = mongodb::bson::doc! { "_id": oid, "name": "Achievement" };
        let achievement: Achievement = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(achievement.id, Some(oid));
        assert_eq!(achievement.name.as_deref(), Some("Achievement"));

        let json: Value = serde_json::to_value(&achievement).unwrap();
        assert_eq!(json["_id"]["$oid"], oid.to_hex());
    }
}
