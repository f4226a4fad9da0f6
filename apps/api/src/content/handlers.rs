//! One Axum handler per route. Handlers are thin: parse the path id,
//! sanitize the body, make exactly one store call, translate the result.
//!
//! Write responses are normalized across all resources: 201 `{"id"}` for a
//! create, 204 for an update or delete that matched, 404 envelope otherwise.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::{doc, Bson, Document};
use mongodb::results::InsertOneResult;
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::content::store::{
    self, ABOUT_ME, ACHIEVEMENT, BANNER_INTRO, EDUCATIONAL_QUALIFICATION, PROJECT, SKILLS,
    SOCIAL_LINKS,
};
use crate::errors::AppError;
use crate::models::content::{
    AboutMe, Achievement, BannerIntro, EducationalQualification, Project, Skill, SocialLink,
};
use crate::state::AppState;

/// Acknowledgment for every create: the store-assigned identifier.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: String,
}

impl From<InsertOneResult> for CreateResponse {
    fn from(result: InsertOneResult) -> Self {
        CreateResponse::from(result.inserted_id)
    }
}

impl From<Bson> for CreateResponse {
    fn from(inserted_id: Bson) -> Self {
        let id = match inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        CreateResponse { id }
    }
}

/// Shared PATCH/PUT path: partial merge of the body's fields onto the
/// document with this id.
async fn patch_resource(
    db: &Database,
    collection: &str,
    id: &str,
    body: Document,
) -> Result<StatusCode, AppError> {
    let oid = store::parse_object_id(id)?;
    let fields = store::sanitize_update(body)?;
    let result = store::update_by_id(db, collection, oid, fields).await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound(format!(
            "no document {id} in {collection}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_resource(
    db: &Database,
    collection: &str,
    id: &str,
) -> Result<StatusCode, AppError> {
    let oid = store::parse_object_id(id)?;
    let result = store::delete_by_id(db, collection, oid).await?;
    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!(
            "no document {id} in {collection}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Banner intro
// ---------------------------------------------------------------------------

/// GET /banner-intro
pub async fn list_banner_intro(
    State(state): State<AppState>,
) -> Result<Json<Vec<BannerIntro>>, AppError> {
    Ok(Json(store::list_all(&state.db, BANNER_INTRO).await?))
}

/// POST /banner-intro
pub async fn create_banner_intro(
    State(state): State<AppState>,
    Json(mut banner): Json<BannerIntro>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    banner.id = None;
    let result = store::insert_one(&state.db, BANNER_INTRO, &banner).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// Update payload for the banner. The only validated write in the API:
/// designation and description are required, image is merged only when the
/// request carries one.
#[derive(Debug, Deserialize)]
pub struct BannerIntroUpdate {
    pub designation: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

fn banner_update_fields(update: &BannerIntroUpdate) -> Result<Document, AppError> {
    let (designation, description) = match (&update.designation, &update.description) {
        (Some(d), Some(desc)) if !d.is_empty() && !desc.is_empty() => (d, desc),
        _ => {
            return Err(AppError::Validation(
                "designation and description are required".to_string(),
            ))
        }
    };

    let mut fields = doc! {
        "designation": designation.as_str(),
        "description": description.as_str(),
    };
    if let Some(image) = &update.image {
        fields.insert("image", image.as_str());
    }
    Ok(fields)
}

/// PATCH /banner-intro/:id
pub async fn update_banner_intro(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<BannerIntroUpdate>,
) -> Result<StatusCode, AppError> {
    let oid = store::parse_object_id(&id)?;
    let fields = banner_update_fields(&update)?;
    let result = store::update_by_id(&state.db, BANNER_INTRO, oid, fields).await?;
    if result.matched_count == 0 {
        return Err(AppError::NotFound(format!("banner intro {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Social links
// ---------------------------------------------------------------------------

/// GET /social-links
pub async fn list_social_links(
    State(state): State<AppState>,
) -> Result<Json<Vec<SocialLink>>, AppError> {
    Ok(Json(store::list_all(&state.db, SOCIAL_LINKS).await?))
}

/// POST /social-links
pub async fn create_social_link(
    State(state): State<AppState>,
    Json(mut link): Json<SocialLink>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    link.id = None;
    let result = store::insert_one(&state.db, SOCIAL_LINKS, &link).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /social-links/:id
pub async fn update_social_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, SOCIAL_LINKS, &id, body).await
}

/// DELETE /social-links/:id
pub async fn delete_social_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_resource(&state.db, SOCIAL_LINKS, &id).await
}

// ---------------------------------------------------------------------------
// About me
// ---------------------------------------------------------------------------

/// GET /about-me
pub async fn list_about_me(State(state): State<AppState>) -> Result<Json<Vec<AboutMe>>, AppError> {
    Ok(Json(store::list_all(&state.db, ABOUT_ME).await?))
}

/// POST /about-me
pub async fn create_about_me(
    State(state): State<AppState>,
    Json(mut about): Json<AboutMe>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    about.id = None;
    let result = store::insert_one(&state.db, ABOUT_ME, &about).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /about-me/:id
pub async fn update_about_me(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, ABOUT_ME, &id, body).await
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(store::list_all(&state.db, SKILLS).await?))
}

/// POST /skills
pub async fn create_skill(
    State(state): State<AppState>,
    Json(mut skill): Json<Skill>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    skill.id = None;
    let result = store::insert_one(&state.db, SKILLS, &skill).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /skills/:id
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, SKILLS, &id, body).await
}

// ---------------------------------------------------------------------------
// Educational qualification
// ---------------------------------------------------------------------------

/// GET /educational-qualification
pub async fn list_educational_qualifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<EducationalQualification>>, AppError> {
    Ok(Json(
        store::list_all(&state.db, EDUCATIONAL_QUALIFICATION).await?,
    ))
}

/// POST /educational-qualification
pub async fn create_educational_qualification(
    State(state): State<AppState>,
    Json(mut qualification): Json<EducationalQualification>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    qualification.id = None;
    let result = store::insert_one(&state.db, EDUCATIONAL_QUALIFICATION, &qualification).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /educational-qualification/:id
pub async fn update_educational_qualification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, EDUCATIONAL_QUALIFICATION, &id, body).await
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// GET /achievements
pub async fn list_achievements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Achievement>>, AppError> {
    Ok(Json(store::list_all(&state.db, ACHIEVEMENT).await?))
}

/// POST /achievements
pub async fn create_achievement(
    State(state): State<AppState>,
    Json(mut achievement): Json<Achievement>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    achievement.id = None;
    let result = store::insert_one(&state.db, ACHIEVEMENT, &achievement).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /achievements/:id (the admin dashboard also sends PUT; both are a
/// partial merge)
pub async fn update_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, ACHIEVEMENT, &id, body).await
}

/// DELETE /achievements/:id
pub async fn delete_achievement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    delete_resource(&state.db, ACHIEVEMENT, &id).await
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// GET /project
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(store::list_all(&state.db, PROJECT).await?))
}

/// GET /project/:id — returns `null` (not 404) for a well-formed id with no
/// document, matching what the detail page expects.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Project>>, AppError> {
    let oid = store::parse_object_id(&id)?;
    Ok(Json(store::find_by_id(&state.db, PROJECT, oid).await?))
}

/// POST /project
pub async fn create_project(
    State(state): State<AppState>,
    Json(mut project): Json<Project>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    project.id = None;
    let result = store::insert_one(&state.db, PROJECT, &project).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

/// PATCH /project/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<StatusCode, AppError> {
    patch_resource(&state.db, PROJECT, &id, body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn update(designation: Option<&str>, description: Option<&str>) -> BannerIntroUpdate {
        BannerIntroUpdate {
            designation: designation.map(String::from),
            description: description.map(String::from),
            image: None,
        }
    }

    #[test]
    fn test_banner_update_requires_designation() {
        let err = banner_update_fields(&update(None, Some("Builds things"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_banner_update_requires_description() {
        let err = banner_update_fields(&update(Some("Engineer"), None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_banner_update_rejects_empty_designation() {
        let err = banner_update_fields(&update(Some(""), Some("Builds things"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_banner_update_merges_only_named_fields() {
        let fields =
            banner_update_fields(&update(Some("Senior Engineer"), Some("Builds things"))).unwrap();
        assert_eq!(fields.get_str("designation").unwrap(), "Senior Engineer");
        assert_eq!(fields.get_str("description").unwrap(), "Builds things");
        assert!(
            !fields.contains_key("image"),
            "image must be omitted when the request has none"
        );
    }

    #[test]
    fn test_banner_update_includes_image_when_present() {
        let mut req = update(Some("Engineer"), Some("Builds things"));
        req.image = Some("https://x/me.png".to_string());
        let fields = banner_update_fields(&req).unwrap();
        assert_eq!(fields.get_str("image").unwrap(), "https://x/me.png");
    }

    #[test]
    fn test_create_response_renders_object_id_as_hex() {
        let oid = ObjectId::new();
        let response = CreateResponse::from(Bson::ObjectId(oid));
        assert_eq!(response.id, oid.to_hex());
    }
}
