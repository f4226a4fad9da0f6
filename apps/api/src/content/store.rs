//! Thin data-access layer over the content collections.
//!
//! Every function maps to exactly one driver call; there are no retries,
//! transactions, or caching. Handlers stay free of query syntax and the
//! collection name is always passed explicitly so the functions are usable
//! for any resource.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Database;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;

// Collection names as created by the original deployment.
pub const BANNER_INTRO: &str = "bannerIntro";
pub const SOCIAL_LINKS: &str = "socialLinks";
pub const ABOUT_ME: &str = "aboutMe";
pub const SKILLS: &str = "skills";
pub const EDUCATIONAL_QUALIFICATION: &str = "educationalQualification";
pub const PROJECT: &str = "project";
pub const ACHIEVEMENT: &str = "achievement";

/// Returns the full, unfiltered collection in natural store order.
pub async fn list_all<T>(db: &Database, collection: &str) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = db.collection::<T>(collection).find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
}

/// Inserts one document verbatim; the store assigns the identifier.
pub async fn insert_one<T>(
    db: &Database,
    collection: &str,
    document: &T,
) -> Result<InsertOneResult, AppError>
where
    T: Serialize + Send + Sync,
{
    Ok(db.collection::<T>(collection).insert_one(document).await?)
}

/// Partial merge: `$set`s exactly the given fields on the matched document,
/// leaving all others untouched. A zero `matched_count` in the result means
/// no document has this id.
pub async fn update_by_id(
    db: &Database,
    collection: &str,
    id: ObjectId,
    fields: Document,
) -> Result<UpdateResult, AppError> {
    Ok(db
        .collection::<Document>(collection)
        .update_one(doc! { "_id": id }, doc! { "$set": fields })
        .await?)
}

pub async fn find_by_id<T>(
    db: &Database,
    collection: &str,
    id: ObjectId,
) -> Result<Option<T>, AppError>
where
    T: DeserializeOwned + Send + Sync,
{
    Ok(db
        .collection::<T>(collection)
        .find_one(doc! { "_id": id })
        .await?)
}

pub async fn delete_by_id(
    db: &Database,
    collection: &str,
    id: ObjectId,
) -> Result<DeleteResult, AppError> {
    Ok(db
        .collection::<Document>(collection)
        .delete_one(doc! { "_id": id })
        .await?)
}

/// Parses a path parameter into a store identifier; a malformed value is a
/// client error, never a server fault.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

/// Prepares a client-supplied patch body for `$set`: the identifier is never
/// patchable, and an empty patch is rejected rather than sent to the store
/// (an empty `$set` is a driver error).
pub fn sanitize_update(mut fields: Document) -> Result<Document, AppError> {
    fields.remove("_id");
    if fields.is_empty() {
        return Err(AppError::Validation(
            "update body must contain at least one field".to_string(),
        ));
    }
    Ok(fields)
}
