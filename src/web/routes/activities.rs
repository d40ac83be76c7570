use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityStore;
use crate::error::Error;
use crate::models::DirectorySnapshot;
use crate::services::activities_service;
use crate::services::signup_service::{self, SignupConfirmation};

pub async fn activities_handler(
    State(store): State<Arc<ActivityStore>>,
) -> Json<DirectorySnapshot> {
    Json(activities_service::list_activities(&store))
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    State(store): State<Arc<ActivityStore>>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<SignupConfirmation>, Error> {
    let Query(query) = query.map_err(|e| Error::InvalidRequest(e.body_text()))?;
    signup_service::sign_up(&store, &activity_name, &query.email).map(Json)
}
