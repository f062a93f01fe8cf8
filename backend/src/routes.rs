use rocket::{State, get, post, http::Status, serde::json::Json};
use tracing::{debug, info, warn, instrument};
use shared::{models::*, store::DesignStore};
use crate::{
    error::ApiError,
    store::{lock, SharedStore},
};

pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: DesignStore) -> Self {
        Self { store: SharedStore::new(store) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DesignStore::seeded())
    }
}

#[get("/designs")]
pub async fn list_designs(state: &State<AppState>) -> Result<Json<Vec<Design>>, ApiError> {
    let store = lock(&state.store)?;
    Ok(Json(store.list().to_vec()))
}

#[get("/designs/<id>")]
pub async fn get_design(state: &State<AppState>, id: &str) -> Result<Json<Design>, ApiError> {
    let store = lock(&state.store)?;
    store.get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state, request), fields(target_id = %request.target_id))]
#[post("/vote", format = "json", data = "<request>")]
pub async fn submit_vote(
    state: &State<AppState>,
    request: Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let previous = request.previous();
    debug!(previous_id = ?previous, "Submitting vote");

    let mut store = lock(&state.store)?;
    let response = store.vote(&request.target_id, previous);

    if response.success {
        info!(total_votes = store.total_votes(), "{}", response.message);
    } else {
        warn!("Vote rejected for unknown design {:?}", request.target_id);
    }
    Ok(Json(response))
}

#[instrument(skip(state, request), fields(previous_id = %request.previous_id))]
#[post("/retract", format = "json", data = "<request>")]
pub async fn retract_vote(
    state: &State<AppState>,
    request: Json<RetractRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let mut store = lock(&state.store)?;
    let response = store.withdraw(&request.previous_id);

    if response.success {
        info!(total_votes = store.total_votes(), "{}", response.message);
    } else {
        warn!("Retraction rejected for unknown design {:?}", request.previous_id);
    }
    Ok(Json(response))
}
