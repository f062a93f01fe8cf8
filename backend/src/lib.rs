pub mod routes;
pub mod store;
pub mod cors;
pub mod error;
pub mod config;
pub mod catchers;
pub use shared::{models::*, error::*};
pub use shared::store::{DesignStore, StoreError, VotingError};

use rocket::{Build, Rocket, routes, catchers};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, get_design, list_designs, retract_vote, submit_vote, AppState},
};

/// The API without the static gallery, mounted under `/api`.
pub fn app(state: AppState, cors: CORS) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                list_designs,
                get_design,
                submit_vote,
                retract_vote,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable,
                internal_error
            ],
        )
}
