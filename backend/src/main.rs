use backend::{app, config::AppConfig, cors::CORS, routes::AppState};
use rocket::{routes, fs::NamedFile};
use shuttle_runtime::CustomError;
use tracing::info;
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>")]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting design vote server");

    let config = AppConfig::load(|key| secret_store.get(key));
    let store = config.store();
    info!("🗳️ Serving {} designs", store.len());

    let temp_dir = std::env::temp_dir().join(format!("design_vote_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    STATIC_DIR.extract(&temp_dir).map_err(CustomError::new)?;

    let rocket = app(AppState::new(store), CORS::new(config.allowed_origin.clone()))
        .manage(temp_dir)
        .mount("/", routes![spa_handler]);

    Ok(rocket.into())
}
