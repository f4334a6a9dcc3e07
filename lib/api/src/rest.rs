use crate::error::ApiError;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Service;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{guard, web, App, HttpResponse, HttpServer};
use futures_util::FutureExt;
use schoolfinder_core::{
    validate, validate_entry, validate_paging, Catalog, CatalogSource, CatalogWriter, Entry,
    EntryCandidate, EntryId, ProximityQuery, ProximitySearch, RankedEntry,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;

type SharedCatalog = web::Data<Arc<dyn Catalog>>;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Served at `/` when the directory exists
    pub static_dir: Option<PathBuf>,
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

#[derive(Deserialize)]
struct AddSchoolRequest {
    name: Option<serde_json::Value>,
    address: Option<serde_json::Value>,
    latitude: Option<serde_json::Value>,
    longitude: Option<serde_json::Value>,
}

impl AddSchoolRequest {
    fn into_candidate(self) -> EntryCandidate {
        // non-string names and addresses count as missing
        let text = |v: Option<serde_json::Value>| match v {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        };
        EntryCandidate {
            name: text(self.name),
            address: text(self.address),
            latitude: self.latitude.into(),
            longitude: self.longitude.into(),
        }
    }
}

/// Form-encoded admission body; every field arrives as text
#[derive(Deserialize)]
struct AddSchoolForm {
    name: Option<String>,
    address: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
}

impl AddSchoolForm {
    fn into_candidate(self) -> EntryCandidate {
        EntryCandidate {
            name: self.name,
            address: self.address,
            latitude: self.latitude.into(),
            longitude: self.longitude.into(),
        }
    }
}

#[derive(Deserialize)]
struct ListSchoolsQuery {
    latitude: Option<String>,
    longitude: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Serialize)]
struct SchoolInfo {
    id: EntryId,
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl From<Entry> for SchoolInfo {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            latitude: entry.coordinate.latitude(),
            longitude: entry.coordinate.longitude(),
            name: entry.name,
            address: entry.address,
        }
    }
}

#[derive(Serialize)]
struct SchoolItem {
    #[serde(flatten)]
    school: SchoolInfo,
    #[serde(rename = "distanceKm")]
    distance_km: f64,
}

impl From<RankedEntry> for SchoolItem {
    fn from(ranked: RankedEntry) -> Self {
        Self {
            school: ranked.entry.into(),
            distance_km: ranked.distance_km,
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(catalog: Arc<dyn Catalog>, config: ServerConfig) -> std::io::Result<()> {
        let static_dir = config.static_dir.clone().filter(|dir| dir.is_dir());
        match &static_dir {
            Some(dir) => tracing::info!("Serving static files from {:?}", dir),
            None => tracing::info!("No static directory, serving API only"),
        }
        let json_limit = config.json_limit;

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            let mut app = App::new()
                .wrap(cors)
                .wrap_fn(|req, srv| {
                    let method = req.method().clone();
                    let path = req.path().to_string();
                    let started = Instant::now();
                    srv.call(req).map(move |res| {
                        if let Ok(res) = &res {
                            tracing::info!(
                                %method,
                                %path,
                                status = res.status().as_u16(),
                                elapsed_ms = started.elapsed().as_millis() as u64,
                                "request"
                            );
                        }
                        res
                    })
                })
                .app_data(web::Data::new(catalog.clone()))
                .app_data(json_config(json_limit))
                .app_data(form_config(json_limit))
                .configure(configure);

            // registered last so API routes win
            if let Some(dir) = &static_dir {
                app = app.service(Files::new("/", dir.clone()).index_file("index.html"));
            }
            app
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    }
}

/// Body extractor settings: size cap and a JSON error for malformed bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected request body");
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid JSON"
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Form body extractor settings, mirroring [`json_config`]
pub fn form_config(limit: usize) -> web::FormConfig {
    web::FormConfig::default().limit(limit).error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected form body");
        let response = HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid form data"
        }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

fn is_form(ctx: &guard::GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::resource("/addSchool")
                .route(web::post().guard(guard::fn_guard(is_form)).to(add_school_form))
                .route(web::post().to(add_school)),
        )
        .route("/listSchools", web::get().to(list_schools));
}

async fn health(catalog: SharedCatalog) -> HttpResponse {
    let catalog = catalog.get_ref().clone();
    match web::block(move || catalog.ping()).await {
        Ok(Ok(())) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "status": "unavailable" }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({ "status": "unavailable" }))
        }
    }
}

async fn add_school(
    catalog: SharedCatalog,
    req: web::Json<AddSchoolRequest>,
) -> Result<HttpResponse, ApiError> {
    admit(catalog, req.into_inner().into_candidate()).await
}

async fn add_school_form(
    catalog: SharedCatalog,
    form: web::Form<AddSchoolForm>,
) -> Result<HttpResponse, ApiError> {
    admit(catalog, form.into_inner().into_candidate()).await
}

async fn admit(catalog: SharedCatalog, candidate: EntryCandidate) -> Result<HttpResponse, ApiError> {
    let entry = validate_entry(&candidate)?;
    tracing::debug!(name = %entry.name, address = %entry.address, "admitting school");

    let catalog = catalog.get_ref().clone();
    let created = web::block(move || catalog.insert(entry)).await??;

    tracing::info!(id = %created.id, "school added");
    Ok(HttpResponse::Created().json(SchoolInfo::from(created)))
}

async fn list_schools(
    catalog: SharedCatalog,
    query: web::Query<ListSchoolsQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let reference = validate(&query.latitude.into(), &query.longitude.into())?;
    let paging = validate_paging(&query.page.into(), &query.limit.into())?;
    let query = ProximityQuery::new(reference, paging);

    let search = ProximitySearch::new(catalog.get_ref().clone());
    let page = web::block(move || search.search(&query)).await??;

    tracing::debug!(
        total = page.total,
        returned = page.items.len(),
        page = page.page,
        "listed schools"
    );
    Ok(HttpResponse::Ok().json(page.map_items(SchoolItem::from)))
}
