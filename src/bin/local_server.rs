use std::sync::{Arc, RwLock};

use road_rated::camera::snapshot::{CameraScorer, SnapshotClient};
use road_rated::config::DashboardConfig;
use road_rated::data_types::geo::GeoPoint;
use road_rated::data_types::rating::RoadGrade;
use road_rated::processors::brightness::BrightnessScorer;
use road_rated::processors::ScoreError;
use road_rated::render::html;
use road_rated::store::path_store::StoreError;
use road_rated::util::geo::GeoUtils;
use road_rated::util::DateTimeUtils;
use road_rated::{CaptureError, Session};
use rocket::http::{ContentType, Status};

#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response, State};
use serde_derive::{Deserialize, Serialize};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin-Resource-Sharing Fairing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, PATCH, PUT, DELETE, HEAD, OPTIONS, GET",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[options("/<_..>")]
fn all_options() {
    /* Intentionally left empty */
}

struct ServerState {
    session: Arc<RwLock<Session>>,
    config: DashboardConfig,
}

#[derive(Deserialize)]
struct RouteRequest {
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
    segments: Option<u32>,
}

#[derive(Serialize)]
struct SessionStatus {
    segments_total: u32,
    captured: u32,
    remaining: u32,
    route_km: f64,
    camera_active: bool,
    started_at: String,
}

#[derive(Serialize)]
struct FrameScore {
    score: f64,
    grade: RoadGrade,
}

#[derive(Serialize)]
struct CameraState {
    camera_active: bool,
}

fn json_response(status: Status, body: String) -> (Status, (ContentType, String)) {
    (status, (ContentType::JSON, body))
}

fn error_response(status: Status, message: String) -> (Status, (ContentType, String)) {
    (status, (ContentType::Text, message))
}

fn capture_error_response(err: CaptureError) -> (Status, (ContentType, String)) {
    let status = match &err {
        CaptureError::Store(StoreError::RouteExhausted) => Status::Conflict,
        CaptureError::Store(StoreError::InvalidCoordinate(_)) => Status::UnprocessableEntity,
        CaptureError::Score(ScoreError::InvalidFrame(_)) => Status::UnprocessableEntity,
        CaptureError::Score(ScoreError::Unavailable(_)) => Status::ServiceUnavailable,
    };

    error_response(status, err.to_string())
}

#[get("/map")]
fn map_page(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    if state.config.gmap_api_key.is_empty() {
        return error_response(
            Status::Ok,
            "No maps API key configured. Set GMAP_API_KEY or gmap_api_key in settings.toml."
                .to_string(),
        );
    }

    let page = {
        let session = state.session.read().unwrap();
        html::map_page(&state.config.gmap_api_key, &session.map_payload())
    };

    (Status::Ok, (ContentType::HTML, page))
}

#[get("/payload")]
fn payload(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    let session = state.session.read().unwrap();
    json_response(
        Status::Ok,
        serde_json::to_string(&session.map_payload()).unwrap(),
    )
}

#[get("/path")]
fn path(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    let session = state.session.read().unwrap();
    json_response(
        Status::Ok,
        serde_json::to_string(session.current_path()).unwrap(),
    )
}

#[get("/route")]
fn route(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    let session = state.session.read().unwrap();
    json_response(
        Status::Ok,
        serde_json::to_string(session.current_route()).unwrap(),
    )
}

#[get("/status")]
fn status(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    let session = state.session.read().unwrap();
    let active_route = session.current_route();

    let status = SessionStatus {
        segments_total: active_route.segment_count,
        captured: session.captured_count(),
        remaining: session.remaining_segments(),
        route_km: GeoUtils::distance(
            active_route.start.to_coord(),
            active_route.end.to_coord(),
        ),
        camera_active: session.camera_active(),
        started_at: DateTimeUtils::timestamp_to_str(session.started_at()),
    };

    json_response(Status::Ok, serde_json::to_string(&status).unwrap())
}

#[post("/route", data = "<query>")]
fn declare_route(state: &State<ServerState>, query: String) -> (Status, (ContentType, String)) {
    let request: RouteRequest = match serde_json::from_str(&query) {
        Ok(parsed) => parsed,
        Err(err) => return error_response(Status::BadRequest, err.to_string()),
    };

    let segments = request.segments.unwrap_or(state.config.segment_count);
    let mut session = state.session.write().unwrap();

    match session.declare_route(
        GeoPoint::new(request.start_lat, request.start_lon),
        GeoPoint::new(request.end_lat, request.end_lon),
        segments,
    ) {
        Ok(()) => json_response(
            Status::Ok,
            serde_json::to_string(session.current_route()).unwrap(),
        ),
        Err(err) => error_response(Status::UnprocessableEntity, err.to_string()),
    }
}

#[post("/capture")]
async fn capture(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    // The camera strategy blocks on the snapshot GET, so hop off the
    // async workers for the whole capture
    let session = state.session.clone();
    let result = tokio::task::spawn_blocking(move || session.write().unwrap().capture_next()).await;

    match result {
        Ok(Ok(sample)) => json_response(Status::Ok, serde_json::to_string(&sample).unwrap()),
        Ok(Err(err)) => capture_error_response(err),
        Err(join_err) => error_response(Status::InternalServerError, join_err.to_string()),
    }
}

#[get("/frame/score")]
async fn frame_score(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    let camera_on = state.session.read().unwrap().camera_active();
    if !camera_on {
        return error_response(Status::Conflict, "camera feed is off".to_string());
    }

    let url = state.config.camera_url.clone();
    let result = tokio::task::spawn_blocking(move || {
        let frame = SnapshotClient::new(url).fetch().map_err(|e| e.to_string())?;
        let mean = BrightnessScorer::mean_luminance(&frame).map_err(|e| e.to_string())?;

        Ok::<FrameScore, String>(FrameScore {
            score: BrightnessScorer::score_of_mean(mean),
            grade: BrightnessScorer::grade_of_mean(mean),
        })
    })
    .await;

    match result {
        Ok(Ok(frame_score)) => {
            json_response(Status::Ok, serde_json::to_string(&frame_score).unwrap())
        }
        Ok(Err(message)) => error_response(Status::BadGateway, message),
        Err(join_err) => error_response(Status::InternalServerError, join_err.to_string()),
    }
}

#[post("/camera/start")]
fn camera_start(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    state.session.write().unwrap().start_camera();
    json_response(
        Status::Ok,
        serde_json::to_string(&CameraState {
            camera_active: true,
        })
        .unwrap(),
    )
}

#[post("/camera/stop")]
fn camera_stop(state: &State<ServerState>) -> (Status, (ContentType, String)) {
    state.session.write().unwrap().stop_camera();
    json_response(
        Status::Ok,
        serde_json::to_string(&CameraState {
            camera_active: false,
        })
        .unwrap(),
    )
}

#[launch]
fn rocket() -> _ {
    let config = DashboardConfig::load();

    let session = if config.capture_from_camera {
        Session::with_score_source(
            &config,
            Box::new(CameraScorer::new(SnapshotClient::new(
                config.camera_url.clone(),
            ))),
        )
    } else {
        Session::new(&config)
    };

    rocket::build()
        .attach(Cors)
        .manage(ServerState {
            session: Arc::new(RwLock::new(session)),
            config,
        })
        .mount(
            "/",
            routes![
                map_page,
                payload,
                path,
                route,
                status,
                declare_route,
                capture,
                frame_score,
                camera_start,
                camera_stop,
                all_options
            ],
        )
}
