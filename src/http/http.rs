use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::types::{HttpFailureResponse, HttpQueryMap};
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::{bencode_bytes, bencode_map};

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one HTTP listener and returns its handle with the future running it.
///
/// Signals are left to the caller, which stops the server through the handle.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let worker_threads = http_server_object.threads as usize;
    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object),
    });

    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };

    let query_map_result = parse_query(Some(request.query_string().to_string()));
    let query_map = match http_service_query_hashing(query_map_result) {
        Ok(result) => result,
        Err(err) => return err,
    };

    let tracker = &data.torrent_tracker;
    let announce = match tracker.validate_announce(ip, query_map) {
        Ok(announce) => announce,
        Err(error) => {
            debug!("[HTTP] Invalid announce from {}: {}", ip, error);
            return http_service_failure(HttpResponse::Ok(), &error.to_string());
        }
    };

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(tracker.announce(&announce))
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    http_service_failure(HttpResponse::NotFound(), "unknown request")
}

/// A `text/plain` response carrying a bencoded `failure reason`.
pub fn http_service_failure(mut builder: actix_web::HttpResponseBuilder, reason: &str) -> HttpResponse
{
    builder.content_type(ContentType::plaintext()).body(bencode_map! {
        "failure reason" => bencode_bytes!(reason)
    }.encode())
}

/// The client address: the configured real-IP header when present, otherwise the socket peer.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, http_trackers_config: &HttpTrackersConfig) -> Result<IpAddr, ()>
{
    if !http_trackers_config.real_ip.is_empty() {
        if let Some(header) = request.headers().get(http_trackers_config.real_ip.as_str()) {
            let value = header.to_str().map_err(|_| ())?;
            return IpAddr::from_str(value.trim()).map_err(|_| ());
        }
    }
    request.peer_addr().map(|addr| addr.ip()).ok_or(())
}

pub fn http_validate_ip(request: &HttpRequest, data: &Data<Arc<HttpServiceData>>) -> Result<IpAddr, HttpFailureResponse>
{
    http_service_retrieve_remote_ip(request, &data.http_trackers_config)
        .map_err(|_| http_service_failure(HttpResponse::Ok(), "unknown origin ip"))
}

pub fn http_service_query_hashing(query_map_result: Result<HttpQueryMap, CustomError>) -> Result<HttpQueryMap, HttpFailureResponse>
{
    query_map_result.map_err(|e| http_service_failure(HttpResponse::Ok(), &e.to_string()))
}
