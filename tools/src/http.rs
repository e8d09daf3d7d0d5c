//! Minimal blocking HTTP front end over `api::dispatch`.
//!
//! Routes:
//!   GET  /catalog
//!   GET  /investments
//!   GET  /investments/<id>
//!   POST /calculator
//!   GET  /subsidies?build_year=..&energy_label=..&heating=..&insulation=a,b
//!   POST /analyse
//!   POST /report
//!   POST /chat      {"messages": [{"role": "user", "content": ".."}]}

use anyhow::Result;
use energy_advice_core::{
    advice::ChatMessage,
    api::{dispatch, ApiRequest, CalculatorRequest},
    config::AdviceConfig,
    error::{AdviceError, AdviceResult},
};
use serde::Deserialize;
use serde_json::json;
use std::io::Read;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

#[derive(Deserialize)]
struct ChatBody {
    messages: Vec<ChatMessage>,
}

pub fn serve(port: u16, config: &AdviceConfig) -> Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let server = Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("Cannot bind {addr}: {e}"))?;
    log::info!("http: listening on http://{addr}");

    for mut request in server.incoming_requests() {
        if request.method() == &Method::Options {
            respond(request, 204, String::new());
            continue;
        }

        let url = request.url().to_string();
        let mut parts = url.splitn(2, '?');
        let path = parts.next().unwrap_or("").trim_end_matches('/').to_string();
        let query = parts.next().unwrap_or("").to_string();
        let method = request.method().clone();

        let routed = match route(&method, &path, &query, &mut request) {
            Ok(Some(api_request)) => dispatch(&api_request, config, None),
            Ok(None) => {
                log::warn!("http: no route for {method} {path}");
                respond(request, 404, json!({ "error": "Not found" }).to_string());
                continue;
            }
            Err(e) => Err(e),
        };

        match routed {
            Ok(payload) => respond(request, 200, payload.to_string()),
            Err(e) => {
                let status = status_for(&e);
                if status >= 500 {
                    log::error!("http: {method} {path} failed: {e}");
                } else {
                    log::warn!("http: {method} {path} -> {status}: {e}");
                }
                respond(request, status, json!({ "error": e.to_string() }).to_string());
            }
        }
    }
    Ok(())
}

fn route(
    method: &Method,
    path: &str,
    query: &str,
    request: &mut Request,
) -> AdviceResult<Option<ApiRequest>> {
    let api_request = match (method, path) {
        (Method::Get, "/catalog") => ApiRequest::Catalog,
        (Method::Get, "/investments") => ApiRequest::Calculator(CalculatorRequest::default()),
        (Method::Get, p) if p.starts_with("/investments/") => ApiRequest::Investment {
            id: p.trim_start_matches("/investments/").to_string(),
        },
        (Method::Post, "/calculator") => ApiRequest::Calculator(read_json(request)?),
        (Method::Get, "/subsidies") => ApiRequest::Subsidies { query: query.to_string() },
        (Method::Post, "/analyse") => ApiRequest::Analyse(read_json(request)?),
        (Method::Post, "/report") => ApiRequest::Report(read_json(request)?),
        (Method::Post, "/chat") => {
            let body: ChatBody = read_json(request)?;
            ApiRequest::Chat { messages: body.messages }
        }
        _ => return Ok(None),
    };
    Ok(Some(api_request))
}

fn read_json<T: serde::de::DeserializeOwned>(request: &mut Request) -> AdviceResult<T> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| AdviceError::InvalidRequest {
            reason: format!("unreadable body: {e}"),
        })?;
    if body.trim().is_empty() {
        body = "{}".into();
    }
    Ok(serde_json::from_str(&body)?)
}

fn status_for(error: &AdviceError) -> u16 {
    if error.is_not_found() {
        404
    } else if error.is_client_error() {
        400
    } else if error.is_unavailable() {
        503
    } else {
        500
    }
}

fn respond(request: Request, status: u16, body: String) {
    let mut response = Response::from_string(body).with_status_code(StatusCode(status));
    let headers = [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET,POST,OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ];
    for (name, value) in headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response = response.with_header(header);
        }
    }
    if let Err(e) = request.respond(response) {
        log::warn!("http: failed to send response: {e}");
    }
}
