//! HTTP response helpers.

use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    send(request, status, HTML, body)
}

pub fn respond_not_found(request: Request) -> Result<()> {
    send(request, 404, PLAIN, "404 Not Found".into())
}

pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_string("405 Method Not Allowed")
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN))
        .with_header(make_header("Allow", "GET, POST"));
    request.respond(response)?;
    Ok(())
}

pub fn respond_payload_too_large(request: Request) -> Result<()> {
    send(request, 413, PLAIN, "413 Payload Too Large".into())
}

pub fn respond_server_error(request: Request, error: &anyhow::Error) -> Result<()> {
    send(request, 500, PLAIN, format!("500 Internal Server Error\n\n{error:#}"))
}

fn send(request: Request, status: u16, content_type: &'static str, body: String) -> Result<()> {
    let response = Response::from_string(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is valid")
}
