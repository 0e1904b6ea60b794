//! Admin settings server.
//!
//! `GET /` renders the form, `POST /` saves a submission and renders the form
//! again with a notice. Requests are handled one at a time.

mod lifecycle;
mod response;

use crate::admin::{SettingsForm, render_document};
use crate::config::SettingsStore;
use crate::log;
use crate::plugin::SeoPlugin;
use anyhow::{Context, Result};
use std::io::{self, Read};
use std::net::IpAddr;
use tiny_http::{Method, Request, Server};

/// Largest accepted form body.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// What to do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    ShowForm,
    SubmitForm,
    MethodNotAllowed,
    NotFound,
}

fn route(method: &Method, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    if path != "/" {
        return Route::NotFound;
    }
    match method {
        Method::Get | Method::Head => Route::ShowForm,
        Method::Post => Route::SubmitForm,
        _ => Route::MethodNotAllowed,
    }
}

/// Bind and run the request loop (blocking).
pub fn serve_admin(store: SettingsStore, interface: IpAddr, port: u16) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(interface, port)?;
    log!("serve"; "http://{}", addr);

    let plugin = SeoPlugin::new(store);
    run_request_loop(&server, &plugin);
    Ok(())
}

fn run_request_loop(server: &Server, plugin: &SeoPlugin) {
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, plugin) {
            log!("serve"; "request error: {e}");
        }
    }
}

fn handle_request(mut request: Request, plugin: &SeoPlugin) -> Result<()> {
    let section = plugin.admin_section();
    match route(request.method(), request.url()) {
        Route::ShowForm => {
            let page = plugin.admin_page(None)?;
            response::respond_html(request, 200, render_document(section, &page))
        }
        Route::SubmitForm => {
            let form = match read_form(&mut request) {
                Ok(Some(form)) => form,
                Ok(None) => {
                    log!("serve"; "rejected form body over {} bytes", MAX_BODY_BYTES);
                    return response::respond_payload_too_large(request);
                }
                Err(e) => {
                    log!("error"; "{e:#}");
                    return response::respond_server_error(request, &e);
                }
            };
            match plugin.admin_page(Some(form)) {
                Ok(page) => response::respond_html(request, 200, render_document(section, &page)),
                Err(e) => {
                    let e = anyhow::Error::from(e);
                    log!("error"; "{e:#}");
                    response::respond_server_error(request, &e)
                }
            }
        }
        Route::MethodNotAllowed => response::respond_method_not_allowed(request),
        Route::NotFound => response::respond_not_found(request),
    }
}

/// Read and parse the form body, or `None` when it exceeds [`MAX_BODY_BYTES`].
fn read_form(request: &mut Request) -> Result<Option<SettingsForm>> {
    if request
        .body_length()
        .is_some_and(|len| len as u64 > MAX_BODY_BYTES)
    {
        return Ok(None);
    }
    let body =
        read_limited(request.as_reader(), MAX_BODY_BYTES).context("Failed to read form body")?;
    Ok(body.map(|bytes| SettingsForm::from_urlencoded(&String::from_utf8_lossy(&bytes))))
}

/// Read at most `limit` bytes. `None` if the reader holds more.
fn read_limited(reader: impl Read, limit: u64) -> io::Result<Option<Vec<u8>>> {
    let mut body = Vec::new();
    reader.take(limit + 1).read_to_end(&mut body)?;
    Ok((body.len() as u64 <= limit).then_some(body))
}
