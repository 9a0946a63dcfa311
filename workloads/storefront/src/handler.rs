//! Spin entry point.

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storee_sdk::storee_commerce::store::AnyCatalog;
use storee_sdk::storee_commerce::storefront::Storefront;
use storee_sdk::storee_core::{Method as StoreMethod, RequestContext, Route, SiteConfig};
use storee_sdk::storee_data::SpinTransport;
use storee_sdk::storee_observability::StructuredLogger;
use storee_sdk::storee_streaming::StreamingSink;

use crate::pages::{accepts_form, render_page, submit_contact, ContactOutcome, Page, Site};

const WORKLOAD: &str = "storefront";

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let method = match req.method() {
        Method::Get => StoreMethod::Get,
        Method::Post => StoreMethod::Post,
        _ => {
            respond_empty(response_out, 405, &[("allow", "GET, POST")]);
            return;
        }
    };

    let path = req.path_with_query().unwrap_or_default();
    let headers = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()));
    let ctx = RequestContext::new(method, path).with_headers(headers);
    let route = Route::resolve(&ctx.path);

    let (config, config_error) = match SiteConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e.to_string())),
    };

    let logger = StructuredLogger::from_config(ctx.request_id.clone(), &config)
        .with_workload(WORKLOAD)
        .with_route(route.name());

    if let Some(error) = config_error {
        logger
            .warn_builder("config invalid, using defaults")
            .field("error", error)
            .emit();
    }

    logger
        .info_builder("request started")
        .field("method", ctx.method.as_str())
        .field("path", ctx.path.as_str())
        .emit();

    let site = Site::from_config(&config);

    if ctx.method == StoreMethod::Post {
        if route != Route::Contact {
            respond_empty(response_out, 405, &[("allow", "GET")]);
            return;
        }
        if !accepts_form(&ctx) {
            logger
                .info_builder("contact form rejected")
                .field("content_type", ctx.header("content-type").unwrap_or_default())
                .emit();
            respond_empty(
                response_out,
                415,
                &[("accept-post", "application/x-www-form-urlencoded")],
            );
            return;
        }
        let body = match req.into_body().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                logger
                    .error_builder("failed to read form body")
                    .field("error", format!("{:?}", e))
                    .emit();
                respond_empty(response_out, 400, &[]);
                return;
            }
        };

        match submit_contact(&body, &site) {
            ContactOutcome::Redirect(url) => {
                logger.info("contact form redirected to chat");
                respond_empty(response_out, 303, &[("location", url.as_str())]);
            }
            ContactOutcome::Invalid(page) => {
                logger
                    .info_builder("contact form rejected")
                    .field_i64("status", page.status as i64)
                    .emit();
                stream_page(&ctx, &page, &site, &logger, response_out).await;
            }
        }
        return;
    }

    let catalog = AnyCatalog::from_config(&config, SpinTransport);
    let shop = Storefront::new(catalog, logger.clone());
    let page = render_page(&route, &ctx, &shop, &site).await;

    stream_page(&ctx, &page, &site, &logger, response_out).await;
}

async fn stream_page(
    ctx: &RequestContext,
    page: &Page,
    site: &Site,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
    ];
    let Ok(headers) = Fields::from_list(&header_list) else {
        logger.error("invalid response headers");
        return;
    };
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(page.status).is_err() {
        logger.error("invalid response status");
        return;
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = page.shell(site);
    if let Err(e) = sink.send_shell(&shell).await {
        logger
            .error_builder("failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }

    for (name, html) in page.visible_sections() {
        if let Err(e) = sink.send_section(name, html).await {
            logger
                .error_builder("failed to send section")
                .field("section", name)
                .field("error", e.to_string())
                .emit();
            return;
        }
    }

    if let Err(e) = sink.finish(&shell).await {
        logger
            .error_builder("failed to finish response")
            .field("error", e.to_string())
            .emit();
        return;
    }

    let mut done = logger
        .info_builder("request complete")
        .field_i64("status", page.status as i64)
        .field_i64("sections", sink.sections_sent().len() as i64)
        .field_i64("bytes", sink.bytes_sent() as i64);
    if let Some(ttfb) = sink.timing().time_to_shell() {
        done = done.duration_ms("time_to_shell_ms", ttfb);
    }
    done.emit();
}

fn respond_empty(response_out: ResponseOutparam, status: u16, extra: &[(&str, &str)]) {
    let header_list: Vec<(String, Vec<u8>)> = extra
        .iter()
        .map(|(name, value)| (name.to_string(), value.as_bytes().to_vec()))
        .collect();
    let Ok(headers) = Fields::from_list(&header_list) else {
        return;
    };
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(status).is_ok() {
        response_out.set(response);
    }
}
