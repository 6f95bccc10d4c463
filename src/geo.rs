//! Country-based access gate, evaluated before any other component runs.

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpResponse};
use futures_util::future::{ok, Ready};

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::config::AppConfig;

/// Fixed document served to blocked regions.
const RESTRICTED_BODY: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Access Restricted | BACKBAR</title>
    <style>
      * { margin: 0; padding: 0; box-sizing: border-box; }
      body {
        font-family: 'Roboto', -apple-system, BlinkMacSystemFont, sans-serif;
        background-color: #002228;
        color: #ffffff;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 20px;
      }
      .container { max-width: 500px; }
      h1 { font-size: 32px; margin-bottom: 16px; color: #c9a227; }
      p { font-size: 16px; opacity: 0.9; line-height: 1.6; }
    </style>
  </head>
  <body>
    <div class="container">
      <h1>Access Restricted</h1>
      <p>BACKBAR is not available in your region.</p>
    </div>
  </body>
</html>
"#;

/// Static-asset paths the gate never evaluates.
const EXEMPT_PREFIXES: [&str; 2] = ["/static/", "/favicon.ico"];
const EXEMPT_SUFFIXES: [&str; 3] = [".png", ".jpg", ".svg"];

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
        || EXEMPT_SUFFIXES.iter().any(|s| path.ends_with(s))
}

struct GeoPolicy {
    header: String,
    blocked: HashSet<String>,
}

impl GeoPolicy {
    /// True when the request must be answered with the restricted
    /// document. The header is set by the trusted edge proxy; a missing
    /// or unrecognized value allows the request through.
    fn denies(&self, req: &ServiceRequest) -> bool {
        if is_exempt(req.path()) {
            return false;
        }

        req.headers()
            .get(self.header.as_str())
            .and_then(|v| v.to_str().ok())
            .is_some_and(|code| self.blocked.contains(code))
    }
}

/// Geo access gate middleware.
///
/// Blocked countries receive a fixed 403 document before any handler or
/// store query runs.
pub struct GeoGate {
    policy: Rc<GeoPolicy>,
}

impl GeoGate {
    pub fn new(cfg: &AppConfig) -> Self {
        Self {
            policy: Rc::new(GeoPolicy {
                header: cfg.geo_header.clone(),
                blocked: cfg.blocked_countries.clone(),
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for GeoGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = GeoGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(GeoGateMiddleware {
            service,
            policy: Rc::clone(&self.policy),
        })
    }
}

pub struct GeoGateMiddleware<S> {
    service: S,
    policy: Rc<GeoPolicy>,
}

impl<S, B> Service<ServiceRequest> for GeoGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if self.policy.denies(&req) {
            let (req, _payload) = req.into_parts();
            let res = HttpResponse::Forbidden()
                .content_type("text/html; charset=utf-8")
                .body(RESTRICTED_BODY)
                .map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(req, res)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, read_body, TestRequest};
    use actix_web::{web, App, HttpResponse};

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    const GEO_HEADER: &str = "x-vercel-ip-country";

    /// App factory used by every test below: the gate in front of a
    /// handler that records whether it ran, standing in for the content
    /// query gateway.
    macro_rules! gated_app {
        ($reached:expr) => {{
            let reached = Arc::clone(&$reached);
            init_service(
                App::new()
                    .wrap(GeoGate::new(&AppConfig::default()))
                    .route(
                        "/articles",
                        web::get().to(move || {
                            let reached = Arc::clone(&reached);
                            async move {
                                reached.store(true, Ordering::SeqCst);
                                HttpResponse::Ok().body("listing")
                            }
                        }),
                    )
                    .route(
                        "/favicon.ico",
                        web::get().to(|| async { HttpResponse::Ok().body("icon") }),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn blocked_country_gets_403_and_never_reaches_the_handler() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = gated_app!(reached);

        let req = TestRequest::get()
            .uri("/articles")
            .insert_header((GEO_HEADER, "CN"))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body = read_body(res).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("not available in your region"));
        assert!(!reached.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn allowed_country_passes_through() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = gated_app!(reached);

        let req = TestRequest::get()
            .uri("/articles")
            .insert_header((GEO_HEADER, "US"))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn missing_header_fails_open() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = gated_app!(reached);

        let res = call_service(&app, TestRequest::get().uri("/articles").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(reached.load(Ordering::SeqCst));
    }

    #[actix_web::test]
    async fn static_asset_paths_skip_the_gate() {
        let reached = Arc::new(AtomicBool::new(false));
        let app = gated_app!(reached);

        let req = TestRequest::get()
            .uri("/favicon.ico")
            .insert_header((GEO_HEADER, "CN"))
            .to_request();
        let res = call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[test]
    fn exemption_matcher_covers_static_prefixes_and_image_suffixes() {
        assert!(is_exempt("/static/app.css"));
        assert!(is_exempt("/favicon.ico"));
        assert!(is_exempt("/images/logo.png"));
        assert!(is_exempt("/hero.jpg"));
        assert!(is_exempt("/mark.svg"));
        assert!(!is_exempt("/articles"));
        assert!(!is_exempt("/articles/single-malt-guide"));
    }
}
