mod common;

#[cfg(test)]
pub mod web_tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    use super::common::*;

    use metrics_layer_site::web::handlers::configure;
    use metrics_layer_site::web::middleware::{CONTENT_SECURITY_POLICY, SiteHeaders};

    #[actix_web::test]
    async fn test_features_fragment_success() {
        let app = test::init_service(App::new().wrap(SiteHeaders).configure(configure)).await;
        let req = test::TestRequest::get().uri("/fragments/features").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(count_cards(&html), 3);
        positions(&html, &SHIPPED_TITLES);
    }

    #[actix_web::test]
    async fn test_healthz_success() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body.as_ref(), b"ok");
    }

    #[actix_web::test]
    async fn test_site_headers_success() {
        let app = test::init_service(App::new().wrap(SiteHeaders).configure(configure)).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let res = test::call_service(&app, req).await;

        let headers = res.headers();
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(
            headers.get("content-security-policy").unwrap(),
            CONTENT_SECURITY_POLICY
        );
    }

    #[actix_web::test]
    async fn test_unknown_fragment_fails_on_missing_route() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/fragments/pricing").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
