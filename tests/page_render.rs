//! HTML shell rendering through the full router.

use axum::http::StatusCode;

mod common;
use common::{app, get, send, test_config};

#[tokio::test]
async fn test_index_renders_default_language() {
    let res = get(app(test_config()), "/", &[]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.header("content-type"), "text/html; charset=utf-8");
    assert_eq!(res.header("content-language"), "zh-CN");
    assert!(res.body.contains(r#"<html lang="zh-CN">"#));
    assert!(res.body.contains("<title>首页 - Vite React SSR</title>"));
    assert!(res.body.contains(r#"<main data-route="/"><h1>首页</h1>"#));
    assert!(res.body.contains(r#"window.__INITIAL_LANGUAGE__ = "zh-CN";"#));
    assert!(!res.body.contains("<!--app-head-->"));
    assert!(!res.body.contains("<!--app-html-->"));
}

#[tokio::test]
async fn test_path_prefix_selects_language() {
    let res = get(
        app(test_config()),
        "/en-US/about",
        &[("cookie", "i18next-lng=zh-CN"), ("accept-language", "zh-CN")],
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"<html lang="en-US">"#));
    assert!(res.body.contains("<title>About Us - Vite React SSR</title>"));
    assert!(res.body.contains(r#"data-route="/about""#));
}

#[tokio::test]
async fn test_cookie_beats_accept_language() {
    let res = get(
        app(test_config()),
        "/contact",
        &[("cookie", "theme=dark; i18next-lng=en-US"), ("accept-language", "zh-CN,zh;q=0.9")],
    )
    .await;

    assert_eq!(res.header("content-language"), "en-US");
    assert!(res.body.contains("<h1>Contact Us</h1>"));
}

#[tokio::test]
async fn test_accept_language_fallback() {
    let res = get(
        app(test_config()),
        "/contact",
        &[("accept-language", "fr-FR,fr;q=0.9,en;q=0.8")],
    )
    .await;
    assert_eq!(res.header("content-language"), "en-US");

    let res = get(
        app(test_config()),
        "/contact",
        &[("accept-language", "fr-FR,de;q=0.5")],
    )
    .await;
    assert_eq!(res.header("content-language"), "zh-CN");
}

#[tokio::test]
async fn test_unsupported_cookie_ignored() {
    let res = get(
        app(test_config()),
        "/",
        &[("cookie", "i18next-lng=ja-JP"), ("accept-language", "en-US")],
    )
    .await;
    assert_eq!(res.header("content-language"), "en-US");
}

#[tokio::test]
async fn test_configured_default_language() {
    let mut config = test_config();
    config.i18n.default_language = "en-US".parse().unwrap();
    let res = get(app(config), "/", &[]).await;

    assert!(res.body.contains("<title>Home - Vite React SSR</title>"));
}

#[tokio::test]
async fn test_hreflang_links() {
    let res = get(app(test_config()), "/en-US/about", &[]).await;

    for link in [
        r#"<link rel="alternate" hreflang="zh-CN" href="https://example.com/zh-CN/about" />"#,
        r#"<link rel="alternate" hreflang="en-US" href="https://example.com/en-US/about" />"#,
        r#"<link rel="alternate" hreflang="x-default" href="https://example.com/zh-CN/about" />"#,
        r#"<link rel="canonical" href="https://example.com/en-US/about" />"#,
    ] {
        assert!(res.body.contains(link), "missing {link}");
    }
}

#[tokio::test]
async fn test_client_only_page_skips_data() {
    let res = get(app(test_config()), "/client-only", &[]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("window.__INITIAL_DATA__ = null;"));
    assert!(res.body.contains("<title>Vite React SSR</title>"));
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let res = get(app(test_config()), "/en-US/no-such-page", &[]).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains(r#"<main data-route="404"><h1>404</h1><p>Page not found</p>"#));
    assert!(res.body.contains(r#"<html lang="en-US">"#));
}

#[tokio::test]
async fn test_double_slash_path_is_not_a_host() {
    let res = get(app(test_config()), "//contact", &[]).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains(r#"<main data-route="404">"#));

    let res = get(app(test_config()), "//evil.example/about", &[]).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(!res.body.contains(r#"data-route="/about""#));
}

#[tokio::test]
async fn test_page_declared_not_found() {
    let res = get(app(test_config()), "/?page=2", &[]).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = get(app(test_config()), "/?page=1", &[]).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_redirect_keeps_language_prefix() {
    let res = get(app(test_config()), "/home", &[]).await;
    assert_eq!(res.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(res.header("location"), "/");

    let res = get(app(test_config()), "/en-US/home", &[]).await;
    assert_eq!(res.header("location"), "/en-US");
}

#[tokio::test]
async fn test_non_get_is_rejected() {
    let request = axum::http::Request::post("/about")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = send(app(test_config()), request).await;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_head_returns_headers_without_body() {
    let request = axum::http::Request::head("/en-US/about")
        .body(axum::body::Body::empty())
        .unwrap();
    let res = send(app(test_config()), request).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.header("content-type"), "text/html; charset=utf-8");
    assert_eq!(res.header("content-language"), "en-US");
    assert!(res.body.is_empty());
}

#[tokio::test]
async fn test_nav_and_language_switcher_rendered() {
    let res = get(app(test_config()), "/en-US/contact", &[]).await;

    assert!(res.body.contains(r#"<a href="/en-US/contact" aria-current="page">Contact</a>"#));
    assert!(res.body.contains(r#"<a href="/en-US/client-only">Client Only</a>"#));
    assert!(res.body.contains(r#"<a href="/zh-CN/contact" hreflang="zh-CN">中文</a>"#));
    assert!(res.body.contains(
        r#"<a href="/en-US/contact" hreflang="en-US" aria-current="page">English</a>"#
    ));

    let res = get(app(test_config()), "/zh-CN/contact", &[]).await;
    assert!(res.body.contains(r#"<a href="/zh-CN/contact" aria-current="page">联系我们</a>"#));
}

#[tokio::test]
async fn test_initial_state_reflects_request() {
    let res = get(
        app(test_config()),
        "/zustand-demo",
        &[
            ("cookie", "theme=dark"),
            (
                "user-agent",
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148",
            ),
        ],
    )
    .await;

    assert!(res.body.contains(r#""deviceType":"mobile""#));
    assert!(res.body.contains(r#""theme":"dark","isDark":true"#));
    assert!(res.body.contains(r#""initialCount":0"#));
}

#[tokio::test]
async fn test_state_scripts_escape_markup() {
    let res = get(
        app(test_config()),
        "/contact",
        &[("user-agent", "</script><script>alert(1)</script>")],
    )
    .await;

    assert!(!res.body.contains("</script><script>alert(1)"));
    assert!(res.body.contains(r"\u003c/script\u003e\u003cscript\u003ealert(1)"));
}

#[tokio::test]
async fn test_template_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(
        &path,
        "<html><head><!--app-head--></head><body>v1<!--app-html--></body></html>",
    )
    .unwrap();

    let mut config = test_config();
    config.render.template_path = Some(path.to_string_lossy().into_owned());
    config.render.reload_template = true;
    let router = app(config);

    let res = get(router.clone(), "/", &[]).await;
    assert!(res.body.contains("<body>v1<main"));
    assert!(res.body.contains(r#"<html lang="zh-CN">"#));

    std::fs::write(
        &path,
        "<html><head><!--app-head--></head><body>v2<!--app-html--></body></html>",
    )
    .unwrap();
    let res = get(router, "/", &[]).await;
    assert!(res.body.contains("<body>v2<main"));
}

#[tokio::test]
async fn test_template_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, "<html><body><!--app-html--></body></html>").unwrap();

    let mut config = test_config();
    config.render.template_path = Some(path.to_string_lossy().into_owned());
    assert!(ssr_shell::HttpServer::new(config).is_err());

    let mut config = test_config();
    config.render.template_path = Some(dir.path().join("gone.html").to_string_lossy().into_owned());
    config.render.reload_template = true;
    config.render.expose_errors = true;
    let res = get(app(config.clone()), "/", &[]).await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.body.starts_with("failed to read template"));

    config.render.expose_errors = false;
    let res = get(app(config), "/", &[]).await;
    assert_eq!(res.body, "Internal Server Error");
}
