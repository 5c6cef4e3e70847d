//! Landing page and static asset serving
//!
//! The landing page is embedded in the binary; supporting assets (the
//! frontend script, favicon) are served from the configured static
//! directory.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::HttpConfig;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;

/// Serve the landing page
pub fn serve_landing_page(
    ctx: &RequestContext<'_>,
    http_config: &HttpConfig,
) -> Response<Full<Bytes>> {
    let html = landing_page_html();
    if ctx.access_log {
        logger::log_response(200, html.len());
    }
    http::build_html_response(html, http_config, ctx.is_head)
}

/// Serve the favicon from the static directory
pub async fn serve_favicon(ctx: &RequestContext<'_>, static_dir: &str) -> Response<Full<Bytes>> {
    let path = Path::new(static_dir).join("favicon.svg");
    match fs::read(&path).await {
        Ok(data) => {
            if ctx.access_log {
                logger::log_response(200, data.len());
            }
            http::build_asset_response(&data, "image/svg+xml", ctx.is_head)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Serve an asset under `/static/`
pub async fn serve_asset(ctx: &RequestContext<'_>, static_dir: &str) -> Response<Full<Bytes>> {
    match load_asset(static_dir, ctx.path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_asset_response(&content, content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load an asset from the static directory
async fn load_asset(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    // Remove the route prefix ("static/js/script.js" -> "js/script.js")
    let relative_path = clean_path.strip_prefix("static/").unwrap_or(&clean_path);

    let file_path = Path::new(static_dir).join(relative_path);

    // Security: ensure the resolved path stays within the static directory
    let static_dir_canonical = Path::new(static_dir).canonicalize().ok()?;
    let file_path_canonical = file_path.canonicalize().ok()?;
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        return None;
    }

    let content = fs::read(&file_path_canonical).await.ok()?;
    let content_type = get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Get MIME Content-Type based on file extension
fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// The embedded landing page: search box, demo button, result pane
pub fn landing_page_html() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Buscador de Cócteles</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #1e293b;
            color: #e2e8f0;
        }
        h1 {
            text-align: center;
            color: #4ade80;
        }
        .search-bar {
            display: flex;
            gap: 10px;
            justify-content: center;
            margin: 30px 0;
        }
        input {
            padding: 10px;
            border-radius: 5px;
            border: 1px solid #475569;
            background: #0f172a;
            color: #e2e8f0;
            width: 300px;
        }
        button {
            padding: 10px 20px;
            border: none;
            border-radius: 5px;
            background: #4ade80;
            color: #0f172a;
            font-weight: 600;
            cursor: pointer;
        }
        button:hover {
            background: #22c55e;
        }
        #result {
            display: flex;
            flex-wrap: wrap;
            gap: 20px;
            justify-content: center;
        }
        .cocktail-card {
            background: #0f172a;
            border-radius: 8px;
            padding: 15px;
            max-width: 260px;
        }
        .cocktail-card img {
            width: 100%;
            border-radius: 5px;
        }
    </style>
</head>
<body>
    <h1>Buscador de Cócteles</h1>
    <div class="search-bar">
        <input id="searchInput" type="text" placeholder="Nombre del cóctel...">
        <button id="searchBtn">Buscar</button>
        <button id="demoBtn">API Demo</button>
    </div>
    <div id="result"></div>
    <script src="/static/js/script.js"></script>
</body>
</html>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_is_nonempty_html() {
        let html = landing_page_html();
        assert!(!html.is_empty());
        assert!(html.contains("<html"));
        assert!(html.contains("/static/js/script.js"));
    }

    #[test]
    fn test_content_type_for_web_assets() {
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("svg")), "image/svg+xml");
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(None), "application/octet-stream");
        assert_eq!(get_content_type(Some("exe")), "application/octet-stream");
    }
}
