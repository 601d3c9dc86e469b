// rest/ui.rs — Embedded browser client.
//
// The client is three static files compiled into the binary, so `taskd` is a
// single self-contained executable with no asset directory to deploy.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        include_str!("../../assets/app.js"),
    )
}

pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../assets/style.css"),
    )
}
