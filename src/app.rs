mod background;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod icons;
mod portfolio;
mod projects;
mod skills;
mod widgets;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER_NAME, OWNER_TITLE};
use portfolio::PortfolioPage;

const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Axum router serving the page routes, the résumé file, and the 404
/// fallback for everything else.
#[cfg(feature = "ssr")]
pub fn router(leptos_options: LeptosOptions) -> axum::Router {
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeFile;

    use crate::content::RESUME_PATH;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    let resume = format!("{}{}", leptos_options.site_root, RESUME_PATH);

    axum::Router::new()
        .route_service(RESUME_PATH, ServeFile::new(resume))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content=format!("{OWNER_NAME}, {OWNER_TITLE}. Projects, skills and experience.")
        />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=PortfolioPage />
                <Route path=path!("/portfolio") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex items-center justify-center bg-gray-950 text-white">
            <h1 class="text-2xl font-bold">"Page not found."</h1>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::state::Section;

    async fn get(path: &str) -> (StatusCode, String) {
        let options = LeptosOptions::builder()
            .output_name("portfolio-site")
            .build();
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("valid request");
        let response = router(options)
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_root_and_portfolio_render_same_page() {
        let (root_status, root) = get("/").await;
        let (portfolio_status, portfolio) = get("/portfolio").await;

        assert_eq!(root_status, StatusCode::OK);
        assert_eq!(portfolio_status, StatusCode::OK);
        for section in Section::ALL {
            assert!(
                root.contains(&format!("id=\"{}\"", section.id())),
                "missing section {section}"
            );
        }
        assert!(root.contains(OWNER_NAME));
        assert_eq!(root, portfolio);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, body) = get("/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found."));
        assert!(!body.contains("id=\"experience\""));
    }
}
