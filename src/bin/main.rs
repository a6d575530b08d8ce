#![recursion_limit = "256"]

// HRGPTAI marketing site server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Static file serving for the hydration bundle

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::{Files, NamedFile};
    use actix_web::{web, App, HttpServer};
    use hrgptai_site::web_app::app::App as WebApp;
    use hrgptai_site::web_app::assets::public_file_routes;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;

    // Load environment variables (LEPTOS_*, RUST_LOG)
    dotenv::dotenv().ok();

    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(|e| {
        tracing::error!("Could not read Leptos configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        let mut app = App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")));

        // Root-level public files; the wildcard page route would shadow them
        for (request_path, file_path) in public_file_routes(&site_root_str) {
            app = app.route(
                &request_path,
                web::get().to(move || {
                    let file_path = file_path.clone();
                    async move { NamedFile::open_async(file_path).await }
                }),
            );
        }

        app
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)
    .inspect_err(|e| tracing::error!("Could not bind {}: {}", addr, e))?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
