use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use leptos::config::get_configuration;
use leptos_actix::{LeptosRoutes, generate_route_list};

use metrics_layer_site::common::{SiteConfig, SiteError};
use metrics_layer_site::frontend::{self, shell};
use metrics_layer_site::web;

#[actix_web::main]
async fn main() -> Result<(), SiteError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env().inspect_err(|e| log::error!("Invalid configuration: {}", e))?;
    let conf = get_configuration(None).map_err(|e| {
        log::error!("Failed to read Leptos configuration: {}", e);
        SiteError::Leptos(e.to_string())
    })?;

    let bind_addr = config.bind_addr;
    let static_dir = config.static_dir;
    log::info!(
        "Serving on http://{} (static assets from {})",
        bind_addr,
        static_dir.display()
    );

    HttpServer::new(move || {
        let routes = generate_route_list(frontend::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();
        let pkg_dir = leptos_options.site_pkg_dir.to_string();

        App::new()
            .wrap(web::middleware::SiteHeaders)
            .wrap(Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new(&format!("/{pkg_dir}"), format!("{site_root}/{pkg_dir}")))
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
