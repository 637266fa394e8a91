pub mod admin;
pub mod pages;

use actix_web::web;

/// Route table, shared between the server binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(pages::home)))
        .service(web::resource("/profiles/").route(web::get().to(pages::profile_list)))
        .service(web::resource("/profiles/{id}/").route(web::get().to(pages::profile_detail)))
        .service(web::resource("/gallery/").route(web::get().to(pages::gallery_list)))
        .service(web::resource("/documents/").route(web::get().to(pages::document_list)))
        .service(
            web::scope("/admin")
                .service(
                    web::resource("/profiles")
                        .route(web::post().to(admin::profiles::create))
                        .route(web::get().to(admin::profiles::list)),
                )
                .service(
                    web::resource("/profiles/{id}")
                        .route(web::get().to(admin::profiles::get))
                        .route(web::patch().to(admin::profiles::update))
                        .route(web::delete().to(admin::profiles::delete)),
                )
                .service(
                    web::resource("/documents")
                        .route(web::post().to(admin::documents::create))
                        .route(web::get().to(admin::documents::list)),
                )
                .service(
                    web::resource("/documents/{id}")
                        .route(web::get().to(admin::documents::get))
                        .route(web::patch().to(admin::documents::update))
                        .route(web::delete().to(admin::documents::delete)),
                )
                .service(
                    web::resource("/gallery")
                        .route(web::post().to(admin::gallery::create))
                        .route(web::get().to(admin::gallery::list)),
                )
                .service(
                    web::resource("/gallery/{id}")
                        .route(web::get().to(admin::gallery::get))
                        .route(web::patch().to(admin::gallery::update))
                        .route(web::delete().to(admin::gallery::delete)),
                )
                .service(
                    web::resource("/gallery/{id}/featured")
                        .route(web::patch().to(admin::gallery::set_featured)),
                )
                .service(
                    web::resource("/uploads/{area}")
                        .route(web::post().to(admin::uploads::upload)),
                ),
        );
}
