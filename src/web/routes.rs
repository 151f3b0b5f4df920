// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  use crate::web::handlers::{admin_handlers, cart_handlers, checkout_handlers, fundraiser_handlers, upload_handlers};

  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Fundraiser Routes
      .service(
        web::scope("/fundraisers")
          .route("", web::post().to(fundraiser_handlers::create_fundraiser_handler))
          .route("", web::get().to(fundraiser_handlers::list_fundraisers_handler))
          .route(
            "/{fundraiser_id}/totals",
            web::get().to(fundraiser_handlers::fundraiser_totals_handler),
          )
          .route("/{custom_link}", web::get().to(fundraiser_handlers::get_fundraiser_handler)),
      )
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("/items", web::post().to(cart_handlers::add_cart_item_handler))
          .route("/{cart_id}", web::get().to(cart_handlers::view_cart_handler))
          .route(
            "/{cart_id}/items/{item_id}",
            web::delete().to(cart_handlers::remove_cart_item_handler),
          ),
      )
      // Checkout Routes
      .service(
        web::scope("/checkout")
          .route("", web::post().to(checkout_handlers::start_checkout_handler))
          .route(
            "/success/{order_id}",
            web::get().to(checkout_handlers::checkout_success_handler),
          )
          .route(
            "/cancel/{order_id}",
            web::get().to(checkout_handlers::checkout_cancel_handler),
          ),
      )
      // Upload Routes
      .service(web::scope("/uploads").route("/{bucket}", web::post().to(upload_handlers::upload_file_handler)))
      // Admin Routes (session-gated via the AdminSession extractor)
      .service(
        web::scope("/admin")
          .route("/login", web::post().to(admin_handlers::admin_login_handler))
          .route("/logout", web::post().to(admin_handlers::admin_logout_handler))
          .route("/orders", web::get().to(admin_handlers::list_orders_handler))
          .route(
            "/orders/{order_id}/status",
            web::put().to(admin_handlers::update_order_status_handler),
          )
          .route("/payment-keys", web::get().to(admin_handlers::get_payment_keys_handler))
          .route("/payment-keys", web::put().to(admin_handlers::update_payment_keys_handler)),
      ),
  );
}
