use sweetshop_api::app::{write_shop, SharedShop};
use sweetshop_inventory::{Sweet, SweetId};

#[tokio::main]
async fn main() {
    sweetshop_observability::init();

    let shop = sweetshop_api::app::shared_shop();
    seed_demo_catalogue(&shop);

    let addr = std::env::var("SWEETSHOP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = sweetshop_api::app::build_app(shop);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

/// Pre-populate a few sweets so a fresh server has something to serve.
fn seed_demo_catalogue(shop: &SharedShop) {
    let catalogue = [
        (1001, "Kaju Katli", "Nut-Based", 50.0, 20),
        (1002, "Gulab Jamun", "Milk-Based", 40.0, 15),
        (1003, "Rasgulla", "Milk-Based", 25.0, 30),
    ];

    let mut shop = write_shop(shop);
    for (id, name, category, price, quantity) in catalogue {
        match Sweet::new(SweetId(id), name, category, price, quantity)
            .and_then(|sweet| shop.add(sweet))
        {
            Ok(()) => {}
            Err(e) => tracing::warn!("skipping seed sweet {id}: {e}"),
        }
    }
    tracing::info!(count = shop.len(), "seeded demo catalogue");
}
