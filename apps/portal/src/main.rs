//! Scripted demo session: a rep builds and submits an order, then an
//! admin works it through the fulfilment workflow and pulls analytics.

use std::sync::Arc;

use strider_core::analytics::Period;
use strider_core::types::{OrderStatus, PaymentMethod};
use strider_portal::{init_tracing, AdminPortal, ApiError, PortalConfig, SalesPortal};
use strider_store::{
    AcceptingSink, FixedPosition, InMemoryCatalog, OrderFilter, OrderStore, ProductStore,
    StaticCredentials,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    init_tracing();
    let config = PortalConfig::from_env();
    info!(portal = %config.portal_name, "starting demo session");

    // Shared backend: one catalog, one order collection
    let catalog = Arc::new(InMemoryCatalog::new());
    let orders = Arc::new(OrderStore::new());

    let sales = SalesPortal::new(
        Arc::clone(&catalog) as Arc<dyn strider_store::CatalogProvider>,
        Arc::new(AcceptingSink::new(Arc::clone(&orders))),
        Arc::new(FixedPosition::colombo()),
    );
    let admin = AdminPortal::new(
        Arc::new(StaticCredentials::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
        )),
        Arc::clone(&orders),
        ProductStore::new(Arc::clone(&catalog)),
    );

    // --- Sales side: browse, build, submit -----------------------------------

    let hits = sales.search_products("slippers").await?;
    info!(hits = hits.len(), "searched catalog for 'slippers'");

    sales.select_shop(1).await?;
    sales.add_to_order(1, "M", 5).await?;
    sales.add_to_order(2, "L", 2).await?;

    let summary = sales.draft_summary();
    info!(
        items = summary.item_count,
        total = %config.format_currency(strider_core::Money::from_cents(summary.total_cents)),
        "draft ready"
    );

    let receipt = sales
        .submit_order(PaymentMethod::Cash, Some("Deliver before noon".to_string()))
        .await?;
    info!(order_id = %receipt.order_id, "order submitted");

    // --- Admin side: workflow and analytics -----------------------------------

    let session = admin
        .login(&config.admin_username, &config.admin_password)
        .await?;
    let token = session.token;

    let open_orders = admin.list_orders(
        &token,
        &OrderFilter {
            status: Some(OrderStatus::New),
            ..Default::default()
        },
    )?;
    info!(count = open_orders.len(), "open orders");

    admin.set_order_status(&token, &receipt.order_id, OrderStatus::Processing)?;
    admin.set_order_status(&token, &receipt.order_id, OrderStatus::Completed)?;
    admin.toggle_payment_status(&token, &receipt.order_id)?;

    let summary = admin.sales_summary(&token)?;
    info!(
        orders = summary.order_count,
        revenue = %config.format_currency(summary.total_revenue),
        units = summary.units_sold,
        "sales summary"
    );

    for row in admin.revenue_trend(&token, Period::Monthly)? {
        info!(period = %row.label, revenue = %config.format_currency(row.revenue), "trend");
    }
    for row in admin.top_products(&token, 3)? {
        info!(product = %row.product_name, units = row.quantity, "top seller");
    }

    admin.logout(&token);
    info!("demo session complete");
    Ok(())
}
