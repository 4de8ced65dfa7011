//! Order history commands.

use planta_client::AppState;

/// List all orders in the order the backend returned them.
pub async fn list(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.orders.refresh().await?;

    if state.orders.orders().is_empty() {
        println!("No orders yet.");
        return Ok(());
    }

    for order in state.orders.orders() {
        println!(
            "{}  {}  [{}]  {} line(s)  total {}",
            order.id,
            order.date,
            order.status,
            order.products.len(),
            order.total
        );
        for line in &order.products {
            println!("        {} x {}  {}", line.quantity, line.name, line.price);
        }
    }
    Ok(())
}
