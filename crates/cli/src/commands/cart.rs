//! Cart commands.

use planta_client::{AppState, QuantityStep};
use planta_core::CartItem;

use super::CommandError;

/// Show the cart lines and a running total.
pub async fn show(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.cart.refresh().await?;

    if state.cart.items().is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in state.cart.items() {
        println!(
            "{:>6}  {:<30} {:>12} x {}  = {}",
            line.id,
            line.name,
            line.price,
            line.quantity,
            line.line_total()
        );
    }
    println!(
        "cart subtotal: {}",
        planta_client::checkout::subtotal(state.cart.items())
    );
    Ok(())
}

/// Add a catalog product to the cart, merging with any existing line.
pub async fn add(
    state: &mut AppState,
    product_id: &str,
    quantity: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    // The cart line is a snapshot of the product at add time.
    state.catalog.refresh().await?;
    let product = state
        .catalog
        .products()
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| CommandError::UnknownProduct(product_id.to_string()))?
        .clone();

    state.cart.refresh().await?;
    state
        .cart
        .add(CartItem {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity,
        })
        .await?;

    println!("Added {quantity} x product {product_id} to the cart");
    Ok(())
}

/// Step a line's quantity up or down by one.
pub async fn step(
    state: &mut AppState,
    id: &str,
    step: QuantityStep,
) -> Result<(), Box<dyn std::error::Error>> {
    state.cart.refresh().await?;
    state.cart.set_quantity(id, step).await?;

    match state.cart.items().iter().find(|line| line.id == id) {
        Some(line) => println!("Line {id} now has quantity {}", line.quantity),
        None => println!("No cart line with id {id}"),
    }
    Ok(())
}

/// Remove a line by id.
pub async fn remove(state: &mut AppState, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    state.cart.refresh().await?;
    state.cart.remove(id).await?;
    println!("Removed line {id} from the cart");
    Ok(())
}

/// Empty the whole cart.
pub async fn clear(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.cart.clear().await?;
    println!("Cart cleared");
    Ok(())
}
