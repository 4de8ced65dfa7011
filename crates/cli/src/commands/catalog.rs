//! Catalog commands.

use planta_client::AppState;
use planta_core::ProductInput;
use rust_decimal::Decimal;

use super::CommandError;

/// List the catalog.
pub async fn list(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.catalog.refresh().await?;

    if state.catalog.products().is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    for product in state.catalog.products() {
        println!(
            "{:>6}  {:<30} {:>12}  size {:<6} origin {:<12} stock {}",
            product.id, product.name, product.price, product.size, product.origin, product.stock
        );
    }
    Ok(())
}

/// Add a product draft; the backend assigns the id.
pub async fn add(
    state: &mut AppState,
    name: String,
    price: Decimal,
    size: String,
    origin: String,
    stock: String,
    image: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let created = state
        .catalog
        .add(ProductInput {
            name,
            price,
            size,
            origin,
            stock,
            image,
        })
        .await?;

    println!("Created product {} ({})", created.id, created.name);
    Ok(())
}

/// Update some fields of an existing product and put the full record.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    state: &mut AppState,
    id: &str,
    name: Option<String>,
    price: Option<Decimal>,
    size: Option<String>,
    origin: Option<String>,
    stock: Option<String>,
    image: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    state.catalog.refresh().await?;
    let mut product = state
        .catalog
        .products()
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CommandError::UnknownProduct(id.to_string()))?
        .clone();

    if let Some(name) = name {
        product.name = name;
    }
    if let Some(price) = price {
        product.price = price;
    }
    if let Some(size) = size {
        product.size = size;
    }
    if let Some(origin) = origin {
        product.origin = origin;
    }
    if let Some(stock) = stock {
        product.stock = stock;
    }
    if let Some(image) = image {
        product.image = image;
    }

    state.catalog.update(product).await?;
    println!("Updated product {id}");
    Ok(())
}

/// Remove a product by id.
pub async fn remove(state: &mut AppState, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    state.catalog.remove(id).await?;
    println!("Removed product {id}");
    Ok(())
}
