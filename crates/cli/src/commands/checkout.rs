//! Checkout command.

use planta_client::{AppState, CheckoutForm};
use planta_core::{OrderCustomer, ShippingMethod};

use super::CommandError;

/// Check out the selected cart lines as one order.
#[allow(clippy::too_many_arguments)]
pub async fn run(
    state: &mut AppState,
    selected_ids: &[String],
    name: String,
    email: String,
    address: String,
    phone: String,
    shipping: ShippingMethod,
    payment: String,
) -> Result<(), Box<dyn std::error::Error>> {
    state.cart.refresh().await?;

    // Only the explicitly selected lines are purchased, not the whole cart.
    let selected: Vec<_> = state
        .cart
        .items()
        .iter()
        .filter(|line| selected_ids.iter().any(|id| *id == line.id))
        .cloned()
        .collect();
    if selected.is_empty() {
        return Err(CommandError::EmptySelection.into());
    }

    let form = CheckoutForm {
        selected,
        customer: OrderCustomer {
            name,
            email,
            address,
            phone,
        },
        shipping,
        payment_method: payment,
    };

    let order = form.submit(state.api()).await?;
    println!(
        "Order {} placed: {} line(s), shipping {} ({}), total {}",
        order.id,
        order.products.len(),
        order.shipping_method.kind,
        order.shipping_method.fee,
        order.total
    );
    Ok(())
}
