//! Domain types for the Planta storefront.
//!
//! Each type mirrors one record shape in the backend REST collections.

pub mod cart;
pub mod email;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use order::{Order, OrderCustomer, ShippingMethod};
pub use product::{Product, ProductInput};
pub use user::{NewUser, UserProfile};
