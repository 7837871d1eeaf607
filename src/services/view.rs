use std::fmt;

use crate::models::{format_currency, Cart, Catalog};

pub const EMPTY_CART_TEXT: &str = "No items added.";

#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub label: String,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemList {
    Empty,
    Rows(Vec<CartRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonState {
    pub enabled: bool,
    pub opacity: f32,
    pub cursor: &'static str,
}

impl ButtonState {
    fn for_enabled(enabled: bool) -> Self {
        if enabled {
            Self {
                enabled,
                opacity: 1.0,
                cursor: "pointer",
            }
        } else {
            Self {
                enabled,
                opacity: 0.5,
                cursor: "not-allowed",
            }
        }
    }
}

/// Which of a service row's two controls is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowToggle {
    pub service_id: String,
    pub add_visible: bool,
    pub remove_visible: bool,
}

/// Everything the page shows that depends on the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: ItemList,
    pub total: String,
    pub booking_button: ButtonState,
    pub toggles: Vec<RowToggle>,
}

impl CartView {
    pub fn toggle(&self, service_id: &str) -> Option<&RowToggle> {
        self.toggles.iter().find(|t| t.service_id == service_id)
    }
}

/// Project the cart onto the page. Row toggles come from the catalog, so
/// services that were never added still get an "add" control.
pub fn render(cart: &Cart, catalog: &Catalog) -> CartView {
    let items = if cart.is_empty() {
        ItemList::Empty
    } else {
        ItemList::Rows(
            cart.items()
                .iter()
                .enumerate()
                .map(|(i, item)| CartRow {
                    label: format!("{}. {} x {}", i + 1, item.name, item.quantity),
                    subtotal: format_currency(item.subtotal()),
                })
                .collect(),
        )
    };

    let toggles = catalog
        .iter()
        .map(|service| {
            let in_cart = cart.quantity(&service.id) >= 1;
            RowToggle {
                service_id: service.id.clone(),
                add_visible: !in_cart,
                remove_visible: in_cart,
            }
        })
        .collect();

    CartView {
        items,
        total: format_currency(cart.total()),
        booking_button: ButtonState::for_enabled(!cart.is_empty()),
        toggles,
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            ItemList::Empty => writeln!(f, "{EMPTY_CART_TEXT}")?,
            ItemList::Rows(rows) => {
                for row in rows {
                    writeln!(f, "{:<40} {:>12}", row.label, row.subtotal)?;
                }
            }
        }
        writeln!(f, "Total: {}", self.total)?;
        let button = if self.booking_button.enabled {
            "[Book Now]"
        } else {
            "[Book Now] (disabled)"
        };
        write!(f, "{button}")
    }
}
