use rust_decimal::Decimal;

/// One service in the cart. Only exists while `quantity >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Selected services in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a service, creating the line if needed.
    pub fn add_unit(&mut self, id: &str, name: &str, unit_price: Decimal) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(LineItem {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            quantity: 1,
        });
    }

    /// Take one unit away; the line disappears when it reaches zero.
    /// Unknown ids are ignored.
    pub fn remove_unit(&mut self, id: &str) {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return;
        };

        let item = &mut self.items[pos];
        item.quantity = item.quantity.saturating_sub(1);
        if item.quantity == 0 {
            self.items.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.get(id).map(|item| item.quantity).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_same_service_twice() {
        let mut cart = Cart::new();
        cart.add_unit("svc1", "Haircut", dec!(300));
        cart.add_unit("svc1", "Haircut", dec!(300));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("svc1"), 2);
        assert_eq!(cart.total(), dec!(600));
    }

    #[test]
    fn test_display_order_is_first_added() {
        let mut cart = Cart::new();
        cart.add_unit("b", "Beard Trim", dec!(150));
        cart.add_unit("a", "Haircut", dec!(300));
        cart.add_unit("b", "Beard Trim", dec!(150));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_to_zero_deletes_entry() {
        let mut cart = Cart::new();
        cart.add_unit("svc1", "Haircut", dec!(300));
        cart.remove_unit("svc1");

        assert!(cart.get("svc1").is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_remove_decrements() {
        let mut cart = Cart::new();
        cart.add_unit("svc1", "Haircut", dec!(300));
        cart.add_unit("svc1", "Haircut", dec!(300));
        cart.remove_unit("svc1");

        assert_eq!(cart.quantity("svc1"), 1);
        assert_eq!(cart.total(), dec!(300));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_unit("svc1", "Haircut", dec!(300));
        let before = cart.clone();

        cart.remove_unit("nope");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_twice() {
        let mut cart = Cart::new();
        cart.add_unit("svc1", "Haircut", dec!(300));
        cart.clear();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_with_fractional_prices() {
        let mut cart = Cart::new();
        cart.add_unit("a", "Hair Spa", dec!(799.50));
        cart.add_unit("b", "Manicure", dec!(449));
        cart.add_unit("b", "Manicure", dec!(449));

        assert_eq!(cart.total(), dec!(1697.50));
    }

    #[test]
    fn test_total_saturates_instead_of_panicking() {
        let mut cart = Cart::new();
        cart.add_unit("a", "Big", Decimal::MAX);
        cart.add_unit("a", "Big", Decimal::MAX);
        cart.add_unit("b", "Also Big", Decimal::MAX);

        assert_eq!(cart.get("a").unwrap().subtotal(), Decimal::MAX);
        assert_eq!(cart.total(), Decimal::MAX);
    }
}
