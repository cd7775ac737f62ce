use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Lab test order with its LOINC metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabOrder {
    pub order_code: String,
    pub order_name: String,
    pub order_loinc_code: String,
    pub loinc_name: String,
    pub order_loinc_description: String,
}

/// Find the order whose code matches. Empty code never matches.
pub fn find_order<'a>(orders: &'a [LabOrder], order_code: &str) -> Option<&'a LabOrder> {
    if order_code.is_empty() {
        return None;
    }
    orders.iter().find(|o| o.order_code == order_code)
}

// ============================================================================
// Derived view
// ============================================================================

/// Read-only fields shown for the selected order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDetails {
    pub order_name: String,
    pub order_loinc_code: String,
    pub loinc_name: String,
    pub order_loinc_description: String,
}

impl OrderDetails {
    /// All four fields are empty when the code has no match
    pub fn derive(orders: &[LabOrder], order_code: &str) -> Self {
        match find_order(orders, order_code) {
            Some(order) => Self::from(order),
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_name.is_empty()
            && self.order_loinc_code.is_empty()
            && self.loinc_name.is_empty()
            && self.order_loinc_description.is_empty()
    }
}

impl From<&LabOrder> for OrderDetails {
    fn from(order: &LabOrder) -> Self {
        Self {
            order_name: order.order_name.clone(),
            order_loinc_code: order.order_loinc_code.clone(),
            loinc_name: order.loinc_name.clone(),
            order_loinc_description: order.order_loinc_description.clone(),
        }
    }
}
