//! Order tracking page model.

use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::order::{tracker_view, OrderStatus, TrackerView};

/// Notice shown in place of the stepper for a cancelled order.
pub const CANCELLED_NOTICE: &str = "We're sorry, but this order has been cancelled. \
If you have any questions or need further assistance, please contact customer support.";

/// Footer shown once an order is delivered.
pub const DELIVERED_NOTICE: &str = "Order Delivered! Enjoy your meal. Thank you for choosing us!";

/// An order as shown on the tracking page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedOrder {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// Free text, e.g. "Approx. 15-25 mins".
    pub estimated_delivery: String,
    pub delivery_address: String,
    pub restaurant_name: Option<String>,
    pub driver_name: Option<String>,
}

impl TrackedOrder {
    pub fn new(
        order_id: impl Into<OrderId>,
        status: OrderStatus,
        estimated_delivery: impl Into<String>,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            status,
            estimated_delivery: estimated_delivery.into(),
            delivery_address: delivery_address.into(),
            restaurant_name: None,
            driver_name: None,
        }
    }

    pub fn with_restaurant(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = Some(name.into());
        self
    }

    pub fn with_driver(mut self, name: impl Into<String>) -> Self {
        self.driver_name = Some(name.into());
        self
    }

    /// Same order at a different status.
    pub fn at_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn view(&self) -> TrackerView {
        tracker_view(self.status)
    }

    /// "Your rider is on the way" banner, only while out for delivery.
    pub fn driver_notice(&self) -> Option<String> {
        match (&self.driver_name, self.status) {
            (Some(driver), OrderStatus::OutForDelivery) => {
                Some(format!("Your rider, {}, is on the way!", driver))
            }
            _ => None,
        }
    }

    /// Whether the live-location placeholder panel is shown.
    pub fn shows_map_placeholder(&self) -> bool {
        matches!(self.status, OrderStatus::Preparing | OrderStatus::OutForDelivery)
    }

    /// Terminal notice for cancelled or delivered orders.
    pub fn terminal_notice(&self) -> Option<&'static str> {
        match self.status {
            OrderStatus::Cancelled => Some(CANCELLED_NOTICE),
            OrderStatus::Delivered => Some(DELIVERED_NOTICE),
            _ => None,
        }
    }
}
