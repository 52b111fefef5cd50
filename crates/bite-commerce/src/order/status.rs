//! Order status and the four-stage progress stepper.
//!
//! Status is a static value per tracker view. There is no transition engine:
//! nothing here moves an order from one status to the next.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Restaurant accepted the order.
    #[default]
    Confirmed,
    /// Food is being prepared.
    Preparing,
    /// A rider is on the way.
    OutForDelivery,
    /// Order handed over.
    Delivered,
    /// Order cancelled. Not a stepper stage.
    Cancelled,
}

/// The stepper stages, in order. `Cancelled` is not among them.
pub const STEPPER_STAGES: [OrderStatus; 4] = [
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Label shown under the stepper icon.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Preparing Food",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Delivered and Cancelled have no further progression.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Position in [`STEPPER_STAGES`], `None` for `Cancelled`.
    pub fn stage_index(&self) -> Option<usize> {
        STEPPER_STAGES.iter().position(|s| s == self)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    /// Accepts `OUT_FOR_DELIVERY`, `out-for-delivery` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "OUT_FOR_DELIVERY" => Ok(OrderStatus::OutForDelivery),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" | "CANCELED" => Ok(OrderStatus::Cancelled),
            _ => Err(CommerceError::UnknownStatus(s.to_string())),
        }
    }
}

/// Overall progress bar value for `status`.
pub fn progress_percent(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Confirmed => 20,
        OrderStatus::Preparing => 45,
        OrderStatus::OutForDelivery => 70,
        OrderStatus::Delivered => 100,
        OrderStatus::Cancelled => 0,
    }
}

/// How one stepper stage is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Completed,
    Active,
    Pending,
}

/// State of `stage` while the order is at `status`.
///
/// `None` when either side is `Cancelled`: a cancelled order has no stepper.
/// A delivered order shows its final stage as completed, never active.
pub fn stage_state(status: OrderStatus, stage: OrderStatus) -> Option<StageState> {
    let current = status.stage_index()?;
    let index = stage.stage_index()?;

    let state = if index < current || (stage == OrderStatus::Delivered && status == OrderStatus::Delivered) {
        StageState::Completed
    } else if index == current {
        StageState::Active
    } else {
        StageState::Pending
    };
    Some(state)
}

/// The bar drawn between a stage and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    Done,
    Current,
    Upcoming,
}

/// One stage of the rendered stepper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageView {
    pub stage: OrderStatus,
    pub label: &'static str,
    pub state: StageState,
    /// Connector to the following stage; `None` after the last one.
    pub connector: Option<Connector>,
}

/// What the order tracker renders for a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum TrackerView {
    /// Terminal cancelled notice. Never carries a progress value.
    Cancelled,
    Stepper {
        stages: Vec<StageView>,
        /// Progress bar value; hidden (`None`) once delivered.
        progress: Option<u8>,
    },
}

/// Build the tracker view for `status`.
pub fn tracker_view(status: OrderStatus) -> TrackerView {
    let Some(current) = status.stage_index() else {
        return TrackerView::Cancelled;
    };
    let delivered = status == OrderStatus::Delivered;

    let stages = STEPPER_STAGES
        .iter()
        .enumerate()
        .filter_map(|(index, &stage)| {
            let state = stage_state(status, stage)?;
            let connector = (index + 1 < STEPPER_STAGES.len()).then(|| {
                if current > index {
                    Connector::Done
                } else if current == index && !delivered {
                    Connector::Current
                } else {
                    Connector::Upcoming
                }
            });
            Some(StageView {
                stage,
                label: stage.label(),
                state,
                connector,
            })
        })
        .collect();

    TrackerView::Stepper {
        stages,
        progress: (!delivered).then(|| progress_percent(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(status: OrderStatus) -> Vec<StageState> {
        STEPPER_STAGES
            .iter()
            .map(|&stage| stage_state(status, stage).unwrap())
            .collect()
    }

    #[test]
    fn test_progress_is_monotonic() {
        let values: Vec<u8> = STEPPER_STAGES.iter().map(|&s| progress_percent(s)).collect();
        assert_eq!(values, vec![20, 45, 70, 100]);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress_percent(OrderStatus::Cancelled), 0);
    }

    #[test]
    fn test_stage_states_out_for_delivery() {
        use StageState::*;
        assert_eq!(
            states(OrderStatus::OutForDelivery),
            vec![Completed, Completed, Active, Pending]
        );
        assert_eq!(states(OrderStatus::Confirmed), vec![Active, Pending, Pending, Pending]);
    }

    #[test]
    fn test_delivered_is_completed_not_active() {
        assert_eq!(states(OrderStatus::Delivered), vec![StageState::Completed; 4]);
    }

    #[test]
    fn test_cancelled_short_circuits() {
        assert_eq!(stage_state(OrderStatus::Cancelled, OrderStatus::Confirmed), None);
        assert_eq!(stage_state(OrderStatus::Preparing, OrderStatus::Cancelled), None);
        assert_eq!(tracker_view(OrderStatus::Cancelled), TrackerView::Cancelled);
    }

    #[test]
    fn test_tracker_connectors() {
        let TrackerView::Stepper { stages, progress } = tracker_view(OrderStatus::Preparing) else {
            panic!("expected stepper");
        };
        assert_eq!(progress, Some(45));
        let connectors: Vec<_> = stages.iter().map(|s| s.connector).collect();
        assert_eq!(
            connectors,
            vec![
                Some(Connector::Done),
                Some(Connector::Current),
                Some(Connector::Upcoming),
                None
            ]
        );
    }

    #[test]
    fn test_delivered_hides_progress_bar() {
        let TrackerView::Stepper { stages, progress } = tracker_view(OrderStatus::Delivered) else {
            panic!("expected stepper");
        };
        assert_eq!(progress, None);
        assert!(stages.iter().all(|s| s.connector != Some(Connector::Current)));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("out-for-delivery".parse::<OrderStatus>().unwrap(), OrderStatus::OutForDelivery);
        assert_eq!("CANCELLED".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::OutForDelivery.is_terminal());
    }
}
