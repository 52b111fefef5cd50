//! Order module.
//!
//! Contains the order status, the progress stepper and the tracking page
//! model.

mod status;
mod tracker;

pub use status::{
    progress_percent, stage_state, tracker_view, Connector, OrderStatus, StageState, StageView,
    TrackerView, STEPPER_STAGES,
};
pub use tracker::{TrackedOrder, CANCELLED_NOTICE, DELIVERED_NOTICE};
