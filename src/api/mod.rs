//! HTTP API module for the shift engine.
//!
//! This module exposes the pure engine over REST: derived shift figures,
//! overlap detection, period statistics and field validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeriveRequest, OverlapRequest, StatsRequest, ValidateWorkplaceRequest};
pub use response::{
    ApiError, DeriveResponse, DerivedShift, OverlapResponse, StatsResponse, ValidationResponse,
};
pub use state::AppState;
