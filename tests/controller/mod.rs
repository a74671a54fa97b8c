//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, verifying status codes and
//! response bodies for each resource.

mod fighter_type;
mod skill;
mod weapon;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use roster::{
    model::api::{ConnectDto, ErrorDto, ListParams},
    server::model::app::AppState,
};
use roster_test_utils::prelude::*;

use crate::util::read_json;
