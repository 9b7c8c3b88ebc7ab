//! Career Portal CLI Library
//!
//! Each subcommand is a view of the portal. Views are gated by the route
//! guard before any request is made.

pub mod application_cmd;
pub mod args;
pub mod auth_cmd;
pub mod company_cmd;
pub mod fmt;
pub mod jobs_cmd;
pub mod profile_cmd;
pub mod register_cmd;
pub mod report_cmd;
pub mod view;
