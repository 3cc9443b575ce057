//! Typed Microsoft Graph beta models for Intune device configuration profiles
//! and SharePoint site pages, plus a small blocking client for fetching pages.

pub mod api;
pub mod constants;
pub mod helpers;
pub mod models;
