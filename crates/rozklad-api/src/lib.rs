//! API client library for the rozklad.org.ua schedule service.
//!
//! Provides an async client for the KPI university schedule API
//! (groups, teachers, lessons, timetable weeks).

/// KPI schedule API client.
pub mod kpi;
