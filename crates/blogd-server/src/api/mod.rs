// ABOUTME: API module containing all HTTP handler functions for the blogd REST API.
// ABOUTME: Blog CRUD lives in the blogs sub-module.

pub mod blogs;
