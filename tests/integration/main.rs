//! End-to-end tests over the full router.

mod auth_test;
mod helpers;
mod rbac_test;
