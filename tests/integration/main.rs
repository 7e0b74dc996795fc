//! HTTP integration tests for the LibDesk API.

mod helpers;

mod directory_test;
mod login_test;
mod logout_test;
mod pages_test;
mod status_test;
