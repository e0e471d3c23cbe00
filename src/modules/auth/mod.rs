pub mod controller;
pub mod router;
pub mod service;
pub mod verifier;
