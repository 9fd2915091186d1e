//! Ferrous DNS Mapper Infrastructure Layer
pub mod cloudflare;
pub mod output;
