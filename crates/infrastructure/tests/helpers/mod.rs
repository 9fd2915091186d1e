pub mod cloudflare_mock;

pub use cloudflare_mock::*;
