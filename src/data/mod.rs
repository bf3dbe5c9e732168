mod envelope;
mod http;
mod loadable;
mod provider;

pub use {
    envelope::{check_envelope, envelope_error},
    http::HttpMarketApi,
    loadable::Loadable,
    provider::MarketApi,
};
