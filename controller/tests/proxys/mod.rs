pub use common_proxies::proxy_controller;
pub use common_proxies::proxy_price_oracle;
