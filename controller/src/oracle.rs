multiversx_sc::imports!();

use common_errors::ERROR_ZERO_ORACLE_PRICE;
use common_proxies::proxy_price_oracle;

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule: storage::StorageModule + common_math::SharedMathModule {
    /// Price of one unit of the asset, normalized to MANTISSA decimals.
    /// DNR is pinned to 1; every other asset is fetched from the oracle.
    fn get_asset_price(&self, asset: &TokenIdentifier) -> BigUint {
        if self.is_dnr(asset) {
            return self.one();
        }

        let feed = self
            .tx()
            .to(self.price_oracle_address().get())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .latest_price_feed(asset)
            .returns(ReturnsResult)
            .sync_call();

        require!(feed.price > BigUint::zero(), ERROR_ZERO_ORACLE_PRICE);

        &feed.price * &self.one() / BigUint::from(10u64).pow(feed.decimals as u32)
    }

    fn is_dnr(&self, asset: &TokenIdentifier) -> bool {
        let mapper = self.dnr_token();
        !mapper.is_empty() && asset == &mapper.get_token_id()
    }
}
