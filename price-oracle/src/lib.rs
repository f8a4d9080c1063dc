#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_NO_PRICE_FEED;
use common_structs::PriceFeed;

/// Owner-fed price oracle. Stores the latest USD price and the feed's
/// decimals for each asset; consumers normalize to their own scale.
#[multiversx_sc::contract]
pub trait PriceOracle {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, asset: TokenIdentifier, price: BigUint, decimals: u8) {
        self.price_feed(&asset).set(PriceFeed { price, decimals });
    }

    #[view(latestPriceFeed)]
    fn latest_price_feed(&self, asset: TokenIdentifier) -> PriceFeed<Self::Api> {
        let mapper = self.price_feed(&asset);
        require!(!mapper.is_empty(), ERROR_NO_PRICE_FEED);
        mapper.get()
    }

    #[storage_mapper("price_feed")]
    fn price_feed(&self, asset: &TokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;
}
