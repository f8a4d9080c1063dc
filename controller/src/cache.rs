multiversx_sc::imports!();

use common_structs::MarketData;

/// In-memory copy of one market, loaded on entry and written back when the
/// cache goes out of scope. A failed transaction rolls the write back with
/// the rest of the state.
pub struct MarketCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    sc_ref: &'a C,
    pub asset: TokenIdentifier<C::Api>,
    pub market: MarketData<C::Api>,
    pub epoch: u64,
}

impl<'a, C> MarketCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    pub fn new(sc_ref: &'a C, asset: &TokenIdentifier<C::Api>) -> Self {
        MarketCache {
            asset: asset.clone(),
            market: sc_ref.market(asset).get(),
            epoch: sc_ref.blockchain().get_block_epoch(),
            sc_ref,
        }
    }
}

impl<'a, C> Drop for MarketCache<'a, C>
where
    C: crate::storage::StorageModule,
{
    fn drop(&mut self) {
        self.sc_ref.market(&self.asset).set(&self.market);
    }
}
