use crate::config::DEBUG_FLAGS;
use crate::models::{FareQuery, GroupKey, Judgement, PriceTier, QuantileBand, ThresholdTable, Verdict};

/// Place `price` in the band using inclusive, ordered thresholds.
/// A price equal to a cut point always resolves to the cheaper tier.
pub fn tier_for_price(price: u32, band: &QuantileBand) -> PriceTier {
    let price = price as f64;
    if price <= band.p25 {
        PriceTier::VeryCheap
    } else if price <= band.p50 {
        PriceTier::CheapOrFair
    } else if price <= band.p75 {
        PriceTier::Expensive
    } else {
        PriceTier::VeryExpensive
    }
}

/// Judge a query against a table. Whichever key shape the table uses decides
/// which query fields take part in the lookup; a query that cannot form a key,
/// or a key with no historical group, yields `Verdict::InsufficientSample`.
pub fn classify<K: GroupKey>(query: &FareQuery, table: &ThresholdTable<K>) -> Verdict {
    let mode = table.mode();
    let Some(key) = K::for_query(query) else {
        return Verdict::InsufficientSample {
            query: *query,
            mode,
        };
    };

    if DEBUG_FLAGS.print_lookup_keys {
        log::debug!("🔎 Looking up {} in {:?} table", key, mode);
    }

    match table.get(&key) {
        Some(band) => {
            let tier = tier_for_price(query.price, band);
            Verdict::Judged(Judgement {
                query: *query,
                mode,
                band: band.cutoffs(),
                tier,
                action: tier.action(),
            })
        }
        None => Verdict::InsufficientSample {
            query: *query,
            mode,
        },
    }
}
