//! Strategy Rationale
//!
//! Builds the narrative shown alongside each recommendation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::market::MarketMood;
use crate::model::{Category, Protocol};
use crate::money::round_half_up;

/// Requests are always denominated in SUI
const UNIT: &str = "SUI";

pub(super) fn compose(
    protocol: &Protocol,
    amount: Decimal,
    apy: Decimal,
    yearly_return: Decimal,
    mood: MarketMood,
) -> String {
    let monthly = yearly_return / dec!(12);
    let daily = yearly_return / dec!(365);

    let mut s = format!(
        "Deploying {} {} into {} would yield approximately {:.2} {} ({:.2}% APY) over one year, ",
        amount.normalize(),
        UNIT,
        protocol.name,
        round_half_up(yearly_return, 2),
        UNIT,
        round_half_up(apy, 2)
    );
    s.push_str(&format!(
        "with monthly returns of around {:.2} {} and daily returns of {:.4} {}. ",
        round_half_up(monthly, 2),
        UNIT,
        round_half_up(daily, 4),
        UNIT
    ));

    s.push_str(match mood {
        MarketMood::Bullish => {
            "Markets are currently bullish, so yields are running above their nominal rate. "
        }
        MarketMood::Neutral => "Markets are currently neutral, so yields are tracking their nominal rate. ",
        MarketMood::Bearish => {
            "Markets are currently bearish, so yields are running below their nominal rate and capital safety matters most. "
        }
    });

    s.push_str(if protocol.audited {
        "This protocol has been professionally audited which reduces security risks. "
    } else {
        "This protocol has not been officially audited, which poses additional security risks. "
    });

    s.push_str(match protocol.category {
        Category::Lending => {
            "As a lending protocol, your funds are used to provide loans to borrowers with collateral backing. "
        }
        Category::Liquidity => {
            "As a liquidity provider, you may be exposed to impermanent loss if the price ratio between the paired assets changes significantly. "
        }
        Category::Farming => {
            "Yield farming typically involves higher risks but offers potentially higher rewards through protocol incentives. "
        }
        Category::Staking => {
            "Staking helps secure the network and earns validator rewards without exposure to paired-asset price swings. "
        }
    });

    s.push_str(&format!(
        "The protocol currently has a Total Value Locked (TVL) of ${:.1} million.",
        round_half_up(protocol.tvl / dec!(1_000_000), 1)
    ));

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProtocolCatalog;

    #[test]
    fn test_compose_reference() {
        let catalog = ProtocolCatalog::sui_defaults();
        let scallop = catalog.get("scallop-lending").unwrap();

        let text = compose(scallop, dec!(50), dec!(8.3), dec!(4.15), MarketMood::Neutral);

        assert!(text.starts_with(
            "Deploying 50 SUI into Scallop Protocol would yield approximately 4.15 SUI (8.30% APY)"
        ));
        assert!(text.contains("monthly returns of around 0.35 SUI"));
        assert!(text.contains("daily returns of 0.0114 SUI"));
        assert!(text.contains("neutral"));
        assert!(text.contains("professionally audited"));
        assert!(text.contains("lending protocol"));
        assert!(text.ends_with("TVL) of $15.0 million."));
    }

    #[test]
    fn test_compose_unaudited_farm_in_bull_market() {
        let catalog = ProtocolCatalog::sui_defaults();
        let kriya = catalog.get("kriya-stablecoin").unwrap();

        let text = compose(kriya, dec!(10), dec!(26.76), dec!(2.676), MarketMood::Bullish);

        assert!(text.contains("10 SUI into Kriya Finance"));
        assert!(text.contains("bullish"));
        assert!(text.contains("not been officially audited"));
        assert!(text.contains("Yield farming"));
        assert!(text.ends_with("$4.2 million."));
    }

    #[test]
    fn test_compose_rounds_half_up() {
        let catalog = ProtocolCatalog::sui_defaults();
        let cetus = catalog.get("cetus-sui-usdc").unwrap();

        // 6.125 and 2.675 sit on midpoints; monthly 0.5104, daily 0.01678
        let text = compose(cetus, dec!(100), dec!(2.675), dec!(6.125), MarketMood::Neutral);

        assert!(text.contains("approximately 6.13 SUI (2.68% APY)"));
        assert!(text.contains("monthly returns of around 0.51 SUI"));
        assert!(text.contains("daily returns of 0.0168 SUI"));
        assert!(text.ends_with("$8.5 million."));
    }
}
