//! Text Rendering
//!
//! Plain-text cards and tables for terminal output.

use rust_decimal::Decimal;

use strategy_engine::{
    round_half_up, security_score, Portfolio, Protocol, ProtocolCatalog, RiskLevel, Strategy,
    YieldSample,
};

fn rule() -> String {
    "═".repeat(60)
}

pub fn strategies(strategies: &[Strategy], amount: Decimal, risk_level: RiskLevel) -> String {
    let mut s = format!("Strategies for {} SUI ({} risk)\n", amount.normalize(), risk_level);

    if let Some(first) = strategies.first() {
        s.push_str(&format!(
            "Market mood: {} (APY x{})\n",
            first.market_mood,
            first.market_mood.factor()
        ));
    }
    s.push_str(&rule());
    s.push('\n');

    if strategies.is_empty() {
        s.push_str("No protocols in the catalog match this request.\n");
        return s;
    }

    for (i, st) in strategies.iter().enumerate() {
        let p = &st.protocol;
        let backfilled = if st.fits(risk_level) { "" } else { "  [above requested risk]" };

        s.push_str(&format!("\n{}. {} {} ({}, {} tier){}\n", i + 1, p.logo, p.name, p.category, p.risk_tier, backfilled));
        s.push_str(&format!(
            "   APY:              {:.2}% (nominal {:.2}%)\n",
            round_half_up(st.estimated_apy, 2),
            round_half_up(p.apy, 2)
        ));
        s.push_str(&format!("   Est. return:      {:.4} SUI / year\n", round_half_up(st.estimated_return, 4)));
        s.push_str(&format!("   Allocation:       {}%\n", st.allocation_percentage));
        s.push_str(&format!("   Risk score:       {:.1} / 10\n", round_half_up(st.risk_score, 1)));
        s.push_str(&format!("   Liquidity risk:   {}\n", st.liquidity_risk));
        s.push_str(&format!("   Impermanent loss: {}\n", st.impermanent_loss_risk));
        s.push_str(&format!("   {}\n", st.explanation));
    }

    s
}

pub fn protocols(catalog: &ProtocolCatalog) -> String {
    let mut s = String::from("Protocol Catalog\n");
    s.push_str(&rule());
    s.push('\n');
    s.push_str(&format!(
        "  {:<20} {:<10} {:<9} {:>7} {:>10} {:>8} {:>6}\n",
        "id", "category", "tier", "APY", "TVL ($M)", "audited", "score"
    ));

    for p in catalog.iter() {
        s.push_str(&format!(
            "  {:<20} {:<10} {:<9} {:>6.2}% {:>10.1} {:>8} {:>6}\n",
            p.id,
            p.category.as_str(),
            p.risk_tier.as_str(),
            round_half_up(p.apy, 2),
            round_half_up(p.tvl / Decimal::from(1_000_000), 1),
            if p.audited { "yes" } else { "no" },
            security_score(p)
        ));
    }

    s
}

pub fn history(protocol: &Protocol, samples: &[YieldSample]) -> String {
    let mut s = format!("{} {} - simulated daily yield\n", protocol.logo, protocol.name);
    s.push_str(&rule());
    s.push('\n');

    for sample in samples {
        s.push_str(&format!("  day {:>3}  {:.5}%\n", sample.day, round_half_up(sample.yield_pct, 5)));
    }

    if !samples.is_empty() {
        let total: Decimal = samples.iter().map(|x| x.yield_pct).sum();
        let avg = total / Decimal::from(samples.len());
        s.push_str(&format!(
            "\n  average  {:.5}% (nominal {:.5}%)\n",
            round_half_up(avg, 5),
            round_half_up(protocol.apy / Decimal::from(365), 5)
        ));
    }

    s
}

pub fn portfolio(portfolio: &Portfolio) -> String {
    let mut s = String::from("Portfolio\n");
    s.push_str(&rule());
    s.push('\n');
    s.push_str(&format!("  Total invested: {:.2} SUI\n", round_half_up(portfolio.total_invested(), 2)));
    s.push_str(&format!("  Current value:  {:.2} SUI\n", round_half_up(portfolio.total_value(), 2)));
    s.push_str(&format!(
        "  Total profit:   {:+.2} SUI ({:+.2}%)\n",
        round_half_up(portfolio.total_profit(), 2),
        round_half_up(portfolio.total_profit_percent(), 2)
    ));

    if portfolio.is_empty() {
        s.push_str("\n  No active strategies.\n");
        return s;
    }

    s.push_str("\nActive Strategies\n");
    for a in &portfolio.strategies {
        s.push_str(&format!(
            "  {} {:<20} started {}  {:.2} -> {:.2} SUI ({:+.2}%)\n",
            a.strategy.protocol.logo,
            a.strategy.protocol.name,
            a.started_at.format("%Y-%m-%d"),
            round_half_up(a.initial_investment, 2),
            round_half_up(a.current_value, 2),
            round_half_up(a.profit_percent, 2)
        ));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use strategy_engine::{Category, RiskTier};

    fn protocol(apy: Decimal, tvl: Decimal) -> Protocol {
        Protocol {
            id: "half-way".into(),
            name: "Half Way".into(),
            logo: "*".into(),
            category: Category::Lending,
            risk_tier: RiskTier::Low,
            apy,
            tvl,
            audited: true,
            description: String::new(),
            token_symbol: "SUI".into(),
        }
    }

    #[test]
    fn test_protocol_table_rounds_half_up() {
        let catalog = ProtocolCatalog::new(vec![protocol(dec!(2.675), dec!(4_250_000))]).unwrap();
        let table = protocols(&catalog);

        assert!(table.contains("2.68%"));
        assert!(table.contains(" 4.3 "));
    }

    #[test]
    fn test_history_rounds_half_up() {
        let samples = [YieldSample { day: 1, yield_pct: dec!(0.012345) }];
        let text = history(&protocol(dec!(3.65), dec!(1_000_000)), &samples);

        assert!(text.contains("day   1  0.01235%"));
        assert!(text.contains("average  0.01235% (nominal 0.01000%)"));
    }

    #[test]
    fn test_empty_portfolio_totals() {
        let text = portfolio(&Portfolio::new());
        assert!(text.contains("Total invested: 0.00 SUI"));
        assert!(text.contains("No active strategies."));
    }
}
