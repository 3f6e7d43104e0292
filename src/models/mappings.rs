use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Tool identifier (lower-case) to DeFiLlama protocol slug. Several
    /// catalog entries may share one slug.
    pub static ref PROTOCOL_MAPPINGS: HashMap<&'static str, &'static str> = [
        // Swap
        ("1inch", "1inch-network"),
        ("jupiter", "jupiter-aggregator"),
        ("uniswap-swap", "uniswap"),
        ("pancakeswap-swap", "pancakeswap"),
        ("lifi", "li.fi"),
        ("rango", "rango"),
        ("paraswap", "paraswap"),
        ("sushixswap", "sushiswap"),
        ("curve-swap", "curve-dex"),
        ("raydium-swap", "raydium"),
        ("aerodrome-swap", "aerodrome"),
        ("stargate-swap", "stargate"),
        ("orbiter-swap", "orbiter-finance"),
        ("cow-swap", "cow-swap"),
        ("kyberswap", "kyberswap"),

        // DEX
        ("uniswap-dex", "uniswap"),
        ("sushiswap-dex", "sushiswap"),
        ("pancakeswap-dex", "pancakeswap"),
        ("curve-dex", "curve-dex"),
        ("raydium-dex", "raydium"),
        ("orca-dex", "orca"),
        ("dydx-dex", "dydx"),
        ("aerodrome-dex", "aerodrome"),
        ("meteora", "meteora"),
        ("balancer-dex", "balancer-v2"),
        ("trader-joe-dex", "trader-joe"),
        ("syncswap", "syncswap"),
        ("hyperliquid-dex", "hyperliquid"),
        ("jupiter-dex", "jupiter-aggregator"),
        ("camelot", "camelot"),

        // Bridge
        ("stargate", "stargate"),
        ("debridge", "debridge"),
        ("across", "across"),
        ("wormhole", "wormhole"),
        ("synapse", "synapse"),
        ("hop", "hop-protocol"),
        ("layerswap", "layerswap"),
        ("rhino", "rhino.fi"),
        ("mayan", "mayan-finance"),
        ("celer", "celer"),
        ("orbiter", "orbiter-finance"),

        // DeFi
        ("uniswap-defi", "uniswap"),
        ("aave", "aave"),
        ("makerdao", "makerdao"),
        ("curve-defi", "curve-dex"),
        ("lido", "lido"),
        ("compound", "compound-finance"),
        ("gmx", "gmx"),
        ("rocket-pool", "rocket-pool"),
        ("pendle", "pendle"),
        ("ethena", "ethena"),

        // Cross-Chain
        ("layerzero", "layerzero"),
        ("axelar", "axelar"),
        ("chainlink-ccip", "chainlink-ccip"),
        ("thorchain", "thorchain"),
        ("maya", "maya-protocol"),
        ("squid", "squid"),

        // Perpetuals
        ("hyperliquid-perp", "hyperliquid"),
        ("dydx-perp", "dydx"),
        ("gmx-perp", "gmx"),
        ("jupiter-perps", "jupiter-perps"),
        ("aevo", "aevo"),
        ("vertex", "vertex-protocol"),
        ("synthetix", "synthetix"),
        ("drift", "drift-protocol"),
        ("kwenta", "kwenta"),
        ("bluefin", "bluefin"),
        ("rabbitx", "rabbitx"),
        ("level", "level-finance"),
        ("mux", "mux-protocol"),
        ("zeta", "zeta"),
        ("gains", "gains-network"),

        // NFT
        ("blur", "blur"),
        ("opensea", "opensea"),
        ("magic-eden", "magic-eden"),
        ("tensor", "tensor"),
        ("looksrare", "looksrare"),
        ("x2y2", "x2y2"),
        ("rarible", "rarible"),
    ]
    .into_iter()
    .collect();
}

/// Resolves a catalog tool identifier to its provider slug, ignoring case.
/// Tools without a known provider resolve to `None`.
pub fn resolve_slug(tool_id: &str) -> Option<&'static str> {
    PROTOCOL_MAPPINGS
        .get(tool_id.trim().to_lowercase().as_str())
        .copied()
}

/// All mapped tools sorted by identifier.
pub fn mapped_tools() -> Vec<(&'static str, &'static str)> {
    let mut tools: Vec<_> = PROTOCOL_MAPPINGS.iter().map(|(t, s)| (*t, *s)).collect();
    tools.sort_unstable();
    tools
}

/// Every tool identifier that resolves to `slug`, sorted.
pub fn tools_for_slug(slug: &str) -> Vec<&'static str> {
    let mut tools: Vec<_> = PROTOCOL_MAPPINGS
        .iter()
        .filter(|(_, s)| **s == slug)
        .map(|(t, _)| *t)
        .collect();
    tools.sort_unstable();
    tools
}
