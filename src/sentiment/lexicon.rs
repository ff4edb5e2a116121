//! Finance-oriented polarity word lists.
//!
//! A compact dictionary in the manner of Loughran-McDonald: words carry the
//! tone they have in financial text, not in general English ("liability" is
//! negative here). All entries are lowercase; the tokenizer lowercases before
//! lookup.

pub(crate) const POSITIVE: &[&str] = &[
    "able",
    "achieve",
    "achieved",
    "advance",
    "advances",
    "advantage",
    "attain",
    "attractive",
    "beneficial",
    "benefit",
    "benefits",
    "best",
    "better",
    "boom",
    "boost",
    "breakthrough",
    "bullish",
    "confident",
    "deliver",
    "delivered",
    "efficiency",
    "efficient",
    "enhance",
    "enhanced",
    "exceed",
    "exceeded",
    "excellent",
    "exceptional",
    "favorable",
    "gain",
    "gained",
    "gains",
    "good",
    "great",
    "greater",
    "growth",
    "high",
    "higher",
    "improve",
    "improved",
    "improvement",
    "increase",
    "increased",
    "increases",
    "innovation",
    "innovative",
    "leading",
    "lucrative",
    "milestone",
    "opportunities",
    "opportunity",
    "optimistic",
    "outperform",
    "outperformed",
    "positive",
    "profit",
    "profitability",
    "profitable",
    "profits",
    "progress",
    "rally",
    "rallied",
    "rebound",
    "record",
    "recover",
    "recovered",
    "recovery",
    "reward",
    "rise",
    "rises",
    "rising",
    "robust",
    "soar",
    "soared",
    "soars",
    "stability",
    "stable",
    "strength",
    "strengthen",
    "strong",
    "stronger",
    "succeed",
    "success",
    "successful",
    "surge",
    "surged",
    "surges",
    "surpass",
    "sustainable",
    "upside",
    "uptrend",
    "win",
    "winner",
    "winning",
];

pub(crate) const NEGATIVE: &[&str] = &[
    "abandon",
    "abandoned",
    "adverse",
    "adversely",
    "against",
    "alarm",
    "alleged",
    "allegations",
    "bad",
    "bankrupt",
    "bankruptcy",
    "bearish",
    "breach",
    "collapse",
    "collapsed",
    "concern",
    "concerned",
    "concerns",
    "crash",
    "crashed",
    "crashes",
    "crisis",
    "critical",
    "damage",
    "damages",
    "danger",
    "dangerous",
    "decline",
    "declined",
    "declines",
    "decrease",
    "decreased",
    "default",
    "deficit",
    "delay",
    "delayed",
    "delays",
    "deteriorate",
    "deteriorated",
    "difficult",
    "difficulty",
    "disappointing",
    "disaster",
    "dispute",
    "downgrade",
    "downgraded",
    "downside",
    "downtrend",
    "downturn",
    "drop",
    "dropped",
    "drops",
    "dump",
    "dumped",
    "exploit",
    "exploited",
    "fail",
    "failed",
    "failing",
    "fails",
    "failure",
    "fall",
    "falling",
    "falls",
    "fear",
    "fears",
    "fell",
    "fine",
    "fined",
    "fraud",
    "fraudulent",
    "hack",
    "hacked",
    "halt",
    "halted",
    "illegal",
    "illicit",
    "investigation",
    "lawsuit",
    "liability",
    "liquidation",
    "liquidated",
    "lose",
    "loses",
    "losing",
    "loss",
    "losses",
    "lost",
    "low",
    "lower",
    "manipulation",
    "negative",
    "panic",
    "penalties",
    "penalty",
    "plummet",
    "plummeted",
    "plunge",
    "plunged",
    "plunges",
    "poor",
    "problem",
    "problems",
    "recession",
    "risk",
    "risks",
    "risky",
    "scam",
    "scandal",
    "selloff",
    "shortfall",
    "shut",
    "shutdown",
    "slump",
    "slumped",
    "stolen",
    "struggle",
    "struggled",
    "struggling",
    "sue",
    "sued",
    "suspend",
    "suspended",
    "suspension",
    "theft",
    "threat",
    "threats",
    "trouble",
    "turmoil",
    "uncertain",
    "uncertainty",
    "unstable",
    "volatile",
    "volatility",
    "warn",
    "warned",
    "warning",
    "warnings",
    "weak",
    "weaken",
    "weakened",
    "weakness",
    "worse",
    "worst",
];
