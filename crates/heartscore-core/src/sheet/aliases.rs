//! Header alias table for the HEART sheet format.
//!
//! The source workbook's column headers drift between revisions: stray
//! leading/trailing spaces, doubled spaces, and a few fixed misspellings
//! ("Intrest", "balnce"). That drift is a property of the format, not a bug
//! to fix upstream, so each logical field resolves against an ordered list
//! of accepted literal spellings; the first present, non-absent header wins.
//! Keeping the table as data keeps it testable and extendable without
//! touching the derivation code.

pub const SR_NO: &[&str] = &["SR NO.", "SR NO"];
pub const COUNTRY: &[&str] = &["COUNTRY", "COUNTRY "];

pub const GLOBAL_GDP: &[&str] = &[
    " Global GDP (in USD)",
    "Global GDP (in USD)",
    " Global GDP (in USD) ",
    "Global GDP (in USD) ",
];
pub const GLOBAL_POPULATION: &[&str] = &["Total Global Population"];
pub const GLOBAL_TRADE: &[&str] = &[
    "Total Global Trade (in USD)",
    " Total Global Trade (in USD)",
];

pub const GDP: &[&str] = &[" Country GDP (in USD)", "Country GDP (in USD)"];
pub const GDP_RANK: &[&str] = &["Country GDP Global Ranking"];
pub const GDP_SHARE: &[&str] = &[
    "Country GDP ( %)To Global GDP ",
    "Country GDP ( %)To Global GDP",
];

pub const POPULATION: &[&str] = &["Country population", "Country Population"];
pub const POPULATION_SHARE: &[&str] = &["Country population To global Population ( %)"];

pub const PCI: &[&str] = &["Per Capita income(PCI)", "Per Capita income (PCI)"];
pub const INFLATION: &[&str] = &["Country inflation ( %)", "Country Inflation ( %)"];

pub const INTEREST_RATE: &[&str] = &["Intrest Rate ( %)", "Interest Rate ( %)"];
pub const TOTAL_DEBT: &[&str] = &[
    "  Country Total Debt (in USD)",
    "Country Total Debt (in USD)",
];
pub const INTEREST_PAYMENT: &[&str] = &[
    " Country Interest Payment (in USD)",
    "Country Interest Payment (in USD)",
];
pub const ADJUSTED_DEBT: &[&str] = &[
    " Country Adjusted Debt (in USD)",
    "Country Adjusted Debt (in USD)",
];
pub const INTEREST_PAYMENT_TO_GDP: &[&str] = &[
    "Intrest Payment to Country GDP( %)",
    "Interest Payment to Country GDP( %)",
];
pub const ADJUSTED_DEBT_TO_GDP: &[&str] = &["Country Adjusted Debt to GDP(%)"];

pub const TRADE: &[&str] = &[" Country Trade (in USD)", "Country Trade (in USD)"];
pub const TRADE_SHARE: &[&str] = &["Country % to  global trade", "Country % to global trade"];
pub const TRADE_CONTRIBUTION_TO_GDP: &[&str] = &["Trade Contribution to GDP ( %)"];
pub const TRADE_BALANCE: &[&str] = &[
    " Trade Balance (in USD; + - )",
    "Trade Balance (in USD; + - )",
];
pub const TRADE_BALANCE_TO_GDP: &[&str] = &[
    "Trade balnce to GDP ( %)",
    "Trade balance to GDP ( %)",
];

pub const HOUSING: &[&str] = &[
    " Housing Contribution to GDP (in USD)",
    "Housing Contribution to GDP (in USD)",
];
pub const HOUSING_PCT: &[&str] = &["Housing Contribution to GDP ( %)"];
pub const HOUSING_UNITS: &[&str] = &["Country Housing Units"];
pub const HOUSES_PER_PERSON: &[&str] = &[
    "Country House per Person ",
    "Country House per Person",
];

pub const HEALTH: &[&str] = &[" Health Contribution to GDP", "Health Contribution to GDP"];
pub const HEALTH_PCT: &[&str] = &["Health Contribution to GDP ( %)"];

pub const ENERGY: &[&str] = &[" Energy Contribution To GDP", "Energy Contribution To GDP"];
pub const ENERGY_PCT: &[&str] = &[
    "Energy Contribution To GDP  ( %)",
    "Energy Contribution To GDP ( %)",
];

pub const EDUCATION: &[&str] = &[
    " Education Contribution To GDP",
    "Education Contribution To GDP",
];
pub const EDUCATION_PCT: &[&str] = &["Education Contribution To GDP ( %)"];

pub const HEART_VALUE: &[&str] = &["Heart Value (HV--Range; 0-1)"];
pub const HDI: &[&str] = &["HDI(Range: 0-1)", "HDI (Range: 0-1)"];
pub const GINI: &[&str] = &["GINI (Range: 0-1)", "GINI(Range: 0-1)"];
pub const ADJUSTED_HDI: &[&str] = &["Adjusted HDI (AHDI) == HDI-GINI"];
pub const AFFORDABILITY_VALUE: &[&str] = &["HEART Affordability Value (APCI*AHDI)"];
pub const AFFORDABILITY_RANKING: &[&str] = &[
    "Heart  AFFORDABILITY RANKING (HAR)",
    "Heart AFFORDABILITY RANKING (HAR)",
];
pub const HEART_SCORE: &[&str] = &["HEART SCORE (HV&HAR)"];
pub const DESCRIPTION: &[&str] = &["Brief Description of HEART Scores"];
