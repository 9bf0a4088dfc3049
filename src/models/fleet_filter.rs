use std::fmt;

/// Sentinel shown first in fleet choice lists.
pub const ALL_FLEETS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FleetFilter {
    #[default]
    All,
    Fleet(String),
}

impl FleetFilter {
    /// `All`/`Todas` (any case) select every fleet, anything else is a fleet code.
    /// A leading `=` forces a literal code, so `=todas` matches a fleet named `todas`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Some(code) = s.strip_prefix('=') {
            return FleetFilter::Fleet(code.trim().to_string());
        }
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_FLEETS) || s.eq_ignore_ascii_case("todas") {
            FleetFilter::All
        } else {
            FleetFilter::Fleet(s.to_string())
        }
    }

    pub fn matches(&self, fleet: &str) -> bool {
        match self {
            FleetFilter::All => true,
            FleetFilter::Fleet(f) => f == fleet,
        }
    }
}

impl fmt::Display for FleetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetFilter::All => f.write_str(ALL_FLEETS),
            FleetFilter::Fleet(code) => f.write_str(code),
        }
    }
}
