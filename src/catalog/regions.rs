/// Region groups used in retailer expansion plans
const REGION_STATES: &[(&str, &[&str])] = &[
    (
        "Northeast",
        &["CT", "ME", "MA", "NH", "RI", "VT", "NY", "NJ", "PA", "DE", "MD", "DC"],
    ),
    (
        "Southeast",
        &["VA", "WV", "NC", "SC", "GA", "FL", "AL", "MS", "TN", "KY", "AR", "LA"],
    ),
    (
        "Midwest",
        &["OH", "IN", "IL", "MI", "WI", "MN", "IA", "MO", "ND", "SD", "NE", "KS"],
    ),
    ("Southwest", &["TX", "OK", "NM", "AZ"]),
    (
        "West",
        &["CO", "WY", "MT", "ID", "UT", "NV", "CA", "OR", "WA", "AK", "HI"],
    ),
];

pub const NATIONAL: &str = "National";

/// Region group for a two-letter state code (case-insensitive)
pub fn region_for_state(state_code: &str) -> Option<&'static str> {
    let code = state_code.trim().to_ascii_uppercase();
    REGION_STATES
        .iter()
        .find(|(_, states)| states.contains(&code.as_str()))
        .map(|(region, _)| *region)
}

/// True when an expansion plan covers the state, directly or through its region
pub fn covers_state(expansion_regions: &[String], state_code: &str) -> bool {
    let region = region_for_state(state_code);
    expansion_regions.iter().any(|entry| {
        entry.eq_ignore_ascii_case(NATIONAL)
            || region.is_some_and(|r| entry.eq_ignore_ascii_case(r))
            || entry.trim().eq_ignore_ascii_case(state_code.trim())
    })
}
