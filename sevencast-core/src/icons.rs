//! Condition-text to emoji icon mapping.
//!
//! The mapping is an ordered table of substring rules consulted
//! first-match-wins, so precedence stays auditable: "pcloudy" must be checked
//! before "cloudy", and "cloudy" before "rain" (a condition containing both
//! resolves to the cloudy icon).

/// One row of the precedence table: substring plus a (day, night) icon pair.
struct IconRule {
    pattern: &'static str,
    day: &'static str,
    night: &'static str,
}

const ICON_RULES: &[IconRule] = &[
    IconRule { pattern: "clear", day: "☀️", night: "🌕" },
    IconRule { pattern: "pcloudy", day: "⛅️", night: "🌤️" },
    IconRule { pattern: "partly", day: "⛅️", night: "🌤️" },
    IconRule { pattern: "cloudy", day: "☁️", night: "☁️🌙" },
    IconRule { pattern: "rain", day: "🌧️", night: "🌧️🌙" },
    IconRule { pattern: "snow", day: "❄️", night: "❄️🌙" },
    IconRule { pattern: "thunderstorm", day: "⛈️", night: "⛈️🌙" },
    IconRule { pattern: "humid", day: "🌫️", night: "🌫️🌙" },
];

const FALLBACK: IconRule = IconRule { pattern: "", day: "🌤️", night: "🌤️🌙" };

/// Resolves a free-text condition to a display icon.
///
/// Matching is case-insensitive. The night variant is chosen purely
/// textually, by the condition containing "night"; actual sunrise/sunset
/// times play no part.
pub fn resolve_icon(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    let is_night = condition.contains("night");

    let rule = ICON_RULES
        .iter()
        .find(|rule| condition.contains(rule.pattern))
        .unwrap_or(&FALLBACK);

    if is_night { rule.night } else { rule.day }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve_icon("cloudy"), resolve_icon("CLOUDY"));
        assert_eq!(resolve_icon("cloudy"), resolve_icon("Cloudy"));
        assert_eq!(resolve_icon("cloudy"), "☁️");
    }

    #[test]
    fn night_variant_is_textual() {
        assert_eq!(resolve_icon("clearnight"), "🌕");
        assert_eq!(resolve_icon("clearday"), "☀️");
        assert_eq!(resolve_icon("pcloudynight"), "🌤️");
    }

    #[test]
    fn substring_match_covers_prefixed_codes() {
        // 7timer reports e.g. "lightrain" and "lightsnow"
        assert_eq!(resolve_icon("lightrain"), "🌧️");
        assert_eq!(resolve_icon("lightsnownight"), "❄️🌙");
    }

    #[test]
    fn cloudy_takes_precedence_over_rain() {
        assert_eq!(resolve_icon("cloudyrain"), "☁️");
    }

    #[test]
    fn pcloudy_does_not_fall_through_to_cloudy() {
        assert_eq!(resolve_icon("pcloudy"), "⛅️");
        assert_eq!(resolve_icon("partly cloudy"), "⛅️");
    }

    #[test]
    fn unknown_condition_gets_fallback() {
        assert_eq!(resolve_icon("windy"), "🌤️");
        assert_eq!(resolve_icon("windynight"), "🌤️🌙");
    }
}
