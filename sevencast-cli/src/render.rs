//! Turns daily summaries into terminal day cards.

use sevencast_core::{DailySummary, to_fahrenheit};

pub const NO_DATA: &str = "No forecast data available.";

/// Renders the full forecast block. Pure, so it is testable without a
/// terminal; the caller decides where it goes.
pub fn render_forecast(location: &str, days: &[DailySummary], show_fahrenheit: bool) -> String {
    if days.is_empty() {
        return NO_DATA.to_string();
    }

    let mut out = format!("Forecast for {location}\n");
    for day in days {
        out.push('\n');
        out.push_str(&render_card(day, show_fahrenheit));
    }
    out
}

fn render_card(day: &DailySummary, show_fahrenheit: bool) -> String {
    format!(
        "{}  {}\n{}\nHigh: {}\nLow:  {}\n",
        day.date_label,
        day.icon,
        day.condition.to_uppercase(),
        format_temp(day.high_temp, show_fahrenheit),
        format_temp(day.low_temp, show_fahrenheit),
    )
}

/// Celsius always; Fahrenheit only when the alternate view is toggled on.
fn format_temp(celsius: f64, show_fahrenheit: bool) -> String {
    let degrees = format_degrees(celsius);
    if show_fahrenheit {
        format!("{degrees} ºC ({} ºF)", to_fahrenheit(celsius))
    } else {
        format!("{degrees} ºC")
    }
}

fn format_degrees(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.1}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> DailySummary {
        DailySummary {
            date_label: "Sat Jun 15".to_string(),
            high_temp: 25.0,
            low_temp: 20.0,
            condition: "clear".to_string(),
            icon: "☀️",
        }
    }

    #[test]
    fn empty_forecast_renders_the_fallback_message() {
        assert_eq!(render_forecast("Paris, France", &[], false), NO_DATA);
    }

    #[test]
    fn card_shows_label_icon_condition_and_range() {
        let out = render_forecast("Paris, France", &[day()], false);

        assert!(out.contains("Forecast for Paris, France"));
        assert!(out.contains("Sat Jun 15  ☀️"));
        assert!(out.contains("CLEAR"));
        assert!(out.contains("High: 25 ºC"));
        assert!(out.contains("Low:  20 ºC"));
    }

    #[test]
    fn fahrenheit_is_hidden_unless_toggled() {
        let plain = render_forecast("Paris, France", &[day()], false);
        assert!(!plain.contains("ºF"));

        let toggled = render_forecast("Paris, France", &[day()], true);
        assert!(toggled.contains("High: 25 ºC (77 ºF)"));
        assert!(toggled.contains("Low:  20 ºC (68 ºF)"));
    }

    #[test]
    fn fractional_temperatures_keep_one_decimal() {
        let mut summary = day();
        summary.high_temp = 25.5;
        let out = render_forecast("Paris, France", &[summary], false);
        assert!(out.contains("High: 25.5 ºC"));
    }
}
