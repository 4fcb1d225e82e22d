use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use sevencast_core::{
    CityCatalog, CityRecord, Config, ForecastProvider, SevenTimer, daily_summaries,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sevencast", version, about = "Multi-day forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Cities file to use instead of the built-in catalog.
    #[arg(long, global = true)]
    pub cities_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the cities available for forecasts.
    Cities,

    /// Show the forecast for a city as day cards.
    Forecast {
        /// City name; prompts with a selector when omitted.
        city: Option<String>,

        /// Country the city belongs to, for ambiguous names.
        #[arg(long)]
        country: Option<String>,

        /// Also show temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Interactively update persisted display settings.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Cities => {
                let catalog = load_catalog(self.cities_file.as_deref(), &config)?;
                for record in catalog.records() {
                    println!(
                        "{} ({}, {})",
                        record.label(),
                        record.latitude,
                        record.longitude
                    );
                }
            }
            Command::Forecast { city, country, fahrenheit } => {
                let catalog = load_catalog(self.cities_file.as_deref(), &config)?;
                let show_fahrenheit = fahrenheit || config.show_fahrenheit;
                run_forecast(&catalog, city, country, show_fahrenheit).await?;
            }
            Command::Configure => {
                configure(config)?;
            }
        }

        Ok(())
    }
}

fn load_catalog(override_path: Option<&std::path::Path>, config: &Config) -> Result<CityCatalog> {
    let path = override_path.or(config.cities_file.as_deref());

    let catalog = match path {
        Some(path) => CityCatalog::load(path)
            .with_context(|| format!("Failed to load cities from {}", path.display()))?,
        None => CityCatalog::builtin().context("Built-in city catalog is unusable")?,
    };

    tracing::debug!(cities = catalog.len(), "city catalog loaded");
    Ok(catalog)
}

async fn run_forecast(
    catalog: &CityCatalog,
    city: Option<String>,
    country: Option<String>,
    show_fahrenheit: bool,
) -> Result<()> {
    // A lookup miss means no request is issued at all.
    let record = match city {
        Some(city) => match catalog.find(&city, country.as_deref()) {
            Some(record) => record.clone(),
            None => {
                match country {
                    Some(country) => println!("City not found in catalog: {city}, {country}"),
                    None => println!("City not found in catalog: {city}"),
                }
                return Ok(());
            }
        },
        None => select_city(catalog)?,
    };

    println!("Fetching forecast for {}...", record.label());

    let forecast = match SevenTimer::new().fetch(record.latitude, record.longitude).await {
        Ok(forecast) => forecast,
        Err(err) => {
            tracing::warn!("forecast request failed: {err}");
            println!("{}", render::NO_DATA);
            return Ok(());
        }
    };

    let days = match daily_summaries(forecast.base, &forecast.points) {
        Ok(days) => days,
        Err(err) => {
            tracing::warn!("forecast data unusable: {err}");
            println!("{}", render::NO_DATA);
            return Ok(());
        }
    };

    println!("{}", render::render_forecast(&record.label(), &days, show_fahrenheit));
    Ok(())
}

/// The dropdown: a select over "City, Country" entries.
fn select_city(catalog: &CityCatalog) -> Result<CityRecord> {
    let labels: Vec<String> = catalog.records().iter().map(CityRecord::label).collect();

    let choice = Select::new("Which city?", labels)
        .prompt()
        .context("No city selected")?;

    // The choice came from the catalog's own labels, so the lookup cannot miss.
    let record = catalog
        .records()
        .iter()
        .find(|record| record.label() == choice)
        .context("Selected city disappeared from the catalog")?;

    Ok(record.clone())
}

fn configure(mut config: Config) -> Result<()> {
    config.show_fahrenheit = Confirm::new("Also show temperatures in Fahrenheit?")
        .with_default(config.show_fahrenheit)
        .prompt()?;

    let current = config
        .cities_file
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();

    let cities_file = Text::new("Cities file (leave empty for the built-in catalog):")
        .with_initial_value(&current)
        .prompt()?;

    config.cities_file = if cities_file.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(cities_file.trim()))
    };

    config.save()?;
    println!("Saved settings to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_args_parse() {
        let cli = Cli::try_parse_from([
            "sevencast",
            "forecast",
            "Paris",
            "--country",
            "France",
            "--fahrenheit",
        ])
        .unwrap();

        match cli.command {
            Command::Forecast { city, country, fahrenheit } => {
                assert_eq!(city.as_deref(), Some("Paris"));
                assert_eq!(country.as_deref(), Some("France"));
                assert!(fahrenheit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn city_is_optional() {
        let cli = Cli::try_parse_from(["sevencast", "forecast"]).unwrap();
        assert!(matches!(cli.command, Command::Forecast { city: None, .. }));
    }

    #[test]
    fn cities_file_is_a_global_flag() {
        let cli =
            Cli::try_parse_from(["sevencast", "cities", "--cities-file", "/tmp/c.csv"]).unwrap();
        assert_eq!(cli.cities_file, Some(PathBuf::from("/tmp/c.csv")));
    }
}
