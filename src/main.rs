use anyhow::Result;

use skycast_core::{AppError, Theme};
use skycast_weather::{classify_weather_code, find_location, icon_for, WeatherProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let mut app = skycast_core::App::new()?;
    app.initialize()?;

    // An explicit city argument replaces (and persists) the stored selection
    if let Some(city) = std::env::args().nth(1) {
        app.select_city(&city)?;
    }

    tracing::info!("Skycast dashboard started");

    let city_name = app.config().city.name.clone();

    let moment = match app.current_moment() {
        Ok(moment) => moment,
        Err(e) => {
            let err = AppError::from(e);
            tracing::warn!("Could not resolve day/night moment: {}", err);
            eprintln!("{}", err.user_message());
            None
        }
    };
    let theme = Theme::for_moment(moment);

    println!("Skycast - {}", city_name);
    println!(
        "  Moment: {}",
        moment.map(|m| m.as_str()).unwrap_or("unknown")
    );
    println!("  Theme:  {}", theme.name);

    let Some(key) = app.config().weather.authorization_key.clone() else {
        println!("\nSet CWB_AUTHORIZATION_KEY to show live conditions.");
        return Ok(());
    };

    let Some(city) = find_location(&city_name) else {
        println!("\nNo weather source configured for {}.", city_name);
        return Ok(());
    };

    let provider = WeatherProvider::new(key).map_err(AppError::from)?;
    match provider.fetch_report(city).await {
        Ok(report) => {
            let kind = classify_weather_code(report.forecast.weather_code);
            println!(
                "\n  {} ({})",
                report.forecast.description, report.forecast.comfort
            );
            println!("  Temperature: {:.1} °C", report.current.temperature);
            println!("  Wind:        {:.1} m/s", report.current.wind_speed);
            println!("  Rain:        {:.0} %", report.forecast.rain_probability);
            println!("  Icon:        {}", icon_for(moment, kind));
            println!("  Observed at: {}", report.current.observed_at);
        }
        Err(e) => {
            let err = AppError::from(e);
            tracing::error!("Weather fetch failed: {}", err);
            eprintln!("{}", err.user_message());
        }
    }

    Ok(())
}
