use std::env;
use std::process::ExitCode;

use chrono::Utc;
use chrono_tz::Africa::Cairo;

use sun_seat::{time_category_at, GeoPoint, Language, SeatAdvisor, TimeCategory};

const USAGE: &str = "usage: suggest <lat1> <lon1> <lat2> <lon2> [HH:MM|morning|afternoon|evening] [en|ar]";

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    }
    let coords: Option<Vec<f64>> = args[..4].iter().map(|a| parse_coordinate(a)).collect();
    let Some(coords) = coords else {
        eprintln!("coordinates must be numbers\n{}", USAGE);
        return ExitCode::FAILURE;
    };

    let advisor = SeatAdvisor::default();
    let language = match args.get(5).map(|tag| tag.parse::<Language>()) {
        Some(Ok(language)) => language,
        Some(Err(err)) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
        None => advisor.config().default_language,
    };

    let time_category = match args.get(4).map(|raw| raw.parse::<TimeCategory>()) {
        Some(Ok(category)) => category,
        Some(Err(err)) => {
            eprintln!("{}", advisor.error_message(&err, Some(language)));
            return ExitCode::FAILURE;
        }
        None => {
            let now = Utc::now().with_timezone(&Cairo);
            log::info!("no travel time given, using the current time in Cairo ({})", now);
            time_category_at(&now)
        }
    };

    let points = GeoPoint::new(coords[0], coords[1])
        .and_then(|start| GeoPoint::new(coords[2], coords[3]).map(|end| (start, end)));
    let result = points.and_then(|(start, end)| {
        let recommendation = advisor.recommend(&start, &end, time_category)?;
        let output = advisor.catalog().localize(
            &recommendation.entry,
            language,
            advisor.config().fallback_language,
        );
        Ok((recommendation, output))
    });

    match result {
        Ok((recommendation, output)) => {
            let catalog = advisor.catalog();
            println!("=== Sun Seat Suggestion ===");
            println!(
                "Bearing: {:.2}° ({})",
                recommendation.bearing, recommendation.sector
            );
            println!(
                "Time of travel: {}",
                catalog.time_category_label(language, time_category)
            );
            println!("Sun: {:?}", recommendation.sun);
            println!();
            println!("{}", output.direct_suggestion);
            println!("{}", output.explanation);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::warn!("{}", err);
            eprintln!("{}", advisor.error_message(&err, Some(language)));
            ExitCode::FAILURE
        }
    }
}
