use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::infra::{default_scoring_config, parse_jurisdiction, SimulatedAmenitySource};
use qap_engine::error::AppError;
use qap_engine::workflows::qap::report::write_amenity_schedule;
use qap_engine::workflows::qap::{
    Amenity, AmenityCategory, Jurisdiction, LocationQuery, QapScoreReport, QapScoreService,
    ScoredSite,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreReportArgs {
    /// State to score against (Texas or California)
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) state: Jurisdiction,
    /// City within the selected state
    #[arg(long)]
    pub(crate) city: String,
    /// ZIP code within the selected city
    #[arg(long)]
    pub(crate) zip_code: String,
    /// Street address of the proposed development
    #[arg(long)]
    pub(crate) address: String,
    /// Seed for the simulated amenity lookup (reproducible output)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Include the full amenity listing in the output
    #[arg(long)]
    pub(crate) list_amenities: bool,
    /// Write the amenity schedule to a CSV file
    #[arg(long)]
    pub(crate) export_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the simulated amenity lookups
    #[arg(long, default_value_t = 2024)]
    pub(crate) seed: u64,
    /// Skip the caller-provided amenity scenario
    #[arg(long)]
    pub(crate) skip_provided: bool,
}

pub(crate) async fn run_score_report(args: ScoreReportArgs) -> Result<(), AppError> {
    let ScoreReportArgs {
        state,
        city,
        zip_code,
        address,
        seed,
        list_amenities,
        export_csv,
    } = args;

    let source = Arc::new(SimulatedAmenitySource::new(seed));
    let service = QapScoreService::new(source, default_scoring_config());

    let query = LocationQuery {
        jurisdiction: state,
        city,
        zip_code,
        address,
    };

    let scored = service.evaluate(query).await?;
    render_score_report(&scored, list_amenities);

    if let Some(path) = export_csv {
        let file = File::create(&path)?;
        write_amenity_schedule(file, &scored.amenities)?;
        println!("\nAmenity schedule written to {}", path.display());
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        skip_provided,
    } = args;

    println!("LIHTC QAP Score Estimator demo");
    println!("Simulated amenity lookups use seed {seed}\n");

    let source = Arc::new(SimulatedAmenitySource::new(Some(seed)));
    let service = QapScoreService::new(source, default_scoring_config());

    for (query, heading) in [
        (demo_texas_query(), "Simulated lookup: Houston, Texas"),
        (
            demo_california_query(),
            "Simulated lookup: Sacramento, California",
        ),
    ] {
        println!("=== {heading} ===");
        let scored = service.evaluate(query).await?;
        render_score_report(&scored, false);
        println!();
    }

    if !skip_provided {
        println!("=== Caller-provided amenities: Austin, Texas ===");
        let query = LocationQuery {
            jurisdiction: Jurisdiction::Texas,
            city: "Austin".to_string(),
            zip_code: "78701".to_string(),
            address: "124 W 6th St".to_string(),
        };
        let scored = service.evaluate_provided(query, demo_amenities())?;
        render_score_report(&scored, true);
    }

    Ok(())
}

fn demo_texas_query() -> LocationQuery {
    LocationQuery {
        jurisdiction: Jurisdiction::Texas,
        city: "Houston".to_string(),
        zip_code: "77001".to_string(),
        address: "500 Main St".to_string(),
    }
}

fn demo_california_query() -> LocationQuery {
    LocationQuery {
        jurisdiction: Jurisdiction::California,
        city: "Sacramento".to_string(),
        zip_code: "95814".to_string(),
        address: "1020 O St".to_string(),
    }
}

fn demo_amenities() -> Vec<Amenity> {
    let origin = Jurisdiction::Texas.centroid();
    [
        (AmenityCategory::Hospital, 1.2),
        (AmenityCategory::School, 0.5),
        (AmenityCategory::Supermarket, 0.7),
        (AmenityCategory::Restaurant, 0.3),
        (AmenityCategory::Restaurant, 1.0),
        (AmenityCategory::TransitStop, 0.2),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (category, distance_km))| Amenity {
        id: format!("{}-{index}", category.slug()),
        name: format!("{} {}", category.label(), index + 1),
        category,
        latitude: origin.latitude,
        longitude: origin.longitude,
        distance_km,
    })
    .collect()
}

fn render_score_report(scored: &ScoredSite, list_amenities: bool) {
    let summary = QapScoreReport::new(scored).summary();

    println!(
        "Location: {}, {}, {} {}",
        scored.site.address,
        scored.site.city,
        scored.site.jurisdiction.label(),
        scored.site.zip_code
    );
    println!(
        "Data source: {} ({} amenities, evaluated {})",
        scored.data_source.label(),
        summary.amenity_count,
        scored.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    println!("\n{} QAP scoring criteria", summary.jurisdiction_label);
    for row in &summary.criteria {
        println!(
            "- {}: {} points max ({})",
            row.category, row.max_points, row.data_source
        );
    }
    println!("- Total: {} points max", summary.total_max_points);

    println!("\nDevelopment Location breakdown");
    for component in &summary.components {
        println!(
            "- {}: {:.2} points ({})",
            component.term_label, component.points, component.notes
        );
    }
    println!(
        "- Normalized: {:.2} of {} points",
        summary.development_location_points, summary.development_location_max_points
    );

    println!(
        "\nTotal score: {:.2}% of maximum points",
        summary.total_percentage
    );

    if list_amenities {
        if summary.amenities.is_empty() {
            println!("\nNearby amenities: none");
        } else {
            println!("\nNearby amenities");
            for amenity in &summary.amenities {
                println!(
                    "- {} | {} | {:.1} km",
                    amenity.name, amenity.category_label, amenity.distance_km
                );
            }
        }
    }
}
