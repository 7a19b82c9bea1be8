use std::io::Write;

use super::super::domain::Amenity;
use super::super::jurisdiction::{scoring_table, Jurisdiction};

/// Write the nearby-amenity schedule as CSV.
pub fn write_amenity_schedule<W: Write>(
    writer: W,
    amenities: &[Amenity],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "id",
        "name",
        "category",
        "distance_km",
        "latitude",
        "longitude",
    ])?;

    for amenity in amenities {
        let distance = format!("{:.1}", amenity.distance_km);
        let latitude = format!("{:.4}", amenity.latitude);
        let longitude = format!("{:.4}", amenity.longitude);
        csv_writer.write_record([
            amenity.id.as_str(),
            amenity.name.as_str(),
            amenity.category.slug(),
            distance.as_str(),
            latitude.as_str(),
            longitude.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a jurisdiction's criteria table as CSV, with a trailing total row.
pub fn write_criteria_table<W: Write>(
    writer: W,
    jurisdiction: Jurisdiction,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["category", "max_points", "data_source"])?;

    for category in scoring_table() {
        let max_points = format!("{}", category.max_points(jurisdiction));
        csv_writer.write_record([
            category.name,
            max_points.as_str(),
            if category.data_available {
                "OpenStreetMap"
            } else {
                "Not Available"
            },
        ])?;
    }

    let total = format!("{}", jurisdiction.total_max_points());
    csv_writer.write_record(["Total", total.as_str(), ""])?;

    csv_writer.flush()?;
    Ok(())
}
