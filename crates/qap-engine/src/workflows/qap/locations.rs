use super::domain::{LocationQuery, SiteLocation};
use super::jurisdiction::Jurisdiction;

/// Validation failures for a submitted location selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("'{city}' is not a supported city in {jurisdiction}")]
    UnknownCity {
        city: String,
        jurisdiction: &'static str,
    },
    #[error("ZIP code '{zip_code}' is not associated with {city}")]
    UnknownZipCode { zip_code: String, city: String },
    #[error("a street address is required")]
    MissingAddress,
}

const TEXAS_CITIES: [(&str, [&str; 5]); 5] = [
    ("Houston", ["77001", "77002", "77003", "77004", "77005"]),
    ("Dallas", ["75201", "75202", "75203", "75204", "75205"]),
    ("Austin", ["78701", "78702", "78703", "78704", "78705"]),
    ("San Antonio", ["78201", "78202", "78203", "78204", "78205"]),
    ("Fort Worth", ["76101", "76102", "76103", "76104", "76105"]),
];

const CALIFORNIA_CITIES: [(&str, [&str; 5]); 5] = [
    ("Los Angeles", ["90001", "90002", "90003", "90004", "90005"]),
    ("San Francisco", ["94102", "94103", "94104", "94105", "94107"]),
    ("San Diego", ["92101", "92102", "92103", "92104", "92105"]),
    ("Sacramento", ["95811", "95812", "95813", "95814", "95815"]),
    ("San Jose", ["95101", "95102", "95103", "95106", "95109"]),
];

fn city_table(jurisdiction: Jurisdiction) -> &'static [(&'static str, [&'static str; 5])] {
    match jurisdiction {
        Jurisdiction::Texas => &TEXAS_CITIES,
        Jurisdiction::California => &CALIFORNIA_CITIES,
    }
}

/// Supported cities for a jurisdiction, in reference-table order.
pub fn cities(jurisdiction: Jurisdiction) -> Vec<&'static str> {
    city_table(jurisdiction)
        .iter()
        .map(|(city, _)| *city)
        .collect()
}

/// ZIP codes on file for a city across both jurisdictions.
pub fn zip_codes(city: &str) -> Option<&'static [&'static str; 5]> {
    Jurisdiction::ALL.iter().find_map(|jurisdiction| {
        city_table(*jurisdiction)
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(city))
            .map(|(_, zips)| zips)
    })
}

/// Validate a location selection and attach the jurisdiction centroid.
///
/// The centroid stands in for geocoding; a production deployment would
/// resolve the street address instead.
pub fn resolve(query: &LocationQuery) -> Result<SiteLocation, LocationError> {
    let entry = city_table(query.jurisdiction)
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(query.city.trim()))
        .ok_or_else(|| LocationError::UnknownCity {
            city: query.city.clone(),
            jurisdiction: query.jurisdiction.label(),
        })?;

    let (city, zips) = entry;
    if !zips.contains(&query.zip_code.trim()) {
        return Err(LocationError::UnknownZipCode {
            zip_code: query.zip_code.clone(),
            city: (*city).to_string(),
        });
    }

    if query.address.trim().is_empty() {
        return Err(LocationError::MissingAddress);
    }

    Ok(SiteLocation {
        jurisdiction: query.jurisdiction,
        city: (*city).to_string(),
        zip_code: query.zip_code.trim().to_string(),
        address: query.address.trim().to_string(),
        coordinates: query.jurisdiction.centroid(),
    })
}
