//! Great-circle distance and proximity search
//!
//! Distances use the haversine formula on a spherical earth of radius
//! [`EARTH_RADIUS_KM`]. Radius comparisons are inclusive and run on the
//! full-precision distance; rounding to two decimals only happens in
//! [`distance_km`], which backs the standalone distance endpoint.

use crate::errors::GeoError;
use crate::pagination::{Page, PageSpec};
use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius used when a request does not specify one
pub const DEFAULT_RADIUS_KM: f64 = 25.0;

/// Slack added to bounding boxes so float error never drops a point that the
/// exact haversine pass would keep.
const BOX_MARGIN_DEG: f64 = 1e-9;

/// A WGS84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        Self::with_fields(latitude, longitude, "latitude", "longitude")
    }

    /// Like [`GeoPoint::new`], reporting errors against custom field names
    pub fn with_fields(
        latitude: f64,
        longitude: f64,
        lat_field: &'static str,
        lon_field: &'static str,
    ) -> Result<Self, GeoError> {
        check_range(lat_field, latitude, -90.0, 90.0)?;
        check_range(lon_field, longitude, -180.0, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a point from raw request strings.
    ///
    /// Missing and non-numeric values are reported separately from
    /// out-of-range ones; nothing is silently defaulted to zero.
    pub fn parse(
        latitude: Option<&str>,
        longitude: Option<&str>,
        lat_field: &'static str,
        lon_field: &'static str,
    ) -> Result<Self, GeoError> {
        let latitude = parse_number(lat_field, latitude)?;
        let longitude = parse_number(lon_field, longitude)?;
        Self::with_fields(latitude, longitude, lat_field, lon_field)
    }

    /// Check an already-constructed point (e.g. deserialized from JSON)
    pub fn validate(&self) -> Result<(), GeoError> {
        Self::new(self.latitude, self.longitude).map(|_| ())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), GeoError> {
    if !value.is_finite() || value < min || value > max {
        return Err(GeoError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn parse_number(field: &'static str, raw: Option<&str>) -> Result<f64, GeoError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(GeoError::MissingCoordinate { field })?;
    raw.parse::<f64>().map_err(|_| GeoError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Validate a search radius: finite and non-negative
pub fn validate_radius(field: &'static str, radius_km: f64) -> Result<f64, GeoError> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeoError::InvalidRadius {
            field,
            value: radius_km,
        });
    }
    Ok(radius_km)
}

/// Anything that may carry a location
pub trait Geotagged {
    /// `None` unless both latitude and longitude are present
    fn coordinates(&self) -> Option<GeoPoint>;
}

impl Geotagged for GeoPoint {
    fn coordinates(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl<T: Geotagged> Geotagged for &T {
    fn coordinates(&self) -> Option<GeoPoint> {
        (**self).coordinates()
    }
}

/// Query origin with its trigonometry computed once
#[derive(Debug, Clone, Copy)]
struct Origin {
    lat_rad: f64,
    lon_rad: f64,
    cos_lat: f64,
}

impl Origin {
    fn new(point: GeoPoint) -> Self {
        let lat_rad = point.latitude.to_radians();
        Self {
            lat_rad,
            lon_rad: point.longitude.to_radians(),
            cos_lat: lat_rad.cos(),
        }
    }

    fn distance_to(&self, other: GeoPoint) -> f64 {
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - self.lat_rad;
        let d_lon = other.longitude.to_radians() - self.lon_rad;

        let a = (d_lat / 2.0).sin().powi(2)
            + self.cos_lat * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push `a` a hair outside [0, 1] for antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Great-circle distance in kilometers, full precision
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    Origin::new(a).distance_to(b)
}

/// Great-circle distance in kilometers rounded to two decimals
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    round_km(haversine_km(a, b))
}

/// Round a distance to two decimal places
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Latitude/longitude rectangle enclosing a search circle.
///
/// Used as a cheap prefilter, in memory and pushed down into SQL. It is
/// conservative: every point within the radius lies inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Smallest box containing every point within `radius_km` of `center`.
    ///
    /// When the circle reaches a pole or crosses the antimeridian the box
    /// widens to all longitudes.
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let angular = radius_km / EARTH_RADIUS_KM;
        let d_lat = angular.to_degrees() + BOX_MARGIN_DEG;

        let min_lat = center.latitude - d_lat;
        let max_lat = center.latitude + d_lat;

        if min_lat <= -90.0 || max_lat >= 90.0 {
            return Self {
                min_lat: min_lat.max(-90.0),
                max_lat: max_lat.min(90.0),
                min_lon: -180.0,
                max_lon: 180.0,
            };
        }

        let ratio = angular.sin() / center.latitude.to_radians().cos();
        if angular >= std::f64::consts::FRAC_PI_2 || ratio >= 1.0 {
            return Self {
                min_lat,
                max_lat,
                min_lon: -180.0,
                max_lon: 180.0,
            };
        }

        let d_lon = ratio.asin().to_degrees() + BOX_MARGIN_DEG;
        let min_lon = center.longitude - d_lon;
        let max_lon = center.longitude + d_lon;

        if min_lon < -180.0 || max_lon > 180.0 {
            return Self {
                min_lat,
                max_lat,
                min_lon: -180.0,
                max_lon: 180.0,
            };
        }

        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Inclusive containment check
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}

/// A search hit with its distance from the query origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nearby<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance_km: f64,
}

/// Keep the items within `radius_km` of `center` and return one page of them.
///
/// The center and radius are validated before any filtering. Items without
/// coordinates are skipped. Input order is preserved, so a caller that feeds
/// a stably ordered snapshot gets deterministic pages.
pub fn find_nearby<T, I>(
    center: GeoPoint,
    radius_km: f64,
    page: &PageSpec,
    items: I,
) -> Result<Page<Nearby<T>>, GeoError>
where
    T: Geotagged,
    I: IntoIterator<Item = T>,
{
    center.validate()?;
    let radius_km = validate_radius("radius_km", radius_km)?;

    let origin = Origin::new(center);
    let bbox = BoundingBox::around(center, radius_km);

    let within: Vec<Nearby<T>> = items
        .into_iter()
        .filter_map(|item| {
            let point = item.coordinates()?;
            if !bbox.contains(point) {
                return None;
            }
            let distance_km = origin.distance_to(point);
            (distance_km <= radius_km).then_some(Nearby { item, distance_km })
        })
        .collect();

    Ok(page.paginate(within))
}
