//! Point-in-polygon lookup of Paris quartiers.
//!
//! The dataset is a GeoJSON `FeatureCollection` (one feature per quartier,
//! properties `c_qu`, `l_qu`, `c_ar`), normally the `quartier_paris` export
//! of the Paris open-data portal. It is read once at startup and shared
//! read-only between requests.

use std::path::Path;

use geo::{Coord, Intersects, LineString, MultiPolygon, Point, Polygon};
use serde::Deserialize;
use shared_types::Zone;
use thiserror::Error;

/// Errors raised while loading a static dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feature {index}: {reason}")]
    InvalidFeature { index: usize, reason: String },

    #[error("dataset is empty")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: QuartierProperties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct QuartierProperties {
    c_qu: String,
    l_qu: String,
    c_ar: u32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

/// One quartier polygon with its identifiers
#[derive(Debug, Clone)]
struct ZoneShape {
    id: u32,
    name: String,
    arrondissement: u32,
    area: MultiPolygon<f64>,
}

/// Read-only collection of zone polygons, in dataset order
#[derive(Debug, Clone)]
pub struct ZoneSet {
    shapes: Vec<ZoneShape>,
}

impl ZoneSet {
    /// Parse a GeoJSON feature collection of quartiers
    pub fn from_geojson(raw: &str) -> Result<Self, DatasetError> {
        let collection: FeatureCollection = serde_json::from_str(raw)?;

        let shapes = collection
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| {
                let id = feature.properties.c_qu.trim().parse().map_err(|_| {
                    DatasetError::InvalidFeature {
                        index,
                        reason: format!("c_qu {:?} is not a number", feature.properties.c_qu),
                    }
                })?;
                Ok(ZoneShape {
                    id,
                    name: feature.properties.l_qu,
                    arrondissement: feature.properties.c_ar,
                    area: to_multi_polygon(feature.geometry),
                })
            })
            .collect::<Result<Vec<_>, DatasetError>>()?;

        if shapes.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { shapes })
    }

    /// Read and parse a GeoJSON file of quartiers
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_geojson(&read_dataset(path.as_ref())?)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// First zone, in dataset order, whose polygon contains the point.
    ///
    /// Points on a shared boundary belong to the first zone listed. The
    /// returned zone has no rate-table id yet.
    pub fn find_zone(&self, latitude: f64, longitude: f64) -> Option<Zone> {
        let point = Point::new(longitude, latitude);

        self.shapes
            .iter()
            .find(|shape| shape.area.intersects(&point))
            .map(|shape| Zone {
                id: shape.id,
                name: shape.name.clone(),
                arrondissement: shape.arrondissement,
                rate_zone_id: None,
            })
    }
}

pub(crate) fn read_dataset(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn to_multi_polygon(geometry: Geometry) -> MultiPolygon<f64> {
    match geometry {
        Geometry::Polygon(rings) => MultiPolygon::new(vec![to_polygon(rings)]),
        Geometry::MultiPolygon(polygons) => {
            MultiPolygon::new(polygons.into_iter().map(to_polygon).collect())
        }
    }
}

fn to_polygon(rings: Vec<Vec<[f64; 2]>>) -> Polygon<f64> {
    let mut rings = rings.into_iter().map(to_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, rings.collect())
}

fn to_line_string(ring: Vec<[f64; 2]>) -> LineString<f64> {
    LineString::new(ring.into_iter().map(|[x, y]| Coord { x, y }).collect())
}
