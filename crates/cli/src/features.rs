//! GeoJSON cluster input.
//!
//! Only what the label pipeline needs is modelled: a `FeatureCollection` of
//! `Polygon` / `MultiPolygon` features. Holes (inner rings) are dropped since
//! label rectangles are searched on outer rings only. Other geometry types
//! parse as `Geometry::Other` and are skipped by the caller.

use anyhow::{Context, Result};
use labelrect::{Point, Ring, SearchError};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// `[x, y, ...]`; extra ordinates (altitude) are ignored.
type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Value>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Other,
}

impl Feature {
    /// Cluster identifier: `id`, else `properties[id_field]`, else `fallback`.
    pub fn cluster_id(&self, id_field: &str, fallback: usize) -> String {
        self.id
            .as_ref()
            .or_else(|| self.properties.as_ref().and_then(|p| p.get(id_field)))
            .and_then(value_to_id)
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Outer rings of the geometry, one per polygon. `None` for unsupported
    /// or missing geometries.
    pub fn outer_rings(&self) -> Option<Vec<Result<Ring, SearchError>>> {
        let outers: Vec<&Vec<Position>> = match self.geometry.as_ref()? {
            Geometry::Polygon { coordinates } => coordinates.first().into_iter().collect(),
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().filter_map(|poly| poly.first()).collect()
            }
            Geometry::Other => return None,
        };
        Some(
            outers
                .into_iter()
                .map(|ring| ring_from_positions(ring))
                .collect(),
        )
    }
}

fn ring_from_positions(ring: &[Position]) -> Result<Ring, SearchError> {
    let pts = ring
        .iter()
        .enumerate()
        .map(|(i, p)| match p.as_slice() {
            [x, y, ..] => Ok(Point::new(*x, *y)),
            _ => Err(SearchError::InvalidRing {
                reason: format!("position {i} has {} values, need at least 2", p.len()),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ring::new(pts)
}

fn value_to_id(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading input {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing GeoJSON FeatureCollection {}", path.display()))
}

/// Parse `"x,y;x,y;..."` into a ring.
pub fn parse_coords(s: &str) -> Result<Ring> {
    let pts = s
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("expected `x,y`, got `{pair}`"))?;
            Ok(Point::new(
                x.trim().parse().with_context(|| format!("bad x in `{pair}`"))?,
                y.trim().parse().with_context(|| format!("bad y in `{pair}`"))?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Ring::new(pts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "id": "a",
             "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [
                [[0,0],[1,0],[1,1],[0,1],[0,0]],
                [[0.4,0.4],[0.6,0.4],[0.6,0.6],[0.4,0.4]]
             ]}},
            {"type": "Feature",
             "properties": {"cluster_id": 17},
             "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[0,0],[2,0],[2,2],[0,0]]],
                [[[5,5],[6,5],[6,6],[5,6],[5,5]]]
             ]}},
            {"type": "Feature", "properties": null,
             "geometry": {"type": "Point", "coordinates": [1, 2]}}
        ]
    }"#;

    #[test]
    fn parses_polygons_and_multipolygons() {
        let fc: FeatureCollection = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(fc.features.len(), 3);

        let a = &fc.features[0];
        assert_eq!(a.cluster_id("cluster_id", 0), "a");
        let rings = a.outer_rings().unwrap();
        assert_eq!(rings.len(), 1, "holes are dropped");
        assert_eq!(rings[0].as_ref().unwrap().len(), 4);

        let b = &fc.features[1];
        assert_eq!(b.cluster_id("cluster_id", 1), "17");
        assert_eq!(b.outer_rings().unwrap().len(), 2);

        let c = &fc.features[2];
        assert_eq!(c.cluster_id("cluster_id", 2), "2");
        assert!(c.outer_rings().is_none());
    }

    #[test]
    fn positions_with_altitude_keep_x_and_y() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": 1,
                 "geometry": {"type": "Polygon", "coordinates": [
                    [[0,0,12.5],[4,0,12.5],[4,3,12.5],[0,3,12.5],[0,0,12.5]]
                 ]}},
                {"type": "Feature", "id": 2,
                 "geometry": {"type": "Polygon", "coordinates": [
                    [[0,0],[4,0],[4,3],[0,3]]
                 ]}},
                {"type": "Feature", "id": 3,
                 "geometry": {"type": "Polygon", "coordinates": [
                    [[0,0],[4],[4,3],[0,3]]
                 ]}}
            ]
        }"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        let with_z = fc.features[0].outer_rings().unwrap().remove(0).unwrap();
        let flat = fc.features[1].outer_rings().unwrap().remove(0).unwrap();
        assert_eq!(with_z.points(), flat.points());
        assert_eq!(with_z.points()[2], Point::new(4.0, 3.0));

        let short = fc.features[2].outer_rings().unwrap().remove(0);
        assert!(matches!(short, Err(SearchError::InvalidRing { .. })));
    }

    #[test]
    fn parses_coordinate_strings() {
        let r = parse_coords("0,0; 10,0; 10,10; 0,10").unwrap();
        assert_eq!(r.len(), 4);
        assert!(parse_coords("0,0;1").is_err());
        assert!(parse_coords("0,0;1,x;2,2").is_err());
        assert!(parse_coords("0,0;1,1").is_err());
    }
}
