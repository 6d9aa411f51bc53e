//! A map surface that renders to GeoJSON.
//!
//! Markers become `Point` features and overlays become `LineString`
//! features carrying their stroke. The camera fit is kept as the
//! collection's `bbox`.

use std::io::Write;

use geo::Rect;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};
use log::warn;
use pinroute_core::{
    Alert, AlertSink, ControlVisibility, MapSurface, OverlayStyle, RouteSegment, Waypoint,
    bounding_rect,
};

use crate::CliError;

/// Map surface collecting markers and overlays for GeoJSON output.
///
/// Alerts and other notices are written to `W` as they happen.
#[derive(Debug)]
pub struct GeoJsonSurface<W> {
    markers: Vec<Waypoint>,
    overlays: Vec<(RouteSegment, OverlayStyle)>,
    camera: Option<Rect<f64>>,
    controls: ControlVisibility,
    notices: W,
}

impl<W: Write> GeoJsonSurface<W> {
    /// Create an empty surface writing notices to `notices`.
    pub fn new(notices: W) -> Self {
        Self {
            markers: Vec::new(),
            overlays: Vec::new(),
            camera: None,
            controls: ControlVisibility::default(),
            notices,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Waypoint] {
        &self.markers
    }

    #[must_use]
    pub fn overlays(&self) -> &[(RouteSegment, OverlayStyle)] {
        &self.overlays
    }

    /// Area of the last camera fit.
    #[must_use]
    pub const fn camera(&self) -> Option<Rect<f64>> {
        self.camera
    }

    #[must_use]
    pub const fn controls(&self) -> ControlVisibility {
        self.controls
    }

    /// Write one line to the notice stream.
    ///
    /// A failed write is logged and otherwise ignored.
    pub fn notice(&mut self, text: &str) {
        if let Err(err) = writeln!(self.notices, "{text}") {
            warn!("failed to write notice {text:?}: {err}");
        }
    }

    /// Consume the surface and return the notice stream.
    pub fn into_notices(self) -> W {
        self.notices
    }

    /// Current markers and overlays as a `FeatureCollection`.
    #[must_use]
    pub fn to_geojson(&self) -> GeoJson {
        let markers = self
            .markers
            .iter()
            .enumerate()
            .map(|(index, waypoint)| marker_feature(index, waypoint));
        let overlays = self
            .overlays
            .iter()
            .map(|(segment, style)| overlay_feature(segment, *style));
        GeoJson::FeatureCollection(FeatureCollection {
            bbox: self
                .camera
                .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]),
            features: markers.chain(overlays).collect(),
            foreign_members: None,
        })
    }

    /// Write the map as pretty-printed GeoJSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<(), CliError> {
        let payload =
            serde_json::to_string_pretty(&self.to_geojson()).map_err(CliError::SerialiseMap)?;
        writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteMap)?;
        writer.write_all(b"\n").map_err(CliError::WriteMap)?;
        Ok(())
    }
}

impl<W: Write> MapSurface for GeoJsonSurface<W> {
    fn show_waypoints(&mut self, waypoints: &[Waypoint]) {
        self.markers = waypoints.to_vec();
        self.camera = bounding_rect(waypoints);
    }

    fn add_overlay(&mut self, segment: &RouteSegment, style: OverlayStyle) {
        self.overlays.push((segment.clone(), style));
    }

    fn clear(&mut self) {
        self.markers.clear();
        self.overlays.clear();
        self.camera = None;
    }

    fn update_controls(&mut self, controls: ControlVisibility) {
        self.controls = controls;
    }
}

impl<W: Write> AlertSink for GeoJsonSurface<W> {
    fn show_alert(&mut self, alert: &Alert) {
        self.notice(&format!("{}: {}", alert.title, alert.message));
    }
}

fn properties<const N: usize>(entries: [(&str, JsonValue); N]) -> JsonObject {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn marker_feature(index: usize, waypoint: &Waypoint) -> Feature {
    feature(
        Value::Point(vec![waypoint.longitude(), waypoint.latitude()]),
        properties([
            ("kind", JsonValue::from("waypoint")),
            ("index", JsonValue::from(index)),
            ("label", JsonValue::from(waypoint.label())),
        ]),
    )
}

fn overlay_feature(segment: &RouteSegment, style: OverlayStyle) -> Feature {
    feature(
        Value::LineString(
            segment
                .path
                .coords()
                .map(|coord| vec![coord.x, coord.y])
                .collect(),
        ),
        properties([
            ("kind", JsonValue::from("route")),
            ("pair", JsonValue::from(segment.pair)),
            ("distance_m", JsonValue::from(segment.distance_m)),
            ("duration_s", JsonValue::from(segment.duration.as_secs_f64())),
            ("stroke", JsonValue::from(style.stroke.to_string())),
            ("stroke-width", JsonValue::from(style.width)),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, LineString};
    use pinroute_core::{AlertKind, Rgb};
    use rstest::{fixture, rstest};
    use std::time::Duration;

    #[fixture]
    fn surface() -> GeoJsonSurface<Vec<u8>> {
        GeoJsonSurface::new(Vec::new())
    }

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new("10 Downing St", Coord { x: -0.1276, y: 51.5034 }),
            Waypoint::new("Tower Bridge", Coord { x: -0.0754, y: 51.5055 }),
        ]
    }

    fn segment() -> RouteSegment {
        let from = Coord { x: -0.1276, y: 51.5034 };
        let to = Coord { x: -0.0754, y: 51.5055 };
        RouteSegment {
            pair: 0,
            from,
            to,
            distance_m: 4200.0,
            duration: Duration::from_secs(3000),
            path: LineString::new(vec![from, Coord { x: -0.1, y: 51.51 }, to]),
        }
    }

    fn features(geojson: &GeoJson) -> &[Feature] {
        match geojson {
            GeoJson::FeatureCollection(collection) => &collection.features,
            other => panic!("expected a feature collection, got {other:?}"),
        }
    }

    #[rstest]
    fn markers_become_points_with_bbox(mut surface: GeoJsonSurface<Vec<u8>>) {
        surface.show_waypoints(&waypoints());

        let geojson = surface.to_geojson();

        let GeoJson::FeatureCollection(collection) = &geojson else {
            panic!("expected a feature collection");
        };
        assert_eq!(
            collection.bbox,
            Some(vec![-0.1276, 51.5034, -0.0754, 51.5055])
        );
        let first = features(&geojson).first().expect("two markers");
        assert_eq!(
            first.geometry.as_ref().map(|geometry| &geometry.value),
            Some(&Value::Point(vec![-0.1276, 51.5034]))
        );
        assert_eq!(
            first.property("label"),
            Some(&JsonValue::from("10 Downing St"))
        );
    }

    #[rstest]
    fn overlays_carry_stroke(mut surface: GeoJsonSurface<Vec<u8>>) {
        surface.add_overlay(&segment(), OverlayStyle::default());

        let geojson = surface.to_geojson();

        let overlay = features(&geojson).first().expect("one overlay");
        assert_eq!(overlay.property("stroke"), Some(&JsonValue::from("#000000")));
        assert_eq!(overlay.property("pair"), Some(&JsonValue::from(0)));
        match overlay.geometry.as_ref().map(|geometry| &geometry.value) {
            Some(Value::LineString(positions)) => assert_eq!(positions.len(), 3),
            other => panic!("expected a line string, got {other:?}"),
        }
    }

    #[rstest]
    fn clear_removes_everything(mut surface: GeoJsonSurface<Vec<u8>>) {
        surface.show_waypoints(&waypoints());
        surface.add_overlay(
            &segment(),
            OverlayStyle {
                stroke: Rgb(0, 0, 255),
                width: 2.0,
            },
        );

        surface.clear();

        assert!(surface.markers().is_empty());
        assert!(surface.overlays().is_empty());
        assert!(surface.camera().is_none());
        assert!(features(&surface.to_geojson()).is_empty());
    }

    #[rstest]
    fn alerts_are_written_as_notices(mut surface: GeoJsonSurface<Vec<u8>>) {
        surface.show_alert(&Alert::new(
            AlertKind::RouteUnavailable,
            "Error",
            "Route unavailable",
        ));

        let notices = String::from_utf8(surface.into_notices()).expect("utf-8 notices");
        assert_eq!(notices, "Error: Route unavailable\n");
    }

    #[rstest]
    fn write_to_emits_parseable_json(mut surface: GeoJsonSurface<Vec<u8>>) {
        surface.show_waypoints(&waypoints());
        let mut output = Vec::new();

        surface.write_to(&mut output).expect("write succeeds");

        let text = String::from_utf8(output).expect("utf-8 output");
        assert!(text.ends_with('\n'));
        let parsed: GeoJson = text.parse().expect("valid GeoJSON");
        assert_eq!(features(&parsed).len(), 2);
    }
}
