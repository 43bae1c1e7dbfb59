//! Rendering seam between the data core and whatever draws the map.
//!
//! The core never knows which map library is in use; a backend is handed
//! in by the caller and fed markers one by one.

use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::bands::AqiBand;
use crate::error::RenderError;
use crate::stats::AggregateStats;
use crate::types::FacilityRecord;

/// What a backend needs to place one facility on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: u32,
    pub band: AqiBand,
    pub color: &'static str,
}

impl From<&FacilityRecord> for MapMarker {
    fn from(r: &FacilityRecord) -> Self {
        let band = AqiBand::from_aqi(r.aqi);
        MapMarker {
            id: r.id,
            name: r.name.clone(),
            latitude: r.latitude,
            longitude: r.longitude,
            aqi: r.aqi,
            band,
            color: band.color_hex(),
        }
    }
}

/// Trait for map rendering backends.
pub trait MapBackend {
    /// Called once before any marker, with the stats of the view being drawn.
    fn begin(&mut self, stats: &AggregateStats) -> Result<(), RenderError>;
    fn marker(&mut self, marker: &MapMarker) -> Result<(), RenderError>;
    fn finish(&mut self) -> Result<(), RenderError>;
}

/// Drive `backend` over a filtered view.
pub fn render_view<B: MapBackend + ?Sized>(
    backend: &mut B,
    records: &[FacilityRecord],
    stats: &AggregateStats,
) -> Result<(), RenderError> {
    backend.begin(stats)?;
    for r in records {
        backend.marker(&MapMarker::from(r))?;
    }
    backend.finish()
}

/// Plain-text listing, one row per facility.
pub struct TextTableBackend<W: Write> {
    out: W,
}

impl<W: Write> TextTableBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapBackend for TextTableBackend<W> {
    fn begin(&mut self, stats: &AggregateStats) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "# {} facilities, avg AQI {}, {} critical",
            stats.count, stats.avg_aqi, stats.critical_count
        )?;
        writeln!(self.out, "id,name,lat,lon,aqi,band")?;
        Ok(())
    }

    fn marker(&mut self, m: &MapMarker) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "{},{},{:.6},{:.6},{},{}",
            m.id,
            m.name,
            m.latitude,
            m.longitude,
            m.aqi,
            m.band.label()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects markers into a GeoJSON `FeatureCollection` for tile-map front ends.
#[derive(Debug, Default)]
pub struct GeoJsonBackend {
    features: Vec<Value>,
    stats: Option<AggregateStats>,
}

impl GeoJsonBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "stats": self.stats,
            "features": self.features,
        })
    }

    pub fn to_string_pretty(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(&self.collection())?)
    }
}

impl MapBackend for GeoJsonBackend {
    fn begin(&mut self, stats: &AggregateStats) -> Result<(), RenderError> {
        self.features.clear();
        self.stats = Some(*stats);
        Ok(())
    }

    fn marker(&mut self, m: &MapMarker) -> Result<(), RenderError> {
        // GeoJSON positions are [longitude, latitude].
        self.features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [m.longitude, m.latitude] },
            "properties": {
                "id": m.id,
                "name": m.name,
                "aqi": m.aqi,
                "band": m.band.label(),
                "color": m.color,
            },
        }));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
