//! Builds the data the map page hands to Leaflet: a centre, one marker per
//! point, and the popup markup for each marker.

use serde::Serialize;

use crate::categories;
use crate::entities::point;
use crate::utils::{geo::centroid, html::escape};

pub const DEFAULT_ZOOM: u8 = 13;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
pub const ICON_SIZE: [u32; 2] = [42, 42];
pub const ICON_ANCHOR: [u32; 2] = [16, 32];
pub const EMPTY_MESSAGE: &str = "Nenhum ponto cadastrado ainda ou filtros muito restritivos.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: i32,
    pub category: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Option<Center>,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Info popup for one point.
pub fn popup_html(point: &point::Model) -> String {
    let classification = point
        .classification_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .unwrap_or("-");
    let registered = point.registration_date.as_deref().unwrap_or("-");

    let rows = [
        ("Categoria", categories::label(point.category)),
        ("Nome do ponto", point.name.clone()),
        ("Classificação PNRS", classification.to_string()),
        ("Data registro", registered.to_string()),
    ];

    let mut html = String::from(
        r#"<div style="font-size: 13px; font-family: Arial, sans-serif;"><table style="border-collapse: collapse;">"#,
    );
    for (title, value) in rows {
        html.push_str(&format!(
            r#"<tr><td style="font-weight:600; padding-right:6px;">{}:</td><td>{}</td></tr>"#,
            title,
            escape(&value)
        ));
    }
    html.push_str("</table></div>");
    html
}

pub fn marker(point: &point::Model, assets_prefix: &str) -> Marker {
    Marker {
        id: point.id,
        category: point.category,
        latitude: point.latitude,
        longitude: point.longitude,
        icon_url: format!("{}/{}", assets_prefix, categories::icon_path(point.category)),
        icon_size: ICON_SIZE,
        icon_anchor: ICON_ANCHOR,
        popup_html: popup_html(point),
    }
}

/// Every point becomes a marker; there is no clustering or paging.
pub fn build_view(points: &[point::Model], assets_prefix: &str) -> MapView {
    let center = centroid(points.iter().map(|p| (p.latitude, p.longitude)))
        .map(|(latitude, longitude)| Center { latitude, longitude });

    MapView {
        center,
        zoom: DEFAULT_ZOOM,
        tile_url: TILE_URL,
        tile_attribution: TILE_ATTRIBUTION,
        markers: points.iter().map(|p| marker(p, assets_prefix)).collect(),
        message: center.is_none().then_some(EMPTY_MESSAGE),
    }
}
