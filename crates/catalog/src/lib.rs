pub mod japan;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Attraction,
}

/// A named point of interest. Positions are stylized map coordinates
/// (x, y, z), not geodetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub kind: LocationKind,
    pub position: [f64; 3],
}

/// Hand-authored island boundary plus its extrusion styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandOutline {
    pub name: String,
    /// Ordered boundary in the (x, z) map plane, implicitly closed.
    pub points: Vec<[f64; 2]>,
    pub color: [f32; 3],
    pub depth: f64,
    pub corner_radius: f64,
    /// Small vertical offset so overlapping shores stack deterministically.
    pub lift: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    DuplicateLocation(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "catalog parse error: {msg}"),
            CatalogError::DuplicateLocation(name) => {
                write!(f, "duplicate location name: {name}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The static input catalog: everything the map is built from. Read-only
/// after load; the core never mutates it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCatalog {
    pub locations: Vec<Location>,
    pub islands: Vec<IslandOutline>,
}

impl MapCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: MapCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Location names are the lookup key for routing, so they must be unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (i, location) in self.locations.iter().enumerate() {
            if self.locations[..i].iter().any(|l| l.name == location.name) {
                return Err(CatalogError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(())
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn cities(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::City)
    }

    pub fn attractions(&self) -> impl Iterator<Item = &Location> {
        self.locations
            .iter()
            .filter(|l| l.kind == LocationKind::Attraction)
    }
}

/// `[r, g, b]` in 0..1 from a `0xRRGGBB` literal, the form outline colors are
/// authored in.
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CatalogError, Location, LocationKind, MapCatalog, rgb};

    #[test]
    fn json_round_trip_preserves_the_catalog() {
        let catalog = super::japan::japan();
        let json = catalog.to_json_string().unwrap();
        let reloaded = MapCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog, reloaded);
    }

    #[test]
    fn lookup_by_name() {
        let catalog = super::japan::japan();
        let tokyo = catalog.location("Tokyo").unwrap();
        assert_eq!(tokyo.kind, LocationKind::City);
        assert_eq!(tokyo.position, [120.0, 6.0, 20.0]);
        assert!(catalog.location("Atlantis").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut catalog = MapCatalog::default();
        for _ in 0..2 {
            catalog.locations.push(Location {
                name: "Tokyo".into(),
                kind: LocationKind::City,
                position: [0.0, 0.0, 0.0],
            });
        }
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateLocation("Tokyo".into()))
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MapCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn rgb_unpacks_channels() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
        let [r, g, b] = rgb(0x9edc89);
        assert!((r - 158.0 / 255.0).abs() < 1e-6);
        assert!((g - 220.0 / 255.0).abs() < 1e-6);
        assert!((b - 137.0 / 255.0).abs() < 1e-6);
    }
}
