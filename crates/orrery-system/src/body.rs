//! The table of celestial bodies shown in the scene.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::SystemError;

/// Real-world parameters of one body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Name of the body, also the stem of its texture image.
    pub name: String,
    /// Orbit radius in millions of km.
    pub orbit_radius: f64,
    /// Diameter in km.
    pub diameter: f64,
    /// Orbital period in days.
    pub year_length: f64,
    /// Rotation period in hours.
    pub day_length: f64,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f64,
        diameter: f64,
        year_length: f64,
        day_length: f64,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            diameter,
            year_length,
            day_length,
        }
    }

    /// Whether this is the central star. Matched case-insensitively.
    pub fn is_sun(&self) -> bool {
        self.name.eq_ignore_ascii_case("sun")
    }

    fn validate(&self) -> Result<(), SystemError> {
        let fields = [
            ("orbit_radius", self.orbit_radius),
            ("diameter", self.diameter),
            ("year_length", self.year_length),
            ("day_length", self.day_length),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(SystemError::InvalidBody {
                    name: self.name.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of bodies.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BodyCatalog {
    bodies: Vec<CelestialBody>,
}

impl BodyCatalog {
    /// Build a catalog, rejecting empty tables, duplicate names and
    /// non-positive magnitudes.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, SystemError> {
        if bodies.is_empty() {
            return Err(SystemError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for body in &bodies {
            body.validate()?;
            if !seen.insert(body.name.to_ascii_lowercase()) {
                return Err(SystemError::DuplicateBody(body.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// The sun and nine bodies of the reference table.
    pub fn solar_system() -> Self {
        //                     name       10^6 km   km         days      hours
        let bodies = vec![
            CelestialBody::new("sun", 0.025, 1.3927e6, 3650.0, 27.0),
            CelestialBody::new("mercury", 57.9, 4879.0, 88.0, 4222.6),
            CelestialBody::new("venus", 108.2, 12104.0, 224.7, 2802.0),
            CelestialBody::new("earth", 149.6, 12756.0, 365.25, 24.0),
            CelestialBody::new("mars", 227.9, 6792.0, 687.0, 24.7),
            CelestialBody::new("jupiter", 778.6, 142_984.0, 4331.0, 9.9),
            CelestialBody::new("saturn", 1433.5, 120_536.0, 10747.0, 10.7),
            CelestialBody::new("uranus", 2872.5, 51118.0, 30589.0, 17.2),
            CelestialBody::new("neptune", 4495.1, 49528.0, 59800.0, 16.1),
            CelestialBody::new("pluto", 5906.4, 2370.0, 90560.0, 153.3),
        ];
        Self { bodies }
    }

    /// Parse a RON list of bodies.
    pub fn from_ron_str(text: &str) -> Result<Self, SystemError> {
        let bodies: Vec<CelestialBody> = ron::from_str(text)?;
        Self::new(bodies)
    }

    /// Load a RON body table from disk.
    pub fn load(path: &Path) -> Result<Self, SystemError> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_ron_str(&text)?;
        info!(
            "Loaded {} bodies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Look up a body by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::solar_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_table() {
        let catalog = BodyCatalog::solar_system();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.iter().next().unwrap().is_sun());
        let earth = catalog.get("Earth").unwrap();
        assert_eq!(earth.diameter, 12756.0);
        assert_eq!(earth.day_length, 24.0);
        // The built-in table passes its own validation.
        assert!(BodyCatalog::new(catalog.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_from_ron_str() {
        let text = r#"[
            (name: "sun", orbit_radius: 0.025, diameter: 1392700.0, year_length: 3650.0, day_length: 27.0),
            (name: "earth", orbit_radius: 149.6, diameter: 12756.0, year_length: 365.25, day_length: 24.0),
        ]"#;
        let catalog = BodyCatalog::from_ron_str(text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("earth").unwrap().orbit_radius, 149.6);
    }

    #[test]
    fn test_ron_roundtrip() {
        let catalog = BodyCatalog::solar_system();
        let text = ron::to_string(&catalog).unwrap();
        assert_eq!(BodyCatalog::from_ron_str(&text).unwrap(), catalog);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            BodyCatalog::from_ron_str("[]"),
            Err(SystemError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let bodies = vec![
            CelestialBody::new("Mars", 227.9, 6792.0, 687.0, 24.7),
            CelestialBody::new("mars", 227.9, 6792.0, 687.0, 24.7),
        ];
        assert!(matches!(
            BodyCatalog::new(bodies),
            Err(SystemError::DuplicateBody(name)) if name == "mars"
        ));
    }

    #[test]
    fn test_non_positive_magnitude_rejected() {
        let bodies = vec![CelestialBody::new("rock", 10.0, 0.0, 100.0, 10.0)];
        match BodyCatalog::new(bodies) {
            Err(SystemError::InvalidBody { name, field }) => {
                assert_eq!(name, "rock");
                assert_eq!(field, "diameter");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            BodyCatalog::from_ron_str("[(name: 3)]"),
            Err(SystemError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bodies.ron");
        std::fs::write(
            &path,
            r#"[(name: "luna", orbit_radius: 0.384, diameter: 3474.8, year_length: 27.3, day_length: 655.7)]"#,
        )
        .unwrap();
        let catalog = BodyCatalog::load(&path).unwrap();
        assert_eq!(catalog.get("luna").unwrap().diameter, 3474.8);

        assert!(matches!(
            BodyCatalog::load(&dir.path().join("missing.ron")),
            Err(SystemError::Read(_))
        ));
    }
}
