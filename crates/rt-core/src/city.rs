//! City reference data.
//!
//! A `CityTable` is loaded once, owned by the caller, and passed by reference
//! into every planner operation.  It is never mutated while a simulation is
//! running.

use std::collections::BTreeMap;

use crate::{CityId, CityRef, CoreError, CoreResult};

/// One city: identity plus the elevation used by the slope model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id:           CityId,
    pub name:         String,
    pub state:        String,
    /// Elevation above sea level, in feet.
    pub elevation_ft: f64,
}

impl City {
    pub fn new(id: CityId, name: impl Into<String>, state: impl Into<String>, elevation_ft: f64) -> Self {
        Self { id, name: name.into(), state: state.into(), elevation_ft }
    }
}

/// Cities keyed by id, iterated in ascending id order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityTable {
    cities: BTreeMap<CityId, City>,
}

impl CityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `city`, replacing (and returning) any earlier entry with the
    /// same id.
    pub fn insert(&mut self, city: City) -> Option<City> {
        self.cities.insert(city.id, city)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    pub fn get(&self, id: CityId) -> CoreResult<&City> {
        self.cities
            .get(&id)
            .ok_or(CoreError::UnknownCity(CityRef::Id(id)))
    }

    pub fn elevation_ft(&self, id: CityId) -> CoreResult<f64> {
        self.get(id).map(|c| c.elevation_ft)
    }

    pub fn name_of(&self, id: CityId) -> CoreResult<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// Resolve a city by name, ignoring ASCII case.  The first match in id
    /// order wins when names repeat across states.
    pub fn id_by_name(&self, name: &str) -> CoreResult<CityId> {
        let wanted = name.trim();
        self.cities
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
            .map(|c| c.id)
            .ok_or_else(|| CoreError::UnknownCity(CityRef::Name(wanted.to_owned())))
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.keys().copied()
    }
}

impl FromIterator<City> for CityTable {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut table = CityTable::new();
        for city in iter {
            table.insert(city);
        }
        table
    }
}
