use super::*;
use crate::config::ConfigError;

/// Ordered sequence of extracts. Iteration follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Vec<Extract>);

impl Catalog {
    /// The three curated gold-layer tables.
    pub fn gold() -> Self {
        Self(vec![
            Extract::new(crate::DIM_CUSTOMERS, crate::SELECT_DIM_CUSTOMERS),
            Extract::new(crate::DIM_PRODUCTS, crate::SELECT_DIM_PRODUCTS),
            Extract::new(crate::FACT_SALES, crate::SELECT_FACT_SALES),
        ])
    }

    /// Keep only the named extracts, preserving declaration order.
    /// Every name must exist in the catalog.
    pub fn select<S>(self, names: &[S]) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
    {
        if let Some(unknown) = names
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|name| self.get(name).is_none())
        {
            return Err(ConfigError::UnknownTable {
                name: unknown.to_string(),
                known: self.names().join(", "),
            });
        }
        Ok(Self(
            self.0
                .into_iter()
                .filter(|x| names.iter().any(|name| name.as_ref() == x.name()))
                .collect(),
        ))
    }

    pub fn get(&self, name: &str) -> Option<&Extract> {
        self.0.iter().find(|x| x.name() == name)
    }
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(Extract::name).collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Extract> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Extract;
    type IntoIter = std::slice::Iter<'a, Extract>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
