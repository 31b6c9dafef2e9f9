use crate::models::{DepartmentTally, Site};

/// Registration refused because the registry already holds `capacity` sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReached {
    pub capacity: usize,
}

/// Append-only, capacity-bounded list of biodiversity sites.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    sites: Vec<Site>,
    capacity: usize,
}

impl SiteRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            sites: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sites.len() >= self.capacity
    }

    #[cfg(test)]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Appends `site`, returning its position. The registry is unchanged when full.
    pub fn register(&mut self, site: Site) -> Result<usize, CapacityReached> {
        if self.is_full() {
            return Err(CapacityReached {
                capacity: self.capacity,
            });
        }
        self.sites.push(site);
        Ok(self.sites.len() - 1)
    }

    /// Built fresh on every call.
    pub fn tally(&self) -> DepartmentTally {
        DepartmentTally::from_sites(&self.sites)
    }

    pub fn top_department(&self) -> Option<(String, usize)> {
        self.tally()
            .leader()
            .map(|(name, count)| (name.to_string(), count))
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new(30)
    }
}
