/// A registered place with biological diversity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub department: String,
    pub area_ha: i32,
}

impl Site {
    pub fn new(name: impl Into<String>, department: impl Into<String>, area_ha: i32) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            area_ha,
        }
    }
}

/// Sites per department, in the order each department was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentTally {
    entries: Vec<(String, usize)>,
}

impl DepartmentTally {
    pub fn from_sites(sites: &[Site]) -> Self {
        let mut tally = Self::default();
        for site in sites {
            tally.record(&site.department);
        }
        tally
    }

    pub fn record(&mut self, department: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == department) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((department.to_string(), 1)),
        }
    }

    /// Department with the strictly greatest count; ties keep the earlier one.
    pub fn leader(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (name, count) in &self.entries {
            match best {
                Some((_, top)) if *count <= top => {}
                _ => best = Some((name.as_str(), *count)),
            }
        }
        best
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
