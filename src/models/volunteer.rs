/// Identity given at the start of a route interaction. Never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Volunteer {
    pub name: String,
    pub national_id: String,
}

impl Volunteer {
    pub fn greeting(&self) -> String {
        format!("# ¡Bienvenido, {}!", self.name)
    }

    /// National ID with all but the last three characters hidden.
    pub fn masked_id(&self) -> String {
        let chars: Vec<char> = self.national_id.chars().collect();
        let visible = chars.len().min(3);
        let hidden = chars.len() - visible;
        std::iter::repeat('*')
            .take(hidden)
            .chain(chars[hidden..].iter().copied())
            .collect()
    }
}

impl std::fmt::Debug for Volunteer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Volunteer")
            .field("name", &self.name)
            .field("national_id", &self.masked_id())
            .finish()
    }
}
