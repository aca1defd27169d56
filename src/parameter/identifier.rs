use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Possible variants to identify a chemical in the registry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierOption {
    Id,
    Cas,
    Name,
    Smiles,
    Formula,
}

/// Identifiers of a chemical in the registry.
///
/// Two identifiers are considered equal if their registry `id`s are equal.
/// The remaining fields are informational.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Identifier {
    /// Unique registry ID
    pub id: String,
    /// CAS number
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
    /// Commonly used english name
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// SMILES key
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    /// Chemical formula
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Identifier {
    /// Create a new identifier from the registry ID only.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gc_activity::parameter::Identifier;
    /// let water = Identifier::new("Water").cas("7732-18-5").formula("H2O");
    /// assert_eq!(water.to_string(), "Identifier(id=Water, cas=7732-18-5, formula=H2O)");
    /// ```
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn cas(mut self, cas: &str) -> Self {
        self.cas = Some(cas.into());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn smiles(mut self, smiles: &str) -> Self {
        self.smiles = Some(smiles.into());
        self
    }

    pub fn formula(mut self, formula: &str) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn as_string(&self, option: IdentifierOption) -> Option<String> {
        match option {
            IdentifierOption::Id => Some(self.id.clone()),
            IdentifierOption::Cas => self.cas.clone(),
            IdentifierOption::Name => self.name.clone(),
            IdentifierOption::Smiles => self.smiles.clone(),
            IdentifierOption::Formula => self.formula.clone(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids = vec![format!("id={}", self.id)];
        let optional = [
            ("cas", &self.cas),
            ("name", &self.name),
            ("smiles", &self.smiles),
            ("formula", &self.formula),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                ids.push(format!("{}={}", key, v));
            }
        }
        write!(f, "Identifier({})", ids.join(", "))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
