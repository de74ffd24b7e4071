//! Kenyan county registry.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// The 47 first-level counties, in selector order.
pub const KENYAN_COUNTIES: [&str; 47] = [
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo-Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Murang'a",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyandarua",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita-Taveta",
    "Tana River",
    "Tharaka-Nithi",
    "Trans Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
];

lazy_static! {
    static ref COUNTY_INDEX: HashMap<String, &'static str> = KENYAN_COUNTIES
        .iter()
        .map(|name| (name.to_lowercase(), *name))
        .collect();
}

/// A county drawn from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct County(&'static str);

impl County {
    /// Resolve a user-typed name against the registry.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for
    /// names that are not one of the 47 counties.
    pub fn lookup(name: &str) -> Option<Self> {
        COUNTY_INDEX
            .get(&name.trim().to_lowercase())
            .map(|canonical| County(*canonical))
    }

    /// All counties in selector order.
    pub fn all() -> impl Iterator<Item = County> {
        KENYAN_COUNTIES.iter().map(|name| County(*name))
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for County {
    fn as_ref(&self) -> &str {
        self.0
    }
}
