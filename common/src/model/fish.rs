use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Id carried by a record that has not been stored yet, or that a lookup
/// did not find.
pub const UNSET_ID: i64 = -1;

/// One row of the `FISH` table.
///
/// The backend's `FishDao` builds these from query results and accepts them
/// for inserts and updates. The viewer page never sees the struct directly:
/// `FishManager` renders every record through its `Display` impl and ships a
/// single block of text.
///
/// Equality and hashing look at the ten descriptive fields only. Two records
/// that describe the same fish are equal even when they were stored under
/// different ids, which is what lets a freshly created record be compared
/// against the row read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FishRecord {
    /// Primary key assigned by storage. `UNSET_ID` when unknown.
    pub id: i64,
    pub common_name: String,
    /// Scientific name.
    pub latin: String,
    /// Free-text range, e.g. `6.0-8.0`.
    pub ph: String,
    /// Free-text hardness range, e.g. `5-19 dH`.
    pub kh: String,
    /// Free-text temperature range, e.g. `72-78F`.
    pub temp: String,
    pub fish_size: String,
    pub species_origin: String,
    pub tank_size: String,
    pub stocking: String,
    pub diet: String,
}

impl FishRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        common_name: &str,
        latin: &str,
        ph: &str,
        kh: &str,
        temp: &str,
        fish_size: &str,
        species_origin: &str,
        tank_size: &str,
        stocking: &str,
        diet: &str,
    ) -> Self {
        Self {
            id,
            common_name: common_name.to_string(),
            latin: latin.to_string(),
            ph: ph.to_string(),
            kh: kh.to_string(),
            temp: temp.to_string(),
            fish_size: fish_size.to_string(),
            species_origin: species_origin.to_string(),
            tank_size: tank_size.to_string(),
            stocking: stocking.to_string(),
            diet: diet.to_string(),
        }
    }

    /// `true` for the empty record returned when a lookup finds nothing.
    pub fn is_unset(&self) -> bool {
        self.id == UNSET_ID
    }

    fn descriptive_fields(&self) -> [&str; 10] {
        [
            self.common_name.as_str(),
            self.latin.as_str(),
            self.ph.as_str(),
            self.kh.as_str(),
            self.temp.as_str(),
            self.fish_size.as_str(),
            self.species_origin.as_str(),
            self.tank_size.as_str(),
            self.stocking.as_str(),
            self.diet.as_str(),
        ]
    }
}

impl Default for FishRecord {
    fn default() -> Self {
        Self::new(UNSET_ID, "", "", "", "", "", "", "", "", "", "")
    }
}

impl PartialEq for FishRecord {
    fn eq(&self, other: &Self) -> bool {
        self.descriptive_fields() == other.descriptive_fields()
    }
}

impl Eq for FishRecord {}

impl Hash for FishRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.descriptive_fields().hash(state);
    }
}

impl fmt::Display for FishRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>14} = {}", "ID", self.id)?;
        writeln!(f, "{:>14} = {}", "Common Name", self.common_name)?;
        writeln!(f, "{:>14} = {}", "Latin", self.latin)?;
        writeln!(f, "{:>14} = {}", "ph", self.ph)?;
        writeln!(f, "{:>14} = {}", "kh", self.kh)?;
        writeln!(f, "{:>14} = {}", "Temp", self.temp)?;
        writeln!(f, "{:>14} = {}", "Size", self.fish_size)?;
        writeln!(f, "{:>14} = {}", "Species Origin", self.species_origin)?;
        writeln!(f, "{:>14} = {}", "Tank Size", self.tank_size)?;
        writeln!(f, "{:>14} = {}", "Stocking", self.stocking)?;
        writeln!(f, "{:>14} = {}", "Diet", self.diet)
    }
}
