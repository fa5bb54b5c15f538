// Column layout of the Lahman `People.csv` export.
pub const BIRTH_YEAR_COL: usize = 1;
pub const BIRTH_MONTH_COL: usize = 2;
pub const BIRTH_DAY_COL: usize = 3;
pub const GIVEN_NAME_COL: usize = 13;
pub const SURNAME_COL: usize = 14;
/// Minimum row width the normalizer accepts; the reference id is always the last field.
pub const MIN_FIELDS: usize = 15;

/// One dataset row, exactly as tokenized. Positional access goes through the named accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<String>,
}

impl RawRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields on the row.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }

    pub fn birth_year(&self) -> &str {
        self.field(BIRTH_YEAR_COL)
    }

    pub fn birth_month(&self) -> &str {
        self.field(BIRTH_MONTH_COL)
    }

    pub fn birth_day(&self) -> &str {
        self.field(BIRTH_DAY_COL)
    }

    pub fn given_name(&self) -> &str {
        self.field(GIVEN_NAME_COL)
    }

    pub fn surname(&self) -> &str {
        self.field(SURNAME_COL)
    }

    /// bbref id, e.g. `aaronha01`.
    pub fn reference_id(&self) -> &str {
        self.fields.last().map(String::as_str).unwrap_or("")
    }
}

/// Normalized player. `image_url` and `position` stay `None` until a biography pass fills them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub given_name: String,
    pub surname: String,
    pub birth_year: String,
    /// Long month name ("February").
    pub birth_month: String,
    pub birth_day: String,
    pub reference_id: String,
    pub profile_url: String,
    pub image_url: Option<String>,
    pub position: Option<String>,
}

impl PlayerProfile {
    pub fn full_name(&self) -> String {
        match (self.given_name.is_empty(), self.surname.is_empty()) {
            (false, false) => format!("{} {}", self.given_name, self.surname),
            (false, true) => self.given_name.clone(),
            (true, _) => self.surname.clone(),
        }
    }
}
