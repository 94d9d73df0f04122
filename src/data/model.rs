use std::fmt;

// ---------------------------------------------------------------------------
// Gender – the two plotted categories
// ---------------------------------------------------------------------------

/// One of the two categories a cohort is split into for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Raw codes used in the input files for each [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderCodes {
    pub male: String,
    pub female: String,
}

impl Default for GenderCodes {
    fn default() -> Self {
        Self {
            male: "H".to_string(),
            female: "F".to_string(),
        }
    }
}

impl GenderCodes {
    /// Map a raw code onto a category. Unknown codes yield `None`.
    pub fn classify(&self, code: &str) -> Option<Gender> {
        if code == self.male {
            Some(Gender::Male)
        } else if code == self.female {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// The raw code for a category.
    pub fn code(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one line of an input file
// ---------------------------------------------------------------------------

/// One subject: gender code plus the weights at both timepoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Gender code exactly as it appeared in the file.
    pub gender: String,
    pub weight_t1: f64,
    pub weight_t2: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete records of one cohort
// ---------------------------------------------------------------------------

/// All complete records of one group, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Group label, e.g. "experimental".
    pub label: String,
    pub records: Vec<Record>,
    /// Lines dropped because a measurement was missing.
    pub skipped: usize,
}

impl Dataset {
    pub fn new(label: impl Into<String>, records: Vec<Record>, skipped: usize) -> Self {
        Self {
            label: label.into(),
            records,
            skipped,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
