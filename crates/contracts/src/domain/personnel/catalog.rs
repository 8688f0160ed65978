use serde::{Deserialize, Serialize};

use super::aggregate::Qualification;

/// Marker shown in a qualification cell when the person holds it.
pub const QUAL_PRESENT: &str = "X";
/// Marker shown when the person does not hold the qualification.
pub const QUAL_ABSENT: &str = "";

/// The ordered list of qualification names shown as roster columns.
///
/// Both the table renderer and the save-payload builder consume the same
/// catalog value, so column order and payload keys can never drift apart.
/// Marks stay keyed by name end to end; nothing downstream depends on
/// positional correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualCatalog {
    names: Vec<String>,
}

/// One qualification cell of a roster row: the catalog name it belongs to
/// and its presence marker (`"X"` or `""`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualMark {
    pub name: String,
    pub marker: String,
}

impl QualMark {
    pub fn is_set(&self) -> bool {
        self.marker == QUAL_PRESENT
    }
}

impl QualCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalog used by the roster pages.
    pub fn standard() -> Self {
        Self::new([
            "Operations Supervisor",
            "SOF",
            "RSU Controller",
            "RSU Observer",
            "IPC Pilot",
            "FPC Pilot",
            "FCF Pilot",
            "PIT IP",
            "SEFE",
        ])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Project held qualifications onto the catalog: exactly one mark per
    /// catalog name, in catalog order. Held qualifications outside the
    /// catalog are not shown and not carried into saves.
    pub fn marks_for(&self, held: &[Qualification]) -> Vec<QualMark> {
        self.names
            .iter()
            .map(|name| QualMark {
                name: name.clone(),
                marker: if held.iter().any(|q| &q.name == name) {
                    QUAL_PRESENT.to_string()
                } else {
                    QUAL_ABSENT.to_string()
                },
            })
            .collect()
    }

    /// Names whose marker is set, in catalog order. This is the `quals`
    /// list the update payload carries.
    pub fn selected_names(marks: &[QualMark]) -> Vec<String> {
        marks
            .iter()
            .filter(|m| m.is_set())
            .map(|m| m.name.clone())
            .collect()
    }

    /// The two values a qualification cell's selector offers.
    pub fn marker_options() -> [&'static str; 2] {
        [QUAL_ABSENT, QUAL_PRESENT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qual(id: i32, name: &str) -> Qualification {
        Qualification {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn marks_cover_catalog_exactly_once() {
        let catalog = QualCatalog::standard();
        let marks = catalog.marks_for(&[qual(1, "SOF"), qual(2, "SEFE")]);
        assert_eq!(marks.len(), catalog.len());
        for (mark, name) in marks.iter().zip(catalog.names()) {
            assert_eq!(&mark.name, name);
        }
    }

    #[test]
    fn marks_keyed_by_name() {
        let catalog = QualCatalog::new(["Operations Supervisor", "SOF"]);
        let marks = catalog.marks_for(&[qual(1, "SOF")]);
        assert_eq!(marks[0].name, "Operations Supervisor");
        assert_eq!(marks[0].marker, QUAL_ABSENT);
        assert_eq!(marks[1].name, "SOF");
        assert_eq!(marks[1].marker, QUAL_PRESENT);
        assert_eq!(QualCatalog::selected_names(&marks), vec!["SOF"]);
    }

    #[test]
    fn quals_outside_catalog_dropped() {
        let catalog = QualCatalog::new(["SOF"]);
        let marks = catalog.marks_for(&[qual(1, "SOF"), qual(2, "Stan Eval")]);
        assert_eq!(marks.len(), 1);
        assert_eq!(QualCatalog::selected_names(&marks), vec!["SOF"]);
    }

    #[test]
    fn empty_selection_gives_empty_quals() {
        let catalog = QualCatalog::standard();
        let marks = catalog.marks_for(&[]);
        assert!(marks.iter().all(|m| !m.is_set()));
        assert!(QualCatalog::selected_names(&marks).is_empty());
    }
}
